//! Monthly aggregation over the historical series.

use crate::core::calendar::{day_name_es, month_name_es};
use crate::core::rate::{ChartDataPoint, DailyRate, MonthlyStats, RawObservation};
use chrono::Datelike;

/// Everything the monthly view needs: stats, an ascending chart series, and
/// a descending daily list. Chart and history are derived from the same
/// filtered set; chart is always history reversed.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub stats: MonthlyStats,
    pub chart: Vec<ChartDataPoint>,
    pub history: Vec<DailyRate>,
}

impl MonthView {
    fn empty() -> Self {
        Self {
            stats: MonthlyStats::default(),
            chart: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// Aggregates one calendar month (1-12) out of the full series.
///
/// `history` must be sorted descending by date, as `HistoryStore` returns
/// it. Each record's change percentage is computed against the next older
/// record in the filtered month; the oldest record compares to itself and
/// yields 0%. A month with no observations produces zeroed stats and empty
/// sequences, not an error. Missing days (weekends, holidays) are simply
/// absent, never backfilled.
pub fn aggregate_month(history: &[RawObservation], year: i32, month: u32) -> MonthView {
    let filtered: Vec<&RawObservation> = history
        .iter()
        .filter(|obs| obs.date.year() == year && obs.date.month() == month)
        .collect();

    if filtered.is_empty() {
        return MonthView::empty();
    }

    let daily: Vec<DailyRate> = filtered
        .iter()
        .enumerate()
        .map(|(i, &obs)| {
            let previous = filtered.get(i + 1).copied().unwrap_or(obs);
            DailyRate {
                day: obs.date.day(),
                day_name: day_name_es(obs.date).to_string(),
                month_name: month_name_es(obs.date.month()).to_string(),
                value: obs.sell,
                change_percentage: change_percentage(obs.sell, previous.sell),
            }
        })
        .collect();

    let chart: Vec<ChartDataPoint> = daily
        .iter()
        .rev()
        .map(|rate| ChartDataPoint {
            day: rate.day,
            label: tick_label(rate.day),
            value: rate.value,
        })
        .collect();

    let newest = &daily[0];
    let oldest = &daily[daily.len() - 1];
    let max = daily.iter().map(|d| d.value).fold(f64::MIN, f64::max);
    let min = daily.iter().map(|d| d.value).fold(f64::MAX, f64::min);

    MonthView {
        stats: MonthlyStats {
            open: oldest.value,
            close: newest.value,
            max,
            min,
            current: newest.value,
            current_change: newest.change_percentage,
        },
        chart,
        history: daily,
    }
}

fn change_percentage(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous) * 100.0
}

// Labels only day 1 and multiples of 5 so the axis stays readable.
fn tick_label(day: u32) -> String {
    if day == 1 || day % 5 == 0 {
        day.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(year: i32, month: u32, day: u32, sell: f64) -> RawObservation {
        RawObservation {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            sell,
            buy: Some(sell - 20.0),
        }
    }

    /// Business days of October 2023, newest first as HistoryStore delivers.
    fn october_fixture() -> Vec<RawObservation> {
        vec![
            obs(2023, 11, 1, 366.0), // adjacent months must be filtered out
            obs(2023, 10, 31, 365.5),
            obs(2023, 10, 30, 363.0),
            obs(2023, 10, 27, 363.0),
            obs(2023, 10, 26, 364.5),
            obs(2023, 10, 25, 360.5),
            obs(2023, 10, 24, 352.0),
            obs(2023, 10, 2, 350.0),
            obs(2023, 9, 29, 349.5),
        ]
    }

    #[test]
    fn test_open_and_close_from_business_days() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        assert_eq!(view.stats.open, 350.0);
        assert_eq!(view.stats.close, 365.5);
        assert_eq!(view.stats.current, 365.5);
    }

    #[test]
    fn test_min_max_bounds() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        assert!(view.stats.max >= view.stats.min);
        assert_eq!(view.stats.max, 365.5);
        assert_eq!(view.stats.min, 350.0);
        for rate in &view.history {
            assert!(rate.value >= view.stats.min && rate.value <= view.stats.max);
        }
    }

    #[test]
    fn test_change_percentages_against_next_older() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        // Oct 31 vs Oct 30: (365.5 - 363.0) / 363.0
        let expected = (365.5 - 363.0) / 363.0 * 100.0;
        assert!((view.history[0].change_percentage - expected).abs() < 1e-9);
        assert!((view.stats.current_change - expected).abs() < 1e-9);

        // Oct 30 vs Oct 27 left the rate unchanged
        assert_eq!(view.history[1].change_percentage, 0.0);

        // Oldest record in the window compares to itself
        assert_eq!(view.history.last().unwrap().change_percentage, 0.0);
    }

    #[test]
    fn test_chart_is_history_reversed() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        assert_eq!(view.chart.len(), view.history.len());
        for (point, rate) in view.chart.iter().zip(view.history.iter().rev()) {
            assert_eq!(point.day, rate.day);
            assert_eq!(point.value, rate.value);
        }
        // Ascending by day within the month
        assert!(view.chart.windows(2).all(|w| w[0].day < w[1].day));
    }

    #[test]
    fn test_sparse_tick_labels() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        for point in &view.chart {
            if point.day == 1 || point.day % 5 == 0 {
                assert_eq!(point.label, point.day.to_string());
            } else {
                assert_eq!(point.label, "");
            }
        }
    }

    #[test]
    fn test_spanish_names() {
        let view = aggregate_month(&october_fixture(), 2023, 10);

        // Oct 31 2023 was a Tuesday
        assert_eq!(view.history[0].day_name, "Martes");
        assert_eq!(view.history[0].month_name, "Octubre");
    }

    #[test]
    fn test_empty_month_yields_zeroed_view() {
        let view = aggregate_month(&october_fixture(), 2024, 2);

        assert_eq!(view.stats, MonthlyStats::default());
        assert!(view.chart.is_empty());
        assert!(view.history.is_empty());
    }

    #[test]
    fn test_single_observation_month() {
        let series = vec![obs(2023, 12, 15, 400.0)];
        let view = aggregate_month(&series, 2023, 12);

        assert_eq!(view.history.len(), 1);
        assert_eq!(view.history[0].change_percentage, 0.0);
        assert_eq!(view.stats.open, 400.0);
        assert_eq!(view.stats.close, 400.0);
        assert_eq!(view.stats.max, 400.0);
        assert_eq!(view.stats.min, 400.0);
    }
}
