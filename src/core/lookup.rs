//! Exact-date lookup against the historical series.

use crate::core::calendar::{day_name_es, month_name_es};
use crate::core::rate::{DailyRate, RawObservation};
use chrono::{Datelike, NaiveDate};

/// Finds the record published on exactly `date`.
///
/// Returns `None` when the date has no published rate (weekends, holidays)
/// rather than falling back to the nearest business day. Single-date lookups
/// report a change percentage of zero; no delta against an adjacent day is
/// computed.
pub fn find_rate(history: &[RawObservation], date: NaiveDate) -> Option<DailyRate> {
    history
        .iter()
        .find(|obs| obs.date == date)
        .map(|obs| DailyRate {
            day: obs.date.day(),
            day_name: day_name_es(obs.date).to_string(),
            month_name: month_name_es(obs.date.month()).to_string(),
            value: obs.sell,
            change_percentage: 0.0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, month: u32, day: u32, sell: f64) -> RawObservation {
        RawObservation {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            sell,
            buy: None,
        }
    }

    fn fixture() -> Vec<RawObservation> {
        // Jan 1 2024 was a holiday; the feed has no record for it
        vec![
            obs(2024, 1, 3, 812.0),
            obs(2024, 1, 2, 810.5),
            obs(2023, 12, 29, 808.0),
        ]
    }

    #[test]
    fn test_exact_match_reports_zero_change() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rate = find_rate(&fixture(), date).unwrap();

        assert_eq!(rate.day, 2);
        assert_eq!(rate.day_name, "Martes");
        assert_eq!(rate.month_name, "Enero");
        assert_eq!(rate.value, 810.5);
        assert_eq!(rate.change_percentage, 0.0);
    }

    #[test]
    fn test_holiday_returns_none() {
        let holiday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(find_rate(&fixture(), holiday).is_none());
    }

    #[test]
    fn test_sunday_returns_none() {
        let sunday = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(find_rate(&fixture(), sunday).is_none());
    }

    #[test]
    fn test_empty_history_returns_none() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(find_rate(&[], date).is_none());
    }
}
