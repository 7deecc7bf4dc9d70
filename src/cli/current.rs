use super::ui;
use crate::core::calendar::format_ars;
use crate::core::config::Theme;
use crate::core::history::HistoryStore;
use crate::core::rate::RateProvider;
use anyhow::Result;
use chrono::Local;
use comfy_table::Cell;
use tracing::debug;

/// How many of the most recent observations feed the home-screen sparkline.
const SPARKLINE_DAYS: usize = 30;

pub async fn run(
    rate_provider: &dyn RateProvider,
    history: &HistoryStore,
    theme: Theme,
    no_cache: bool,
) -> Result<()> {
    let palette = ui::Palette::from_theme(theme);

    let pb = ui::new_spinner("Consultando cotización...");
    let (rate, series) = futures::join!(rate_provider.fetch_current(no_cache), history.get());
    pb.finish_and_clear();

    println!("{}\n", ui::style_text("Dólar Oficial", ui::StyleType::Title));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Compra", &palette),
        ui::header_cell("Venta", &palette),
    ]);
    table.add_row(vec![
        Cell::new(format_ars(rate.buy)),
        Cell::new(format_ars(rate.sell)),
    ]);
    println!("{table}");

    let updated = rate
        .fetched_at
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M");
    println!(
        "{}",
        ui::style_text(&format!("Actualizado: {updated}"), ui::StyleType::Subtle)
    );

    // Recent trend, oldest to newest. A failed history fetch only costs the
    // sparkline; the live rate above is already on screen.
    match series {
        Ok(series) if series.is_empty() => {
            debug!("History series is empty, skipping sparkline");
        }
        Ok(series) => {
            let values: Vec<f64> = series
                .iter()
                .take(SPARKLINE_DAYS)
                .rev()
                .map(|obs| obs.sell)
                .collect();
            println!(
                "\nÚltimos {} días: {}",
                values.len(),
                ui::sparkline(&values)
            );
        }
        Err(e) => {
            debug!(error = ?e, "History fetch failed, skipping sparkline");
            println!(
                "\n{}",
                ui::style_text("No se pudo obtener el histórico.", ui::StyleType::Subtle)
            );
        }
    }

    Ok(())
}
