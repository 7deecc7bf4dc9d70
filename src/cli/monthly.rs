use super::ui;
use crate::core::aggregate::aggregate_month;
use crate::core::calendar::{format_ars, month_name_es};
use crate::core::config::Theme;
use crate::core::history::HistoryStore;
use anyhow::Result;
use chrono::{Datelike, Local};
use comfy_table::Cell;

pub async fn run(
    history: &HistoryStore,
    theme: Theme,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    let palette = ui::Palette::from_theme(theme);

    let today = Local::now().date_naive();
    let month = month.unwrap_or_else(|| today.month());
    let year = year.unwrap_or_else(|| today.year());

    let pb = ui::new_spinner("Obteniendo histórico...");
    let series = history.get().await;
    pb.finish_and_clear();

    // A fetch error propagates; it is not the same as a month with no data.
    let series = series?;
    let view = aggregate_month(&series, year, month);

    println!(
        "{}\n",
        ui::style_text(
            &format!("{} {year}", month_name_es(month)),
            ui::StyleType::Title
        )
    );

    if view.history.is_empty() {
        println!("No hay datos disponibles para este período.");
        return Ok(());
    }

    let mut stats = ui::new_styled_table();
    stats.set_header(vec![
        ui::header_cell("Apertura", &palette),
        ui::header_cell("Cierre", &palette),
        ui::header_cell("Máximo", &palette),
        ui::header_cell("Mínimo", &palette),
        ui::header_cell("Variación", &palette),
    ]);
    stats.add_row(vec![
        ui::value_cell(&format_ars(view.stats.open)),
        ui::value_cell(&format_ars(view.stats.close)),
        ui::value_cell(&format_ars(view.stats.max)),
        ui::value_cell(&format_ars(view.stats.min)),
        ui::change_cell(view.stats.current_change),
    ]);
    println!("{stats}\n");

    print!("{}", ui::render_bar_chart(&view.chart, &palette));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Día", &palette),
        ui::header_cell("Venta", &palette),
        ui::header_cell("Variación", &palette),
    ]);
    for rate in &view.history {
        table.add_row(vec![
            Cell::new(format!(
                "{} {} de {}",
                rate.day_name, rate.day, rate.month_name
            )),
            ui::value_cell(&format_ars(rate.value)),
            ui::change_cell(rate.change_percentage),
        ]);
    }
    println!("\n{table}");

    Ok(())
}
