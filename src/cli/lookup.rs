use super::ui;
use crate::core::calendar::format_ars;
use crate::core::config::Theme;
use crate::core::history::HistoryStore;
use crate::core::lookup::find_rate;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

pub async fn run(history: &HistoryStore, theme: Theme, date: NaiveDate) -> Result<()> {
    let palette = ui::Palette::from_theme(theme);

    let pb = ui::new_spinner("Obteniendo histórico...");
    let series = history.get().await;
    pb.finish_and_clear();

    let series = series?;
    if series.is_empty() {
        println!("No hay datos disponibles.");
        return Ok(());
    }

    match find_rate(&series, date) {
        Some(rate) => {
            let mut table = ui::new_styled_table();
            table.set_header(vec![
                ui::header_cell("Fecha", &palette),
                ui::header_cell("Venta", &palette),
            ]);
            table.add_row(vec![
                Cell::new(format!(
                    "{} {} de {}",
                    rate.day_name, rate.day, rate.month_name
                )),
                ui::value_cell(&format_ars(rate.value)),
            ]);
            println!("{table}");
        }
        None => {
            println!(
                "Sin cotización para el {}. Probablemente fue fin de semana o feriado.",
                date.format("%d/%m/%Y")
            );
        }
    }

    Ok(())
}
