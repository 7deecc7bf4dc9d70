use crate::core::config::Theme;
use crate::core::rate::ChartDataPoint;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const CHART_WIDTH: usize = 36;

/// Accent colors derived from the configured theme. `System` keeps the same
/// accents as dark; light swaps to colors that stay readable on a white
/// background.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub bar: Color,
}

impl Palette {
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                accent: Color::Blue,
                bar: Color::Blue,
            },
            Theme::Dark | Theme::System => Palette {
                accent: Color::Cyan,
                bar: Color::Cyan,
            },
        }
    }
}

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str, palette: &Palette) -> Cell {
    Cell::new(text)
        .fg(palette.accent)
        .add_attribute(Attribute::Bold)
}

/// Creates a right-aligned value cell.
pub fn value_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for displaying percentage change with color coding.
pub fn change_cell(change: f64) -> Cell {
    let arrow = if change >= 0.0 { "▲" } else { "▼" };
    let text = format!("{arrow} {change:.2}%");
    if change >= 0.0 {
        Cell::new(text)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(text)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    }
}

/// Creates a new spinner shown while a fetch is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Renders a series of values as a one-line sparkline.
pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|v| {
            let level = if span > 0.0 {
                (((v - min) / span) * (SPARK_CHARS.len() - 1) as f64).round() as usize
            } else {
                SPARK_CHARS.len() / 2
            };
            SPARK_CHARS[level]
        })
        .collect()
}

/// Renders chart points as horizontal bars, one row per business day.
/// Labels stay sparse (day 1 and multiples of 5), matching the chart axis.
pub fn render_bar_chart(points: &[ChartDataPoint], palette: &Palette) -> String {
    let min = points.iter().map(|p| p.value).fold(f64::MAX, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::MIN, f64::max);
    let span = max - min;

    let mut output = String::new();
    for point in points {
        let len = if span > 0.0 {
            1 + (((point.value - min) / span) * (CHART_WIDTH - 1) as f64).round() as usize
        } else {
            CHART_WIDTH / 2
        };
        let bar = "▇".repeat(len);
        let bar = match palette.bar {
            Color::Blue => style(bar).blue(),
            _ => style(bar).cyan(),
        };
        output.push_str(&format!(
            "{:>3} │ {} {}\n",
            point.label,
            bar,
            style(format!("{:.2}", point.value)).dim()
        ));
    }
    output
}
