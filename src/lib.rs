pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::history::HistoryStore;
use crate::providers::argentina_datos::ArgentinaDatosProvider;
use crate::providers::dolar_api::DolarApiProvider;
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Live official rate plus a recent-trend sparkline
    Current { no_cache: bool },
    /// Monthly stats, chart and daily list; defaults to the current month
    Monthly {
        month: Option<u32>,
        year: Option<i32>,
    },
    /// Exact-date lookup
    Lookup { date: NaiveDate },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let rate_provider = DolarApiProvider::new(config.rate_base_url());
    let history = HistoryStore::new(Arc::new(ArgentinaDatosProvider::new(
        config.history_base_url(),
    )));

    match command {
        AppCommand::Current { no_cache } => {
            cli::current::run(&rate_provider, &history, config.theme, no_cache).await
        }
        AppCommand::Monthly { month, year } => {
            cli::monthly::run(&history, config.theme, month, year).await
        }
        AppCommand::Lookup { date } => cli::lookup::run(&history, config.theme, date).await,
    }
}
