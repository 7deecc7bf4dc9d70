use crate::core::rate::{HistoryProvider, RawObservation};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, error};

/// One element of the `GET /v1/cotizaciones/dolares/oficial` array.
#[derive(Debug, Deserialize)]
struct CotizacionResponse {
    compra: Option<f64>,
    venta: f64,
    fecha: String,
}

pub struct ArgentinaDatosProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ArgentinaDatosProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    // The feed's `fecha` is a plain ISO calendar date. It is taken verbatim,
    // with no local/UTC conversion, so the displayed day always matches the
    // day the rate was published for.
    fn parse_api_date(date_str: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .with_context(|| format!("Failed to parse date: {date_str}"))
    }
}

#[async_trait]
impl HistoryProvider for ArgentinaDatosProvider {
    async fn fetch_history(&self) -> Result<Vec<RawObservation>> {
        let url = format!("{}/v1/cotizaciones/dolares/oficial", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("History request failed")?
            .error_for_status()
            .context("History request returned an error status")?;

        let response_text = response
            .text()
            .await
            .context("Failed to get response text")?;

        let records: Vec<CotizacionResponse> = match serde_json::from_str(&response_text) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse history response"
                );
                return Err(e).context("Failed to parse history response");
            }
        };

        debug!(count = records.len(), "Fetched historical series");

        records
            .iter()
            .map(|record| {
                Ok(RawObservation {
                    date: Self::parse_api_date(&record.fecha)?,
                    sell: record.venta,
                    buy: record.compra,
                })
            })
            .collect()
    }
}
