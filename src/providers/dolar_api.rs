use crate::core::rate::{CurrentRate, RateProvider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

/// Wire shape of `GET /v1/dolares/oficial`. The server also reports a
/// `fechaActualizacion` timestamp, which we deliberately ignore: the rate is
/// stamped with the local retrieval time so a skewed server clock cannot
/// confuse the user.
#[derive(Debug, Deserialize)]
struct OficialResponse {
    compra: f64,
    venta: f64,
}

pub struct DolarApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl DolarApiProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn try_fetch(&self, bypass_cache: bool) -> Result<CurrentRate> {
        let url = format!("{}/v1/dolares/oficial", self.base_url);
        let mut request = self.client.get(&url);
        if bypass_cache {
            request = request.header(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        }

        let response = request
            .send()
            .await
            .context("Official rate request failed")?
            .error_for_status()
            .context("Official rate request returned an error status")?;
        let rate: OficialResponse = response
            .json()
            .await
            .context("Failed to parse official rate response")?;

        debug!(compra = rate.compra, venta = rate.venta, "Fetched official rate");
        Ok(CurrentRate {
            buy: rate.compra,
            sell: rate.venta,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl RateProvider for DolarApiProvider {
    async fn fetch_current(&self, bypass_cache: bool) -> CurrentRate {
        match self.try_fetch(bypass_cache).await {
            Ok(rate) => rate,
            Err(e) => {
                warn!(error = ?e, "Official rate fetch failed, using fallback pair");
                CurrentRate::fallback()
            }
        }
    }
}
