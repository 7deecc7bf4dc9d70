//! Lazily-fetched, process-wide cache of the historical rate series.

use crate::core::rate::{HistoryProvider, RawObservation};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Fetches the full historical series once and memoizes it for the process
/// lifetime, sorted descending by date.
///
/// Concurrent first callers are coalesced into a single in-flight fetch via
/// `OnceCell::get_or_try_init`. A failed fetch is returned as an error and is
/// NOT memoized, so a later call may retry; a successful result is immutable
/// from then on. An empty feed memoizes as an empty series, which callers
/// must treat as "no data", distinct from the error case.
pub struct HistoryStore {
    provider: Arc<dyn HistoryProvider>,
    series: OnceCell<Arc<[RawObservation]>>,
}

impl HistoryStore {
    pub fn new(provider: Arc<dyn HistoryProvider>) -> Self {
        Self {
            provider,
            series: OnceCell::new(),
        }
    }

    /// Returns the full series, newest first. Fetches on first use only.
    pub async fn get(&self) -> Result<Arc<[RawObservation]>> {
        let series = self
            .series
            .get_or_try_init(|| async {
                debug!("History cache MISS, fetching full series");
                let mut observations = self.provider.fetch_history().await?;
                observations.sort_by(|a, b| b.date.cmp(&a.date));
                debug!(count = observations.len(), "History series cached");
                Ok::<_, anyhow::Error>(observations.into())
            })
            .await?;
        Ok(Arc::clone(series))
    }
}
