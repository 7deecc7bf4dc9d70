//! Exchange-rate abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Rate pair shown when the live endpoint cannot be reached or parsed.
pub const FALLBACK_BUY: f64 = 865.50;
pub const FALLBACK_SELL: f64 = 905.50;

/// The live official buy/sell pair. `fetched_at` is always the local
/// retrieval time; the server-reported update time is discarded so a skewed
/// server clock never shows the user a timestamp from the future.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentRate {
    pub buy: f64,
    pub sell: f64,
    pub fetched_at: DateTime<Utc>,
}

impl CurrentRate {
    pub fn fallback() -> Self {
        Self {
            buy: FALLBACK_BUY,
            sell: FALLBACK_SELL,
            fetched_at: Utc::now(),
        }
    }
}

/// One record of the remote historical feed, immutable once fetched.
/// `fecha` is a plain calendar date and is taken verbatim; no timezone
/// adjustment is applied anywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub sell: f64,
    pub buy: Option<f64>,
}

/// One row of the monthly history list, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRate {
    pub day: u32,
    pub day_name: String,
    pub month_name: String,
    pub value: f64,
    pub change_percentage: f64,
}

/// One chart tick, oldest first. `label` is empty except on day 1 and days
/// divisible by 5.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataPoint {
    pub day: u32,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStats {
    pub open: f64,
    pub close: f64,
    pub max: f64,
    pub min: f64,
    pub current: f64,
    pub current_change: f64,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the live official rate. Never fails: any network or parse
    /// error is absorbed into the documented fallback pair so the caller
    /// always has a value to show. `bypass_cache` asks intermediaries to
    /// revalidate instead of serving a cached response.
    async fn fetch_current(&self, bypass_cache: bool) -> CurrentRate;
}

#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetches the full historical series. Order is unspecified; callers
    /// sort. Errors are propagated, not swallowed, so "fetch failed" stays
    /// distinguishable from "no data".
    async fn fetch_history(&self) -> Result<Vec<RawObservation>>;
}
