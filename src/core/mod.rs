//! Core business logic abstractions

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod history;
pub mod log;
pub mod lookup;
pub mod rate;

// Re-export main types for cleaner imports
pub use aggregate::{MonthView, aggregate_month};
pub use history::HistoryStore;
pub use lookup::find_rate;
pub use rate::{
    ChartDataPoint, CurrentRate, DailyRate, HistoryProvider, MonthlyStats, RateProvider,
    RawObservation,
};
