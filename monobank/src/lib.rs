pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::Monobank;
pub use config::MonoConfig;
pub use error::{MonoError, Result};

// Transport
pub use rest::{ApiRequest, ApiResponse, Executor, MonoHttpClient};

// Cache policy
pub use cache::{evaluate, CacheSlot, Clock, Freshness, ManualClock, SystemClock};

// API records
pub use types::{Account, CurrencyInfo, Jar, StatementBound, StatementItem, UserInfo};
