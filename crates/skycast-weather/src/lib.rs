//! Weather-forecast client for Skycast
//!
//! Fetches daily-forecast JSON from the weather provider, parses it into
//! per-day display lines, and delivers results to an observer through an
//! asynchronous loader with an in-memory cache.

pub mod client;
pub mod error;
pub mod format;
pub mod loader;
pub mod parser;
pub mod types;

pub use client::WeatherClient;
pub use error::{NetworkError, ParseError};
pub use loader::{ForecastEvent, ForecastLoader, ForecastResult, LoadPhase};
pub use parser::{parse_entries, parse_forecast};
pub use types::{ForecastEntry, ForecastQuery, UnitSystem, WeatherCondition};
