pub mod config;
pub mod error;
pub mod prefs;

pub use config::Config;
pub use error::AppError;
pub use prefs::PreferenceStore;

use anyhow::Result;

/// Initialize logging for the application
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("Skycast core initialized");
    Ok(())
}
