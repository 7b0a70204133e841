//! In-memory preference store with change notification.
//!
//! Preference changes are published on a watch channel instead of a
//! process-wide flag; the controller subscribes and triggers a reload
//! when the channel fires.

use tokio::sync::watch;

use skycast_weather::{ForecastQuery, UnitSystem};

use crate::config::Config;

pub struct PreferenceStore {
    tx: watch::Sender<ForecastQuery>,
}

impl PreferenceStore {
    pub fn new(location: impl Into<String>, units: UnitSystem) -> Self {
        let (tx, _) = watch::channel(ForecastQuery::new(location, units));
        Self { tx }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.location.clone(), config.units)
    }

    /// Snapshot the current preferences for a fetch.
    pub fn query(&self) -> ForecastQuery {
        self.tx.borrow().clone()
    }

    /// Update the preferred location, notifying subscribers on change.
    pub fn set_location(&self, location: impl Into<String>) {
        let location = location.into();
        self.tx.send_if_modified(|query| {
            if query.location == location {
                false
            } else {
                tracing::debug!("preferred location changed to {location}");
                query.location = location;
                true
            }
        });
    }

    /// Update the preferred unit system, notifying subscribers on change.
    pub fn set_units(&self, units: UnitSystem) {
        self.tx.send_if_modified(|query| {
            if query.units == units {
                false
            } else {
                tracing::debug!("preferred units changed to {units:?}");
                query.units = units;
                true
            }
        });
    }

    /// Subscribe to preference-change notifications.
    pub fn subscribe(&self) -> watch::Receiver<ForecastQuery> {
        self.tx.subscribe()
    }
}
