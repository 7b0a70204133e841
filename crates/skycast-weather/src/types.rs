use serde::{Deserialize, Serialize};

/// Unit system preference for temperature and wind-speed display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Snapshot of the preferences a single fetch runs against.
///
/// Taken from the preference store at the moment a load starts and held
/// constant for the lifetime of that fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub location: String,
    pub units: UnitSystem,
}

impl ForecastQuery {
    pub fn new(location: impl Into<String>, units: UnitSystem) -> Self {
        Self {
            location: location.into(),
            units,
        }
    }
}

/// One day's parsed forecast entry.
///
/// Temperatures are degrees Celsius and wind speed km/h as served by the
/// provider; conversion to the preferred unit system happens at display
/// time (see the `format` module).
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Forecast date as unix seconds.
    pub date: i64,
    /// Provider's textual condition, when present.
    pub condition: Option<String>,
    /// Provider's numeric weather-condition code.
    pub condition_code: i32,
    pub low: f64,
    pub high: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Pressure in hPa.
    pub pressure: f64,
    pub wind_speed: f64,
    /// Meteorological degrees (0 is north, 180 is south).
    pub wind_direction: f64,
}

impl ForecastEntry {
    /// Display condition: the provider's text when present, otherwise a
    /// description derived from the numeric condition code.
    pub fn condition_text(&self) -> &str {
        match &self.condition {
            Some(text) if !text.is_empty() => text,
            _ => WeatherCondition::from_code(self.condition_code).description(),
        }
    }
}

/// Weather condition categories mapped from the provider's numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Fog,
    Drizzle,
    Rain,
    Sleet,
    Snow,
    Storm,
}

impl WeatherCondition {
    /// Map the provider's condition code to a category.
    pub fn from_code(code: i32) -> Self {
        match code {
            200..=232 => Self::Storm,
            300..=321 => Self::Drizzle,
            500..=504 => Self::Rain,
            511 => Self::Sleet,
            520..=531 => Self::Rain,
            600..=622 => Self::Snow,
            701..=761 => Self::Fog,
            762..=781 => Self::Storm,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => Self::Clear, // Unknown codes default to clear
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Sleet => "Sleet",
            Self::Snow => "Snow",
            Self::Storm => "Storm",
        }
    }
}
