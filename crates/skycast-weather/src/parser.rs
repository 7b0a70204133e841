//! Parses the provider's daily-forecast payload into display lines.

use serde::Deserialize;

use crate::error::ParseError;
use crate::format;
use crate::types::{ForecastEntry, UnitSystem};

/// Wire shape of the daily-forecast payload. Numeric fields are required;
/// a payload missing any of them fails deserialization.
#[derive(Debug, Deserialize)]
struct DailyResponse {
    list: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    dt: i64,
    temp: TempRange,
    humidity: f64,
    pressure: f64,
    speed: f64,
    deg: f64,
    weather: Vec<ConditionTag>,
}

#[derive(Debug, Deserialize)]
struct TempRange {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionTag {
    id: i32,
    main: Option<String>,
}

/// Parse raw forecast JSON into one formatted line per day.
///
/// Produces exactly one line per entry, preserving source (chronological)
/// order. Fails with `ParseError` if the top-level list is absent or an
/// entry is missing required numeric fields.
pub fn parse_forecast(raw: &str, units: UnitSystem) -> Result<Vec<String>, ParseError> {
    Ok(parse_entries(raw)?
        .iter()
        .map(|entry| format::summary_line(entry, units))
        .collect())
}

/// Parse raw forecast JSON into typed per-day entries.
pub fn parse_entries(raw: &str) -> Result<Vec<ForecastEntry>, ParseError> {
    let response: DailyResponse = serde_json::from_str(raw)?;

    response
        .list
        .into_iter()
        .enumerate()
        .map(|(index, day)| {
            let tag = day
                .weather
                .into_iter()
                .next()
                .ok_or(ParseError::MissingCondition { index })?;

            Ok(ForecastEntry {
                date: day.dt,
                condition: tag.main,
                condition_code: tag.id,
                low: day.temp.min,
                high: day.temp.max,
                humidity: day.humidity,
                pressure: day.pressure,
                wind_speed: day.speed,
                wind_direction: day.deg,
            })
        })
        .collect()
}
