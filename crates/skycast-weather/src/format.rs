//! Pure display formatting: unit conversion, dates, and forecast lines.
//!
//! Everything here is a function of raw numeric fields and the unit
//! system, so it is testable without network or JSON fixtures. The wire
//! payload is canonically metric; imperial display converts client-side.

use chrono::DateTime;

use crate::types::{ForecastEntry, UnitSystem};

const MPH_PER_KMH: f64 = 0.621_371;

/// Convert a Celsius temperature for display in the requested unit system.
pub fn display_temperature(celsius: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Format a rounded high/low pair, e.g. "16/9".
pub fn format_high_low(high: f64, low: f64, units: UnitSystem) -> String {
    format!(
        "{:.0}/{:.0}",
        display_temperature(high, units),
        display_temperature(low, units)
    )
}

/// Format the entry's date, e.g. "Fri, Jun 24".
pub fn format_day(unix_seconds: i64) -> String {
    let date = DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default();
    date.format("%a, %b %-d").to_string()
}

/// Compass direction from meteorological degrees.
pub fn compass_direction(degrees: f64) -> &'static str {
    if (0.0..22.5).contains(&degrees) || (337.5..=360.0).contains(&degrees) {
        "N"
    } else if (22.5..67.5).contains(&degrees) {
        "NE"
    } else if (67.5..112.5).contains(&degrees) {
        "E"
    } else if (112.5..157.5).contains(&degrees) {
        "SE"
    } else if (157.5..202.5).contains(&degrees) {
        "S"
    } else if (202.5..247.5).contains(&degrees) {
        "SW"
    } else if (247.5..292.5).contains(&degrees) {
        "W"
    } else if (292.5..337.5).contains(&degrees) {
        "NW"
    } else {
        "Unknown"
    }
}

/// Format relative humidity, e.g. "Humidity: 60%".
pub fn format_humidity(humidity: f64) -> String {
    format!("Humidity: {:.0}%", humidity)
}

/// Format pressure, e.g. "Pressure: 1013.25 hPa".
pub fn format_pressure(pressure: f64) -> String {
    format!("Pressure: {:.2} hPa", pressure)
}

/// Format wind speed and direction, e.g. "Wind: 10 km/h S".
pub fn format_wind(speed: f64, degrees: f64, units: UnitSystem) -> String {
    let (speed, unit) = match units {
        UnitSystem::Metric => (speed, "km/h"),
        UnitSystem::Imperial => (speed * MPH_PER_KMH, "mph"),
    };
    format!("Wind: {:.0} {} {}", speed, unit, compass_direction(degrees))
}

/// The per-day forecast line: "Fri, Jun 24 - Clear - 16/9".
pub fn summary_line(entry: &ForecastEntry, units: UnitSystem) -> String {
    format!(
        "{} - {} - {}",
        format_day(entry.date),
        entry.condition_text(),
        format_high_low(entry.high, entry.low, units)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fri, Jun 24 2016 00:00:00 UTC
    const JUN_24_2016: i64 = 1_466_726_400;

    #[test]
    fn test_metric_temperature_is_unchanged() {
        assert_eq!(display_temperature(16.0, UnitSystem::Metric), 16.0);
    }

    #[test]
    fn test_imperial_temperature_conversion() {
        assert_eq!(display_temperature(0.0, UnitSystem::Imperial), 32.0);
        assert_eq!(display_temperature(100.0, UnitSystem::Imperial), 212.0);
    }

    #[test]
    fn test_high_low_rounds() {
        assert_eq!(format_high_low(16.3, 9.4, UnitSystem::Metric), "16/9");
        assert_eq!(format_high_low(0.0, -10.0, UnitSystem::Imperial), "32/14");
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(JUN_24_2016), "Fri, Jun 24");
    }

    #[test]
    fn test_compass_directions() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(350.0), "N");
        assert_eq!(compass_direction(45.0), "NE");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(135.0), "SE");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(225.0), "SW");
        assert_eq!(compass_direction(270.0), "W");
        assert_eq!(compass_direction(315.0), "NW");
    }

    #[test]
    fn test_compass_out_of_range() {
        assert_eq!(compass_direction(-5.0), "Unknown");
        assert_eq!(compass_direction(400.0), "Unknown");
    }

    #[test]
    fn test_format_humidity() {
        assert_eq!(format_humidity(60.0), "Humidity: 60%");
        assert_eq!(format_humidity(82.6), "Humidity: 83%");
    }

    #[test]
    fn test_format_pressure() {
        assert_eq!(format_pressure(1013.25), "Pressure: 1013.25 hPa");
        assert_eq!(format_pressure(995.0), "Pressure: 995.00 hPa");
    }

    #[test]
    fn test_format_wind() {
        assert_eq!(
            format_wind(10.0, 180.0, UnitSystem::Metric),
            "Wind: 10 km/h S"
        );
        assert_eq!(
            format_wind(10.0, 180.0, UnitSystem::Imperial),
            "Wind: 6 mph S"
        );
    }

    #[test]
    fn test_summary_line() {
        let entry = ForecastEntry {
            date: JUN_24_2016,
            condition: Some("Clear".to_string()),
            condition_code: 800,
            low: 9.4,
            high: 16.3,
            humidity: 60.0,
            pressure: 1013.0,
            wind_speed: 10.0,
            wind_direction: 180.0,
        };

        assert_eq!(
            summary_line(&entry, UnitSystem::Metric),
            "Fri, Jun 24 - Clear - 16/9"
        );
        assert_eq!(
            summary_line(&entry, UnitSystem::Imperial),
            "Fri, Jun 24 - Clear - 61/49"
        );
    }
}
