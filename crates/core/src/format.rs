//! Display formatting for course metadata

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format a date as `DD.MM.YYYY`.
///
/// Accepts RFC 3339 timestamps (converted to the UTC calendar date), naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps and plain `YYYY-MM-DD` dates.
pub fn format_date(input: &str) -> Result<String> {
    let date = parse_date(input.trim()).ok_or_else(|| Error::InvalidDate(input.to_string()))?;
    Ok(date.format("%d.%m.%Y").to_string())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Format a duration given in minutes as `HH:MM hour|hours`
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let unit = if hours == 1 { "hour" } else { "hours" };
    format!("{hours:02}:{minutes:02} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_examples() {
        assert_eq!(format_duration(125), "02:05 hours");
        assert_eq!(format_duration(60), "01:00 hour");
        assert_eq!(format_duration(45), "00:45 hours");
        assert_eq!(format_duration(0), "00:00 hours");
        assert_eq!(format_duration(119), "01:59 hour");
        assert_eq!(format_duration(6000), "100:00 hours");
    }

    #[test]
    fn test_format_duration_shape() {
        for minutes in 0..=10_000 {
            let formatted = format_duration(minutes);
            let (clock, unit) = formatted.split_once(' ').unwrap();
            let (hours, mins) = clock.split_once(':').unwrap();

            assert!(hours.len() >= 2 && hours.chars().all(|c| c.is_ascii_digit()));
            assert!(mins.len() == 2 && mins.chars().all(|c| c.is_ascii_digit()));

            let expected_unit = if minutes / 60 == 1 { "hour" } else { "hours" };
            assert_eq!(unit, expected_unit, "unit for {minutes} minutes");
        }
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-01-05T00:00:00Z").unwrap(), "05.01.2024");
        assert_eq!(format_date("2023-11-28T14:03:21.123Z").unwrap(), "28.11.2023");
        // Offsets are normalised to the UTC calendar day
        assert_eq!(format_date("2024-03-01T23:30:00-02:00").unwrap(), "02.03.2024");
    }

    #[test]
    fn test_format_date_plain_and_naive() {
        assert_eq!(format_date("2024-12-31").unwrap(), "31.12.2024");
        assert_eq!(format_date("2024-07-09T08:15:00").unwrap(), "09.07.2024");
        assert_eq!(format_date(" 0999-02-03 ").unwrap(), "03.02.0999");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(
            format_date("yesterday"),
            Err(Error::InvalidDate("yesterday".to_string()))
        );
        assert!(format_date("2024-13-01").is_err());
        assert!(format_date("").is_err());
    }
}
