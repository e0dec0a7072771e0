//! Wall-clock helpers for `HH:MM` strings and fractional hours.

use chrono::NaiveDate;

use crate::error::{EstacionError, EstacionResult};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Parse `HH:MM` into a fractional hour (e.g. "10:30" -> 10.5).
pub fn hour_of_day(s: &str) -> Option<f64> {
    parse_hhmm(s).map(|m| f64::from(m) / 60.0)
}

/// Format a fractional hour as zero-padded `HH:MM`.
///
/// The fraction is rounded to the nearest minute, so a rounded 60 carries
/// into the hour. Input is clamped to the day: `00:00` through `23:59`.
pub fn format_hour(hour: f64) -> String {
    let minutes = (hour * 60.0).round().clamp(0.0, MINUTES_PER_DAY - 1.0) as u32;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> EstacionResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        EstacionError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wall_clock() {
        assert_eq!(parse_hhmm("09:00"), Some(540));
        assert_eq!(parse_hhmm("9:05"), Some(545));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(hour_of_day("10:30"), Some(10.5));
    }

    #[test]
    fn rejects_malformed_wall_clock() {
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("10:60"), None);
        assert_eq!(parse_hhmm("1030"), None);
        assert_eq!(parse_hhmm(""), None);
    }

    #[test]
    fn formats_fractional_hours() {
        assert_eq!(format_hour(9.0), "09:00");
        assert_eq!(format_hour(10.5), "10:30");
        assert_eq!(format_hour(14.25), "14:15");
        assert_eq!(format_hour(8.999), "09:00");
    }

    #[test]
    fn format_hour_stays_within_the_day() {
        assert_eq!(format_hour(-1.5), "00:00");
        assert_eq!(format_hour(24.0), "23:59");
        assert_eq!(format_hour(23.999), "23:59");
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert!(parse_date("2025-11-11").is_ok());
        assert!(matches!(
            parse_date("11/11/2025"),
            Err(EstacionError::Validation(_))
        ));
    }
}
