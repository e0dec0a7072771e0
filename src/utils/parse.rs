//! Value parsers for command-line flags.

use estacion_core::time::hour_of_day;

const WEEKDAYS: [[&str; 3]; 7] = [
    ["mon", "monday", "lun"],
    ["tue", "tuesday", "mar"],
    ["wed", "wednesday", "mie"],
    ["thu", "thursday", "jue"],
    ["fri", "friday", "vie"],
    ["sat", "saturday", "sab"],
    ["sun", "sunday", "dom"],
];

/// Weekday column: `0`-`6` with Monday as 0, or an English/Spanish name.
pub fn parse_day(s: &str) -> Result<u8, String> {
    let input = s.trim().to_lowercase();

    if let Ok(n) = input.parse::<u8>() {
        return if n < 7 {
            Ok(n)
        } else {
            Err(format!("Day must be between 0 and 6, got {}", n))
        };
    }

    WEEKDAYS
        .iter()
        .position(|names| names.contains(&input.as_str()))
        .map(|i| i as u8)
        .ok_or_else(|| format!("Unknown day '{}'. Use 0-6 or a name like 'mon'", s))
}

/// Start hour as `HH:MM` or decimal hours.
pub fn parse_hour(s: &str) -> Result<f64, String> {
    let input = s.trim();

    if input.contains(':') {
        return hour_of_day(input).ok_or_else(|| format!("Invalid time '{}', expected HH:MM", s));
    }

    match input.parse::<f64>() {
        Ok(h) if (0.0..24.0).contains(&h) => Ok(h),
        _ => Err(format!("Invalid hour '{}'. Use HH:MM or a number like 10.5", s)),
    }
}

pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("Expected true/false, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_accepts_index_and_names() {
        assert_eq!(parse_day("0"), Ok(0));
        assert_eq!(parse_day("6"), Ok(6));
        assert_eq!(parse_day("Wed"), Ok(2));
        assert!(parse_day("domingo").is_err());
        assert_eq!(parse_day("dom"), Ok(6));
        assert!(parse_day("7").is_err());
        assert!(parse_day("someday").is_err());
    }

    #[test]
    fn hour_accepts_clock_and_decimal() {
        assert_eq!(parse_hour("10:30"), Ok(10.5));
        assert_eq!(parse_hour("9"), Ok(9.0));
        assert_eq!(parse_hour("14.25"), Ok(14.25));
        assert!(parse_hour("25").is_err());
        assert!(parse_hour("10:75").is_err());
        assert!(parse_hour("noon").is_err());
    }

    #[test]
    fn bool_accepts_common_spellings() {
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("OFF"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }
}
