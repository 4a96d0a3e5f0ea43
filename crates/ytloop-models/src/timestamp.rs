//! Clock-style timestamp formatting for the loop readout.
//!
//! The widget displays loop bounds as `minutes:seconds` (hours spill into
//! the minutes field, matching how YouTube itself shows sub-hour videos).
//! Parsing accepts `SS`, `MM:SS` and `HH:MM:SS` so bounds can also be
//! typed instead of dragged.

use thiserror::Error;

/// Format seconds as `m:ss`.
///
/// Fractional seconds are floored and negative values clamp to zero, so
/// any playhead reading renders as a stable readout.
///
/// # Examples
/// ```
/// use ytloop_models::timestamp::format_clock;
/// assert_eq!(format_clock(0.0), "0:00");
/// assert_eq!(format_clock(90.0), "1:30");
/// assert_eq!(format_clock(3661.9), "61:01");
/// ```
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let minutes = total / 60;
    let rest = total % 60;
    format!("{}:{:02}", minutes, rest)
}

/// Timestamp parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("timestamp cannot be empty")]
    Empty,

    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),

    #[error("invalid timestamp format '{0}', use SS, MM:SS or HH:MM:SS")]
    InvalidFormat(String),
}

/// Parse a `SS`, `MM:SS` or `HH:MM:SS` string to total seconds.
///
/// # Examples
/// ```
/// use ytloop_models::timestamp::parse_clock;
/// assert_eq!(parse_clock("90").unwrap(), 90.0);
/// assert_eq!(parse_clock("1:30").unwrap(), 90.0);
/// assert_eq!(parse_clock("01:30:00").unwrap(), 5400.0);
/// ```
pub fn parse_clock(input: &str) -> Result<f64, ClockError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClockError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    match parts.as_slice() {
        [secs] => Ok(parse_component(secs, "seconds")?),
        [mins, secs] => {
            Ok(parse_component(mins, "minutes")? * 60.0 + parse_component(secs, "seconds")?)
        }
        [hours, mins, secs] => Ok(parse_component(hours, "hours")? * 3600.0
            + parse_component(mins, "minutes")? * 60.0
            + parse_component(secs, "seconds")?),
        _ => Err(ClockError::InvalidFormat(trimmed.to_string())),
    }
}

fn parse_component(raw: &str, name: &'static str) -> Result<f64, ClockError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ClockError::InvalidValue(name, raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(9.0), "0:09");
        assert_eq!(format_clock(59.999), "0:59");
        assert_eq!(format_clock(60.0), "1:00");
        assert_eq!(format_clock(90.0), "1:30");
        assert_eq!(format_clock(600.0), "10:00");
        assert_eq!(format_clock(3661.0), "61:01");
    }

    #[test]
    fn test_format_clock_clamps_bad_input() {
        assert_eq!(format_clock(-5.0), "0:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("0").unwrap(), 0.0);
        assert_eq!(parse_clock("90").unwrap(), 90.0);
        assert_eq!(parse_clock("1:30").unwrap(), 90.0);
        assert_eq!(parse_clock("10:00").unwrap(), 600.0);
        assert_eq!(parse_clock("01:30:00").unwrap(), 5400.0);
        assert_eq!(parse_clock(" 2:05 ").unwrap(), 125.0);
    }

    #[test]
    fn test_parse_clock_errors() {
        assert_eq!(parse_clock(""), Err(ClockError::Empty));
        assert_eq!(parse_clock("   "), Err(ClockError::Empty));
        assert!(matches!(parse_clock("abc"), Err(ClockError::InvalidValue(_, _))));
        assert!(matches!(parse_clock("-5"), Err(ClockError::InvalidValue(_, _))));
        assert!(matches!(parse_clock("1:xx"), Err(ClockError::InvalidValue(_, _))));
        assert!(matches!(
            parse_clock("1:2:3:4"),
            Err(ClockError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_round_trip_whole_seconds() {
        for secs in [0.0, 7.0, 59.0, 60.0, 61.0, 3599.0] {
            assert_eq!(parse_clock(&format_clock(secs)).unwrap(), secs);
        }
    }
}
