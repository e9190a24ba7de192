//! Human-readable duration parsing for command-line flags.
//!
//! Accepts `500ms`, `2s`, `1m`, `1h`, compounds such as `1m30s`, and
//! fractional values such as `1.5s`. A bare number is read as seconds.

use std::time::Duration;
use thiserror::Error;

/// Errors produced while parsing a duration string.
#[derive(Debug, Error, PartialEq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("invalid number in duration '{0}'")]
    InvalidNumber(String),

    #[error("unknown unit '{unit}' in duration '{input}' (expected ms, s, m or h)")]
    UnknownUnit { unit: String, input: String },

    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),
}

/// Parse a duration such as `2s` or `1m30s`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DurationParseError::Empty);
    }

    if let Ok(secs) = s.parse::<f64>() {
        return to_duration(secs, input);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            return Err(DurationParseError::InvalidNumber(input.to_string()));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(input.to_string()))?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let scale = match &rest[..unit_end] {
            "ms" => 0.001,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            unit => {
                return Err(DurationParseError::UnknownUnit {
                    unit: unit.to_string(),
                    input: input.to_string(),
                })
            }
        };
        rest = &rest[unit_end..];

        total += to_duration(value * scale, input)?;
    }

    Ok(total)
}

fn to_duration(secs: f64, input: &str) -> Result<Duration, DurationParseError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| DurationParseError::InvalidNumber(input.to_string()))
}
