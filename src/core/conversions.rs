//! Coercion of raw provider scalars into strict typed values.
//!
//! Every function distinguishes three outcomes: a typed value, an explicit absence
//! (`Ok(None)`) for `null` and the provider's missing-data marker, and an
//! [`InvalidValueError`] for anything else. Nothing here swallows an error; deciding that a
//! field is optional is the decoder's job.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

/// Literal the provider writes in place of a data point it does not have.
pub const MISSING_VALUE_MARKER: &str = "null";

/// 0001-01-01T00:00:00Z
const MIN_EPOCH_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z
const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

/// The kind of value a coercion expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Decimal,
    Integer,
    Timestamp,
    Date,
    NonEmptyString,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Timestamp => "timestamp",
            Self::Date => "date",
            Self::NonEmptyString => "non-empty string",
            Self::Bool => "bool",
        })
    }
}

/// A raw value could not be coerced into the expected kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a {kind}: {raw}")]
pub struct InvalidValueError {
    /// What the caller asked for.
    pub kind: ValueKind,
    /// The offending input, rendered as text.
    pub raw: String,
}

impl InvalidValueError {
    fn new(kind: ValueKind, raw: impl fmt::Display) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

fn is_missing_marker(s: &str) -> bool {
    s.is_empty() || s == MISSING_VALUE_MARKER
}

/// Strips grouping commas from values like `1,234,567.89`. Anything else is returned as-is.
fn strip_thousands_separators(s: &str) -> Option<String> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let int_part = unsigned.split('.').next().unwrap_or(unsigned);
    if !int_part.contains(',') {
        return None;
    }
    let mut groups = int_part.split(',');
    let head_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    let tail_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
    (head_ok && tail_ok).then(|| s.replace(',', ""))
}

fn parse_decimal_literal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Coerces a numeric string into a decimal. `""` and the missing-data marker become `None`.
///
/// # Errors
///
/// Returns [`InvalidValueError`] when the text is not a finite number.
pub fn decimal_str(raw: &str) -> Result<Option<Decimal>, InvalidValueError> {
    let s = raw.trim();
    if is_missing_marker(s) {
        return Ok(None);
    }
    if let Some(d) = parse_decimal_literal(s) {
        return Ok(Some(d));
    }
    strip_thousands_separators(s)
        .as_deref()
        .and_then(parse_decimal_literal)
        .map(Some)
        .ok_or_else(|| InvalidValueError::new(ValueKind::Decimal, raw))
}

/// Coerces a JSON number or numeric string into a decimal.
///
/// Numbers are read from their literal text in the response, so `189.95` stays exactly
/// `189.95` and long fractions keep every digit up to the decimal's 28-digit precision.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for booleans, arrays, objects and non-numeric text.
pub fn decimal(value: &Value) -> Result<Option<Decimal>, InvalidValueError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(Decimal::from(i)));
            }
            if let Some(u) = n.as_u64() {
                return Ok(Some(Decimal::from(u)));
            }
            parse_decimal_literal(&n.to_string())
                .map(Some)
                .ok_or_else(|| InvalidValueError::new(ValueKind::Decimal, n))
        }
        Value::String(s) => decimal_str(s),
        other => Err(InvalidValueError::new(ValueKind::Decimal, other)),
    }
}

/// Coerces an integer string. Integral decimals such as `"3.0"` are accepted.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for fractional or non-numeric text.
pub fn integer_str(raw: &str) -> Result<Option<i64>, InvalidValueError> {
    let s = raw.trim();
    if is_missing_marker(s) {
        return Ok(None);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Some(i));
    }
    decimal_str(s)
        .ok()
        .flatten()
        .filter(|d| d.fract().is_zero())
        .and_then(|d| i64::try_from(d).ok())
        .map(Some)
        .ok_or_else(|| InvalidValueError::new(ValueKind::Integer, raw))
}

/// Coerces a JSON number or numeric string into an `i64`.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for fractional numbers, out-of-range values and
/// non-numeric input.
pub fn integer(value: &Value) -> Result<Option<i64>, InvalidValueError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .and_then(|f| Decimal::try_from(f).ok())
                .and_then(|d| i64::try_from(d).ok())
                .map(Some)
                .ok_or_else(|| InvalidValueError::new(ValueKind::Integer, n))
        }
        Value::String(s) => integer_str(s),
        other => Err(InvalidValueError::new(ValueKind::Integer, other)),
    }
}

/// Coerces UTC epoch seconds into a timestamp bounded to years 1 through 9999.
///
/// # Errors
///
/// Returns [`InvalidValueError`] when the value is not an integer or falls outside the
/// calendar range.
pub fn timestamp(value: &Value) -> Result<Option<DateTime<Utc>>, InvalidValueError> {
    let Some(secs) = integer(value).map_err(|_| InvalidValueError::new(ValueKind::Timestamp, value))?
    else {
        return Ok(None);
    };
    if !(MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&secs) {
        return Err(InvalidValueError::new(ValueKind::Timestamp, secs));
    }
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| InvalidValueError::new(ValueKind::Timestamp, secs))
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for any other format, including the missing-data marker.
pub fn date_str(raw: &str) -> Result<NaiveDate, InvalidValueError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| InvalidValueError::new(ValueKind::Date, raw))
}

/// Coerces a string or number into a non-empty, trimmed string.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for `null`, empty text, booleans, arrays and objects.
pub fn non_empty_string(value: &Value) -> Result<String, InvalidValueError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(InvalidValueError::new(ValueKind::NonEmptyString, other)),
    }
}

/// Like [`non_empty_string`], but `null` and empty text are an explicit absence.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for booleans, arrays and objects.
pub fn optional_string(value: &Value) -> Result<Option<String>, InvalidValueError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        other => non_empty_string(other).map(Some),
    }
}

/// Coerces a JSON boolean, or the strings `"true"` / `"false"`.
///
/// # Errors
///
/// Returns [`InvalidValueError`] for anything else except `null`.
pub fn boolean(value: &Value) -> Result<Option<bool>, InvalidValueError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::String(s) => match s.trim() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(InvalidValueError::new(ValueKind::Bool, s)),
        },
        other => Err(InvalidValueError::new(ValueKind::Bool, other)),
    }
}
