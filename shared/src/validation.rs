//! Input coercion for records arriving from the fetch boundary
//!
//! Numeric fields are forgiving: `null`, missing, blank or non-finite values
//! become `0`, and numeric strings (decimal columns are often serialized that
//! way) are parsed. Dates and identifiers are not forgiving; a record without
//! them is rejected.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::{MetricsError, MetricsResult};

/// Parse a calendar day in ISO 8601 (`YYYY-MM-DD`) form
pub fn parse_iso_date(value: &str) -> MetricsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| MetricsError::InvalidDate(value.to_string()))
}

/// Replace a missing or non-finite number with zero
pub fn coerce_number(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdLike {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

/// Deserialize a numeric field, treating `null` and blank strings as zero.
///
/// Pair with `#[serde(default)]` so an absent field is zero as well.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberLike>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberLike::Number(n)) => Ok(coerce_number(Some(n))),
        Some(NumberLike::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .map(|n| coerce_number(Some(n)))
                .map_err(|_| D::Error::custom(format!("expected a number, found '{}'", s)))
        }
    }
}

/// Deserialize a non-negative count; fractional values are rounded and
/// negative values clamp to zero.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = number_or_zero(deserializer)?;
    Ok(value.max(0.0).round() as u64)
}

/// Deserialize an identifier given either as a number or a string
pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match IdLike::deserialize(deserializer)? {
        IdLike::Unsigned(n) => n.to_string(),
        IdLike::Signed(n) => n.to_string(),
        IdLike::Text(s) => s,
    };
    if id.trim().is_empty() {
        return Err(D::Error::custom("identifier must not be empty"));
    }
    Ok(id)
}
