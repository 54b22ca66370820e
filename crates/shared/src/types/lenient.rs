//! Lenient decoding for fields of upstream records.
//!
//! The back-office API is loosely typed: amounts arrive as numbers, numeric
//! strings, empty strings, or `null`. Financial derivations must never abort
//! on one bad field, so every numeric field degrades to zero instead of
//! failing the whole record.
//!
//! Use with `#[serde(default, deserialize_with = "lenient::decimal")]`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces an arbitrary JSON value into a decimal, falling back to zero.
#[must_use]
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()).unwrap_or(Decimal::ZERO),
        Value::String(s) => parse_decimal(s).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Deserializes a decimal, coercing malformed input to zero.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

/// Deserializes an optional decimal; `null` stays `None`, garbage becomes zero.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(coerce_decimal(&other)),
    })
}

/// Deserializes a unit count.
///
/// Fractions truncate toward zero; negative or malformed counts become zero.
pub fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value).trunc().to_u32().unwrap_or(0))
}

/// Deserializes a calendar day from a date or a timestamp.
///
/// Timestamps are truncated to the day written in them; no timezone
/// conversion is applied.
pub fn calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
}

/// Parses `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp.
#[must_use]
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|stamp| stamp.date())
        .ok()
}
