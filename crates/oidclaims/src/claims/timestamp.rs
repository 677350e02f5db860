//! Seconds-since-epoch instants, as carried by `updated_at`
//!
//! Input may be a JSON number (integer or fractional seconds) or a JSON string
//! holding a base-10 integer. Fractional seconds are floored on the way in, so
//! the decoded instant is exactly what gets encoded: a JSON number of whole
//! seconds.

use crate::error::{Error, Result};
use crate::utils::json::type_name;
use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

const FIELD: &str = "updated_at";

/// Decode a UTC instant from epoch seconds
///
/// # Examples
///
/// ```
/// use oidclaims::timestamp;
/// use serde_json::json;
///
/// let instant = timestamp::accept(&json!("233431200")).unwrap();
/// assert_eq!(instant.timestamp(), 233431200);
/// assert_eq!(timestamp::to_value(&instant), json!(233431200));
/// ```
pub fn accept(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::Number(number) => from_number(number),
        Value::String(text) => from_str(text),
        other => Err(Error::format(
            FIELD,
            format!("unsupported {} input", type_name(other)),
        )),
    }
}

/// Parse a string of whole epoch seconds, optionally signed
pub fn from_str(text: &str) -> Result<DateTime<Utc>> {
    let seconds = text.parse::<i64>().map_err(|_| {
        Error::format(FIELD, format!("expected integer seconds, found {text:?}"))
    })?;
    from_seconds(seconds)
}

/// Encode an instant as a JSON number of whole seconds since the epoch
///
/// Instants built outside [`accept`] may carry sub-second precision; the
/// seconds are floored.
pub fn to_value(instant: &DateTime<Utc>) -> Value {
    Value::from(instant.timestamp())
}

fn from_number(number: &Number) -> Result<DateTime<Utc>> {
    if let Some(seconds) = number.as_i64() {
        return from_seconds(seconds);
    }

    let out_of_range = || Error::format(FIELD, format!("epoch seconds {number} out of range"));
    let whole = number
        .as_f64()
        .filter(|s| s.is_finite())
        .map(f64::floor)
        .ok_or_else(out_of_range)?;
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    from_seconds(whole as i64)
}

fn from_seconds(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| Error::format(FIELD, format!("epoch seconds {seconds} out of range")))
}
