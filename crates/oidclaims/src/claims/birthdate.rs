//! Calendar-only birthdate claim

use crate::error::{Error, Result};
use crate::limits::{MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
use crate::utils::json::type_name;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

const FIELD: &str = "birthdate";

/// End-user birthday, a date without time of day or timezone
///
/// The canonical wire form is the fixed-width `YYYY-MM-DD` string. Values can
/// be built from that string, from seconds since the Unix epoch (the UTC
/// calendar date of that instant), or from an already typed date; whatever the
/// source, encoding always produces the canonical string.
///
/// # Examples
///
/// ```
/// use oidclaims::BirthdateClaim;
///
/// let birthdate = BirthdateClaim::from_date_str("2015-11-04").unwrap();
/// assert_eq!((birthdate.year(), birthdate.month(), birthdate.day()), (2015, 11, 4));
/// assert_eq!(birthdate.to_string(), "2015-11-04");
///
/// let from_epoch = BirthdateClaim::from_epoch_seconds(1_446_638_400).unwrap();
/// assert_eq!(from_epoch, birthdate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdateClaim {
    date: NaiveDate,
}

impl BirthdateClaim {
    /// Decode a birthdate from JSON
    ///
    /// Strings go through [`from_date_str`](Self::from_date_str), numbers are
    /// seconds since the Unix epoch. Fractional seconds are floored before the
    /// calendar date is taken. Any other JSON type is rejected.
    pub fn accept(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::from_date_str(text),
            Value::Number(number) => Self::from_number(number),
            other => Err(Error::format(
                FIELD,
                format!("unsupported {} input", type_name(other)),
            )),
        }
    }

    /// Parse the strict `YYYY-MM-DD` form with full calendar validation
    pub fn from_date_str(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(Error::format(
                FIELD,
                format!("expected YYYY-MM-DD, found {text:?}"),
            ));
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| Self { date })
            .map_err(|e| Error::format(FIELD, format!("{text:?} is not a calendar date: {e}")))
    }

    /// Calendar date (UTC) of an instant given in seconds since the Unix epoch
    pub fn from_epoch_seconds(seconds: i64) -> Result<Self> {
        let instant = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            Error::format(FIELD, format!("epoch seconds {seconds} out of range"))
        })?;
        Self::from_date(instant.date_naive())
    }

    /// Use an already typed calendar date
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&date.year()) {
            return Err(Error::format(
                FIELD,
                format!(
                    "year {} outside {MIN_BIRTH_YEAR}..={MAX_BIRTH_YEAR}",
                    date.year()
                ),
            ));
        }
        Ok(Self { date })
    }

    /// Truncate a date-time to its calendar date in its own timezone
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self> {
        Self::from_date(datetime.date_naive())
    }

    fn from_number(number: &Number) -> Result<Self> {
        if let Some(seconds) = number.as_i64() {
            return Self::from_epoch_seconds(seconds);
        }

        let seconds = number
            .as_f64()
            .filter(|s| s.is_finite())
            .map(f64::floor)
            .filter(|s| *s >= i64::MIN as f64 && *s < i64::MAX as f64)
            .ok_or_else(|| Error::format(FIELD, format!("epoch seconds {number} out of range")))?;
        Self::from_epoch_seconds(seconds as i64)
    }

    /// Year, e.g. 2015
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month of the year, 1 to 12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, 1 to 31
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Encode as the canonical `YYYY-MM-DD` JSON string
    pub fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl fmt::Display for BirthdateClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}

impl FromStr for BirthdateClaim {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_date_str(s)
    }
}

impl From<BirthdateClaim> for NaiveDate {
    fn from(birthdate: BirthdateClaim) -> Self {
        birthdate.date
    }
}

impl Serialize for BirthdateClaim {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdateClaim {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::accept(&value).map_err(serde::de::Error::custom)
    }
}
