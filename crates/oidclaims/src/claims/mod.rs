//! Identity claim container
//!
//! A [`ClaimSet`] keeps two tables. Names from the OpenID Connect standard
//! claim set ([`ClaimName`]) live in typed slots and pass through their codec
//! on the way in and out. Every other name is an extension claim and is kept
//! as the raw JSON value it arrived as. A name is always looked up in the
//! known table first and can never be stored in both.

pub(crate) mod address;
pub(crate) mod birthdate;
pub(crate) mod name;
pub mod timestamp;

pub use address::AddressClaim;
pub use birthdate::BirthdateClaim;
pub use name::{ClaimKind, ClaimName};

use crate::config::DecodeConfig;
use crate::error::{Error, Result};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Decoded value of a known claim slot
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum KnownValue {
    String(String),
    Boolean(bool),
    Address(AddressClaim),
    Birthdate(BirthdateClaim),
    Timestamp(DateTime<Utc>),
}

impl KnownValue {
    /// Run a JSON value through the codec of `claim`
    fn accept(claim: ClaimName, value: &Value) -> Result<Self> {
        let kind = claim.kind();
        if !kind.admits(value) {
            tracing::debug!(%claim, expected = %kind, "rejecting mistyped claim");
            return Err(Error::mismatch(claim.as_str(), kind, value));
        }

        let decoded = match (kind, value) {
            (ClaimKind::String, Value::String(text)) => Ok(KnownValue::String(text.clone())),
            (ClaimKind::Boolean, Value::Bool(flag)) => Ok(KnownValue::Boolean(*flag)),
            (ClaimKind::Address, _) => AddressClaim::accept(value).map(KnownValue::Address),
            (ClaimKind::Birthdate, _) => BirthdateClaim::accept(value).map(KnownValue::Birthdate),
            (ClaimKind::Timestamp, _) => timestamp::accept(value).map(KnownValue::Timestamp),
            _ => Err(Error::mismatch(claim.as_str(), kind, value)),
        };
        if let Err(err) = &decoded {
            tracing::debug!(%claim, error = %err, "rejecting claim value");
        }
        decoded
    }

    fn to_value(&self) -> Value {
        match self {
            KnownValue::String(text) => Value::String(text.clone()),
            KnownValue::Boolean(flag) => Value::Bool(*flag),
            KnownValue::Address(address) => address.to_value(),
            KnownValue::Birthdate(birthdate) => birthdate.to_value(),
            KnownValue::Timestamp(instant) => timestamp::to_value(instant),
        }
    }
}

/// OpenID Connect identity claims with open-ended extension claims
///
/// # Examples
///
/// ```
/// use oidclaims::{accessors, ClaimSet};
/// use serde_json::json;
///
/// let claims = ClaimSet::decode(br#"{
///     "email": "jwx@example.com",
///     "email_verified": true,
///     "updated_at": "233431200",
///     "tenant": {"id": 42}
/// }"#).unwrap();
///
/// assert_eq!(accessors::email(&claims), "jwx@example.com");
/// assert!(accessors::email_verified(&claims));
/// assert_eq!(accessors::updated_at(&claims).timestamp(), 233431200);
/// assert_eq!(claims.get("tenant"), Some(json!({"id": 42})));
///
/// let encoded = claims.encode().unwrap();
/// assert_eq!(ClaimSet::decode(&encoded).unwrap(), claims);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    known: BTreeMap<ClaimName, KnownValue>,
    extension: BTreeMap<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a claim set from a JSON object using the default [`DecodeConfig`]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, &DecodeConfig::default())
    }

    /// Decode a claim set from a JSON object
    ///
    /// Either every claim decodes or an error is returned; there is no
    /// partially populated result.
    pub fn decode_with(bytes: &[u8], config: &DecodeConfig) -> Result<Self> {
        config.check_payload(bytes.len())?;

        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            tracing::debug!(error = %e, "rejecting malformed claims payload");
            Error::DecodeInvalidJson(e.to_string())
        })?;
        Self::from_value(value)
    }

    /// Replace the contents of this set with a freshly decoded payload
    ///
    /// On error `self` is left exactly as it was.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<()> {
        *self = Self::decode(bytes)?;
        Ok(())
    }

    /// Build a claim set from an in-memory JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Self::from_map(object),
            other => Err(Error::DecodeNotAnObject {
                found: crate::utils::json::type_name(&other),
            }),
        }
    }

    fn from_map(object: Map<String, Value>) -> Result<Self> {
        let mut claims = Self::new();
        for (key, value) in object {
            match ClaimName::lookup(&key) {
                // null for a known claim reads as "not present"
                Some(_) if value.is_null() => {}
                Some(claim) => {
                    let decoded = KnownValue::accept(claim, &value)?;
                    claims.known.insert(claim, decoded);
                }
                None => {
                    tracing::trace!(claim = %key, "storing extension claim");
                    claims.extension.insert(key, value);
                }
            }
        }
        Ok(claims)
    }

    /// Encode the claim set as a single flat JSON object using the default
    /// [`DecodeConfig`]
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.encode_with(&DecodeConfig::default())
    }

    /// Encode the claim set as a single flat JSON object
    ///
    /// Fails with [`Error::EncodeTooLarge`] when the output would exceed the
    /// payload limit of `config`, so whatever is returned decodes again under
    /// the same config.
    pub fn encode_with(&self, config: &DecodeConfig) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(self).map_err(|e| Error::EncodeFailed(e.to_string()))?;
        config.check_encoded(bytes.len())?;
        Ok(bytes)
    }

    /// Encode the claim set as a JSON string using the default [`DecodeConfig`]
    pub fn encode_to_string(&self) -> Result<String> {
        let text = serde_json::to_string(self).map_err(|e| Error::EncodeFailed(e.to_string()))?;
        DecodeConfig::default().check_encoded(text.len())?;
        Ok(text)
    }

    /// The claim set as an in-memory JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut object = Map::new();
        for (claim, value) in &self.known {
            object.insert(claim.as_str().to_string(), value.to_value());
        }
        for (key, value) in &self.extension {
            object.insert(key.clone(), value.clone());
        }
        object
    }

    /// Look up a claim by wire name, known claims first
    ///
    /// Known claims are returned in their encoded form, so `birthdate` comes
    /// back as a `YYYY-MM-DD` string and `updated_at` as a number.
    pub fn get(&self, name: &str) -> Option<Value> {
        match ClaimName::lookup(name) {
            Some(claim) => self.known.get(&claim).map(KnownValue::to_value),
            None => self.extension.get(name).cloned(),
        }
    }

    /// Set a claim by wire name
    ///
    /// Known claims are validated by their codec exactly as during decoding,
    /// and a rejected value leaves the set unchanged. Setting a known claim to
    /// `null` removes it. Any other name is stored as an extension claim.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match ClaimName::lookup(name) {
            Some(claim) if value.is_null() => {
                self.known.remove(&claim);
            }
            Some(claim) => {
                let decoded = KnownValue::accept(claim, &value)?;
                self.known.insert(claim, decoded);
            }
            None => {
                self.extension.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Set the `address` claim
    pub fn set_address(&mut self, address: AddressClaim) {
        self.known.insert(ClaimName::Address, KnownValue::Address(address));
    }

    /// Set the `birthdate` claim
    pub fn set_birthdate(&mut self, birthdate: BirthdateClaim) {
        self.known.insert(ClaimName::Birthdate, KnownValue::Birthdate(birthdate));
    }

    /// Set the `updated_at` claim
    ///
    /// Sub-second precision is dropped, as it would be on the wire.
    pub fn set_updated_at(&mut self, instant: DateTime<Utc>) {
        let instant = instant.with_nanosecond(0).unwrap_or(instant);
        self.known.insert(ClaimName::UpdatedAt, KnownValue::Timestamp(instant));
    }

    /// Remove a claim, returning its encoded value if it was present
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        match ClaimName::lookup(name) {
            Some(claim) => self.known.remove(&claim).map(|v| v.to_value()),
            None => self.extension.remove(name),
        }
    }

    /// Whether a claim with this wire name is present
    pub fn contains(&self, name: &str) -> bool {
        match ClaimName::lookup(name) {
            Some(claim) => self.known.contains_key(&claim),
            None => self.extension.contains_key(name),
        }
    }

    /// Number of claims present, known and extension
    pub fn len(&self) -> usize {
        self.known.len() + self.extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.extension.is_empty()
    }

    /// Names of all present claims, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.len());
        for claim in self.known.keys() {
            keys.push(claim.as_str());
        }
        for key in self.extension.keys() {
            keys.push(key);
        }
        keys.sort_unstable();
        keys
    }

    /// Extension claims, sorted by name
    pub fn extension(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.extension.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn known(&self, claim: ClaimName) -> Option<&KnownValue> {
        self.known.get(&claim)
    }
}

impl Serialize for ClaimSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClaimSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Value> for ClaimSet {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<&ClaimSet> for Value {
    fn from(claims: &ClaimSet) -> Self {
        claims.to_value()
    }
}
