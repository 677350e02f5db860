//! Structured postal address claim

use crate::claims::ClaimKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Address claim as defined in
/// [OpenID Connect Core 1.0 Section 5.1.1](https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim)
///
/// Every subfield is optional. A subfield that was absent from the decoded
/// object stays unset and is omitted when the address is encoded again; it
/// is never written out as an empty string.
///
/// Subfields are read-only. A new address is produced by decoding, either
/// through [`AddressClaim::accept`] or through serde.
///
/// # Examples
///
/// ```
/// use oidclaims::AddressClaim;
/// use serde_json::json;
///
/// let address = AddressClaim::accept(&json!({
///     "locality": "港区",
///     "country": "日本",
/// })).unwrap();
///
/// assert_eq!(address.locality(), "港区");
/// assert_eq!(address.region(), "");
/// assert_eq!(address.to_value(), json!({"locality": "港区", "country": "日本"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AddressClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl AddressClaim {
    /// Decode an address from a JSON object
    ///
    /// Unrecognized members are ignored and a `null` subfield counts as
    /// absent. A subfield holding anything but a string is rejected.
    pub fn accept(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::mismatch("address", ClaimKind::Address, value))?;

        Ok(Self {
            formatted: subfield(object, "formatted")?,
            street_address: subfield(object, "street_address")?,
            locality: subfield(object, "locality")?,
            region: subfield(object, "region")?,
            postal_code: subfield(object, "postal_code")?,
            country: subfield(object, "country")?,
        })
    }

    /// Encode the address, emitting only the subfields that are set
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        let fields = [
            ("formatted", &self.formatted),
            ("street_address", &self.street_address),
            ("locality", &self.locality),
            ("region", &self.region),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ];
        for (name, field) in fields {
            if let Some(text) = field {
                object.insert(name.to_string(), Value::String(text.clone()));
            }
        }
        Value::Object(object)
    }

    /// Full mailing address, formatted for display
    pub fn formatted(&self) -> &str {
        self.formatted.as_deref().unwrap_or_default()
    }

    /// Street address component
    pub fn street_address(&self) -> &str {
        self.street_address.as_deref().unwrap_or_default()
    }

    /// City or locality component
    pub fn locality(&self) -> &str {
        self.locality.as_deref().unwrap_or_default()
    }

    /// State, province, prefecture or region component
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }

    /// Zip code or postal code component
    pub fn postal_code(&self) -> &str {
        self.postal_code.as_deref().unwrap_or_default()
    }

    /// Country name component
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    /// True when no subfield is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn subfield(object: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => {
            tracing::debug!(subfield = name, "rejecting non-string address subfield");
            Err(Error::mismatch(
                format!("address.{name}"),
                ClaimKind::String,
                other,
            ))
        }
    }
}

impl<'de> Deserialize<'de> for AddressClaim {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::accept(&value).map_err(serde::de::Error::custom)
    }
}
