//! The table of known OpenID Connect claims

use serde_json::Value;
use std::fmt;

/// Value shape of a known claim slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    String,
    Boolean,
    Address,
    Birthdate,
    Timestamp,
}

impl ClaimKind {
    /// Whether a JSON value has a type this slot can be decoded from
    ///
    /// `null` is handled by the caller as an absent claim and is never admitted.
    pub(crate) fn admits(&self, value: &Value) -> bool {
        match self {
            ClaimKind::String => value.is_string(),
            ClaimKind::Boolean => value.is_boolean(),
            ClaimKind::Address => value.is_object(),
            ClaimKind::Birthdate | ClaimKind::Timestamp => value.is_string() || value.is_number(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ClaimKind::String => "string",
            ClaimKind::Boolean => "boolean",
            ClaimKind::Address => "address object",
            ClaimKind::Birthdate => "date string or epoch seconds",
            ClaimKind::Timestamp => "epoch seconds",
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim names with a dedicated typed slot
///
/// These are the standard claims from
/// [OpenID Connect Core 1.0 Section 5.1](https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims).
/// Every other name is an extension claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClaimName {
    Name,
    GivenName,
    FamilyName,
    MiddleName,
    Nickname,
    PreferredUsername,
    Profile,
    Picture,
    Website,
    Email,
    EmailVerified,
    Gender,
    Birthdate,
    Zoneinfo,
    Locale,
    PhoneNumber,
    PhoneNumberVerified,
    Address,
    UpdatedAt,
}

impl ClaimName {
    /// All known claims, in declaration order
    pub const ALL: [ClaimName; 19] = [
        ClaimName::Name,
        ClaimName::GivenName,
        ClaimName::FamilyName,
        ClaimName::MiddleName,
        ClaimName::Nickname,
        ClaimName::PreferredUsername,
        ClaimName::Profile,
        ClaimName::Picture,
        ClaimName::Website,
        ClaimName::Email,
        ClaimName::EmailVerified,
        ClaimName::Gender,
        ClaimName::Birthdate,
        ClaimName::Zoneinfo,
        ClaimName::Locale,
        ClaimName::PhoneNumber,
        ClaimName::PhoneNumberVerified,
        ClaimName::Address,
        ClaimName::UpdatedAt,
    ];

    /// Look up a wire name; `None` means the name is an extension claim
    pub fn lookup(name: &str) -> Option<Self> {
        let claim = match name {
            "name" => ClaimName::Name,
            "given_name" => ClaimName::GivenName,
            "family_name" => ClaimName::FamilyName,
            "middle_name" => ClaimName::MiddleName,
            "nickname" => ClaimName::Nickname,
            "preferred_username" => ClaimName::PreferredUsername,
            "profile" => ClaimName::Profile,
            "picture" => ClaimName::Picture,
            "website" => ClaimName::Website,
            "email" => ClaimName::Email,
            "email_verified" => ClaimName::EmailVerified,
            "gender" => ClaimName::Gender,
            "birthdate" => ClaimName::Birthdate,
            "zoneinfo" => ClaimName::Zoneinfo,
            "locale" => ClaimName::Locale,
            "phone_number" => ClaimName::PhoneNumber,
            "phone_number_verified" => ClaimName::PhoneNumberVerified,
            "address" => ClaimName::Address,
            "updated_at" => ClaimName::UpdatedAt,
            _ => return None,
        };
        Some(claim)
    }

    /// Wire name of the claim
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClaimName::Name => "name",
            ClaimName::GivenName => "given_name",
            ClaimName::FamilyName => "family_name",
            ClaimName::MiddleName => "middle_name",
            ClaimName::Nickname => "nickname",
            ClaimName::PreferredUsername => "preferred_username",
            ClaimName::Profile => "profile",
            ClaimName::Picture => "picture",
            ClaimName::Website => "website",
            ClaimName::Email => "email",
            ClaimName::EmailVerified => "email_verified",
            ClaimName::Gender => "gender",
            ClaimName::Birthdate => "birthdate",
            ClaimName::Zoneinfo => "zoneinfo",
            ClaimName::Locale => "locale",
            ClaimName::PhoneNumber => "phone_number",
            ClaimName::PhoneNumberVerified => "phone_number_verified",
            ClaimName::Address => "address",
            ClaimName::UpdatedAt => "updated_at",
        }
    }

    /// Shape of the slot backing this claim
    pub const fn kind(&self) -> ClaimKind {
        match self {
            ClaimName::EmailVerified | ClaimName::PhoneNumberVerified => ClaimKind::Boolean,
            ClaimName::Address => ClaimKind::Address,
            ClaimName::Birthdate => ClaimKind::Birthdate,
            ClaimName::UpdatedAt => ClaimKind::Timestamp,
            _ => ClaimKind::String,
        }
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ClaimName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
