//! Typed read access to the standard claims
//!
//! One function per known claim. Each returns the claim as its natural type,
//! or that type's zero value when the claim is absent or holds something of
//! another shape: `""` for strings, `false` for booleans, `None` for the
//! address and birthdate, and the Unix epoch for `updated_at`. None of them
//! fail and none of them mutate.
//!
//! Callers that must tell "absent" apart from "zero" use [`ClaimSet::get`]
//! or [`ClaimSet::contains`].

use crate::claims::{AddressClaim, BirthdateClaim, ClaimName, ClaimSet, KnownValue};
use chrono::{DateTime, Utc};

macro_rules! string_claims {
    ($($(#[$doc:meta])* $accessor:ident => $claim:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $accessor(claims: &ClaimSet) -> &str {
                match claims.known(ClaimName::$claim) {
                    Some(KnownValue::String(text)) => text.as_str(),
                    _ => "",
                }
            }
        )*
    };
}

macro_rules! boolean_claims {
    ($($(#[$doc:meta])* $accessor:ident => $claim:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $accessor(claims: &ClaimSet) -> bool {
                matches!(claims.known(ClaimName::$claim), Some(KnownValue::Boolean(true)))
            }
        )*
    };
}

string_claims! {
    /// End-user's full name (`name`)
    name => Name;
    /// Given or first name (`given_name`)
    given_name => GivenName;
    /// Surname or last name (`family_name`)
    family_name => FamilyName;
    /// Middle name (`middle_name`)
    middle_name => MiddleName;
    /// Casual name (`nickname`)
    nickname => Nickname;
    /// Shorthand name the end-user wishes to be referred to as (`preferred_username`)
    preferred_username => PreferredUsername;
    /// Profile page URL (`profile`)
    profile => Profile;
    /// Profile picture URL (`picture`)
    picture => Picture;
    /// Web page or blog URL (`website`)
    website => Website;
    /// Preferred e-mail address (`email`)
    email => Email;
    /// Gender (`gender`)
    gender => Gender;
    /// Time zone from the tz database, e.g. `Europe/Paris` (`zoneinfo`)
    zoneinfo => Zoneinfo;
    /// Locale as a BCP47 language tag (`locale`)
    locale => Locale;
    /// Preferred telephone number (`phone_number`)
    phone_number => PhoneNumber;
}

boolean_claims! {
    /// Whether the e-mail address has been verified (`email_verified`)
    email_verified => EmailVerified;
    /// Whether the phone number has been verified (`phone_number_verified`)
    phone_number_verified => PhoneNumberVerified;
}

/// Preferred postal address (`address`)
pub fn address(claims: &ClaimSet) -> Option<&AddressClaim> {
    match claims.known(ClaimName::Address) {
        Some(KnownValue::Address(address)) => Some(address),
        _ => None,
    }
}

/// Birthday (`birthdate`)
pub fn birthdate(claims: &ClaimSet) -> Option<&BirthdateClaim> {
    match claims.known(ClaimName::Birthdate) {
        Some(KnownValue::Birthdate(birthdate)) => Some(birthdate),
        _ => None,
    }
}

/// Time the end-user's information was last updated (`updated_at`)
pub fn updated_at(claims: &ClaimSet) -> DateTime<Utc> {
    match claims.known(ClaimName::UpdatedAt) {
        Some(KnownValue::Timestamp(instant)) => *instant,
        _ => DateTime::<Utc>::default(),
    }
}
