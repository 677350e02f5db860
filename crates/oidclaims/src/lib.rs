//! Extensible OpenID Connect identity claims.
//!
//! A [`ClaimSet`] holds the standard claims of
//! [OpenID Connect Core 1.0 Section 5.1](https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims)
//! in typed slots, next to any number of caller-defined extension claims, and
//! round-trips the whole set through one flat JSON object without losing
//! either kind. It is the payload layer of an ID token; signing, verification
//! and claim validation policy live elsewhere and treat the set as an opaque
//! JSON object.
//!
//! ```text
//! JSON ── ClaimSet::decode ──▶ ClaimSet ── accessors::* ──▶ typed values
//!                                 │
//!                                 └── ClaimSet::encode ──▶ JSON
//! ```
//!
//! Three claims have their own codecs: `birthdate` ([`BirthdateClaim`]),
//! `updated_at` ([`timestamp`]) and `address` ([`AddressClaim`]).

mod config;
mod error;
mod limits;

pub(crate) mod claims;
pub(crate) mod utils;

pub mod accessors;

// Public Interface
pub use claims::timestamp;
pub use claims::{AddressClaim, BirthdateClaim, ClaimKind, ClaimName, ClaimSet};
pub use config::DecodeConfig;
pub use error::{Error, ErrorKind, Result};
