//! Errors for oidclaims

use crate::claims::ClaimKind;
use thiserror::Error;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed JSON, or a known claim holding an incompatible JSON type
    Decode,
    /// A known claim holding well-typed JSON its codec cannot accept
    Format,
    /// A value that cannot be serialized to JSON, or not within the size limit
    Encode,
}

/// oidclaims Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Payload too large: {size} bytes (maximum: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("JSON parsing failed: {0}")]
    DecodeInvalidJson(String),

    #[error("Claims payload must be a JSON object, found {found}")]
    DecodeNotAnObject { found: &'static str },

    #[error("Claim '{field}' has the wrong type: expected {expected}, found {found}")]
    DecodeTypeMismatch {
        field: String,
        expected: ClaimKind,
        found: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Claim '{field}' is malformed: {reason}")]
    FormatInvalid { field: String, reason: String },

    // ============================================================================
    // Encode Errors
    // ============================================================================
    #[error("JSON serialization failed: {0}")]
    EncodeFailed(String),

    #[error("Encoded payload too large: {size} bytes (maximum: {max} bytes)")]
    EncodeTooLarge { size: usize, max: usize },
}

impl Error {
    /// Which of the three error families this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PayloadTooLarge { .. }
            | Error::DecodeInvalidJson(_)
            | Error::DecodeNotAnObject { .. }
            | Error::DecodeTypeMismatch { .. }
            | Error::ConfigurationInvalid(_) => ErrorKind::Decode,
            Error::FormatInvalid { .. } => ErrorKind::Format,
            Error::EncodeFailed(_) | Error::EncodeTooLarge { .. } => ErrorKind::Encode,
        }
    }

    /// Name of the offending claim, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::DecodeTypeMismatch { field, .. } | Error::FormatInvalid { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }

    pub(crate) fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::FormatInvalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(
        field: impl Into<String>,
        expected: ClaimKind,
        found: &serde_json::Value,
    ) -> Self {
        Error::DecodeTypeMismatch {
            field: field.into(),
            expected,
            found: crate::utils::json::type_name(found),
        }
    }
}

/// Result type alias for oidclaims operations
pub type Result<T> = std::result::Result<T, Error>;
