//! Decoding configuration

use crate::error::{Error, Result};
use crate::limits::{DEFAULT_MAX_PAYLOAD_SIZE, MAX_MAX_PAYLOAD_SIZE};

/// Configuration for claims decoding
///
/// The same bound applies to [`ClaimSet::encode_with`](crate::ClaimSet::encode_with),
/// so a set is never encoded into bytes the matching decoder would refuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    max_payload_size: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }
}

impl DecodeConfig {
    /// Create a new decode config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted payload size in bytes
    ///
    /// # Security
    /// The size is limited to prevent effectively disabling the check.
    /// Maximum allowed value is 1,048,576 bytes (1MB).
    /// Values exceeding the limit will be rejected during decoding.
    pub fn max_payload_size(mut self, bytes: usize) -> Self {
        self.max_payload_size = bytes;
        self
    }

    /// Check the configuration bounds and a payload against them
    pub(crate) fn check_payload(&self, size: usize) -> Result<()> {
        self.check_bounds()?;

        if size > self.max_payload_size {
            tracing::debug!(size, max = self.max_payload_size, "rejecting oversized payload");
            return Err(Error::PayloadTooLarge {
                size,
                max: self.max_payload_size,
            });
        }

        Ok(())
    }

    /// Check the configuration bounds and an encoded payload against them
    pub(crate) fn check_encoded(&self, size: usize) -> Result<()> {
        self.check_bounds()?;

        if size > self.max_payload_size {
            tracing::debug!(size, max = self.max_payload_size, "refusing oversized encoding");
            return Err(Error::EncodeTooLarge {
                size,
                max: self.max_payload_size,
            });
        }

        Ok(())
    }

    fn check_bounds(&self) -> Result<()> {
        if self.max_payload_size > MAX_MAX_PAYLOAD_SIZE {
            return Err(Error::ConfigurationInvalid(format!(
                "max_payload_size {} exceeds {} bytes",
                self.max_payload_size, MAX_MAX_PAYLOAD_SIZE
            )));
        }
        Ok(())
    }
}
