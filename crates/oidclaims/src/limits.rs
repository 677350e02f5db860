//! Size limit constants for input validation

/// Default maximum size for an encoded claims payload (64KB)
/// Matches the bound applied to decoded JWT payloads
pub(crate) const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024;

/// Hard ceiling for a configured payload size (1MB)
/// Prevents configuration from effectively disabling the size check
pub(crate) const MAX_MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

// ============================================================================
// Calendar bounds
// ============================================================================

/// Smallest year representable in the fixed-width `YYYY-MM-DD` form
pub(crate) const MIN_BIRTH_YEAR: i32 = 0;

/// Largest year representable in the fixed-width `YYYY-MM-DD` form
pub(crate) const MAX_BIRTH_YEAR: i32 = 9999;
