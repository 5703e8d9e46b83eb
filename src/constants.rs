//! Centralized Constants
//!
//! Timing values and conversion factors used by the RX driver.
//!
//! # Note
//!
//! Register offsets and bit definitions live in [`crate::register::rx`]
//! next to the register map they describe.

// =============================================================================
// PHY Ready Polling
// =============================================================================

/// Maximum number of PHY status reads before giving up
pub const PHY_READY_RETRIES: u32 = 100;

/// Wait between PHY status reads in microseconds
pub const PHY_READY_POLL_INTERVAL_US: u32 = 20;

/// Upper bound on the total time spent waiting for the PHY, in microseconds
pub const PHY_READY_TIMEOUT_US: u32 = PHY_READY_RETRIES * PHY_READY_POLL_INTERVAL_US;

// =============================================================================
// Time Conversion
// =============================================================================

/// Microseconds per millisecond
pub const US_PER_MS: u32 = 1_000;
