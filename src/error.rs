//! Error types for the DisplayPort RX driver
//!
//! Errors are organized by domain:
//! - [`ConfigError`]: Caller-contract violations caught at runtime
//!   (bad descriptor binding, use before initialization)
//! - [`IoError`]: Hardware conditions observed while talking to the core
//!
//! The unified [`Error`] enum wraps both and is returned by the fallible
//! instance methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These indicate a programming error in the caller, never a hardware
/// condition. Correct bring-up code does not see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Effective base address was zero
    InvalidBaseAddress,
    /// Instance has not been bound to a descriptor yet
    NotReady,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidBaseAddress => "invalid base address",
            ConfigError::NotReady => "instance not initialized",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Hardware errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Polling retry count exceeded before the hardware became ready
    Timeout,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "retry count exceeded",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match rx.wait_phy_ready(phy_status::ALL_LANES_READY) {
///     Ok(()) => { /* continue bring-up */ }
///     Err(Error::Io(IoError::Timeout)) => { /* retry at a lower rate */ }
///     Err(Error::Config(e)) => panic!("driver misuse: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_as_str_non_empty() {
        for variant in [ConfigError::InvalidBaseAddress, ConfigError::NotReady] {
            assert!(!variant.as_str().is_empty(), "ConfigError::{variant:?} has empty string");
        }
    }

    #[test]
    fn config_error_display() {
        let display = format!("{}", ConfigError::InvalidBaseAddress);
        assert_eq!(display, "invalid base address");
    }

    #[test]
    fn io_error_display() {
        let display = format!("{}", IoError::Timeout);
        assert_eq!(display, "retry count exceeded");
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::NotReady.into();
        assert_eq!(err, Error::Config(ConfigError::NotReady));
    }

    #[test]
    fn error_from_io_error() {
        let err: Error = IoError::Timeout.into();
        assert_eq!(err, Error::Io(IoError::Timeout));
    }

    #[test]
    fn error_display_carries_domain() {
        let display = format!("{}", Error::Io(IoError::Timeout));
        assert!(display.starts_with("io:"));
        assert!(display.contains("retry"));

        let display = format!("{}", Error::Config(ConfigError::NotReady));
        assert!(display.starts_with("config:"));
        assert!(display.contains("not initialized"));
    }

    #[test]
    fn question_mark_converts_domain_errors() {
        fn bind() -> ConfigResult<()> {
            Err(ConfigError::InvalidBaseAddress)
        }

        fn bring_up() -> Result<u8> {
            bind()?;
            Ok(1)
        }

        assert_eq!(bring_up(), Err(Error::Config(ConfigError::InvalidBaseAddress)));
    }
}
