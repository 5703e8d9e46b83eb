//! Hardware Abstraction Layer
//!
//! Platform services the driver depends on but does not own.
//!
//! # Modules
//!
//! - [`delay`]: Microsecond waits via a user handler or a platform sleep
//!
//! # Delay Integration
//!
//! Platform sleeps wrap `embedded_hal::delay::DelayNs`. Pass any delay
//! implementation from your HAL.

pub mod delay;

// Re-export commonly used types
pub use delay::{DefaultSleep, MicrosecondSleep, MillisecondSleep, PlatformSleep, TimerHandler};
