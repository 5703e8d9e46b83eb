//! Delay HAL
//!
//! Waits issued by the driver go through two layers:
//!
//! 1. An optional user [`TimerHandler`] installed on the instance. It gets
//!    first refusal and is fully responsible for the wait, typically using a
//!    hardware timer for sub-millisecond accuracy.
//! 2. A [`PlatformSleep`] strategy owned by the instance, wrapping any
//!    `embedded_hal::delay::DelayNs` provider:
//!    - [`MicrosecondSleep`] drives the provider in microseconds.
//!    - [`MillisecondSleep`] is for platforms whose sleep only has millisecond
//!      resolution. Requests are rounded up, so waits can run up to 999 us
//!      long but never short.
//!
//! [`DefaultSleep`] picks one of the two at build time (`coarse-sleep`
//! feature).

use embedded_hal::delay::DelayNs;

use crate::constants::US_PER_MS;
use crate::driver::config::DpConfig;

// =============================================================================
// User Timer Handler
// =============================================================================

/// User-supplied delay handler
///
/// The handler object carries its own context. Any
/// `FnMut(&DpConfig, u32)` closure is a handler. Installed handlers must
/// also be `Send`:
///
/// ```ignore
/// let mut timer = /* hardware timer */;
/// let mut handler = |_: &DpConfig, us: u32| timer.delay_us(us);
/// rx.set_user_timer_handler(&mut handler);
/// ```
pub trait TimerHandler {
    /// Wait at least `micros` microseconds
    ///
    /// `config` is the configuration of the instance issuing the wait.
    fn wait_us(&mut self, config: &DpConfig, micros: u32);
}

impl<F> TimerHandler for F
where
    F: FnMut(&DpConfig, u32),
{
    #[inline]
    fn wait_us(&mut self, config: &DpConfig, micros: u32) {
        self(config, micros);
    }
}

// =============================================================================
// Platform Sleep Strategies
// =============================================================================

/// Platform sleep primitive used when no user handler is installed
pub trait PlatformSleep {
    /// Block for at least `micros` microseconds
    fn sleep_us(&mut self, micros: u32);
}

/// Native microsecond sleep, passed through without rounding
#[derive(Debug)]
pub struct MicrosecondSleep<D: DelayNs> {
    delay: D,
}

impl<D: DelayNs> MicrosecondSleep<D> {
    /// Wrap a delay provider
    pub const fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Release the delay provider
    pub fn free(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> PlatformSleep for MicrosecondSleep<D> {
    #[inline]
    fn sleep_us(&mut self, micros: u32) {
        self.delay.delay_us(micros);
    }
}

/// Millisecond-resolution sleep with round-up
#[derive(Debug)]
pub struct MillisecondSleep<D: DelayNs> {
    delay: D,
}

impl<D: DelayNs> MillisecondSleep<D> {
    /// Wrap a delay provider
    pub const fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Release the delay provider
    pub fn free(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> PlatformSleep for MillisecondSleep<D> {
    #[inline]
    fn sleep_us(&mut self, micros: u32) {
        self.delay.delay_ms(us_to_ms_ceil(micros));
    }
}

/// Convert microseconds to milliseconds, rounding up
///
/// Never under-waits: 1 us becomes 1 ms, 1001 us becomes 2 ms.
pub const fn us_to_ms_ceil(micros: u32) -> u32 {
    micros.div_ceil(US_PER_MS)
}

/// Platform sleep selected at build time
#[cfg(not(feature = "coarse-sleep"))]
pub type DefaultSleep<D> = MicrosecondSleep<D>;

/// Platform sleep selected at build time
#[cfg(feature = "coarse-sleep")]
pub type DefaultSleep<D> = MillisecondSleep<D>;
