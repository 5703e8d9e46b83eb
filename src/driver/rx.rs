//! DisplayPort RX instance
//!
//! [`DpRx`] is the live record of one receiver core. It is created
//! uninitialized, bound to a hardware descriptor with
//! [`cfg_initialize`](DpRx::cfg_initialize), and then serves the delay and
//! PHY polling primitives the link bring-up code is built on.

use crate::constants::{PHY_READY_POLL_INTERVAL_US, PHY_READY_RETRIES};
use crate::driver::config::{DpConfig, LaneCount, State};
use crate::error::{ConfigError, ConfigResult, IoError, Result};
use crate::hal::delay::{PlatformSleep, TimerHandler};
use crate::register::RegisterBus;
use crate::register::rx::{PHY_STATUS, PhyStatus, phy_status};

/// DisplayPort RX driver instance
///
/// # Type Parameters
///
/// * `'a` - Lifetime of an installed user timer handler
/// * `R` - Register bus (`Mmio` on hardware)
/// * `S` - Platform sleep used when no user handler is installed
///
/// # Example
///
/// ```ignore
/// use ph_dprx::{DefaultSleep, DpRx, Mmio, lookup_config, phy_status};
///
/// let config = lookup_config(&CONFIG_TABLE, DEVICE_ID).unwrap();
/// // SAFETY: the RX core is mapped at `config.base_addr`
/// let mut rx = DpRx::new(unsafe { Mmio::new() }, DefaultSleep::new(delay));
///
/// rx.cfg_initialize(config, config.base_addr)?;
/// rx.wait_phy_ready(phy_status::ALL_LANES_READY)?;
/// ```
pub struct DpRx<'a, R: RegisterBus, S: PlatformSleep> {
    state: State,
    config: DpConfig,
    regs: R,
    sleep: S,
    user_timer: Option<&'a mut (dyn TimerHandler + Send)>,
}

impl<'a, R: RegisterBus, S: PlatformSleep> DpRx<'a, R, S> {
    /// Create an uninitialized instance
    ///
    /// Bind it with [`cfg_initialize`](Self::cfg_initialize) before any other
    /// operation.
    pub const fn new(regs: R, sleep: S) -> Self {
        Self {
            state: State::Uninitialized,
            config: DpConfig::new(),
            regs,
            sleep,
            user_timer: None,
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Bind the instance to a hardware descriptor and mark it ready
    ///
    /// Every field is copied from `config` except the base address, which is
    /// taken from `effective_addr`. Pass the virtual address when address
    /// translation is in use, the physical one otherwise. Changing the
    /// mapping after this call is undefined.
    ///
    /// Re-binding an already ready instance is allowed. A zero address is
    /// rejected and leaves the instance uninitialized.
    pub fn cfg_initialize(&mut self, config: &DpConfig, effective_addr: usize) -> ConfigResult<()> {
        self.state = State::Uninitialized;

        if effective_addr == 0 {
            return Err(ConfigError::InvalidBaseAddress);
        }

        self.config = DpConfig {
            base_addr: effective_addr,
            ..*config
        };
        self.state = State::Ready;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "DP RX {} bound at {:#010x}",
            self.config.device_id,
            self.config.base_addr
        );

        Ok(())
    }

    /// Install a custom delay handler
    ///
    /// The handler replaces the platform sleep for every later wait. It can
    /// be replaced by installing another one, but not removed.
    ///
    /// The handler must be `Send` so the instance can be moved into a
    /// shared slot reached from interrupt context.
    pub fn set_user_timer_handler(&mut self, handler: &'a mut (dyn TimerHandler + Send)) {
        self.user_timer = Some(handler);
    }

    // =========================================================================
    // Delay
    // =========================================================================

    /// Wait at least `micros` microseconds
    ///
    /// Uses the user handler if installed, otherwise the platform sleep.
    /// A zero duration returns immediately without touching either.
    ///
    /// Must only be called on a ready instance (checked in debug builds).
    pub fn wait_us(&mut self, micros: u32) {
        debug_assert!(self.is_ready(), "wait_us called before cfg_initialize");

        if micros == 0 {
            return;
        }

        match self.user_timer.as_mut() {
            Some(handler) => handler.wait_us(&self.config, micros),
            None => self.sleep.sleep_us(micros),
        }
    }

    // =========================================================================
    // PHY
    // =========================================================================

    /// Wait until every bit of `mask` is set in the PHY status register
    ///
    /// The status is read up to [`PHY_READY_RETRIES`] times with
    /// [`PHY_READY_POLL_INTERVAL_US`] between reads, so the call gives up
    /// after roughly 2 ms.
    ///
    /// # Errors
    ///
    /// - `IoError::Timeout` if the PHY did not become ready in time
    /// - `ConfigError::NotReady` if the instance is not initialized
    pub fn wait_phy_ready(&mut self, mask: u32) -> Result<()> {
        self.ensure_ready()?;

        let mut attempts = 0;
        #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
        let last_status = loop {
            let status = self.read_reg(PHY_STATUS);
            if status & mask == mask {
                #[cfg(feature = "defmt")]
                defmt::debug!("DP RX PHY ready (mask {:#04x})", mask);
                return Ok(());
            }
            self.wait_us(PHY_READY_POLL_INTERVAL_US);

            attempts += 1;
            if attempts == PHY_READY_RETRIES {
                break status;
            }
        };

        // Logs the status from the final poll; the register is not read again.
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "DP RX PHY not ready (mask {:#04x}, status {:#010x})",
            mask,
            last_status
        );

        Err(IoError::Timeout.into())
    }

    /// Wait for the PHY lanes needed by a link of `lanes` lanes
    pub fn wait_phy_ready_for_lanes(&mut self, lanes: LaneCount) -> Result<()> {
        let mask = match lanes {
            LaneCount::One | LaneCount::Two => phy_status::LANES_0_1_READY,
            LaneCount::Four => phy_status::ALL_LANES_READY,
        };
        self.wait_phy_ready(mask)
    }

    /// Read the PHY status register once
    pub fn phy_status(&mut self) -> Result<PhyStatus> {
        self.ensure_ready()?;
        Ok(PhyStatus(self.read_reg(PHY_STATUS)))
    }

    // =========================================================================
    // Raw Register Access
    // =========================================================================

    /// Read a core register at `offset` from the base address
    ///
    /// The instance must be ready; the base address is meaningless before.
    /// The address wraps around the top of the address space instead of
    /// overflowing.
    pub fn read_reg(&mut self, offset: usize) -> u32 {
        debug_assert!(self.is_ready(), "register access before cfg_initialize");
        self.regs.read(self.config.base_addr.wrapping_add(offset))
    }

    /// Write a core register at `offset` from the base address
    pub fn write_reg(&mut self, offset: usize, value: u32) {
        debug_assert!(self.is_ready(), "register access before cfg_initialize");
        self.regs.write(self.config.base_addr.wrapping_add(offset), value);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current readiness state
    pub fn state(&self) -> State {
        self.state
    }

    /// True once [`cfg_initialize`](Self::cfg_initialize) has succeeded
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Bound configuration
    pub fn config(&self) -> &DpConfig {
        &self.config
    }

    /// Effective base address
    pub fn base_addr(&self) -> usize {
        self.config.base_addr
    }

    /// True if a user timer handler is installed
    pub fn has_user_timer(&self) -> bool {
        self.user_timer.is_some()
    }

    /// Access the register bus
    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Release the register bus and platform sleep
    pub fn release(self) -> (R, S) {
        (self.regs, self.sleep)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(ConfigError::NotReady.into())
        }
    }
}

impl<R: RegisterBus, S: PlatformSleep> core::fmt::Debug for DpRx<'_, R, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DpRx")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("user_timer", &self.user_timer.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
