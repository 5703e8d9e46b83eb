//! DisplayPort RX Driver
//!
//! A `no_std`, `no_alloc` board-support driver for a DisplayPort receiver
//! core on a programmable SoC.
//!
//! This crate covers the leaf services the link bring-up code is built on:
//!
//! 1. **Instance binding** ([`DpRx::cfg_initialize`]): copy a static hardware
//!    descriptor ([`DpConfig`]) into a live instance at its effective address
//! 2. **Delay** ([`DpRx::wait_us`]): microsecond waits through a user
//!    [`TimerHandler`] or a build-time selected [`PlatformSleep`]
//! 3. **PHY ready polling** ([`DpRx::wait_phy_ready`]): bounded-retry wait for
//!    the PHY status register to report the requested bits
//!
//! Link training, AUX transactions, interrupts and multi-stream transport are
//! out of scope.
//!
//! # Features
//!
//! - `coarse-sleep`: The platform delay only has millisecond resolution;
//!   waits are rounded up to whole milliseconds
//! - `defmt`: Enable defmt formatting and log output
//! - `critical-section`: Enable the ISR-safe `SharedDpRx` wrapper
//!
//! # Example
//!
//! ```ignore
//! use ph_dprx::{DefaultSleep, DpConfig, DpRx, Mmio, lookup_config, phy_status};
//! use embedded_hal::delay::DelayNs;
//!
//! static CONFIG_TABLE: [DpConfig; 1] = [DpConfig::new()
//!     .with_device_id(0)
//!     .with_base_addr(0x44C0_0000)];
//!
//! let delay = /* your DelayNs implementation */;
//! let config = lookup_config(&CONFIG_TABLE, 0).unwrap();
//!
//! // SAFETY: the RX core is mapped at its descriptor address
//! let mut rx = DpRx::new(unsafe { Mmio::new() }, DefaultSleep::new(delay));
//! rx.cfg_initialize(config, config.base_addr)?;
//!
//! // Optional: sub-millisecond waits from a hardware timer
//! let mut handler = |_: &DpConfig, us: u32| timer.delay_us(us);
//! rx.set_user_timer_handler(&mut handler);
//!
//! rx.wait_phy_ready(phy_status::ALL_LANES_READY)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod constants;
pub mod driver;
pub mod error;
pub mod hal;
pub mod register;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{DpConfig, DpProtocol, LaneCount, LinkRate, State, lookup_config};
pub use driver::rx::DpRx;
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use hal::delay::{
    DefaultSleep, MicrosecondSleep, MillisecondSleep, PlatformSleep, TimerHandler,
};
pub use register::rx::{PhyStatus, phy_status};
pub use register::{Mmio, RegisterBus};

#[cfg(feature = "critical-section")]
pub use sync::SharedDpRx;
