//! Core driver components for the DisplayPort RX core.
//!
//! - [`config`] - Hardware descriptor and capability types
//! - [`rx`] - The RX instance: initialization, delay and PHY polling
//!
//! # Example
//!
//! ```ignore
//! use ph_dprx::driver::{DpConfig, LaneCount, LinkRate};
//!
//! let config = DpConfig::new()
//!     .with_device_id(0)
//!     .with_base_addr(0x44C0_0000)
//!     .with_link_limits(LaneCount::Four, LinkRate::Hbr2);
//! ```

pub mod config;
pub mod rx;

pub use config::{DpConfig, DpProtocol, LaneCount, LinkRate, State, lookup_config};
pub use rx::DpRx;
