//! Memory-mapped register access for the DisplayPort RX core
//!
//! The core sits behind an AXI4-Lite slave at a design-specific base address,
//! so nothing here hard-codes addresses. Register offsets live in [`rx`];
//! the base comes from the bound [`DpConfig`](crate::DpConfig).
//!
//! Hardware access goes through the [`RegisterBus`] trait so the driver can
//! run against real MMIO ([`Mmio`]) or a host-side mock in tests.

pub mod rx;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

// =============================================================================
// Register Bus Trait
// =============================================================================

/// Trait for 32-bit register access
///
/// Addresses are absolute: the driver adds the register offset to the
/// instance base address before calling the bus.
pub trait RegisterBus {
    /// Read a 32-bit register
    fn read(&mut self, addr: usize) -> u32;

    /// Write a 32-bit register
    fn write(&mut self, addr: usize, value: u32);
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    #[inline]
    fn read(&mut self, addr: usize) -> u32 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: usize, value: u32) {
        (**self).write(addr, value);
    }
}

// =============================================================================
// Volatile MMIO Bus
// =============================================================================

/// Register bus backed by volatile loads and stores
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create an MMIO bus
    ///
    /// # Safety
    ///
    /// Every address the driver derives from the bound base address must be
    /// a mapped, 4-byte aligned register of the RX core for as long as the
    /// bus is in use. Bind the instance with the effective (translated)
    /// address and do not change the mapping afterwards.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn read(&mut self, addr: usize) -> u32 {
        // SAFETY: validity of the address is guaranteed by the contract of `Mmio::new`
        unsafe { read_reg(addr) }
    }

    #[inline(always)]
    fn write(&mut self, addr: usize, value: u32) {
        // SAFETY: validity of the address is guaranteed by the contract of `Mmio::new`
        unsafe { write_reg(addr, value) }
    }
}
