//! ISR-safe RX instance wrapper using critical sections.
//!
//! [`SharedDpRx`] lets a [`DpRx`] live in a `static` and be reached from
//! both thread code and interrupt handlers. The instance itself has no
//! locking; this wrapper serializes access.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::rx::DpRx;
use crate::hal::delay::PlatformSleep;
use crate::register::RegisterBus;

/// ISR-safe RX instance slot
///
/// Starts empty; [`install`](Self::install) moves an instance in.
///
/// The slot is `Sync` only when the instance is `Send`, so the register bus
/// and the platform sleep must both be `Send`. A user timer handler is
/// always `Send`.
///
/// # Example
///
/// ```ignore
/// static DP_RX: SharedDpRx<Mmio, DefaultSleep<Delay>> = SharedDpRx::new();
///
/// DP_RX.install(rx);
/// DP_RX.with(|rx| rx.wait_phy_ready(phy_status::ALL_LANES_READY));
/// ```
pub struct SharedDpRx<R: RegisterBus, S: PlatformSleep> {
    inner: Mutex<RefCell<Option<DpRx<'static, R, S>>>>,
}

impl<R: RegisterBus, S: PlatformSleep> SharedDpRx<R, S> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Move an instance into the slot, returning the previous one
    pub fn install(&self, rx: DpRx<'static, R, S>) -> Option<DpRx<'static, R, S>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(rx))
    }

    /// Take the instance out of the slot
    pub fn take(&self) -> Option<DpRx<'static, R, S>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Execute a closure with exclusive access to the instance.
    ///
    /// Interrupts are disabled for the duration of the closure. Returns
    /// `None` if the slot is empty.
    #[inline]
    pub fn with<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut DpRx<'static, R, S>) -> T,
    {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Like [`with`](Self::with), but returns `None` instead of panicking if
    /// the instance is already borrowed (re-entrant call).
    #[inline]
    pub fn try_with<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut DpRx<'static, R, S>) -> T,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .and_then(|mut slot| slot.as_mut().map(f))
        })
    }
}

impl<R: RegisterBus, S: PlatformSleep> Default for SharedDpRx<R, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::driver::config::DpConfig;
    use crate::hal::delay::MicrosecondSleep;
    use crate::register::rx::{PHY_STATUS, phy_status};
    use crate::test_utils::{MockDelay, MockRegisters};

    type Shared = SharedDpRx<MockRegisters, MicrosecondSleep<MockDelay>>;

    const BASE: usize = 0x4000_0000;

    fn ready_rx() -> DpRx<'static, MockRegisters, MicrosecondSleep<MockDelay>> {
        let mut rx = DpRx::new(MockRegisters::new(), MicrosecondSleep::new(MockDelay::new()));
        rx.cfg_initialize(&DpConfig::new(), BASE).unwrap();
        rx
    }

    #[test]
    fn empty_slot_yields_none() {
        let shared = Shared::new();
        assert!(shared.with(|rx| rx.is_ready()).is_none());
        assert!(shared.take().is_none());
    }

    #[test]
    fn installed_instance_is_reachable() {
        let shared = Shared::new();
        assert!(shared.install(ready_rx()).is_none());

        shared.with(|rx| {
            rx.regs_mut()
                .set_register(BASE + PHY_STATUS, phy_status::ALL_LANES_READY);
        });
        let result = shared.with(|rx| rx.wait_phy_ready(phy_status::ALL_LANES_READY));

        assert_eq!(result, Some(Ok(())));
        assert!(shared.take().is_some());
        assert!(shared.take().is_none());
    }

    #[test]
    fn reentrant_try_with_returns_none() {
        let shared = Shared::new();
        shared.install(ready_rx());

        let nested = shared.with(|_| shared.try_with(|rx| rx.is_ready()));

        assert_eq!(nested, Some(None));
        assert_eq!(shared.try_with(|rx| rx.is_ready()), Some(true));
    }

    #[test]
    fn usable_as_static() {
        static SHARED: Shared = SharedDpRx::new();
        assert!(SHARED.with(|rx| rx.base_addr()).is_none());
    }

    #[test]
    fn slot_is_sync_for_send_instances() {
        fn assert_sync<T: Sync>() {}
        fn assert_send<T: Send>() {}

        assert_send::<DpRx<'static, MockRegisters, MicrosecondSleep<MockDelay>>>();
        assert_sync::<Shared>();
    }

    #[test]
    fn instance_can_be_polled_from_another_thread() {
        static SHARED: Shared = SharedDpRx::new();
        SHARED.install(ready_rx());
        SHARED.with(|rx| {
            rx.regs_mut()
                .script_reads(BASE + PHY_STATUS, &[0, phy_status::ALL_LANES_READY]);
        });

        let result = std::thread::spawn(|| {
            let mut rx = SHARED.take().unwrap();
            let result = rx.wait_phy_ready(phy_status::ALL_LANES_READY);
            (result, rx.regs_mut().read_count(BASE + PHY_STATUS))
        })
        .join()
        .unwrap();

        assert_eq!(result, (Ok(()), 2));
        assert!(SHARED.take().is_none());
    }
}
