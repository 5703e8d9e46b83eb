//! Testing utilities and mock implementations
//!
//! Mocks for exercising the RX driver on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

use crate::register::RegisterBus;

// =============================================================================
// Mock Register Bus
// =============================================================================

/// Mock register bus for testing without hardware
///
/// Registers read back their last written or set value (0 if never set).
/// A register can also be given a script: each read pops the next scripted
/// value, and once the script runs out reads fall back to the stored value.
///
/// # Example
///
/// ```ignore
/// let mut regs = MockRegisters::new();
/// regs.script_reads(BASE + PHY_STATUS, &[0x00, 0x00, 0x3F]);
/// ```
#[derive(Debug, Default)]
pub struct MockRegisters {
    registers: HashMap<usize, u32>,
    scripts: HashMap<usize, VecDeque<u32>>,
    read_log: Vec<usize>,
    write_log: Vec<(usize, u32)>,
}

impl MockRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored value of a register
    pub fn set_register(&mut self, addr: usize, value: u32) {
        self.registers.insert(addr, value);
    }

    /// Queue values returned by successive reads of `addr`
    pub fn script_reads(&mut self, addr: usize, values: &[u32]) {
        self.scripts
            .entry(addr)
            .or_default()
            .extend(values.iter().copied());
    }

    /// Number of reads issued to `addr`
    pub fn read_count(&self, addr: usize) -> usize {
        self.read_log.iter().filter(|&&a| a == addr).count()
    }

    /// Total number of reads issued
    pub fn total_reads(&self) -> usize {
        self.read_log.len()
    }

    /// All writes in issue order
    pub fn writes(&self) -> &[(usize, u32)] {
        &self.write_log
    }
}

impl RegisterBus for MockRegisters {
    fn read(&mut self, addr: usize) -> u32 {
        self.read_log.push(addr);
        if let Some(value) = self.scripts.get_mut(&addr).and_then(VecDeque::pop_front) {
            return value;
        }
        self.registers.get(&addr).copied().unwrap_or(0)
    }

    fn write(&mut self, addr: usize, value: u32) {
        self.write_log.push((addr, value));
        self.registers.insert(addr, value);
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// One call made on a [`MockDelay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayCall {
    Ns(u32),
    Us(u32),
    Ms(u32),
}

/// Mock delay for testing without actual timing
///
/// Records every call at the granularity it was issued, without waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    calls: Vec<DelayCall>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far
    pub fn calls(&self) -> Vec<DelayCall> {
        self.calls.clone()
    }

    /// Total requested time in microseconds (nanosecond calls rounded down)
    pub fn total_us(&self) -> u64 {
        self.calls
            .iter()
            .map(|call| match *call {
                DelayCall::Ns(ns) => u64::from(ns) / 1_000,
                DelayCall::Us(us) => u64::from(us),
                DelayCall::Ms(ms) => u64::from(ms) * 1_000,
            })
            .sum()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.push(DelayCall::Ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.calls.push(DelayCall::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(DelayCall::Ms(ms));
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use embedded_hal::delay::DelayNs;

    use super::*;

    #[test]
    fn mock_registers_read_write() {
        let mut regs = MockRegisters::new();

        assert_eq!(regs.read(0x208), 0);

        regs.set_register(0x208, 0x13);
        assert_eq!(regs.read(0x208), 0x13);

        regs.write(0x200, 0x1);
        assert_eq!(regs.read(0x200), 0x1);
        assert_eq!(regs.writes(), &[(0x200, 0x1)]);
        assert_eq!(regs.read_count(0x208), 2);
        assert_eq!(regs.total_reads(), 3);
    }

    #[test]
    fn mock_registers_script_then_fallback() {
        let mut regs = MockRegisters::new();
        regs.set_register(0x208, 0xFF);
        regs.script_reads(0x208, &[0x00, 0x01]);

        assert_eq!(regs.read(0x208), 0x00);
        assert_eq!(regs.read(0x208), 0x01);
        assert_eq!(regs.read(0x208), 0xFF);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(2_500);
        delay.delay_us(20);
        delay.delay_ms(1);

        assert_eq!(
            delay.calls(),
            vec![DelayCall::Ns(2_500), DelayCall::Us(20), DelayCall::Ms(1)]
        );
        assert_eq!(delay.total_us(), 2 + 20 + 1_000);
    }
}
