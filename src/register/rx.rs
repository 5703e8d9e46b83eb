//! DisplayPort RX core register map
//!
//! Only the PHY block registers are described here. Link, AUX and
//! stream registers belong to the higher-level link-training code.

// =============================================================================
// Register Offsets (from the core base address)
// =============================================================================

/// PHY configuration register (resets, power control)
pub const PHY_CONFIG: usize = 0x200;

/// PHY status register (reset done, PLL locks), read-only
pub const PHY_STATUS: usize = 0x208;

/// PHY power-down register
pub const PHY_POWER_DOWN: usize = 0x210;

/// Bits of the [`PHY_STATUS`] register
pub mod phy_status {
    /// Reset sequence done, lanes 0 and 1
    pub const RESET_LANE_0_1_DONE: u32 = 0x03;
    /// Reset sequence done, lanes 2 and 3
    pub const RESET_LANE_2_3_DONE: u32 = 0x0C;
    /// Transceiver PLL locked, lanes 0 and 1
    pub const PLL_LANE_0_1_LOCK: u32 = 1 << 4;
    /// Transceiver PLL locked, lanes 2 and 3
    pub const PLL_LANE_2_3_LOCK: u32 = 1 << 5;
    /// Fabric PLL locked
    pub const FPGA_PLL_LOCK: u32 = 1 << 6;
    /// Recovered RX clock locked
    pub const RX_CLK_LOCK: u32 = 1 << 7;

    /// PHY ready for a one- or two-lane link
    pub const LANES_0_1_READY: u32 = RESET_LANE_0_1_DONE | PLL_LANE_0_1_LOCK;
    /// PHY ready on all four lanes
    pub const ALL_LANES_READY: u32 =
        RESET_LANE_0_1_DONE | RESET_LANE_2_3_DONE | PLL_LANE_0_1_LOCK | PLL_LANE_2_3_LOCK;
}

// =============================================================================
// PHY Status Snapshot
// =============================================================================

/// Snapshot of the [`PHY_STATUS`] register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyStatus(pub u32);

impl PhyStatus {
    /// Raw register value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `mask` is set
    pub const fn contains(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    /// Reset done on lanes 0 and 1
    pub const fn lanes_0_1_reset_done(self) -> bool {
        self.contains(phy_status::RESET_LANE_0_1_DONE)
    }

    /// Reset done on lanes 2 and 3
    pub const fn lanes_2_3_reset_done(self) -> bool {
        self.contains(phy_status::RESET_LANE_2_3_DONE)
    }

    /// PLL locked for lanes 0 and 1
    pub const fn pll_lanes_0_1_locked(self) -> bool {
        self.contains(phy_status::PLL_LANE_0_1_LOCK)
    }

    /// PLL locked for lanes 2 and 3
    pub const fn pll_lanes_2_3_locked(self) -> bool {
        self.contains(phy_status::PLL_LANE_2_3_LOCK)
    }

    /// Fabric PLL locked
    pub const fn fpga_pll_locked(self) -> bool {
        self.contains(phy_status::FPGA_PLL_LOCK)
    }

    /// RX clock locked
    pub const fn rx_clk_locked(self) -> bool {
        self.contains(phy_status::RX_CLK_LOCK)
    }
}
