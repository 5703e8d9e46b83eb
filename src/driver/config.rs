//! Configuration types for the DisplayPort RX driver
//!
//! [`DpConfig`] is the static hardware descriptor of one core instance as
//! generated alongside the FPGA design: identity, base address, clock and the
//! capability limits the core was synthesized with.

/// Main link rate per lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LinkRate {
    /// 1.62 Gbps (RBR)
    Rbr = 0x06,
    /// 2.70 Gbps (HBR)
    Hbr = 0x0A,
    /// 5.40 Gbps (HBR2)
    #[default]
    Hbr2 = 0x14,
}

impl LinkRate {
    /// Decode a DPCD-style link rate code
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x06 => Some(Self::Rbr),
            0x0A => Some(Self::Hbr),
            0x14 => Some(Self::Hbr2),
            _ => None,
        }
    }

    /// DPCD-style link rate code
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Per-lane bit rate in Mbps
    pub const fn mbps(self) -> u32 {
        match self {
            Self::Rbr => 1_620,
            Self::Hbr => 2_700,
            Self::Hbr2 => 5_400,
        }
    }
}

/// Number of main link lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LaneCount {
    /// Single lane
    One = 1,
    /// Two lanes
    Two = 2,
    /// Four lanes
    #[default]
    Four = 4,
}

impl LaneCount {
    /// Decode a lane count
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Lane count as a number
    pub const fn to_raw(self) -> u8 {
        self as u8
    }
}

/// DisplayPort protocol version the core was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DpProtocol {
    /// DisplayPort 1.1a
    V1_1a = 0,
    /// DisplayPort 1.2
    #[default]
    V1_2 = 1,
}

impl DpProtocol {
    /// Decode the protocol flag
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::V1_1a),
            1 => Some(Self::V1_2),
            _ => None,
        }
    }

    /// Protocol flag value
    pub const fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Instance readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not yet bound to a descriptor
    #[default]
    Uninitialized,
    /// Bound to a descriptor; all operations permitted
    Ready,
}

/// Hardware descriptor of one DisplayPort core instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DpConfig {
    /// Unique device identifier
    pub device_id: u16,
    /// Register base address
    pub base_addr: usize,
    /// AXI4-Lite clock frequency in Hz
    pub s_axi_clk_hz: u32,
    /// Maximum supported lane count
    pub max_lane_count: LaneCount,
    /// Maximum supported link rate
    pub max_link_rate: LinkRate,
    /// Maximum bits per color component
    pub max_bits_per_color: u8,
    /// Quad pixel mode supported
    pub quad_pixel_en: bool,
    /// Dual pixel mode supported
    pub dual_pixel_en: bool,
    /// YCrCb color formats supported
    pub ycrcb_en: bool,
    /// Y-only color format supported
    pub y_only_en: bool,
    /// Payload data width in bits
    pub payload_data_width: u8,
    /// Secondary channel (audio) supported
    pub secondary_ch_en: bool,
    /// Number of audio channels
    pub num_audio_chs: u8,
    /// Multi-stream transport supported
    pub mst_support: bool,
    /// Number of MST streams
    pub num_mst_streams: u8,
    /// Protocol version
    pub dp_protocol: DpProtocol,
    /// Core is a receiver (`false` for a transmitter)
    pub is_rx: bool,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DpConfig {
    /// Create a descriptor for a single-stream four-lane HBR2 receiver
    ///
    /// The base address is zero and must be set with [`with_base_addr`]
    /// or supplied at initialization.
    ///
    /// [`with_base_addr`]: Self::with_base_addr
    #[must_use]
    pub const fn new() -> Self {
        Self {
            device_id: 0,
            base_addr: 0,
            s_axi_clk_hz: 100_000_000,
            max_lane_count: LaneCount::Four,
            max_link_rate: LinkRate::Hbr2,
            max_bits_per_color: 8,
            quad_pixel_en: false,
            dual_pixel_en: false,
            ycrcb_en: false,
            y_only_en: false,
            payload_data_width: 32,
            secondary_ch_en: false,
            num_audio_chs: 0,
            mst_support: false,
            num_mst_streams: 1,
            dp_protocol: DpProtocol::V1_2,
            is_rx: true,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the device identifier
    #[must_use]
    pub const fn with_device_id(mut self, device_id: u16) -> Self {
        self.device_id = device_id;
        self
    }

    /// Set the register base address
    #[must_use]
    pub const fn with_base_addr(mut self, base_addr: usize) -> Self {
        self.base_addr = base_addr;
        self
    }

    /// Set the AXI4-Lite clock frequency
    #[must_use]
    pub const fn with_s_axi_clk_hz(mut self, hz: u32) -> Self {
        self.s_axi_clk_hz = hz;
        self
    }

    /// Set the lane and link rate limits
    #[must_use]
    pub const fn with_link_limits(mut self, lanes: LaneCount, rate: LinkRate) -> Self {
        self.max_lane_count = lanes;
        self.max_link_rate = rate;
        self
    }

    /// Set the maximum bits per color component
    #[must_use]
    pub const fn with_max_bits_per_color(mut self, bpc: u8) -> Self {
        self.max_bits_per_color = bpc;
        self
    }

    /// Set the pixel mode capabilities
    #[must_use]
    pub const fn with_pixel_modes(mut self, dual: bool, quad: bool) -> Self {
        self.dual_pixel_en = dual;
        self.quad_pixel_en = quad;
        self
    }

    /// Set the color format capabilities
    #[must_use]
    pub const fn with_color_formats(mut self, ycrcb: bool, y_only: bool) -> Self {
        self.ycrcb_en = ycrcb;
        self.y_only_en = y_only;
        self
    }

    /// Set the payload data width
    #[must_use]
    pub const fn with_payload_data_width(mut self, width: u8) -> Self {
        self.payload_data_width = width;
        self
    }

    /// Enable the secondary channel with the given number of audio channels
    ///
    /// Zero channels disables the secondary channel.
    #[must_use]
    pub const fn with_audio_channels(mut self, channels: u8) -> Self {
        self.secondary_ch_en = channels != 0;
        self.num_audio_chs = channels;
        self
    }

    /// Set MST support and stream count
    ///
    /// Fewer than two streams leaves MST disabled with a single stream.
    #[must_use]
    pub const fn with_mst_streams(mut self, streams: u8) -> Self {
        if streams > 1 {
            self.mst_support = true;
            self.num_mst_streams = streams;
        } else {
            self.mst_support = false;
            self.num_mst_streams = 1;
        }
        self
    }

    /// Set the protocol version
    #[must_use]
    pub const fn with_protocol(mut self, protocol: DpProtocol) -> Self {
        self.dp_protocol = protocol;
        self
    }

    /// Set the core direction
    #[must_use]
    pub const fn with_is_rx(mut self, is_rx: bool) -> Self {
        self.is_rx = is_rx;
        self
    }
}

/// Find the descriptor for `device_id` in a descriptor table
pub fn lookup_config(table: &[DpConfig], device_id: u16) -> Option<&DpConfig> {
    table.iter().find(|config| config.device_id == device_id)
}
