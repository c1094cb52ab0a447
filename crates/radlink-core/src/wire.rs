//! Radlink wire format — on-wire identifiers and framing for the radar
//! command channel.
//!
//! These types ARE the protocol. Every configuration record travels inside a
//! sub-block envelope (16-bit id, 16-bit length, payload) packed into a
//! command message whose payload capacity is fixed per transaction. The ids,
//! envelope widths, and chunk geometries here must match the device firmware;
//! changing anything after a firmware freeze is a breaking change.
//!
//! All fixed-layout types are #[repr(C, packed)] for deterministic layout and
//! use zerocopy derives for safe, allocation-free serialization. There is no
//! unsafe code in this module.

use static_assertions::assert_eq_size;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

// ── Device selection ─────────────────────────────────────────────────────────

/// Bitmask selecting the target device(s) of a transaction. Bit N addresses
/// device N in a cascaded chain. Validity (which bits are populated) is known
/// only to the transport, which exposes a predicate for it.
pub type DeviceMap = u8;

/// Broadcast map addressing every device the transport knows about.
pub const DEVICE_MAP_ALL: DeviceMap = 0xFF;

// ── Message classes ──────────────────────────────────────────────────────────

/// Command message class — which subsystem a message addresses and in which
/// direction (set vs. get). Every transaction carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Opcode {
    /// RF static configuration writes (channels, power, calibration data).
    RfStaticSet = 0x01,
    /// RF static configuration reads.
    RfStaticGet = 0x02,
    /// RF dynamic configuration writes (profiles, chirps, frames).
    RfDynamicSet = 0x03,
    /// RF dynamic configuration reads.
    RfDynamicGet = 0x04,
    /// Frame/sub-frame trigger commands.
    RfFrameTrigger = 0x05,
    /// Advanced feature writes (BPM, test source, loopbacks).
    RfAdvancedSet = 0x06,
    /// Miscellaneous control writes.
    RfMiscSet = 0x07,
    /// Sensor status reads (temperature, DFE statistics, faults).
    RfStatusGet = 0x08,
    /// One-shot RF initialization / boot-time calibration.
    RfInit = 0x09,
    /// Companion data-path subsystem writes (frame-apply side channel).
    DataPathSet = 0x0A,
    /// Companion data-path subsystem reads.
    DataPathGet = 0x0B,
}

impl TryFrom<u16> for Opcode {
    type Error = WireError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::RfStaticSet),
            0x02 => Ok(Opcode::RfStaticGet),
            0x03 => Ok(Opcode::RfDynamicSet),
            0x04 => Ok(Opcode::RfDynamicGet),
            0x05 => Ok(Opcode::RfFrameTrigger),
            0x06 => Ok(Opcode::RfAdvancedSet),
            0x07 => Ok(Opcode::RfMiscSet),
            0x08 => Ok(Opcode::RfStatusGet),
            0x09 => Ok(Opcode::RfInit),
            0x0A => Ok(Opcode::DataPathSet),
            0x0B => Ok(Opcode::DataPathGet),
            other => Err(WireError::UnknownOpcode(other)),
        }
    }
}

impl From<Opcode> for u16 {
    fn from(op: Opcode) -> u16 {
        op as u16
    }
}

// ── Sub-block identifiers ─────────────────────────────────────────────────────

/// Identifier of one tagged payload within a message class.
///
/// The on-wire envelope id is the class-unique combination produced by
/// [`unique_sb_id`]; within the catalog, ids are class-relative and must stay
/// below [`MAX_SB_PER_MSG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubBlockId(pub u16);

/// Maximum number of sub-block ids per message class.
pub const MAX_SB_PER_MSG: u16 = 64;

/// Combine a message class and a class-relative sub-block id into the
/// globally unique 16-bit id stamped into the envelope.
pub fn unique_sb_id(opcode: Opcode, sb: SubBlockId) -> u16 {
    u16::from(opcode) * MAX_SB_PER_MSG + sb.0
}

/// Sub-block id catalog. Class-relative; see the record types in
/// [`crate::records`] for which class each travels in.
pub mod sb {
    use super::SubBlockId;

    pub const CHAN_CONF: SubBlockId = SubBlockId(0);
    pub const ADC_OUT_CONF: SubBlockId = SubBlockId(1);
    pub const LOW_POWER_CONF: SubBlockId = SubBlockId(2);
    pub const DEVICE_CONF: SubBlockId = SubBlockId(3);
    pub const RADAR_MISC_CTL: SubBlockId = SubBlockId(4);
    pub const LDO_BYPASS: SubBlockId = SubBlockId(5);
    pub const CAL_MON_FREQ_LIMIT: SubBlockId = SubBlockId(6);
    pub const INIT_CALIB_CONF: SubBlockId = SubBlockId(7);
    pub const CAL_DATA_RD_WR: SubBlockId = SubBlockId(8);
    pub const PH_SHIFT_CAL_DATA_RD_WR: SubBlockId = SubBlockId(9);
    pub const TX_FREQ_PWR_LIMIT: SubBlockId = SubBlockId(10);
    pub const INTER_RX_GAIN_PHASE: SubBlockId = SubBlockId(11);
    pub const APLL_SYNTH_BW_CTL: SubBlockId = SubBlockId(12);
    pub const PROFILE_CONF: SubBlockId = SubBlockId(13);
    pub const CHIRP_CONF: SubBlockId = SubBlockId(14);
    pub const FRAME_CONF: SubBlockId = SubBlockId(15);
    pub const ADV_FRAME_CONF: SubBlockId = SubBlockId(16);
    pub const CONT_MODE_CONF: SubBlockId = SubBlockId(17);
    pub const CONT_MODE_EN: SubBlockId = SubBlockId(18);
    pub const PER_CHIRP_PHASE_SHIFT: SubBlockId = SubBlockId(19);
    pub const PROG_FILT_COEFF_RAM: SubBlockId = SubBlockId(20);
    pub const PROG_FILT_CONF: SubBlockId = SubBlockId(21);
    pub const CAL_MON_TIME_UNIT: SubBlockId = SubBlockId(22);
    pub const RUN_TIME_CALIB_CONF: SubBlockId = SubBlockId(23);
    pub const RX_GAIN_TEMPLUT: SubBlockId = SubBlockId(24);
    pub const TX_GAIN_TEMPLUT: SubBlockId = SubBlockId(25);
    pub const LOOPBACK_BURST_CONF: SubBlockId = SubBlockId(26);
    pub const DYN_CHIRP_CONF: SubBlockId = SubBlockId(27);
    pub const DYN_CHIRP_EN: SubBlockId = SubBlockId(28);
    pub const DYN_PER_CHIRP_PH_SHIFT: SubBlockId = SubBlockId(29);
    pub const INTER_CHIRP_BLOCK_CTRL: SubBlockId = SubBlockId(30);
    pub const SUB_FRAME_START: SubBlockId = SubBlockId(31);
    pub const ADV_CHIRP_CONF: SubBlockId = SubBlockId(32);
    pub const ADV_CHIRP_LUT_DATA: SubBlockId = SubBlockId(33);
    pub const ADV_CHIRP_DYN_LUT_OFFSET: SubBlockId = SubBlockId(34);
    pub const FRAME_START_STOP: SubBlockId = SubBlockId(35);
    pub const RF_INIT_CMD: SubBlockId = SubBlockId(36);
    pub const BPM_COMMON_CONF: SubBlockId = SubBlockId(37);
    pub const BPM_CHIRP_CONF: SubBlockId = SubBlockId(38);
    pub const TEST_SOURCE_CONF: SubBlockId = SubBlockId(39);
    pub const TEST_SOURCE_EN: SubBlockId = SubBlockId(40);
    pub const GP_ADC_CONF: SubBlockId = SubBlockId(41);
    pub const PA_LOOPBACK_CONF: SubBlockId = SubBlockId(42);
    pub const PS_LOOPBACK_CONF: SubBlockId = SubBlockId(43);
    pub const IF_LOOPBACK_CONF: SubBlockId = SubBlockId(44);
    pub const DYNAMIC_POWER_SAVE: SubBlockId = SubBlockId(45);
    pub const TEMPERATURE_REPORT: SubBlockId = SubBlockId(46);
    pub const DFE_STATISTICS_REPORT: SubBlockId = SubBlockId(47);
    pub const BOOTUP_STATUS: SubBlockId = SubBlockId(48);
    pub const DIE_ID: SubBlockId = SubBlockId(49);
    pub const CPU_FAULT: SubBlockId = SubBlockId(50);
    pub const ESM_FAULT: SubBlockId = SubBlockId(51);
    pub const MON_TYPE_TRIGGER: SubBlockId = SubBlockId(52);
    pub const FRAME_APPLY: SubBlockId = SubBlockId(53);
    pub const ADV_FRAME_APPLY: SubBlockId = SubBlockId(54);
}

// ── Range descriptor ─────────────────────────────────────────────────────────

/// Inclusive index span carried in the request of a range read.
///
/// `end - start + 1` equals the number of records expected in the matching
/// response chunk. Chunked reads advance the span so that the next `start`
/// is the previous `end + 1`.
///
/// Wire size: 4 bytes.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct RangeSpan {
    pub start: u16,
    pub end: u16,
}

assert_eq_size!(RangeSpan, [u8; 4]);

impl RangeSpan {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Number of items the span covers (inclusive on both ends).
    pub fn count(&self) -> usize {
        let start = self.start;
        let end = self.end;
        usize::from(end) - usize::from(start) + 1
    }
}

// ── Constants ─────────────────────────────────────────────────────────────────

/// Maximum command payload per transaction, in bytes. Sub-block envelopes
/// and their payloads must fit within this together.
pub const CMD_PAYLOAD_MAX: usize = 240;

/// Maximum response payload per transaction, in bytes.
pub const RESP_PAYLOAD_MAX: usize = 240;

/// Width of the sub-block id field in the envelope.
pub const SB_ID_SIZE: usize = 2;

/// Width of the sub-block length field in the envelope.
pub const SB_LEN_SIZE: usize = 2;

/// Total per-sub-block envelope overhead.
pub const SB_HEADER_SIZE: usize = SB_ID_SIZE + SB_LEN_SIZE;

/// Number of fixed chunks a full calibration image is split into.
pub const CALIB_CHUNK_COUNT: usize = 3;

/// Payload bytes per calibration chunk.
pub const CALIB_CHUNK_SIZE: usize = 224;

/// Payload bytes per phase-shifter calibration chunk (one per TX channel).
pub const PH_SHIFT_CAL_CHUNK_SIZE: usize = 128;

/// Number of TX channels, and therefore of phase-shifter calibration chunks.
pub const TX_CHANNEL_COUNT: usize = 3;

/// Maximum bytes per advanced-chirp LUT upload chunk.
pub const LUT_CHUNK_MAX: usize = 212;

// ── Companion-subsystem boundary ─────────────────────────────────────────────

/// Convert a scalar crossing the companion data-path boundary.
///
/// The companion subsystem consumes 32-bit scalars in little-endian order
/// while record and blob payloads cross byte-for-byte. This is the single
/// place where host byte order meets that boundary; apply it on both the
/// outbound and inbound side of every companion scalar.
#[inline]
pub fn companion_u32(value: u32) -> u32 {
    if cfg!(target_endian = "big") {
        value.swap_bytes()
    } else {
        value
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors that can arise when interpreting wire-format data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("unknown message class: 0x{0:04x}")]
    UnknownOpcode(u16),
}

// ── Tests ─────────────────────────────────────────────────────────────────────
