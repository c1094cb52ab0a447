//! Configuration record catalog.
//!
//! One fixed-size #[repr(C, packed)] struct per device configuration or
//! report record, with zerocopy derives so the engines can treat every
//! record as an opaque byte span. The [`Record`] trait carries the one piece
//! of wire binding each type owns: its sub-block id. Field meaning is the
//! firmware's business; nothing in this library validates field content.
//!
//! Request-only descriptors (read requests, range spans) are plain zerocopy
//! structs without a `Record` binding — they travel under the id of the
//! record they ask for.

use static_assertions::assert_eq_size;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::wire::{
    sb, SubBlockId, CALIB_CHUNK_COUNT, CALIB_CHUNK_SIZE, LUT_CHUNK_MAX, PH_SHIFT_CAL_CHUNK_SIZE,
    TX_CHANNEL_COUNT,
};

/// A fixed-layout configuration record with a wire binding.
///
/// Implementors are plain data: the engines read them with
/// [`AsBytes::as_bytes`] and fill them with `as_bytes_mut`, never field by
/// field.
pub trait Record: AsBytes + FromBytes + FromZeroes + Sized {
    /// Sub-block id this record travels under.
    const SUB_BLOCK: SubBlockId;

    /// Serialized size on the wire. Packed layout, so identical to the
    /// in-memory size.
    const WIRE_SIZE: usize = core::mem::size_of::<Self>();
}

/// Bind record types to their sub-block ids. The table is the binding;
/// nothing else in the crate repeats it.
macro_rules! bind_records {
    ($($ty:ty => $sb:expr,)+) => {
        $(impl Record for $ty {
            const SUB_BLOCK: SubBlockId = $sb;
        })+
    };
}

// ── Static RF configuration ──────────────────────────────────────────────────

/// RX/TX channel enables and cascading role. Global per power cycle.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ChanCfg {
    pub rx_channel_en: u16,
    pub tx_channel_en: u16,
    pub cascading: u16,
    pub cascading_pin_out: u16,
}
assert_eq_size!(ChanCfg, [u8; 8]);

/// ADC bit depth and output format.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct AdcOutCfg {
    pub num_adc_bits: u16,
    pub adc_out_fmt: u16,
    pub reduction_factor: u16,
    pub reserved: u16,
}
assert_eq_size!(AdcOutCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct LowPowerModeCfg {
    pub reserved: u16,
    pub lp_adc_mode: u16,
}
assert_eq_size!(LowPowerModeCfg, [u8; 4]);

/// Async-event routing and watchdog control for the RF subsystem.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct RfDevCfg {
    pub ae_direction: u32,
    pub ae_crc_type: u8,
    pub watchdog_enable: u8,
    pub reserved: u16,
}
assert_eq_size!(RfDevCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct MiscCfg {
    pub misc_ctl: u32,
}
assert_eq_size!(MiscCfg, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct LdoBypassCfg {
    pub components: u16,
    pub supply_mon_ir_drop: u8,
    pub io_supply_indicator: u8,
}
assert_eq_size!(LdoBypassCfg, [u8; 4]);

/// Band edges for calibration and monitoring, in device frequency units.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CalMonFreqLimitCfg {
    pub freq_low: u16,
    pub freq_high: u16,
    pub reserved: u32,
}
assert_eq_size!(CalMonFreqLimitCfg, [u8; 8]);

/// Which boot-time calibrations run and whether reports are emitted.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct InitCalibCfg {
    pub calib_enable_mask: u32,
    pub calib_report_en: u8,
    pub phase_shift_cal_en: u8,
    pub reserved: u16,
}
assert_eq_size!(InitCalibCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TxFreqPwrLimitCfg {
    pub tx_freq_low: [u16; 3],
    pub tx_freq_high: [u16; 3],
    pub tx_power_limit: [u16; 3],
    pub reserved: u16,
}
assert_eq_size!(TxFreqPwrLimitCfg, [u8; 20]);

/// Per-profile RX gain/phase trim across the band.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct InterRxGainPhaseCfg {
    pub profile_index: u8,
    pub reserved0: u8,
    pub digital_delay_ctrl: u16,
    pub rx_gain_corr: [u16; 4],
    pub rx_phase_corr: [u16; 4],
    pub reserved1: u32,
}
assert_eq_size!(InterRxGainPhaseCfg, [u8; 24]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ApllSynthBwCfg {
    pub apll_icp_trim: u16,
    pub synth_icp_trim: u16,
    pub apll_rz_trim: u16,
    pub synth_rz_trim: u16,
}
assert_eq_size!(ApllSynthBwCfg, [u8; 8]);

// ── Dynamic RF configuration ─────────────────────────────────────────────────

/// One chirp timing/slope profile. Up to four live on the device at once;
/// chirps reference them by `profile_id`.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ProfileCfg {
    pub profile_id: u16,
    pub vco_select: u8,
    pub cal_lut_update: u8,
    pub start_freq: u32,
    pub idle_time: u32,
    pub adc_start_time: u32,
    pub ramp_end_time: u32,
    pub tx_power_backoff: u32,
    pub tx_phase_shifter: u32,
    pub freq_slope: i16,
    pub tx_start_time: u16,
    pub num_adc_samples: u16,
    pub dig_out_sample_rate: u16,
    pub hpf1_corner_freq: u8,
    pub hpf2_corner_freq: u8,
    pub tx_calib_enable: u16,
    pub rx_gain: u16,
    pub reserved: u16,
}
assert_eq_size!(ProfileCfg, [u8; 44]);

/// One chirp slot: profile reference plus per-chirp dither on top of it.
/// Devices hold up to 512 of these; writes go out in chunked bulk.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ChirpCfg {
    pub chirp_start_idx: u16,
    pub chirp_end_idx: u16,
    pub profile_id: u16,
    pub reserved: u16,
    pub start_freq_var: u32,
    pub freq_slope_var: u16,
    pub idle_time_var: u16,
    pub adc_start_time_var: u16,
    pub tx_enable: u16,
}
assert_eq_size!(ChirpCfg, [u8; 20]);

/// Legacy frame sequence: a chirp span looped a fixed number of times.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct FrameCfg {
    pub chirp_start_idx: u16,
    pub chirp_end_idx: u16,
    pub num_loops: u16,
    pub num_frames: u16,
    pub num_adc_samples: u16,
    pub reserved0: u16,
    pub frame_period: u32,
    pub trigger_select: u16,
    pub reserved1: u16,
    pub frame_trigger_delay: u32,
}
assert_eq_size!(FrameCfg, [u8; 24]);

/// Companion data-path sizing derived from a frame configuration. Scalars in
/// this record cross the companion boundary; see [`crate::wire::companion_u32`].
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct FrameApplyCfg {
    pub num_adc_samples: u32,
    pub num_chirps: u32,
    pub reserved: u32,
}
assert_eq_size!(FrameApplyCfg, [u8; 12]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct SubFrameCfg {
    pub chirp_start_idx: u16,
    pub num_chirps: u16,
    pub num_loops: u16,
    pub reserved: u16,
    pub sub_frame_period: u32,
}
assert_eq_size!(SubFrameCfg, [u8; 12]);

/// Advanced frame sequence: up to four sub-frames per frame.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct AdvFrameSeqCfg {
    pub num_sub_frames: u8,
    pub force_profile: u8,
    pub loop_back_cfg: u16,
    pub sub_frames: [SubFrameCfg; 4],
    pub num_frames: u16,
    pub trigger_select: u16,
    pub frame_trigger_delay: u32,
    pub reserved: u32,
}
assert_eq_size!(AdvFrameSeqCfg, [u8; 64]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct SubFrameDataCfg {
    pub total_chirps: u32,
    pub num_adc_samples: u32,
    pub reserved: u32,
}
assert_eq_size!(SubFrameDataCfg, [u8; 12]);

/// Companion data-path sizing for an advanced frame, one entry per sub-frame.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct AdvFrameDataCfg {
    pub num_sub_frames: u32,
    pub sub_frame_data: [SubFrameDataCfg; 4],
}
assert_eq_size!(AdvFrameDataCfg, [u8; 52]);

/// Advanced frame configuration as the caller sees it: the RF sequence and
/// the companion data-path sizing together. Only the parts travel on the
/// wire, in separate transactions.
#[derive(Debug, Clone, Copy, FromZeroes)]
pub struct AdvFrameCfg {
    pub sequence: AdvFrameSeqCfg,
    pub data_path: AdvFrameDataCfg,
}

/// Continuous-streaming (non-chirping) mode parameters.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ContModeCfg {
    pub start_freq: u32,
    pub tx_power_backoff: u32,
    pub tx_phase_shifter: u32,
    pub dig_out_sample_rate: u16,
    pub hpf1_corner_freq: u8,
    pub hpf2_corner_freq: u8,
    pub rx_gain: u16,
    pub reserved: u16,
}
assert_eq_size!(ContModeCfg, [u8; 20]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ContModeEnable {
    pub enable: u16,
    pub reserved: u16,
}
assert_eq_size!(ContModeEnable, [u8; 4]);

/// Frame trigger command payload.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct FrameTrigger {
    pub start_stop: u16,
    pub reserved: u16,
}
assert_eq_size!(FrameTrigger, [u8; 4]);

pub const FRAME_TRIGGER_STOP: u16 = 0;
pub const FRAME_TRIGGER_START: u16 = 1;

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct SubFrameTrigger {
    pub start_cmd: u16,
    pub reserved: u16,
}
assert_eq_size!(SubFrameTrigger, [u8; 4]);

// ── Filters, calibration scheduling, gain LUTs ───────────────────────────────

/// Programmable-filter coefficient RAM image.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ProgFiltCoeffRam {
    pub coeffs: [i16; 64],
}
assert_eq_size!(ProgFiltCoeffRam, [u8; 128]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct ProgFiltCfg {
    pub profile_id: u8,
    pub coeff_start_idx: u8,
    pub filter_size: u8,
    pub reserved: u8,
}
assert_eq_size!(ProgFiltCfg, [u8; 4]);

/// Time base shared by periodic calibration and monitoring.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CalMonTimeUnitCfg {
    pub time_unit: u16,
    pub num_units: u16,
    pub device_span: u8,
    pub reserved: [u8; 3],
}
assert_eq_size!(CalMonTimeUnitCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct RuntimeCalibCfg {
    pub one_time_calib_mask: u32,
    pub periodic_calib_mask: u32,
    pub calib_period: u32,
    pub report_enable: u16,
    pub tx_power_cal_mode: u16,
}
assert_eq_size!(RuntimeCalibCfg, [u8; 16]);

/// Request half of a gain-LUT read; travels under the LUT record's id.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct GainLutReadReq {
    pub profile_id: u16,
    pub reserved: u16,
}
assert_eq_size!(GainLutReadReq, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct RxGainLutData {
    pub profile_id: u16,
    pub reserved: u16,
    pub gain_table: [u8; 40],
}
assert_eq_size!(RxGainLutData, [u8; 44]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TxGainLutData {
    pub profile_id: u16,
    pub reserved: u16,
    pub gain_table: [[u8; 20]; 3],
}
assert_eq_size!(TxGainLutData, [u8; 64]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct LoopbackBurstCfg {
    pub loopback_sel: u8,
    pub reserved: u8,
    pub burst_index: u16,
    pub freq: u32,
    pub tx_power_backoff: u32,
    pub digital_corr_dis: u16,
    pub ps_value: u16,
}
assert_eq_size!(LoopbackBurstCfg, [u8; 16]);

// ── Dynamic per-chirp reprogramming ──────────────────────────────────────────

/// One segment of raw chirp-RAM rows for dynamic reprogramming. Large enough
/// that exactly one fits a command payload.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DynChirpSegment {
    pub program_mode: u16,
    pub chirp_row_select: u16,
    pub chirp_seg_sel: u16,
    pub reserved: u16,
    pub chirp_rows: [u32; 48],
}
assert_eq_size!(DynChirpSegment, [u8; 200]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DynChirpEnable {
    pub enable: u32,
}
assert_eq_size!(DynChirpEnable, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DynPerChirpPhShiftSegment {
    pub program_mode: u16,
    pub chirp_seg_sel: u16,
    pub phase_shift: [u8; 128],
}
assert_eq_size!(DynPerChirpPhShiftSegment, [u8; 132]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct InterChirpBlockCtrlCfg {
    pub timing_ctrl: [i8; 12],
    pub reserved: u32,
}
assert_eq_size!(InterChirpBlockCtrlCfg, [u8; 16]);

// ── Advanced chirp & LUT upload ──────────────────────────────────────────────

/// Generation parameters for one advanced-chirp dimension.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct AdvChirpCfg {
    pub chirp_param_idx: u16,
    pub reserved: u16,
    pub delta_reset_period: u32,
    pub delta_param_update: u32,
    pub sf0_init: u32,
    pub sf1_init: u32,
    pub lut_pattern_address: u32,
    pub num_patterns: u16,
    pub lut_burst_index_offset: u16,
}
assert_eq_size!(AdvChirpCfg, [u8; 28]);

/// One staged chunk of an advanced-chirp LUT upload. `num_bytes` of `data`
/// are valid; the rest is zero padding that still crosses the wire.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct LutChunk {
    pub lut_address_offset: u16,
    pub num_bytes: u16,
    pub data: [u8; LUT_CHUNK_MAX],
}
assert_eq_size!(LutChunk, [u8; 216]);

impl LutChunk {
    /// Stage one slice of a LUT image at the given device address offset.
    /// `bytes` must not exceed [`LUT_CHUNK_MAX`] and `offset` must fit the
    /// 16-bit wire field; callers size both against the address space.
    pub fn stage(offset: usize, bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= LUT_CHUNK_MAX);
        debug_assert!(offset <= usize::from(u16::MAX));
        let mut chunk = Self::new_zeroed();
        chunk.lut_address_offset = offset as u16;
        chunk.num_bytes = bytes.len() as u16;
        chunk.data[..bytes.len()].copy_from_slice(bytes);
        chunk
    }
}

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct LutOffsetCfg {
    pub lut_address_offset: [u16; 10],
    pub reserved: u32,
}
assert_eq_size!(LutOffsetCfg, [u8; 24]);

// ── Advanced features & misc control ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct BpmCommonCfg {
    pub mode: u16,
    pub reserved: [u16; 3],
}
assert_eq_size!(BpmCommonCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct BpmChirpCfg {
    pub chirp_start_idx: u16,
    pub chirp_end_idx: u16,
    pub const_bpm_val: u16,
    pub reserved: u16,
}
assert_eq_size!(BpmChirpCfg, [u8; 8]);

/// Per-chirp-span phase shifter values, one byte per TX channel.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PhaseShiftCfg {
    pub chirp_start_idx: u16,
    pub chirp_end_idx: u16,
    pub tx0_phase: u8,
    pub tx1_phase: u8,
    pub tx2_phase: u8,
    pub reserved: u8,
}
assert_eq_size!(PhaseShiftCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TestSourceObject {
    pub pos_x: i16,
    pub pos_y: i16,
    pub pos_z: i16,
    pub vel_x: i16,
    pub vel_y: i16,
    pub vel_z: i16,
    pub sig_level: u16,
    pub reserved: u16,
}
assert_eq_size!(TestSourceObject, [u8; 16]);

/// Synthetic-target generator: two simulated objects plus antenna geometry.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TestSourceCfg {
    pub objects: [TestSourceObject; 2],
    pub rx_ant_pos: [u8; 4],
    pub tx_ant_pos: [u8; 4],
    pub reserved: u32,
}
assert_eq_size!(TestSourceCfg, [u8; 44]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TestSourceEnable {
    pub enable: u16,
    pub reserved: u16,
}
assert_eq_size!(TestSourceEnable, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct GpAdcCfg {
    pub enable: u16,
    pub buffer_enable: u16,
    pub collect_samples: u16,
    pub reserved: u16,
}
assert_eq_size!(GpAdcCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PaLoopbackCfg {
    pub enable: u16,
    pub freq: u16,
}
assert_eq_size!(PaLoopbackCfg, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PsLoopbackCfg {
    pub enable: u16,
    pub buffer_enable: u8,
    pub ps_value: u8,
    pub reserved: u32,
}
assert_eq_size!(PsLoopbackCfg, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct IfLoopbackCfg {
    pub enable: u16,
    pub freq: u16,
}
assert_eq_size!(IfLoopbackCfg, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DynamicPowerSaveCfg {
    pub block_cfg: u16,
    pub reserved: u16,
}
assert_eq_size!(DynamicPowerSaveCfg, [u8; 4]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct MonTypeTriggerCfg {
    pub mon_trig_type: u32,
    pub reserved: u32,
}
assert_eq_size!(MonTypeTriggerCfg, [u8; 8]);

// ── Status reports ───────────────────────────────────────────────────────────

/// On-die temperature sensors, read-only.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct TempReport {
    pub time_ms: u32,
    pub rx_temp: [i16; 4],
    pub tx_temp: [i16; 3],
    pub pm_temp: i16,
    pub dig_temp: i16,
    pub reserved: u16,
}
assert_eq_size!(TempReport, [u8; 24]);

/// Digital front-end statistics, read-only.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DfeStatReport {
    pub residual_dc: [i32; 4],
    pub rms_i: [u16; 4],
    pub rms_q: [u16; 4],
    pub cross_corr: [i32; 4],
    pub reserved: u32,
}
assert_eq_size!(DfeStatReport, [u8; 52]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct BootStatusReport {
    pub boot_test_status: u32,
    pub reserved: u32,
}
assert_eq_size!(BootStatusReport, [u8; 8]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct DieIdReport {
    pub lot_number: u32,
    pub wafer_number: u32,
    pub die_x: u32,
    pub die_y: u32,
}
assert_eq_size!(DieIdReport, [u8; 16]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CpuFaultReport {
    pub fault_type: u8,
    pub reserved0: u8,
    pub line_number: u16,
    pub fault_lr: u32,
    pub fault_pc: u32,
    pub fault_addr: u32,
    pub fault_status: u16,
    pub reserved1: u16,
}
assert_eq_size!(CpuFaultReport, [u8; 20]);

#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct EsmFaultReport {
    pub group1_errors: u32,
    pub group2_errors: u32,
}
assert_eq_size!(EsmFaultReport, [u8; 8]);

// ── Calibration images ───────────────────────────────────────────────────────

/// One fixed chunk of the factory calibration image. The full image is
/// exactly [`CALIB_CHUNK_COUNT`] of these, identified by ascending
/// `chunk_id`.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CalChunk {
    pub num_chunks: u16,
    pub chunk_id: u16,
    pub data: [u8; CALIB_CHUNK_SIZE],
}
assert_eq_size!(CalChunk, [u8; 228]);

/// Request half of a calibration chunk read.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CalDataGetReq {
    pub chunk_id: u16,
    pub reserved: u16,
}
assert_eq_size!(CalDataGetReq, [u8; 4]);

/// The complete calibration image as stored and restored by the host.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct CalibrationData {
    pub chunks: [CalChunk; CALIB_CHUNK_COUNT],
}

/// One TX channel's phase-shifter calibration chunk. On restore, the device
/// applies the accumulated data when it sees `calib_apply` set — the library
/// sets it on the final chunk only.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PhShiftCalChunk {
    pub tx_index: u8,
    pub calib_apply: u8,
    pub reserved: u16,
    pub data: [u8; PH_SHIFT_CAL_CHUNK_SIZE],
}
assert_eq_size!(PhShiftCalChunk, [u8; 132]);

/// Request half of a phase-shifter calibration chunk read.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PhShiftCalGetReq {
    pub tx_index: u8,
    pub reserved: [u8; 3],
}
assert_eq_size!(PhShiftCalGetReq, [u8; 4]);

/// Phase-shifter calibration for all TX channels, one chunk each.
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct PhShiftCalibrationData {
    pub chunks: [PhShiftCalChunk; TX_CHANNEL_COUNT],
}

// ── Bindings ─────────────────────────────────────────────────────────────────

bind_records! {
    ChanCfg => sb::CHAN_CONF,
    AdcOutCfg => sb::ADC_OUT_CONF,
    LowPowerModeCfg => sb::LOW_POWER_CONF,
    RfDevCfg => sb::DEVICE_CONF,
    MiscCfg => sb::RADAR_MISC_CTL,
    LdoBypassCfg => sb::LDO_BYPASS,
    CalMonFreqLimitCfg => sb::CAL_MON_FREQ_LIMIT,
    InitCalibCfg => sb::INIT_CALIB_CONF,
    TxFreqPwrLimitCfg => sb::TX_FREQ_PWR_LIMIT,
    InterRxGainPhaseCfg => sb::INTER_RX_GAIN_PHASE,
    ApllSynthBwCfg => sb::APLL_SYNTH_BW_CTL,
    ProfileCfg => sb::PROFILE_CONF,
    ChirpCfg => sb::CHIRP_CONF,
    FrameCfg => sb::FRAME_CONF,
    FrameApplyCfg => sb::FRAME_APPLY,
    AdvFrameSeqCfg => sb::ADV_FRAME_CONF,
    AdvFrameDataCfg => sb::ADV_FRAME_APPLY,
    ContModeCfg => sb::CONT_MODE_CONF,
    ContModeEnable => sb::CONT_MODE_EN,
    FrameTrigger => sb::FRAME_START_STOP,
    SubFrameTrigger => sb::SUB_FRAME_START,
    ProgFiltCoeffRam => sb::PROG_FILT_COEFF_RAM,
    ProgFiltCfg => sb::PROG_FILT_CONF,
    CalMonTimeUnitCfg => sb::CAL_MON_TIME_UNIT,
    RuntimeCalibCfg => sb::RUN_TIME_CALIB_CONF,
    RxGainLutData => sb::RX_GAIN_TEMPLUT,
    TxGainLutData => sb::TX_GAIN_TEMPLUT,
    LoopbackBurstCfg => sb::LOOPBACK_BURST_CONF,
    DynChirpSegment => sb::DYN_CHIRP_CONF,
    DynChirpEnable => sb::DYN_CHIRP_EN,
    DynPerChirpPhShiftSegment => sb::DYN_PER_CHIRP_PH_SHIFT,
    InterChirpBlockCtrlCfg => sb::INTER_CHIRP_BLOCK_CTRL,
    AdvChirpCfg => sb::ADV_CHIRP_CONF,
    LutChunk => sb::ADV_CHIRP_LUT_DATA,
    LutOffsetCfg => sb::ADV_CHIRP_DYN_LUT_OFFSET,
    BpmCommonCfg => sb::BPM_COMMON_CONF,
    BpmChirpCfg => sb::BPM_CHIRP_CONF,
    PhaseShiftCfg => sb::PER_CHIRP_PHASE_SHIFT,
    TestSourceCfg => sb::TEST_SOURCE_CONF,
    TestSourceEnable => sb::TEST_SOURCE_EN,
    GpAdcCfg => sb::GP_ADC_CONF,
    PaLoopbackCfg => sb::PA_LOOPBACK_CONF,
    PsLoopbackCfg => sb::PS_LOOPBACK_CONF,
    IfLoopbackCfg => sb::IF_LOOPBACK_CONF,
    DynamicPowerSaveCfg => sb::DYNAMIC_POWER_SAVE,
    MonTypeTriggerCfg => sb::MON_TYPE_TRIGGER,
    TempReport => sb::TEMPERATURE_REPORT,
    DfeStatReport => sb::DFE_STATISTICS_REPORT,
    BootStatusReport => sb::BOOTUP_STATUS,
    DieIdReport => sb::DIE_ID,
    CpuFaultReport => sb::CPU_FAULT,
    EsmFaultReport => sb::ESM_FAULT,
    CalChunk => sb::CAL_DATA_RD_WR,
    PhShiftCalChunk => sb::PH_SHIFT_CAL_DATA_RD_WR,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
