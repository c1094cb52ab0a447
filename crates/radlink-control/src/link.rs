//! Configuration facade.
//!
//! [`RadarLink`] is the operation catalog: one method per device
//! configuration or query, each validating its inputs and the device map
//! before delegating to the engines or issuing a single transaction. The
//! wire binding of every operation lives in its record type
//! ([`Record::SUB_BLOCK`]) plus the message-class argument here — the
//! envelope mechanics exist once, in the helpers.
//!
//! Nothing is cached between calls; the device is the only state.

use tracing::{trace, warn};
use zerocopy::{AsBytes, FromZeroes};

use radlink_core::records::*;
use radlink_core::wire::{
    companion_u32, sb, DeviceMap, Opcode, SubBlockId, TX_CHANNEL_COUNT,
};
use radlink_core::{LinkConfig, LinkError};

use crate::engine;
use crate::query;
use crate::transport::{CommandTransport, Request, Response};

/// Handle to the radar control plane over one transport.
pub struct RadarLink<T: CommandTransport> {
    transport: T,
    cfg: LinkConfig,
}

impl<T: CommandTransport> RadarLink<T> {
    /// A link with the shipped protocol geometry.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, LinkConfig::default())
    }

    /// A link with explicit geometry, e.g. loaded via [`LinkConfig::load`].
    pub fn with_config(transport: T, cfg: LinkConfig) -> Self {
        Self { transport, cfg }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.cfg
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    fn check_devices(&self, devices: DeviceMap) -> Result<(), LinkError> {
        if !self.transport.is_valid_device_map(devices) {
            warn!(devices, "rejected device map");
            return Err(LinkError::InvalidInput(
                "device map not recognized by transport",
            ));
        }
        Ok(())
    }

    /// One set-style transaction: a single envelope, status-only response.
    fn execute_raw(
        &mut self,
        devices: DeviceMap,
        opcode: Opcode,
        sub_block: SubBlockId,
        payload: &[u8],
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        trace!(devices, ?opcode, sub_block = sub_block.0, "set");
        let mut request = Request::new(opcode);
        request.push(sub_block, payload);
        let mut response = Response::with_expected(0);
        self.transport
            .execute(devices, &request, &mut response)
            .map_err(|source| LinkError::Transaction { chunk: 0, source })
    }

    fn execute_set<R: Record>(
        &mut self,
        devices: DeviceMap,
        opcode: Opcode,
        record: &R,
    ) -> Result<(), LinkError> {
        self.execute_raw(devices, opcode, R::SUB_BLOCK, record.as_bytes())
    }

    /// One get-style transaction: a request descriptor under the record's
    /// id, one response sub-block written into `out`.
    fn execute_get<R: Record>(
        &mut self,
        devices: DeviceMap,
        opcode: Opcode,
        descriptor: &[u8],
        out: &mut R,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        trace!(devices, ?opcode, sub_block = R::SUB_BLOCK.0, "get");
        let mut request = Request::new(opcode);
        request.push(R::SUB_BLOCK, descriptor);
        let mut response = Response::with_expected(1);
        response.add_slot(out.as_bytes_mut());
        self.transport
            .execute(devices, &request, &mut response)
            .map_err(|source| LinkError::Transaction { chunk: 0, source })
    }

    fn push_bulk<S: engine::RecordSource>(
        &mut self,
        devices: DeviceMap,
        opcode: Opcode,
        source: S,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        engine::push_records(&mut self.transport, &self.cfg, devices, opcode, source)
    }

    // ── Static RF configuration ──────────────────────────────────────────

    pub fn set_channel_config(&mut self, devices: DeviceMap, cfg: &ChanCfg) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_adc_output_config(
        &mut self,
        devices: DeviceMap,
        cfg: &AdcOutCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_low_power_mode(
        &mut self,
        devices: DeviceMap,
        cfg: &LowPowerModeCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_rf_device_config(
        &mut self,
        devices: DeviceMap,
        cfg: &RfDevCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_ldo_bypass_config(
        &mut self,
        devices: DeviceMap,
        cfg: &LdoBypassCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_cal_mon_freq_limits(
        &mut self,
        devices: DeviceMap,
        cfg: &CalMonFreqLimitCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_init_calib_config(
        &mut self,
        devices: DeviceMap,
        cfg: &InitCalibCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_tx_freq_power_limits(
        &mut self,
        devices: DeviceMap,
        cfg: &TxFreqPwrLimitCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_inter_rx_gain_phase_config(
        &mut self,
        devices: DeviceMap,
        cfg: &InterRxGainPhaseCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    pub fn set_apll_synth_bw_config(
        &mut self,
        devices: DeviceMap,
        cfg: &ApllSynthBwCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfStaticSet, cfg)
    }

    /// One-shot RF initialization and boot-time calibration.
    pub fn rf_init(&mut self, devices: DeviceMap) -> Result<(), LinkError> {
        self.execute_raw(devices, Opcode::RfInit, sb::RF_INIT_CMD, &[])
    }

    // ── Miscellaneous control ────────────────────────────────────────────

    pub fn set_misc_config(&mut self, devices: DeviceMap, cfg: &MiscCfg) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfMiscSet, cfg)
    }

    pub fn set_dynamic_power_save(
        &mut self,
        devices: DeviceMap,
        cfg: &DynamicPowerSaveCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfMiscSet, cfg)
    }

    pub fn trigger_monitor_type(
        &mut self,
        devices: DeviceMap,
        cfg: &MonTypeTriggerCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfMiscSet, cfg)
    }

    // ── Profiles and chirps ──────────────────────────────────────────────

    /// Push chirp timing profiles, chunked against the command capacity.
    pub fn set_profile_config(
        &mut self,
        devices: DeviceMap,
        profiles: &[ProfileCfg],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, profiles)
    }

    /// Read one profile back by id.
    pub fn get_profile_config(
        &mut self,
        devices: DeviceMap,
        profile_id: u16,
        out: &mut ProfileCfg,
    ) -> Result<(), LinkError> {
        let descriptor = GainLutReadReq {
            profile_id,
            reserved: 0,
        };
        self.execute_get(devices, Opcode::RfDynamicGet, descriptor.as_bytes(), out)
    }

    /// Push a contiguous chirp table, chunked.
    pub fn set_chirp_config(
        &mut self,
        devices: DeviceMap,
        chirps: &[ChirpCfg],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, chirps)
    }

    /// Push chirps gathered by reference, e.g. rows of separately owned
    /// tables. Identical wire behavior to [`Self::set_chirp_config`].
    pub fn set_multi_chirp_config(
        &mut self,
        devices: DeviceMap,
        chirps: &[&ChirpCfg],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, engine::RecordRefs(chirps))
    }

    /// Read `out.len()` chirps starting at `start_idx`, chunked against the
    /// response capacity. Fills `out` contiguously and in index order.
    pub fn get_chirp_config(
        &mut self,
        devices: DeviceMap,
        start_idx: u16,
        out: &mut [ChirpCfg],
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        query::pull_records(
            &mut self.transport,
            &self.cfg,
            devices,
            Opcode::RfDynamicGet,
            start_idx,
            out,
        )
    }

    // ── Frames ───────────────────────────────────────────────────────────

    /// Configure the legacy frame sequence. Also derives the data-path
    /// sizing (`num_chirps = span * loops`) and applies it to the companion
    /// subsystem in a second transaction.
    pub fn set_frame_config(&mut self, devices: DeviceMap, frame: &FrameCfg) -> Result<(), LinkError> {
        let chirp_start = frame.chirp_start_idx;
        let chirp_end = frame.chirp_end_idx;
        let num_loops = frame.num_loops;
        let num_adc_samples = frame.num_adc_samples;
        if chirp_end < chirp_start {
            return Err(LinkError::InvalidInput("chirp span end precedes start"));
        }
        self.execute_set(devices, Opcode::RfDynamicSet, frame)?;

        let num_chirps =
            (u32::from(chirp_end) - u32::from(chirp_start) + 1) * u32::from(num_loops);
        let apply = FrameApplyCfg {
            num_adc_samples: companion_u32(u32::from(num_adc_samples)),
            num_chirps: companion_u32(num_chirps),
            reserved: 0,
        };
        self.execute_set(devices, Opcode::DataPathSet, &apply)
    }

    /// Read the frame sequence back, including the companion subsystem's
    /// view of the ADC sample count.
    pub fn get_frame_config(
        &mut self,
        devices: DeviceMap,
        out: &mut FrameCfg,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfDynamicGet, &[], out)?;

        let mut apply = FrameApplyCfg::new_zeroed();
        self.execute_get(devices, Opcode::DataPathGet, &[], &mut apply)?;
        out.num_adc_samples = companion_u32(apply.num_adc_samples) as u16;
        Ok(())
    }

    /// Configure the advanced (sub-framed) sequence; the data-path half
    /// goes to the companion subsystem with its scalars converted at the
    /// boundary.
    pub fn set_adv_frame_config(
        &mut self,
        devices: DeviceMap,
        cfg: &AdvFrameCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, &cfg.sequence)?;

        let mut data = cfg.data_path;
        data.num_sub_frames = companion_u32(data.num_sub_frames);
        for entry in &mut data.sub_frame_data {
            entry.total_chirps = companion_u32(entry.total_chirps);
            entry.num_adc_samples = companion_u32(entry.num_adc_samples);
        }
        self.execute_set(devices, Opcode::DataPathSet, &data)
    }

    pub fn get_adv_frame_config(
        &mut self,
        devices: DeviceMap,
        out: &mut AdvFrameCfg,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfDynamicGet, &[], &mut out.sequence)?;

        let mut data = AdvFrameDataCfg::new_zeroed();
        self.execute_get(devices, Opcode::DataPathGet, &[], &mut data)?;
        data.num_sub_frames = companion_u32(data.num_sub_frames);
        for entry in &mut data.sub_frame_data {
            entry.total_chirps = companion_u32(entry.total_chirps);
            entry.num_adc_samples = companion_u32(entry.num_adc_samples);
        }
        out.data_path = data;
        Ok(())
    }

    // ── Frame triggers ───────────────────────────────────────────────────

    /// Start or stop framing with an explicit trigger payload.
    pub fn frame_start_stop(
        &mut self,
        devices: DeviceMap,
        trigger: &FrameTrigger,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfFrameTrigger, trigger)
    }

    pub fn sensor_start(&mut self, devices: DeviceMap) -> Result<(), LinkError> {
        self.frame_start_stop(
            devices,
            &FrameTrigger {
                start_stop: FRAME_TRIGGER_START,
                reserved: 0,
            },
        )
    }

    pub fn sensor_stop(&mut self, devices: DeviceMap) -> Result<(), LinkError> {
        self.frame_start_stop(
            devices,
            &FrameTrigger {
                start_stop: FRAME_TRIGGER_STOP,
                reserved: 0,
            },
        )
    }

    /// Software-trigger one sub-frame of an advanced sequence.
    pub fn trigger_sub_frame(
        &mut self,
        devices: DeviceMap,
        trigger: &SubFrameTrigger,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfFrameTrigger, trigger)
    }

    // ── Continuous mode ──────────────────────────────────────────────────

    pub fn set_cont_mode_config(
        &mut self,
        devices: DeviceMap,
        cfg: &ContModeCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    pub fn enable_cont_mode(
        &mut self,
        devices: DeviceMap,
        cfg: &ContModeEnable,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    // ── Filters, calibration scheduling, gain LUTs ───────────────────────

    pub fn set_prog_filter_coeffs(
        &mut self,
        devices: DeviceMap,
        coeffs: &ProgFiltCoeffRam,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, coeffs)
    }

    pub fn set_prog_filter_config(
        &mut self,
        devices: DeviceMap,
        cfg: &ProgFiltCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    pub fn set_cal_mon_time_unit(
        &mut self,
        devices: DeviceMap,
        cfg: &CalMonTimeUnitCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    pub fn set_runtime_calib_config(
        &mut self,
        devices: DeviceMap,
        cfg: &RuntimeCalibCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    pub fn set_rx_gain_lut(
        &mut self,
        devices: DeviceMap,
        lut: &RxGainLutData,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, lut)
    }

    pub fn get_rx_gain_lut(
        &mut self,
        devices: DeviceMap,
        profile_id: u16,
        out: &mut RxGainLutData,
    ) -> Result<(), LinkError> {
        let descriptor = GainLutReadReq {
            profile_id,
            reserved: 0,
        };
        self.execute_get(devices, Opcode::RfDynamicGet, descriptor.as_bytes(), out)
    }

    pub fn set_tx_gain_lut(
        &mut self,
        devices: DeviceMap,
        lut: &TxGainLutData,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, lut)
    }

    pub fn get_tx_gain_lut(
        &mut self,
        devices: DeviceMap,
        profile_id: u16,
        out: &mut TxGainLutData,
    ) -> Result<(), LinkError> {
        let descriptor = GainLutReadReq {
            profile_id,
            reserved: 0,
        };
        self.execute_get(devices, Opcode::RfDynamicGet, descriptor.as_bytes(), out)
    }

    pub fn set_loopback_burst_config(
        &mut self,
        devices: DeviceMap,
        cfg: &LoopbackBurstCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    // ── Dynamic per-chirp reprogramming ──────────────────────────────────

    /// Push raw chirp-RAM segments. One segment fills a whole transaction,
    /// so this degenerates to one chunk per segment.
    pub fn set_dyn_chirp_config(
        &mut self,
        devices: DeviceMap,
        segments: &[&DynChirpSegment],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, engine::RecordRefs(segments))
    }

    pub fn enable_dyn_chirp(
        &mut self,
        devices: DeviceMap,
        cfg: &DynChirpEnable,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    pub fn set_dyn_per_chirp_phase_shift(
        &mut self,
        devices: DeviceMap,
        segments: &[&DynPerChirpPhShiftSegment],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, engine::RecordRefs(segments))
    }

    pub fn set_inter_chirp_block_ctrl(
        &mut self,
        devices: DeviceMap,
        cfg: &InterChirpBlockCtrlCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    // ── Advanced chirp & LUT upload ──────────────────────────────────────

    pub fn set_adv_chirp_config(
        &mut self,
        devices: DeviceMap,
        cfg: &AdvChirpCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    /// Upload an advanced-chirp LUT image starting at `base_offset` in
    /// device LUT memory. Split into `lut.chunk_max`-byte staged chunks;
    /// stops at the first failed chunk.
    pub fn upload_adv_chirp_lut(
        &mut self,
        devices: DeviceMap,
        base_offset: u16,
        image: &[u8],
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        // Staged chunk offsets are 16-bit; an image running past the
        // addressable range would wrap its later offsets.
        if usize::from(base_offset) + image.len() > usize::from(u16::MAX) + 1 {
            return Err(LinkError::InvalidInput(
                "lut image runs past the 16-bit address space",
            ));
        }
        engine::push_blob(
            &mut self.transport,
            self.cfg.lut.chunk_max,
            devices,
            Opcode::RfDynamicSet,
            usize::from(base_offset),
            image,
            LutChunk::stage,
        )
    }

    /// Push one pre-staged LUT chunk verbatim.
    pub fn set_adv_chirp_lut_chunk(
        &mut self,
        devices: DeviceMap,
        chunk: &LutChunk,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, chunk)
    }

    pub fn set_lut_offset_config(
        &mut self,
        devices: DeviceMap,
        cfg: &LutOffsetCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfDynamicSet, cfg)
    }

    // ── Calibration images ───────────────────────────────────────────────

    /// Read the factory calibration image off the device, chunk by chunk
    /// with ascending chunk ids. Stops at the first failed chunk.
    pub fn calib_data_store(
        &mut self,
        devices: DeviceMap,
        out: &mut CalibrationData,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        engine::pull_fixed_chunks(
            &mut self.transport,
            devices,
            Opcode::RfStaticGet,
            |chunk| CalDataGetReq {
                chunk_id: chunk as u16,
                reserved: 0,
            },
            &mut out.chunks,
        )
    }

    /// Write a previously stored calibration image back, in chunk order.
    /// Stops at the first failed chunk; earlier chunks stay applied.
    pub fn calib_data_restore(
        &mut self,
        devices: DeviceMap,
        data: &CalibrationData,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        engine::push_fixed_chunks(&mut self.transport, devices, Opcode::RfStaticSet, &data.chunks)
    }

    /// Read phase-shifter calibration, one chunk per TX channel.
    pub fn phase_shift_calib_store(
        &mut self,
        devices: DeviceMap,
        out: &mut PhShiftCalibrationData,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        engine::pull_fixed_chunks(
            &mut self.transport,
            devices,
            Opcode::RfStaticGet,
            |chunk| PhShiftCalGetReq {
                tx_index: chunk as u8,
                reserved: [0; 3],
            },
            &mut out.chunks,
        )
    }

    /// Write phase-shifter calibration back, one chunk per TX channel. The
    /// device applies the accumulated image when it sees `calib_apply`, so
    /// the flag is forced set on the final chunk and clear before it.
    pub fn phase_shift_calib_restore(
        &mut self,
        devices: DeviceMap,
        data: &PhShiftCalibrationData,
    ) -> Result<(), LinkError> {
        self.check_devices(devices)?;
        for (chunk, original) in data.chunks.iter().enumerate() {
            let mut staged = *original;
            staged.calib_apply = u8::from(chunk == TX_CHANNEL_COUNT - 1);

            let mut request = Request::new(Opcode::RfStaticSet);
            request.push(PhShiftCalChunk::SUB_BLOCK, staged.as_bytes());
            let mut response = Response::with_expected(0);
            self.transport
                .execute(devices, &request, &mut response)
                .map_err(|source| LinkError::Transaction { chunk, source })?;
        }
        Ok(())
    }

    // ── Advanced features ────────────────────────────────────────────────

    pub fn set_bpm_common_config(
        &mut self,
        devices: DeviceMap,
        cfg: &BpmCommonCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn set_bpm_chirp_config(
        &mut self,
        devices: DeviceMap,
        chirps: &[&BpmChirpCfg],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfAdvancedSet, engine::RecordRefs(chirps))
    }

    pub fn set_phase_shift_config(
        &mut self,
        devices: DeviceMap,
        spans: &[PhaseShiftCfg],
    ) -> Result<(), LinkError> {
        self.push_bulk(devices, Opcode::RfDynamicSet, spans)
    }

    pub fn set_test_source_config(
        &mut self,
        devices: DeviceMap,
        cfg: &TestSourceCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn enable_test_source(
        &mut self,
        devices: DeviceMap,
        cfg: &TestSourceEnable,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn set_gp_adc_config(
        &mut self,
        devices: DeviceMap,
        cfg: &GpAdcCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn set_pa_loopback_config(
        &mut self,
        devices: DeviceMap,
        cfg: &PaLoopbackCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn set_ps_loopback_config(
        &mut self,
        devices: DeviceMap,
        cfg: &PsLoopbackCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    pub fn set_if_loopback_config(
        &mut self,
        devices: DeviceMap,
        cfg: &IfLoopbackCfg,
    ) -> Result<(), LinkError> {
        self.execute_set(devices, Opcode::RfAdvancedSet, cfg)
    }

    // ── Status reports ───────────────────────────────────────────────────

    pub fn get_temperature_report(
        &mut self,
        devices: DeviceMap,
        out: &mut TempReport,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }

    pub fn get_dfe_statistics(
        &mut self,
        devices: DeviceMap,
        out: &mut DfeStatReport,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }

    pub fn get_bootup_status(
        &mut self,
        devices: DeviceMap,
        out: &mut BootStatusReport,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }

    pub fn get_die_id(&mut self, devices: DeviceMap, out: &mut DieIdReport) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }

    pub fn get_cpu_fault(
        &mut self,
        devices: DeviceMap,
        out: &mut CpuFaultReport,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }

    pub fn get_esm_fault(
        &mut self,
        devices: DeviceMap,
        out: &mut EsmFaultReport,
    ) -> Result<(), LinkError> {
        self.execute_get(devices, Opcode::RfStatusGet, &[], out)
    }
}
