use crate::*;

use anyhow::Result;
use radlink_control::RadarLink;
use radlink_core::records::*;
use radlink_core::wire::{companion_u32, DeviceMap, Opcode};
use radlink_core::{LinkConfig, LinkError};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// A realistic bring-up: static config, init, profiles, chirps, frame,
/// start. Verifies the transcript's message-class sequence and that the
/// frame write carries its companion apply.
#[test]
fn bring_up_sequence_transcript() -> Result<()> {
    let mut link = new_link();

    let chan = ChanCfg {
        rx_channel_en: 0xF,
        tx_channel_en: 0x7,
        cascading: 0,
        cascading_pin_out: 0,
    };
    link.set_channel_config(DEV, &chan)?;
    link.set_adc_output_config(DEV, &AdcOutCfg::new_zeroed())?;
    link.rf_init(DEV)?;

    let mut profile = ProfileCfg::new_zeroed();
    profile.profile_id = 0;
    profile.num_adc_samples = 256;
    link.set_profile_config(DEV, &[profile])?;

    link.set_chirp_config(DEV, &chirp_table(8))?;

    let mut frame = FrameCfg::new_zeroed();
    frame.chirp_end_idx = 7;
    frame.num_loops = 16;
    frame.num_adc_samples = 256;
    link.set_frame_config(DEV, &frame)?;

    link.sensor_start(DEV)?;

    let opcodes: Vec<Opcode> = link
        .transport()
        .transactions()
        .iter()
        .map(|t| t.opcode)
        .collect();
    assert_eq!(
        opcodes,
        vec![
            Opcode::RfStaticSet,
            Opcode::RfStaticSet,
            Opcode::RfInit,
            Opcode::RfDynamicSet, // profile
            Opcode::RfDynamicSet, // chirps (one chunk)
            Opcode::RfDynamicSet, // frame
            Opcode::DataPathSet,  // companion apply
            Opcode::RfFrameTrigger,
        ]
    );

    let apply =
        FrameApplyCfg::read_from(link.transport().transactions()[6].sub_blocks[0].1.as_ref())
            .unwrap();
    assert_eq!(companion_u32(apply.num_chirps), 8 * 16);
    Ok(())
}

/// An unknown device bit is rejected by every operation category before a
/// single transaction goes out.
#[test]
fn invalid_device_map_rejected_across_the_catalog() {
    let mut link = new_link();
    let bad: DeviceMap = 0b1000;

    assert!(matches!(
        link.set_channel_config(bad, &ChanCfg::new_zeroed()),
        Err(LinkError::InvalidInput(_))
    ));
    assert!(matches!(
        link.set_chirp_config(bad, &chirp_table(4)),
        Err(LinkError::InvalidInput(_))
    ));
    let mut out = vec![radlink_core::records::ChirpCfg::new_zeroed(); 4];
    assert!(matches!(
        link.get_chirp_config(bad, 0, &mut out),
        Err(LinkError::InvalidInput(_))
    ));
    assert!(matches!(
        link.calib_data_restore(bad, &CalibrationData::new_zeroed()),
        Err(LinkError::InvalidInput(_))
    ));
    assert!(matches!(
        link.upload_adv_chirp_lut(bad, 0, &[0u8; 8]),
        Err(LinkError::InvalidInput(_))
    ));
    assert!(matches!(
        link.sensor_stop(bad),
        Err(LinkError::InvalidInput(_))
    ));
    let mut report = TempReport::new_zeroed();
    assert!(matches!(
        link.get_temperature_report(bad, &mut report),
        Err(LinkError::InvalidInput(_))
    ));

    assert_eq!(link.transport().calls(), 0);
}

/// Single-record gets fill the caller's struct from the scripted response.
#[test]
fn single_record_gets_round_trip() {
    let mut link = new_link();

    let die = DieIdReport {
        lot_number: 42,
        wafer_number: 7,
        die_x: 3,
        die_y: 9,
    };
    link.transport_mut().enqueue_ok(vec![die.as_bytes().to_vec()]);

    let mut out = DieIdReport::new_zeroed();
    link.get_die_id(DEV, &mut out).unwrap();
    assert_eq!(out.as_bytes(), die.as_bytes());
}

/// Gain LUT reads send the profile id descriptor and fill the LUT record.
#[test]
fn gain_lut_get_carries_profile_descriptor() {
    let mut link = new_link();
    let mut lut = RxGainLutData::new_zeroed();
    lut.profile_id = 2;
    lut.gain_table = [0x5A; 40];
    link.transport_mut().enqueue_ok(vec![lut.as_bytes().to_vec()]);

    let mut out = RxGainLutData::new_zeroed();
    link.get_rx_gain_lut(DEV, 2, &mut out).unwrap();

    let t = &link.transport().transactions()[0];
    assert_eq!(t.opcode, Opcode::RfDynamicGet);
    assert_eq!(
        u16::from_ne_bytes(t.sub_blocks[0].1[0..2].try_into().unwrap()),
        2
    );
    assert_eq!(out.as_bytes(), lut.as_bytes());
}

/// Advanced frame config: the sequence half goes to the RF subsystem, the
/// data-path half to the companion, scalars converted at the boundary.
#[test]
fn adv_frame_config_splits_across_subsystems() {
    let mut link = new_link();
    let mut cfg = AdvFrameCfg::new_zeroed();
    cfg.sequence.num_sub_frames = 2;
    cfg.data_path.num_sub_frames = 2;
    cfg.data_path.sub_frame_data[0].total_chirps = 128;
    cfg.data_path.sub_frame_data[0].num_adc_samples = 256;

    link.set_adv_frame_config(DEV, &cfg).unwrap();

    let transactions = link.transport().transactions();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].opcode, Opcode::RfDynamicSet);
    assert_eq!(transactions[1].opcode, Opcode::DataPathSet);

    let data = AdvFrameDataCfg::read_from(transactions[1].sub_blocks[0].1.as_ref()).unwrap();
    assert_eq!(companion_u32(data.num_sub_frames), 2);
    let entry = data.sub_frame_data[0];
    assert_eq!(companion_u32(entry.total_chirps), 128);
    assert_eq!(companion_u32(entry.num_adc_samples), 256);
}

/// A shrunken channel capacity (firmware variant) changes the chunk
/// geometry through configuration alone.
#[test]
fn custom_geometry_changes_chunking() {
    let mut cfg = LinkConfig::default();
    cfg.channel.cmd_payload_max = 120; // 5 chirps per chunk
    let mut link = RadarLink::with_config(MockTransport::new(DEV), cfg);

    link.set_chirp_config(DEV, &chirp_table(12)).unwrap();

    let counts: Vec<usize> = link
        .transport()
        .transactions()
        .iter()
        .map(|t| t.sub_blocks.len())
        .collect();
    assert_eq!(counts, vec![5, 5, 2]);
}
