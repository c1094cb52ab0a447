use crate::*;

use radlink_core::records::{CalChunk, CalibrationData, PhShiftCalibrationData};
use radlink_core::wire::{Opcode, CALIB_CHUNK_COUNT};
use radlink_core::{LinkError, TransactionError};
use zerocopy::{AsBytes, FromZeroes};

fn scripted_image() -> CalibrationData {
    let mut image = CalibrationData::new_zeroed();
    for (i, chunk) in image.chunks.iter_mut().enumerate() {
        chunk.num_chunks = CALIB_CHUNK_COUNT as u16;
        chunk.chunk_id = i as u16;
        for (j, byte) in chunk.data.iter_mut().enumerate() {
            *byte = (i * 31 + j) as u8;
        }
    }
    image
}

/// Store pulls the calibration image off the device; restore pushes the
/// same struct back. The restored wire payloads are byte-for-byte what the
/// device handed out during store.
#[test]
fn store_then_restore_round_trips_byte_for_byte() {
    let device_image = scripted_image();

    let mut link = new_link();
    for chunk in &device_image.chunks {
        link.transport_mut()
            .enqueue_ok(vec![chunk.as_bytes().to_vec()]);
    }

    let mut stored = CalibrationData::new_zeroed();
    link.calib_data_store(DEV, &mut stored).unwrap();
    assert_eq!(link.transport().calls(), CALIB_CHUNK_COUNT);
    assert_eq!(stored.as_bytes(), device_image.as_bytes());

    // Push the stored image back and compare the outgoing payloads.
    let mut link = new_link();
    link.calib_data_restore(DEV, &stored).unwrap();

    let transactions = link.transport().transactions();
    assert_eq!(transactions.len(), CALIB_CHUNK_COUNT);
    for (i, t) in transactions.iter().enumerate() {
        assert_eq!(t.opcode, Opcode::RfStaticSet);
        assert_eq!(t.sub_blocks.len(), 1);
        assert_eq!(t.sub_blocks[0].1.as_ref(), device_image.chunks[i].as_bytes());
    }
}

/// Store requests ascend: chunk ids 0, 1, 2 in order.
#[test]
fn store_requests_ascending_chunk_ids() {
    let mut link = new_link();
    let mut out = CalibrationData::new_zeroed();
    link.calib_data_store(DEV, &mut out).unwrap();

    let ids: Vec<u16> = link
        .transport()
        .transactions()
        .iter()
        .map(|t| u16::from_ne_bytes(t.sub_blocks[0].1[0..2].try_into().unwrap()))
        .collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

/// A restore whose second chunk fails returns immediately: exactly two
/// transactions, the error naming chunk 1, chunk 2 never issued.
#[test]
fn restore_short_circuits_on_second_chunk() {
    let mut link = new_link();
    link.transport_mut().enqueue_ok(vec![]);
    link.transport_mut().enqueue_err(TransactionError::Device(-2));

    let image = scripted_image();
    let err = link.calib_data_restore(DEV, &image).unwrap_err();

    assert_eq!(link.transport().calls(), 2);
    assert!(matches!(
        err,
        LinkError::Transaction {
            chunk: 1,
            source: TransactionError::Device(-2)
        }
    ));
}

/// Store also short-circuits: a chunk the device refuses to hand out stops
/// the sequence.
#[test]
fn store_short_circuits_on_failure() {
    let mut link = new_link();
    link.transport_mut().enqueue_err(TransactionError::Timeout);

    let mut out = CalibrationData::new_zeroed();
    let err = link.calib_data_store(DEV, &mut out).unwrap_err();

    assert_eq!(link.transport().calls(), 1);
    assert!(matches!(err, LinkError::Transaction { chunk: 0, .. }));
}

/// Phase-shifter calibration reads one chunk per TX channel, with the
/// channel index in each request descriptor.
#[test]
fn phase_shift_store_walks_the_tx_channels() {
    let mut link = new_link();
    let mut out = PhShiftCalibrationData::new_zeroed();
    link.phase_shift_calib_store(DEV, &mut out).unwrap();

    let tx_indices: Vec<u8> = link
        .transport()
        .transactions()
        .iter()
        .map(|t| t.sub_blocks[0].1[0])
        .collect();
    assert_eq!(tx_indices, vec![0, 1, 2]);
    for t in link.transport().transactions() {
        assert_eq!(t.opcode, Opcode::RfStaticGet);
    }
}

/// Phase-shifter restore raises the apply flag on the last chunk only, and
/// carries each channel's payload unchanged.
#[test]
fn phase_shift_restore_round_trip() {
    let mut device_data = PhShiftCalibrationData::new_zeroed();
    for (i, chunk) in device_data.chunks.iter_mut().enumerate() {
        chunk.tx_index = i as u8;
        for (j, byte) in chunk.data.iter_mut().enumerate() {
            *byte = (i * 7 + j) as u8;
        }
    }

    let mut link = new_link();
    for chunk in &device_data.chunks {
        link.transport_mut()
            .enqueue_ok(vec![chunk.as_bytes().to_vec()]);
    }
    let mut stored = PhShiftCalibrationData::new_zeroed();
    link.phase_shift_calib_store(DEV, &mut stored).unwrap();
    assert_eq!(stored.as_bytes(), device_data.as_bytes());

    let mut link = new_link();
    link.phase_shift_calib_restore(DEV, &stored).unwrap();

    let transactions = link.transport().transactions();
    assert_eq!(transactions.len(), 3);
    for (i, t) in transactions.iter().enumerate() {
        let payload = &t.sub_blocks[0].1;
        assert_eq!(payload[0], i as u8, "tx_index");
        assert_eq!(payload[1], u8::from(i == 2), "calib_apply");
        // Data bytes follow the 4-byte chunk header unchanged.
        assert_eq!(&payload[4..], &device_data.chunks[i].data[..]);
    }
}

/// CalChunk wire layout sanity: id fields precede the data region.
#[test]
fn cal_chunk_layout_is_stable() {
    let mut chunk = CalChunk::new_zeroed();
    chunk.num_chunks = 3;
    chunk.chunk_id = 2;
    chunk.data[0] = 0xEE;
    let bytes = chunk.as_bytes();
    assert_eq!(bytes.len(), 228);
    assert_eq!(u16::from_ne_bytes(bytes[2..4].try_into().unwrap()), 2);
    assert_eq!(bytes[4], 0xEE);
}
