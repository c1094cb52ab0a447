use crate::*;

use radlink_core::records::{LutChunk, Record};
use radlink_core::wire::{unique_sb_id, Opcode, LUT_CHUNK_MAX};
use radlink_core::{LinkError, TransactionError};

struct StagedChunk {
    offset: u16,
    num_bytes: u16,
    data: Vec<u8>,
}

fn staged_chunks(link: &RadarLink<MockTransport>) -> Vec<StagedChunk> {
    link.transport()
        .transactions()
        .iter()
        .map(|t| {
            let payload = &t.sub_blocks[0].1;
            assert_eq!(payload.len(), LutChunk::WIRE_SIZE);
            StagedChunk {
                offset: u16::from_ne_bytes(payload[0..2].try_into().unwrap()),
                num_bytes: u16::from_ne_bytes(payload[2..4].try_into().unwrap()),
                data: payload[4..].to_vec(),
            }
        })
        .collect()
}

/// An image of exactly three max-size chunks produces exactly three
/// transactions — no zero-length tail chunk.
#[test]
fn exact_multiple_has_no_zero_tail() {
    let mut link = new_link();
    let image: Vec<u8> = (0..3 * LUT_CHUNK_MAX).map(|i| i as u8).collect();

    link.upload_adv_chirp_lut(DEV, 0, &image).unwrap();

    let chunks = staged_chunks(&link);
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| usize::from(c.num_bytes) == LUT_CHUNK_MAX));
}

/// Chunk offsets advance by the maximum chunk size from the caller's base
/// offset, and the valid byte counts cover the image exactly.
#[test]
fn offsets_advance_from_the_base() {
    let mut link = new_link();
    let image: Vec<u8> = (0..500u32).map(|i| i as u8).collect();

    link.upload_adv_chirp_lut(DEV, 0x40, &image).unwrap();

    let chunks = staged_chunks(&link);
    let offsets: Vec<u16> = chunks.iter().map(|c| c.offset).collect();
    let lengths: Vec<usize> = chunks.iter().map(|c| usize::from(c.num_bytes)).collect();
    assert_eq!(offsets, vec![0x40, 0x40 + 212, 0x40 + 424]);
    assert_eq!(lengths, vec![212, 212, 76]);

    // Reassembling the valid regions reproduces the image; the tail's
    // padding is zero.
    let mut reassembled = Vec::new();
    for c in &chunks {
        reassembled.extend_from_slice(&c.data[..usize::from(c.num_bytes)]);
    }
    assert_eq!(reassembled, image);
    let tail = chunks.last().unwrap();
    assert!(tail.data[usize::from(tail.num_bytes)..].iter().all(|&b| b == 0));
}

/// Uploads stop at the first failed chunk.
#[test]
fn upload_short_circuits() {
    let mut link = new_link();
    link.transport_mut().enqueue_ok(vec![]);
    link.transport_mut().enqueue_err(TransactionError::Timeout);

    let image = vec![0xA5u8; 600];
    let err = link.upload_adv_chirp_lut(DEV, 0, &image).unwrap_err();

    assert_eq!(link.transport().calls(), 2);
    assert!(matches!(
        err,
        LinkError::Transaction {
            chunk: 1,
            source: TransactionError::Timeout
        }
    ));
}

/// An image running past the 16-bit LUT address space is rejected before
/// any chunk goes out; a wrapped offset would overwrite low LUT memory.
#[test]
fn image_past_the_address_space_is_rejected() {
    let mut link = new_link();
    let image = vec![0u8; 1024];
    let err = link
        .upload_adv_chirp_lut(DEV, u16::MAX - 100, &image)
        .unwrap_err();
    assert!(matches!(err, LinkError::InvalidInput(_)));
    assert_eq!(link.transport().calls(), 0);

    // An image ending exactly at the last address is still accepted.
    link.upload_adv_chirp_lut(DEV, u16::MAX - 99, &image[..100])
        .unwrap();
    let chunks = staged_chunks(&link);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].offset, u16::MAX - 99);
    assert_eq!(chunks[0].num_bytes, 100);
}

/// An empty image is rejected before the transport sees anything.
#[test]
fn empty_image_is_invalid_input() {
    let mut link = new_link();
    let err = link.upload_adv_chirp_lut(DEV, 0, &[]).unwrap_err();
    assert!(matches!(err, LinkError::InvalidInput(_)));
    assert_eq!(link.transport().calls(), 0);
}

/// Small images still go out as one staged chunk under the LUT binding.
#[test]
fn single_chunk_upload_carries_the_binding() {
    let mut link = new_link();
    link.upload_adv_chirp_lut(DEV, 8, &[1, 2, 3, 4]).unwrap();

    assert_eq!(link.transport().calls(), 1);
    let t = &link.transport().transactions()[0];
    assert_eq!(
        t.sub_blocks[0].0,
        unique_sb_id(Opcode::RfDynamicSet, LutChunk::SUB_BLOCK)
    );
    let chunks = staged_chunks(&link);
    assert_eq!(chunks[0].offset, 8);
    assert_eq!(chunks[0].num_bytes, 4);
    assert_eq!(&chunks[0].data[..4], &[1, 2, 3, 4]);
}
