use crate::*;

use radlink_core::records::ChirpCfg;
use radlink_core::wire::RangeSpan;
use radlink_core::{LinkConfig, LinkError, TransactionError};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

fn request_spans(link: &RadarLink<MockTransport>) -> Vec<(u16, u16)> {
    link.transport()
        .transactions()
        .iter()
        .map(|t| {
            let span = RangeSpan::read_from(t.sub_blocks[0].1.as_ref()).unwrap();
            let start = span.start;
            let end = span.end;
            (start, end)
        })
        .collect()
}

/// Reading the whole 1024-entry chirp table: ceil(1024/11) chunks, each
/// span's width matching its chunk, spans covering 0..=1023 contiguously.
#[test]
fn full_table_read_covers_the_index_space() {
    let mut link = new_link();
    let mut out = vec![ChirpCfg::new_zeroed(); 1024];

    link.get_chirp_config(DEV, 0, &mut out).unwrap();

    // 20-byte records in a 236-byte response window: 11 per chunk.
    let spans = request_spans(&link);
    assert_eq!(spans.len(), (1024 + 10) / 11);

    let mut expected_start = 0u16;
    for &(start, end) in &spans {
        assert_eq!(start, expected_start);
        assert!(end >= start);
        expected_start = end + 1;
    }
    assert_eq!(spans.last().unwrap().1, 1023);

    // Every chunk but the tail is full.
    for &(start, end) in &spans[..spans.len() - 1] {
        assert_eq!(usize::from(end - start) + 1, 11);
    }
}

/// A response window holding 128 chirps per chunk divides 1024 evenly:
/// exactly 8 full spans, no short tail, covering 0..=1023.
#[test]
fn even_division_read_has_no_short_tail() {
    let mut cfg = LinkConfig::default();
    // 128 20-byte chirps plus the descriptor envelope.
    cfg.channel.resp_payload_max = 128 * 20 + 4;
    let mut link = RadarLink::with_config(MockTransport::new(DEV), cfg);

    let mut out = vec![ChirpCfg::new_zeroed(); 1024];
    link.get_chirp_config(DEV, 0, &mut out).unwrap();

    let spans = request_spans(&link);
    assert_eq!(spans.len(), 8);
    for (i, &(start, end)) in spans.iter().enumerate() {
        assert_eq!(start, i as u16 * 128);
        assert_eq!(end, start + 127);
    }
    assert_eq!(spans.last(), Some(&(896, 1023)));
}

/// The remainder chunk is issued last, never first. A remainder-first
/// convention would put the short span at the head of the transcript.
#[test]
fn remainder_chunk_is_issued_last() {
    let mut link = new_link();
    // 25 = 2 * 11 + 3
    let mut out = vec![ChirpCfg::new_zeroed(); 25];

    link.get_chirp_config(DEV, 200, &mut out).unwrap();

    let spans = request_spans(&link);
    let widths: Vec<usize> = spans
        .iter()
        .map(|&(start, end)| usize::from(end - start) + 1)
        .collect();
    assert_eq!(widths, vec![11, 11, 3]);
    assert_eq!(spans, vec![(200, 210), (211, 221), (222, 224)]);
}

/// Scripted responses land at the buffer offsets matching their indices:
/// the filled buffer is contiguous and in index order.
#[test]
fn responses_fill_the_buffer_in_index_order() {
    let mut link = new_link();
    for (call, count) in [(1u16, 11usize), (2, 11), (3, 3)] {
        let mut payload = Vec::new();
        for i in 0..count {
            let mut rec = ChirpCfg::new_zeroed();
            rec.profile_id = call;
            rec.chirp_start_idx = i as u16;
            payload.extend_from_slice(rec.as_bytes());
        }
        link.transport_mut().enqueue_ok(vec![payload]);
    }

    let mut out = vec![ChirpCfg::new_zeroed(); 25];
    link.get_chirp_config(DEV, 0, &mut out).unwrap();

    let chunk_tags: Vec<u16> = out
        .iter()
        .map(|c| {
            let tag = c.profile_id;
            tag
        })
        .collect();
    let mut expected = vec![1u16; 11];
    expected.extend(vec![2u16; 11]);
    expected.extend(vec![3u16; 3]);
    assert_eq!(chunk_tags, expected);
}

/// Range reads are best-effort: a failed chunk is reported with its index
/// but the remaining spans are still requested.
#[test]
fn failed_span_does_not_stop_the_read() {
    let mut link = new_link();
    link.transport_mut().enqueue_ok(vec![]);
    link.transport_mut()
        .enqueue_err(TransactionError::Verification);

    let mut out = vec![ChirpCfg::new_zeroed(); 25];
    let err = link.get_chirp_config(DEV, 0, &mut out).unwrap_err();

    assert_eq!(link.transport().calls(), 3);
    match err {
        LinkError::ChunkFailures(failures) => {
            assert_eq!(failures.issued, 3);
            assert_eq!(failures.failures, vec![(1, TransactionError::Verification)]);
        }
        other => panic!("expected ChunkFailures, got {other:?}"),
    }
}
