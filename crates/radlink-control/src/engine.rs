//! Bulk-transfer engine: chunked writes of record arrays and blobs.
//!
//! Two failure disciplines live here, matching what the device tolerates:
//!
//! - Record arrays are pushed best-effort. Every planned chunk is issued and
//!   the outcome of each is kept, so a caller knows exactly which spans of a
//!   large chirp table did not land.
//! - Blob sequences (calibration images, LUT uploads) short-circuit on the
//!   first failure. Later chunks of an image are meaningless once an earlier
//!   one is lost.
//!
//! Chunks are issued strictly in order within one synchronous call; nothing
//! carries over between calls.

use tracing::debug;
use zerocopy::AsBytes;

use radlink_core::records::Record;
use radlink_core::wire::{DeviceMap, Opcode, SubBlockId, SB_HEADER_SIZE};
use radlink_core::{ChunkFailures, LinkConfig, LinkError, TransactionError};

use crate::planner::ChunkPlan;
use crate::transport::{CommandTransport, Request, Response};

// ── Record sources ───────────────────────────────────────────────────────────

/// A homogeneous set of records to push, addressed by index.
///
/// The two shapes callers actually hold — a contiguous slice and an array of
/// references — both implement this, so the chunk loop exists once.
pub trait RecordSource {
    fn sub_block(&self) -> SubBlockId;
    fn record_size(&self) -> usize;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn record_bytes(&self, index: usize) -> &[u8];
}

impl<R: Record> RecordSource for &[R] {
    fn sub_block(&self) -> SubBlockId {
        R::SUB_BLOCK
    }
    fn record_size(&self) -> usize {
        R::WIRE_SIZE
    }
    fn len(&self) -> usize {
        (**self).len()
    }
    fn record_bytes(&self, index: usize) -> &[u8] {
        self[index].as_bytes()
    }
}

/// An array of references as a record source. A newtype rather than an impl
/// on `&[&R]` directly: a second blanket impl would overlap with the `&[R]`
/// impl under coherence, since downstream crates could implement [`Record`]
/// for a reference type.
pub struct RecordRefs<'a, R>(pub &'a [&'a R]);

impl<R: Record> RecordSource for RecordRefs<'_, R> {
    fn sub_block(&self) -> SubBlockId {
        R::SUB_BLOCK
    }
    fn record_size(&self) -> usize {
        R::WIRE_SIZE
    }
    fn len(&self) -> usize {
        self.0.len()
    }
    fn record_bytes(&self, index: usize) -> &[u8] {
        self.0[index].as_bytes()
    }
}

// ── Failure tally ────────────────────────────────────────────────────────────

/// Collects per-chunk outcomes for the best-effort paths.
pub(crate) struct ChunkTally {
    issued: usize,
    failures: Vec<(usize, TransactionError)>,
}

impl ChunkTally {
    pub(crate) fn new() -> Self {
        Self {
            issued: 0,
            failures: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, chunk: usize, outcome: Result<(), TransactionError>) {
        self.issued += 1;
        if let Err(err) = outcome {
            debug!(chunk, %err, "chunk failed");
            self.failures.push((chunk, err));
        }
    }

    pub(crate) fn into_result(self) -> Result<(), LinkError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(LinkError::ChunkFailures(ChunkFailures {
                issued: self.issued,
                failures: self.failures,
            }))
        }
    }
}

// ── Record arrays (best-effort) ──────────────────────────────────────────────

/// Push a record set, one envelope per record, as many records per
/// transaction as the command capacity allows. Best-effort across chunks.
pub fn push_records<T, S>(
    transport: &mut T,
    cfg: &LinkConfig,
    devices: DeviceMap,
    opcode: Opcode,
    source: S,
) -> Result<(), LinkError>
where
    T: CommandTransport,
    S: RecordSource,
{
    let plan = ChunkPlan::for_records(
        source.record_size(),
        SB_HEADER_SIZE,
        cfg.channel.cmd_payload_max,
        source.len(),
    )?;

    let sub_block = source.sub_block();
    let mut tally = ChunkTally::new();
    let mut offset = 0;
    for (chunk, count) in plan.sizes().enumerate() {
        let mut request = Request::new(opcode);
        for i in 0..count {
            request.push(sub_block, source.record_bytes(offset + i));
        }
        debug!(
            chunk,
            records = count,
            bytes = request.payload_len(),
            "pushing record chunk"
        );
        let mut response = Response::with_expected(0);
        tally.record(chunk, transport.execute(devices, &request, &mut response));
        offset += count;
    }
    tally.into_result()
}

// ── Fixed-count blob chunks (short-circuit) ──────────────────────────────────

/// Push a fixed sequence of chunk records in order, one transaction each,
/// stopping at the first failure. Used for calibration image restore.
pub fn push_fixed_chunks<T, R>(
    transport: &mut T,
    devices: DeviceMap,
    opcode: Opcode,
    chunks: &[R],
) -> Result<(), LinkError>
where
    T: CommandTransport,
    R: Record,
{
    for (chunk, record) in chunks.iter().enumerate() {
        let mut request = Request::new(opcode);
        request.push(R::SUB_BLOCK, record.as_bytes());
        debug!(chunk, total = chunks.len(), "pushing fixed chunk");
        let mut response = Response::with_expected(0);
        transport
            .execute(devices, &request, &mut response)
            .map_err(|source| LinkError::Transaction { chunk, source })?;
    }
    Ok(())
}

/// Pull a fixed sequence of chunk records in order, one transaction each,
/// stopping at the first failure. `make_request` builds the per-chunk read
/// descriptor (chunk id, TX index) sent under the record's own sub-block id.
pub fn pull_fixed_chunks<T, Q, R, F>(
    transport: &mut T,
    devices: DeviceMap,
    opcode: Opcode,
    make_request: F,
    out: &mut [R],
) -> Result<(), LinkError>
where
    T: CommandTransport,
    Q: AsBytes,
    R: Record,
    F: Fn(usize) -> Q,
{
    for chunk in 0..out.len() {
        let descriptor = make_request(chunk);
        let mut request = Request::new(opcode);
        request.push(R::SUB_BLOCK, descriptor.as_bytes());
        debug!(chunk, total = out.len(), "pulling fixed chunk");
        let mut response = Response::with_expected(1);
        response.add_slot(out[chunk].as_bytes_mut());
        transport
            .execute(devices, &request, &mut response)
            .map_err(|source| LinkError::Transaction { chunk, source })?;
    }
    Ok(())
}

// ── Variable-length blobs (short-circuit) ────────────────────────────────────

/// Push a byte blob in `max_chunk`-sized slices, each staged into a
/// transaction-local record by `stage(device_offset, slice)`. The device
/// offset of slice `i` is `base_offset + i * max_chunk`. Stops at the first
/// failure.
pub fn push_blob<T, R, F>(
    transport: &mut T,
    max_chunk: usize,
    devices: DeviceMap,
    opcode: Opcode,
    base_offset: usize,
    blob: &[u8],
    stage: F,
) -> Result<(), LinkError>
where
    T: CommandTransport,
    R: Record,
    F: Fn(usize, &[u8]) -> R,
{
    let plan = ChunkPlan::for_blob(blob.len(), max_chunk)?;

    let mut consumed = 0;
    for (chunk, size) in plan.sizes().enumerate() {
        let record = stage(base_offset + chunk * max_chunk, &blob[consumed..consumed + size]);
        let mut request = Request::new(opcode);
        request.push(R::SUB_BLOCK, record.as_bytes());
        debug!(chunk, bytes = size, "pushing blob chunk");
        let mut response = Response::with_expected(0);
        transport
            .execute(devices, &request, &mut response)
            .map_err(|source| LinkError::Transaction { chunk, source })?;
        consumed += size;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
