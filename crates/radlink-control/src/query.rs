//! Range-query engine: chunked reads of indexed record sets.
//!
//! A read request carries one inclusive [`RangeSpan`] descriptor; the device
//! answers with that many records packed into a single response sub-block.
//! Large spans are split against the response capacity and issued
//! best-effort, like record-array writes.
//!
//! Chunk-order convention: full chunks first, the remainder chunk last. The
//! span advancement and the output-slice offsets both follow it, so each
//! response lands at the buffer offset matching its indices and the filled
//! buffer is contiguous and in index order.

use tracing::debug;
use zerocopy::AsBytes;

use radlink_core::records::Record;
use radlink_core::wire::{DeviceMap, Opcode, RangeSpan, SB_HEADER_SIZE};
use radlink_core::{LinkConfig, LinkError};

use crate::engine::ChunkTally;
use crate::planner::ChunkPlan;
use crate::transport::{CommandTransport, Request, Response};

/// Read `out.len()` records starting at index `start` into `out`.
///
/// Every planned chunk is issued even after a failure; a failed chunk leaves
/// its span of `out` untouched, and the typed failure list says which spans
/// those are.
pub fn pull_records<T, R>(
    transport: &mut T,
    cfg: &LinkConfig,
    devices: DeviceMap,
    opcode: Opcode,
    start: u16,
    out: &mut [R],
) -> Result<(), LinkError>
where
    T: CommandTransport,
    R: Record,
{
    // Spans are 16-bit on the wire; the whole request must fit the index
    // space before any arithmetic on it.
    if usize::from(start) + out.len() > usize::from(u16::MAX) + 1 {
        return Err(LinkError::InvalidInput(
            "requested span exceeds the 16-bit index space",
        ));
    }

    // One range descriptor per request; records themselves travel without
    // per-item envelopes in the response.
    let capacity = cfg.channel.resp_payload_max.saturating_sub(SB_HEADER_SIZE);
    let plan = ChunkPlan::for_records(R::WIRE_SIZE, 0, capacity, out.len())?;

    let mut tally = ChunkTally::new();
    let mut filled = 0;
    for (chunk, count) in plan.sizes().enumerate() {
        // Guarded above: first + count - 1 fits in u16 even for a span
        // ending at the last index.
        let first = usize::from(start) + filled;
        let span = RangeSpan::new(first as u16, (first + count - 1) as u16);
        let mut request = Request::new(opcode);
        request.push(R::SUB_BLOCK, span.as_bytes());

        let dest = &mut out[filled..filled + count];
        let mut response = Response::with_expected(1);
        response.add_slot(dest.as_bytes_mut());

        debug!(chunk, records = count, start = first, "pulling range chunk");
        tally.record(chunk, transport.execute(devices, &request, &mut response));

        filled += count;
    }
    tally.into_result()
}
