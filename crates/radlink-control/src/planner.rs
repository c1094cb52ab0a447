//! Chunk planning.
//!
//! A plan is pure arithmetic over one call's inputs: how many items fit a
//! transaction, how many full chunks that makes, and how big the tail chunk
//! is. Plans carry no state between calls and make no transport decisions.

use radlink_core::LinkError;

/// The chunk geometry for one transfer.
///
/// Invariants, upheld at construction:
/// - `items_per_chunk * (item_size + overhead) <= capacity`
/// - `full_chunks * items_per_chunk + tail_items == total`
/// - `1 <= tail_items <= items_per_chunk`
///
/// The tail chunk is always issued last; a total that divides evenly still
/// has a tail (of exactly `items_per_chunk`), never a zero-length chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    items_per_chunk: usize,
    full_chunks: usize,
    tail_items: usize,
}

impl ChunkPlan {
    /// Plan a record transfer: each item costs `record_size + overhead`
    /// bytes of the per-transaction `capacity`.
    ///
    /// An item too large for a single transaction is a protocol
    /// configuration mismatch, reported explicitly rather than as a
    /// divide-by-zero downstream.
    pub fn for_records(
        record_size: usize,
        overhead: usize,
        capacity: usize,
        total: usize,
    ) -> Result<Self, LinkError> {
        if total == 0 {
            return Err(LinkError::InvalidInput("nothing to transfer"));
        }
        if record_size + overhead > capacity {
            return Err(LinkError::ProtocolConfig {
                record_size,
                overhead,
                capacity,
            });
        }
        let items_per_chunk = capacity / (record_size + overhead);
        Ok(Self::normalize(items_per_chunk, total))
    }

    /// Plan a blob transfer: byte slices of at most `max_chunk` each.
    pub fn for_blob(total_bytes: usize, max_chunk: usize) -> Result<Self, LinkError> {
        if total_bytes == 0 {
            return Err(LinkError::InvalidInput("nothing to transfer"));
        }
        if max_chunk == 0 {
            return Err(LinkError::ProtocolConfig {
                record_size: 1,
                overhead: 0,
                capacity: 0,
            });
        }
        Ok(Self::normalize(max_chunk, total_bytes))
    }

    fn normalize(items_per_chunk: usize, total: usize) -> Self {
        let mut full_chunks = total / items_per_chunk;
        let mut tail_items = total % items_per_chunk;
        if tail_items == 0 {
            // Even division: the last full chunk is the tail.
            full_chunks -= 1;
            tail_items = items_per_chunk;
        }
        Self {
            items_per_chunk,
            full_chunks,
            tail_items,
        }
    }

    pub fn items_per_chunk(&self) -> usize {
        self.items_per_chunk
    }

    /// Total chunks to issue, tail included.
    pub fn chunk_count(&self) -> usize {
        self.full_chunks + 1
    }

    pub fn tail_items(&self) -> usize {
        self.tail_items
    }

    pub fn total(&self) -> usize {
        self.full_chunks * self.items_per_chunk + self.tail_items
    }

    /// Item counts per chunk, in issue order: full chunks first, the tail
    /// last.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::repeat(self.items_per_chunk)
            .take(self.full_chunks)
            .chain(std::iter::once(self.tail_items))
    }
}
