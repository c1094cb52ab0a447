//! Error taxonomy for the control plane.
//!
//! Everything here is recoverable by the caller. Multi-chunk writes are not
//! transactional: a failed chunk leaves earlier chunks applied on the device,
//! and the caller decides whether to retry or reconfigure.

use thiserror::Error;

/// Outcome of one command/response transaction, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The device acknowledged the command with a non-zero status code.
    #[error("device returned status {0}")]
    Device(i32),

    /// No response within the transport's timeout.
    #[error("transaction timed out")]
    Timeout,

    /// Response framing or checksum did not verify.
    #[error("response failed verification")]
    Verification,

    /// Channel-level I/O failure.
    #[error("transport i/o: {0}")]
    Io(String),
}

/// Aggregate outcome of a best-effort multi-chunk transfer.
///
/// Every planned chunk is issued regardless of earlier failures; this type
/// reports exactly which chunks failed and how. Earlier firmware-library
/// ports folded per-chunk status codes into one arithmetic sum, which could
/// cancel to zero across chunks and report success for a partially failed
/// transfer — keep the per-chunk list intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} of {} chunks failed", .failures.len(), .issued)]
pub struct ChunkFailures {
    /// Total chunks issued (failed or not).
    pub issued: usize,
    /// Failed chunks, as (chunk index, transaction error), in issue order.
    pub failures: Vec<(usize, TransactionError)>,
}

impl ChunkFailures {
    /// The legacy all-or-nothing view of the transfer.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Top-level error for every control-plane operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Caller input rejected before any transaction was issued: empty record
    /// set, zero-length blob, mismatched output length, or a device map the
    /// transport does not recognize.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A record cannot fit a single chunk: its wire size plus envelope
    /// overhead exceeds the channel payload capacity. Indicates a protocol
    /// configuration mismatch, not bad caller data.
    #[error("record size {record_size} + envelope {overhead} exceeds channel capacity {capacity}")]
    ProtocolConfig {
        record_size: usize,
        overhead: usize,
        capacity: usize,
    },

    /// A short-circuiting sequence stopped at the given chunk. Chunks before
    /// it were applied; chunks after it were never issued.
    #[error("transaction failed at chunk {chunk}: {source}")]
    Transaction {
        chunk: usize,
        source: TransactionError,
    },

    /// A best-effort sequence completed with failures.
    #[error(transparent)]
    ChunkFailures(#[from] ChunkFailures),
}
