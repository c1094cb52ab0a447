//! radlink-core — wire format, record catalog, error taxonomy, and link
//! parameters for the radar control plane.
//!
//! Everything here is transport-independent plain data. The engines and the
//! facade live in `radlink-control`.

pub mod config;
pub mod error;
pub mod records;
pub mod wire;

pub use config::{ConfigError, LinkConfig};
pub use error::{ChunkFailures, LinkError, TransactionError};
pub use records::Record;
pub use wire::{DeviceMap, Opcode, RangeSpan, SubBlockId};
