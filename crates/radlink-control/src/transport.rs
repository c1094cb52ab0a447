//! Transport seam — the one collaborator this library does not implement.
//!
//! The physical round trip (framing, checksumming, SPI or mailbox access,
//! retries, timeouts) lives behind [`CommandTransport`]. This module owns the
//! message shapes handed across that seam: a [`Request`] carrying tagged
//! sub-block envelopes and a [`Response`] carrying the caller-owned
//! destinations the transport writes into. The engines only ever inspect the
//! transaction result.

use radlink_core::wire::{unique_sb_id, DeviceMap, Opcode, SubBlockId, MAX_SB_PER_MSG, SB_HEADER_SIZE};
use radlink_core::TransactionError;

/// One tagged, length-prefixed payload within a request.
#[derive(Debug, Clone, Copy)]
pub struct SubBlock<'a> {
    /// Globally unique envelope id ([`unique_sb_id`] of class and catalog id).
    pub id: u16,
    /// Payload length in bytes.
    pub len: u16,
    pub payload: &'a [u8],
}

/// Command message for one transaction: a message class plus the sub-block
/// envelopes going out with it. Built fresh per chunk; never reused.
#[derive(Debug)]
pub struct Request<'a> {
    opcode: Opcode,
    sub_blocks: Vec<SubBlock<'a>>,
    payload_len: usize,
}

impl<'a> Request<'a> {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            sub_blocks: Vec::new(),
            payload_len: 0,
        }
    }

    /// Append one envelope. Stamps the class-unique id and the payload
    /// length; the caller has already sized payloads against capacity.
    /// Catalog ids are class-relative and stay below the stride.
    pub fn push(&mut self, sb: SubBlockId, payload: &'a [u8]) {
        debug_assert!(sb.0 < MAX_SB_PER_MSG);
        self.sub_blocks.push(SubBlock {
            id: unique_sb_id(self.opcode, sb),
            len: payload.len() as u16,
            payload,
        });
        self.payload_len += SB_HEADER_SIZE + payload.len();
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn sub_blocks(&self) -> &[SubBlock<'a>] {
        &self.sub_blocks
    }

    /// Total on-wire payload: envelopes plus their payloads.
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }
}

/// Destination side of one transaction. Each slot is a caller-owned byte
/// range the transport fills with the matching response sub-block payload.
/// A set-style transaction carries no slots; the device answers with status
/// only.
#[derive(Debug, Default)]
pub struct Response<'a> {
    slots: Vec<&'a mut [u8]>,
}

impl<'a> Response<'a> {
    pub fn with_expected(sub_blocks: usize) -> Self {
        Self {
            slots: Vec::with_capacity(sub_blocks),
        }
    }

    pub fn add_slot(&mut self, dest: &'a mut [u8]) {
        self.slots.push(dest);
    }

    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    pub fn slots_mut(&mut self) -> &mut [&'a mut [u8]] {
        &mut self.slots
    }
}

/// The command/response channel to the device(s).
///
/// Implementations are synchronous and own their timeout policy. `execute`
/// performs exactly one round trip: serialize the request, collect the
/// response, write response sub-block payloads into the slots in order.
pub trait CommandTransport {
    /// Whether every bit in `devices` addresses a device this transport
    /// actually reaches. Checked by the facade before any transaction.
    fn is_valid_device_map(&self, devices: DeviceMap) -> bool;

    /// One blocking command/response round trip.
    fn execute(
        &mut self,
        devices: DeviceMap,
        request: &Request<'_>,
        response: &mut Response<'_>,
    ) -> Result<(), TransactionError>;
}
