//! Scripted transport double.
//!
//! Records every transaction (device map, message class, envelope ids,
//! payload bytes) and replays scripted outcomes in order. The default
//! outcome for an unscripted transaction is success with untouched response
//! slots, so set-heavy tests only script the interesting calls.
//!
//! Public rather than test-gated: downstream crates integrating a real
//! transport use it to characterize facade behavior.

use std::collections::VecDeque;

use bytes::Bytes;
use radlink_core::wire::{DeviceMap, Opcode};
use radlink_core::TransactionError;

use crate::transport::{CommandTransport, Request, Response};

/// One transaction as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedTransaction {
    pub devices: DeviceMap,
    pub opcode: Opcode,
    /// Envelope id and payload of every sub-block, in request order.
    pub sub_blocks: Vec<(u16, Bytes)>,
}

#[derive(Debug, Clone)]
enum ScriptedReply {
    /// Response sub-block payloads, copied into the slots in order.
    Ok(Vec<Bytes>),
    Err(TransactionError),
}

#[derive(Debug, Default)]
pub struct MockTransport {
    valid_devices: DeviceMap,
    log: Vec<RecordedTransaction>,
    script: VecDeque<ScriptedReply>,
}

impl MockTransport {
    /// A transport reaching exactly the devices in `valid_devices`.
    pub fn new(valid_devices: DeviceMap) -> Self {
        Self {
            valid_devices,
            log: Vec::new(),
            script: VecDeque::new(),
        }
    }

    /// Script the next transaction to succeed with these response payloads.
    pub fn enqueue_ok(&mut self, payloads: Vec<Vec<u8>>) {
        self.script
            .push_back(ScriptedReply::Ok(payloads.into_iter().map(Bytes::from).collect()));
    }

    /// Script the next transaction to fail.
    pub fn enqueue_err(&mut self, err: TransactionError) {
        self.script.push_back(ScriptedReply::Err(err));
    }

    /// Number of transactions executed so far.
    pub fn calls(&self) -> usize {
        self.log.len()
    }

    pub fn transactions(&self) -> &[RecordedTransaction] {
        &self.log
    }
}

impl CommandTransport for MockTransport {
    fn is_valid_device_map(&self, devices: DeviceMap) -> bool {
        devices != 0 && devices & !self.valid_devices == 0
    }

    fn execute(
        &mut self,
        devices: DeviceMap,
        request: &Request<'_>,
        response: &mut Response<'_>,
    ) -> Result<(), TransactionError> {
        self.log.push(RecordedTransaction {
            devices,
            opcode: request.opcode(),
            sub_blocks: request
                .sub_blocks()
                .iter()
                .map(|sb| (sb.id, Bytes::copy_from_slice(sb.payload)))
                .collect(),
        });

        match self.script.pop_front() {
            None => Ok(()),
            Some(ScriptedReply::Err(err)) => Err(err),
            Some(ScriptedReply::Ok(payloads)) => {
                for (slot, payload) in response.slots_mut().iter_mut().zip(payloads.iter()) {
                    let n = slot.len().min(payload.len());
                    slot[..n].copy_from_slice(&payload[..n]);
                }
                Ok(())
            }
        }
    }
}
