//! Radlink integration harness.
//!
//! Every test drives the public facade end to end against the scripted
//! [`MockTransport`], asserting on the recorded transaction transcript:
//! message classes, envelope ids, chunk geometry, and payload bytes.
//! No hardware or privileged environment is required.

mod calibration;
mod facade;
mod lut;
mod range;

use radlink_control::mock::MockTransport;
use radlink_control::RadarLink;
use radlink_core::records::ChirpCfg;
use radlink_core::wire::DeviceMap;
use zerocopy::FromZeroes;

// ── Harness ───────────────────────────────────────────────────────────────────

/// The device population every test transport reaches.
pub const DEV: DeviceMap = 0b0001;

pub fn new_link() -> RadarLink<MockTransport> {
    RadarLink::new(MockTransport::new(DEV))
}

/// A chirp table whose rows are identifiable by index.
pub fn chirp_table(n: usize) -> Vec<ChirpCfg> {
    (0..n)
        .map(|i| {
            let mut chirp = ChirpCfg::new_zeroed();
            chirp.chirp_start_idx = i as u16;
            chirp.chirp_end_idx = i as u16;
            chirp.profile_id = (i % 4) as u16;
            chirp
        })
        .collect()
}
