//! radlink-control — transport seam, chunk planning, transfer engines, and
//! the configuration facade for the radar control plane.
//!
//! The typical entry point is [`RadarLink`] over a [`CommandTransport`]
//! implementation; [`mock::MockTransport`] is a scripted double for tests
//! and transport bring-up.

pub mod engine;
pub mod link;
pub mod mock;
pub mod planner;
pub mod query;
pub mod transport;

pub use link::RadarLink;
pub use planner::ChunkPlan;
pub use transport::{CommandTransport, Request, Response, SubBlock};
