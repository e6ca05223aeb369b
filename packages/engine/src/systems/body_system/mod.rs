//! BodySystem - owns every simulated body and drives one tick for all of them
//!
//! Per tick:
//! - snapshot all positions
//! - steering + separation from the snapshot, then gravity/damping
//! - one resolver call per body (in parallel with the `parallel` feature;
//!   calls only read the grid and write their own body)
//! - ground tracking, world bounds, tick events

mod placement;
mod system;

pub use system::{BodyEntry, BodySystem, TickEvent, TickStats};
