//! World - tick driver over a tile grid and its bodies
//!
//! WorldCore only orchestrates:
//! - the grid lives in spatial/grid
//! - per-body collision in systems/collision
//! - steering and motion in systems/steering, systems/motion
//! - the per-tick loop over all bodies in systems/body_system
//!
//! `World` (facade.rs) is the wasm-bindgen surface over WorldCore.

use crate::domain::config::PhysicsConfig;
use crate::spatial::grid::TileGrid;
use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;
use crate::systems::body_system::{BodySystem, TickEvent};
use crate::systems::steering::Steering;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: TileGrid,
    bodies: BodySystem,
    config: PhysicsConfig,

    // State
    frame: u64,
    last_events: Vec<TickEvent>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty (all air) world of `cols` x `rows` cells
    pub fn new(cols: u32, rows: u32, cell_width: f64, cell_height: f64) -> Self {
        init::create_world_core(TileGrid::new(cols, rows, cell_width, cell_height))
    }

    pub fn from_grid(grid: TileGrid) -> Self {
        init::create_world_core(grid)
    }

    /// Replace the grid from a level bundle. Bodies are dropped.
    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        init::load_level_json(self, json)
    }

    /// Replace the physics config. The old config stays if the new one is rejected.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols() as u32
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows() as u32
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Set one cell from a block code. Unknown codes and out-of-range cells are ignored.
    pub fn set_block(&mut self, col: i32, row: i32, code: u8) -> bool {
        settings::set_block(self, col, row, code)
    }

    pub fn fill_rect(&mut self, col0: i32, row0: i32, col1: i32, row1: i32, code: u8) -> bool {
        settings::fill_rect(self, col0, row0, col1, row1, code)
    }

    /// Block code at a cell (air outside the grid)
    pub fn block_at(&self, col: i32, row: i32) -> u8 {
        settings::block_at(self, col, row)
    }

    // === BODY API ===

    /// Spawn a passive body. Returns its ID, or 0 if it could not be placed.
    pub fn spawn_body(&mut self, x: f64, y: f64, w: f64, h: f64) -> u32 {
        bodies::spawn_body(self, PhysicsBody::new(x, y, w, h), None)
    }

    /// Spawn a body driven by `steering`. Returns its ID, or 0 if it could not be placed.
    pub fn spawn_agent(&mut self, x: f64, y: f64, w: f64, h: f64, steering: Steering) -> u32 {
        bodies::spawn_body(self, PhysicsBody::new(x, y, w, h), Some(steering))
    }

    pub fn spawn_agent_json(&mut self, x: f64, y: f64, w: f64, h: f64, steering_json: &str) -> Result<u32, String> {
        bodies::spawn_agent_json(self, x, y, w, h, steering_json)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        bodies::remove_body(self, id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.body_count()
    }

    pub fn body(&self, id: u32) -> Option<PhysicsBody> {
        self.bodies.get(id).map(|e| e.body)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f64, vy: f64) -> bool {
        bodies::set_body_velocity(self, id, vx, vy)
    }

    pub fn is_body_submerged(&self, id: u32) -> bool {
        bodies::is_body_submerged(self, id)
    }

    /// All bodies as `[{ id, body: { x, y, ... } }]`
    pub fn bodies_json(&self) -> String {
        bodies::bodies_json(self)
    }

    /// Events from the last step
    pub fn last_events(&self) -> &[TickEvent] {
        &self.last_events
    }

    pub fn events_json(&self) -> String {
        bodies::events_json(self)
    }

    /// Drop all bodies and restart the frame counter. The grid is kept.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.last_events.clear();
        self.frame = 0;
    }

    /// Advance every body by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
