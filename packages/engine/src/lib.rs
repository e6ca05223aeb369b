//! Tilestep Engine - deterministic tile-grid collision for platformer entities
//!
//! Architecture:
//! - core/       - logging
//! - domain/     - block kinds, physics config
//! - spatial/    - tile grid and grid queries
//! - systems/    - collision resolver, motion, steering, per-tick body loop
//! - simulation/ - WorldCore orchestration and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool init for the parallel resolve phase in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

pub use domain::blocks::BlockKind;
pub use domain::config::PhysicsConfig;
pub use simulation::{PerfStats, World, WorldCore};
pub use spatial::grid::TileGrid;
pub use spatial::query::BlockSource;
pub use systems::body::PhysicsBody;
pub use systems::body_system::{BodySystem, TickEvent};
pub use systems::collision::{resolve, track_ground, CollisionResult, Resolver, StepTier};
pub use systems::steering::{Agent, Steering};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::log_info(&format!("engine {} initialized", env!("CARGO_PKG_VERSION")));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export block codes for JS
#[wasm_bindgen]
pub fn block_air() -> u8 { domain::blocks::BLOCK_AIR }
#[wasm_bindgen]
pub fn block_solid() -> u8 { domain::blocks::BLOCK_SOLID }
#[wasm_bindgen]
pub fn block_water() -> u8 { domain::blocks::BLOCK_WATER }
#[wasm_bindgen]
pub fn block_slope_up_right() -> u8 { domain::blocks::BLOCK_SLOPE_UP_RIGHT }
#[wasm_bindgen]
pub fn block_slope_up_left() -> u8 { domain::blocks::BLOCK_SLOPE_UP_LEFT }
