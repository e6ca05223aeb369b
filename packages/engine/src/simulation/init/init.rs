use crate::core::log::{log_info, log_warn};
use crate::domain::config::PhysicsConfig;
use crate::spatial::grid::TileGrid;
use crate::spatial::query::BlockSource;
use crate::systems::body_system::BodySystem;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(grid: TileGrid) -> WorldCore {
    WorldCore {
        grid,
        bodies: BodySystem::new(),
        config: PhysicsConfig::default(),
        frame: 0,
        last_events: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn load_level_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let grid = match TileGrid::from_level_json(json) {
        Ok(grid) => grid,
        Err(e) => {
            log_warn(&format!("level rejected: {}", e));
            return Err(e);
        }
    };
    log_info(&format!(
        "level loaded: {}x{} cells of {}x{}",
        grid.cols(),
        grid.rows(),
        grid.cell_width(),
        grid.cell_height()
    ));
    world.grid = grid;
    world.clear();
    Ok(())
}
