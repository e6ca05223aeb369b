use crate::core::log::log_warn;
use crate::domain::blocks::BlockKind;
use crate::domain::config::PhysicsConfig;
use crate::spatial::query::BlockSource;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let config = PhysicsConfig::from_json(json).map_err(|e| {
        log_warn(&format!("config rejected: {}", e));
        e
    })?;
    world.config = config;
    Ok(())
}

pub(super) fn set_config(world: &mut WorldCore, config: PhysicsConfig) -> Result<(), String> {
    if let Err(e) = config.validate() {
        log_warn(&format!("config rejected: {}", e));
        return Err(e);
    }
    world.config = config;
    Ok(())
}

pub(super) fn set_block(world: &mut WorldCore, col: i32, row: i32, code: u8) -> bool {
    match BlockKind::from_code(code) {
        Some(kind) => world.grid.set_block(col, row, kind),
        None => false,
    }
}

pub(super) fn fill_rect(world: &mut WorldCore, col0: i32, row0: i32, col1: i32, row1: i32, code: u8) -> bool {
    let Some(kind) = BlockKind::from_code(code) else {
        return false;
    };
    world.grid.fill_rect(col0, row0, col1, row1, kind);
    true
}

pub(super) fn block_at(world: &WorldCore, col: i32, row: i32) -> u8 {
    world.grid.block_at(col, row).code()
}
