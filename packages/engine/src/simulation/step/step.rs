use crate::spatial::query::BlockSource;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on {
        world.perf_stats.reset();
        Some(PerfTimer::start())
    } else {
        None
    };

    let (events, stats) = world.bodies.update(&world.grid, &world.config, world.frame);
    world.last_events = events;
    world.frame = world.frame.wrapping_add(1);

    if let Some(t0) = step_start {
        let perf = &mut world.perf_stats;
        perf.step_ms = t0.elapsed_ms();
        perf.bodies = world.bodies.body_count() as u32;
        perf.resolve_calls = stats.counters.resolve_calls.min(u32::MAX as u64) as u32;
        perf.cells_probed = stats.counters.cells_probed.min(u32::MAX as u64) as u32;
        perf.invalid_bodies = stats.counters.invalid_bodies.min(u32::MAX as u64) as u32;
        perf.collisions = stats.collisions;
        perf.step_ups = stats.step_ups;
        perf.respawns = stats.respawns;
        perf.grid_cells = (world.grid.cols() as u32).saturating_mul(world.grid.rows() as u32);
    }
}
