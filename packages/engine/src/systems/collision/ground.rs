//! Ground-state tracking
//!
//! The sweep only sees ground when the body asks to move down. A body standing
//! still would never re-confirm contact, so a short probe under the feet runs
//! whenever the sweep did not already land it.

use crate::domain::config::PhysicsConfig;
use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;

use super::sweep::cell_span;
use super::types::CollisionResult;

/// Probe `ground_probe_distance` below the feet at the left edge, centre and
/// right edge. On contact the body counts as grounded; unless it is moving up
/// it is also settled onto the surface and loses any downward velocity.
pub(crate) fn confirm_ground<G: BlockSource + ?Sized>(
    grid: &G,
    cfg: &PhysicsConfig,
    body: &mut PhysicsBody,
    probes: &mut u64,
) -> bool {
    let eps = cfg.epsilon;
    let ch = grid.cell_height();
    let bottom = body.bottom();
    let probe_y = bottom + cfg.ground_probe_distance;
    let samples = [body.left() + eps, body.center_x(), body.right() - eps];

    let mut surface: Option<f64> = None;
    for sx in samples {
        *probes += 1;
        let (col, row) = grid.world_to_grid(sx, probe_y);
        if !grid.is_solid(col, row) {
            continue;
        }
        let top = row as f64 * ch;
        if (top - bottom).abs() <= cfg.ground_snap_tolerance {
            surface = Some(surface.map_or(top, |s: f64| s.min(top)));
        }
    }

    let Some(top) = surface else {
        return false;
    };

    if body.vy >= 0.0 {
        // Bodies the sweep left one epsilon off the surface stay put.
        if (top - bottom).abs() > eps * 2.0 {
            body.y = top - body.height;
        }
        body.vy = 0.0;
    }
    true
}

/// After a step-up: is there solid directly under the feet, across the body's
/// columns plus the lip column it just climbed?
pub(crate) fn supported_after_step<G: BlockSource + ?Sized>(
    grid: &G,
    cfg: &PhysicsConfig,
    body: &PhysicsBody,
    lip_col: i32,
    probes: &mut u64,
) -> bool {
    let eps = cfg.epsilon;
    let (_, row) = grid.world_to_grid(body.center_x(), body.bottom() + eps * 2.0);
    let (c0, c1) = cell_span(body.left(), body.right(), grid.cell_width(), eps);
    let (c0, c1) = (c0.min(lip_col).max(0), c1.max(lip_col).min(grid.cols() - 1));
    for col in c0..=c1 {
        *probes += 1;
        if grid.is_solid(col, row) {
            return true;
        }
    }
    false
}

/// Caller-side ground inference for the next tick.
///
/// The resolver only ever sets the flag. Leaving the ground is inferred here:
/// an upward request (jump) or an actual drop clears it; otherwise the
/// previous state carries over.
pub fn track_ground(
    was_on_ground: bool,
    result: &CollisionResult,
    requested_dy: f64,
    actual_dy: f64,
    eps: f64,
) -> bool {
    if result.is_on_ground {
        return true;
    }
    if requested_dy < -eps || actual_dy > eps {
        return false;
    }
    was_on_ground
}
