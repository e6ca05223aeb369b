//! Step-tier policy
//!
//! Decides whether a wall hit on the X axis is really a low lip the body can
//! ride up onto, and how much horizontal speed that costs.

use crate::domain::config::PhysicsConfig;
use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;

use super::sweep::cell_span;
use super::types::{Hit, StepTier};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StepUp {
    pub tier: StepTier,
    /// World y of the surface the body will stand on
    pub surface: f64,
    /// Height of the lip above the body's feet
    pub height: f64,
}

/// Evaluate a step over the obstruction in `hit`.
///
/// `contact_x` is where the body's left edge ends up after moving to the
/// contact point; headroom is checked there, not at the pre-move position.
pub(crate) fn evaluate<G: BlockSource + ?Sized>(
    grid: &G,
    cfg: &PhysicsConfig,
    body: &PhysicsBody,
    hit: &Hit,
    contact_x: f64,
    probes: &mut u64,
) -> Option<StepUp> {
    let eps = cfg.epsilon;

    // No stepping while rising faster than one tick of gravity (jumping into a wall).
    if body.vy < -cfg.gravity {
        return None;
    }

    let ch = grid.cell_height();
    let cw = grid.cell_width();

    // The hit cell may sit under more solid cells inside the body's rows;
    // the lip is the top of that contiguous stack.
    let (top_row, _) = cell_span(body.top(), body.bottom(), ch, eps);
    let mut lip_row = hit.row;
    while lip_row > top_row && grid.is_solid(hit.col, lip_row - 1) {
        *probes += 1;
        lip_row -= 1;
    }

    let surface = lip_row as f64 * ch;
    let height = body.bottom() - surface;
    if height < -eps || height > body.height * cfg.tier2_max_height_factor + eps {
        return None;
    }

    // Headroom: every cell the body would occupy standing on the lip, over its
    // own columns and the (adjacent) lip column, must be free.
    let new_top = surface - body.height - eps;
    let (head_row, _) = cell_span(new_top, surface - eps, ch, eps);
    let (c0, c1) = cell_span(contact_x, contact_x + body.width, cw, eps);
    let (c0, c1) = (c0.min(hit.col).max(0), c1.max(hit.col).min(grid.cols() - 1));
    for row in head_row.max(0)..lip_row {
        for col in c0..=c1 {
            *probes += 1;
            if grid.is_solid(col, row) {
                return None;
            }
        }
    }

    let tier = if height <= body.height * cfg.tier1_max_height_factor + eps {
        StepTier::Effortless
    } else {
        StepTier::Slowed
    };

    Some(StepUp { tier, surface, height })
}
