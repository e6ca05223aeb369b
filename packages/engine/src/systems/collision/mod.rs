//! Collision System - axis-separated swept resolver
//!
//! Moves an axis-aligned body through a static tile grid for one tick:
//! - X first, with a step-up check when a wall is hit
//! - Y against the post-X position
//! - a ground probe when the Y pass did not already land the body
//!
//! Every snap backs the body off the contact face by `epsilon`, so it starts
//! the next tick touching but not overlapping.

mod ground;
mod perf;
mod step_up;
mod sweep;
mod types;

pub use ground::track_ground;
pub use perf::{reset_collision_perf_counters, take_collision_perf_counters, CollisionCounters};
pub use types::{CollisionResult, StepTier};

use crate::core::log::log_warn;
use crate::domain::config::PhysicsConfig;
use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;

pub(crate) use sweep::cell_span;
use sweep::{snap_to_face, sweep, Axis};

/// Borrowing view over a grid and a config. Cheap to build per tick.
pub struct Resolver<'a, G: BlockSource + ?Sized> {
    grid: &'a G,
    cfg: &'a PhysicsConfig,
}

impl<'a, G: BlockSource + ?Sized> Resolver<'a, G> {
    pub fn new(grid: &'a G, cfg: &'a PhysicsConfig) -> Self {
        Self { grid, cfg }
    }

    pub fn grid(&self) -> &'a G {
        self.grid
    }

    pub fn config(&self) -> &'a PhysicsConfig {
        self.cfg
    }

    /// Move `body` by up to (`move_x`, `move_y`) this tick.
    ///
    /// Invalid bodies (non-finite state, non-positive size) are left untouched
    /// and get an empty result; the caller decides how to recover them.
    pub fn resolve(&self, body: &mut PhysicsBody, move_x: f64, move_y: f64) -> CollisionResult {
        if !body.is_valid() {
            perf::record_invalid_body();
            log_warn(&format!(
                "resolve skipped: invalid body at ({}, {}) size {}x{} vel ({}, {})",
                body.x, body.y, body.width, body.height, body.vx, body.vy
            ));
            return CollisionResult::no_move();
        }

        let eps = self.cfg.epsilon;
        let move_x = finite_or_zero(move_x, "move_x");
        let move_y = finite_or_zero(move_y, "move_y");

        let mut result = CollisionResult::default();
        let mut probes: u64 = 0;

        // === X axis ===
        let mut lip_col: Option<i32> = None;
        if move_x.abs() > eps {
            let forward = move_x > 0.0;
            match sweep(self.grid, body, Axis::X, move_x, eps, &mut probes) {
                None => body.x += move_x,
                Some(hit) => {
                    let contact_x = snap_to_face(hit.face, body.width, forward, eps);
                    match step_up::evaluate(self.grid, self.cfg, body, &hit, contact_x, &mut probes) {
                        Some(step) => {
                            body.x = contact_x;
                            body.y = step.surface - body.height - eps;
                            body.vy = 0.0;
                            if step.tier == StepTier::Slowed {
                                body.vx *= self.cfg.tier2_friction;
                            }
                            result.did_step_up = true;
                            result.step_tier = Some(step.tier);
                            lip_col = Some(hit.col);
                        }
                        None => {
                            body.x = contact_x;
                            body.vx = 0.0;
                            result.collided_x = true;
                        }
                    }
                }
            }
        }

        // === Y axis ===
        if let Some(col) = lip_col {
            // The step already placed us; just confirm we are standing on something.
            if ground::supported_after_step(self.grid, self.cfg, body, col, &mut probes) {
                result.is_on_ground = true;
            }
        } else if move_y.abs() > eps {
            let forward = move_y > 0.0;
            match sweep(self.grid, body, Axis::Y, move_y, eps, &mut probes) {
                None => body.y += move_y,
                Some(hit) => {
                    body.y = snap_to_face(hit.face, body.height, forward, eps);
                    body.vy = 0.0;
                    result.collided_y = true;
                    if forward {
                        result.is_on_ground = true;
                    }
                }
            }
        }

        // === Ground confirmation ===
        if !result.is_on_ground && ground::confirm_ground(self.grid, self.cfg, body, &mut probes) {
            result.is_on_ground = true;
        }

        if result.is_on_ground {
            body.on_ground = true;
        }

        perf::record_resolve(probes);
        result
    }
}

/// One-shot form of `Resolver::resolve`.
pub fn resolve<G: BlockSource + ?Sized>(
    grid: &G,
    cfg: &PhysicsConfig,
    body: &mut PhysicsBody,
    move_x: f64,
    move_y: f64,
) -> CollisionResult {
    Resolver::new(grid, cfg).resolve(body, move_x, move_y)
}

#[inline]
fn finite_or_zero(v: f64, name: &str) -> f64 {
    if v.is_finite() {
        v
    } else {
        log_warn(&format!("resolve: non-finite {} ({}) treated as 0", name, v));
        0.0
    }
}
