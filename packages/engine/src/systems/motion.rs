//! Motion integration - the caller side of a tick
//!
//! Turns a body's velocity into the displacement handed to the resolver.
//! Water changes two things: gravity is scaled down and both velocity
//! components are damped.

use crate::domain::config::PhysicsConfig;
use crate::systems::body::PhysicsBody;

/// Apply gravity to a body's velocity. Submerged bodies sink slower and
/// have a lower terminal speed.
#[inline]
pub fn apply_gravity(body: &mut PhysicsBody, submerged: bool, cfg: &PhysicsConfig) {
    let factor = if submerged { cfg.water_gravity_factor } else { 1.0 };
    body.vy += cfg.gravity * factor;

    let max_fall = cfg.max_fall_speed * factor;
    if body.vy > max_fall {
        body.vy = max_fall;
    }
}

/// Damp velocity: water drag on both axes, ground friction on X.
#[inline]
pub fn apply_damping(body: &mut PhysicsBody, submerged: bool, cfg: &PhysicsConfig) {
    if submerged {
        body.vx *= cfg.water_damping;
        body.vy *= cfg.water_damping;
    }
    if body.on_ground {
        body.vx *= cfg.ground_damping;
    }

    // Zero out tiny velocities (prevents floating point creep)
    if body.vx.abs() < cfg.epsilon {
        body.vx = 0.0;
    }
    if body.vy.abs() < cfg.epsilon {
        body.vy = 0.0;
    }
}

/// Gravity, then damping; returns this tick's requested displacement.
pub fn integrate(body: &mut PhysicsBody, submerged: bool, cfg: &PhysicsConfig) -> (f64, f64) {
    apply_gravity(body, submerged, cfg);
    apply_damping(body, submerged, cfg);
    (body.vx, body.vy)
}
