use serde::Serialize;

use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;
use crate::systems::steering::{Agent, Steering};

use super::WorldCore;

#[derive(Serialize)]
struct BodyView<'a> {
    id: u32,
    body: &'a PhysicsBody,
}

pub(super) fn spawn_body(world: &mut WorldCore, body: PhysicsBody, steering: Option<Steering>) -> u32 {
    world
        .bodies
        .add_body(&world.grid, &world.config, body, steering.map(Agent::new))
        .unwrap_or(0)
}

pub(super) fn spawn_agent_json(
    world: &mut WorldCore,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    steering_json: &str,
) -> Result<u32, String> {
    let steering: Steering = serde_json::from_str(steering_json).map_err(|e| e.to_string())?;
    match spawn_body(world, PhysicsBody::new(x, y, w, h), Some(steering)) {
        0 => Err(format!("cannot place body at ({}, {}) size {}x{}", x, y, w, h)),
        id => Ok(id),
    }
}

pub(super) fn remove_body(world: &mut WorldCore, id: u32) -> bool {
    world.bodies.remove_body(id)
}

pub(super) fn set_body_velocity(world: &mut WorldCore, id: u32, vx: f64, vy: f64) -> bool {
    match world.bodies.get_mut(id) {
        Some(entry) => {
            entry.body.vx = vx;
            entry.body.vy = vy;
            true
        }
        None => false,
    }
}

pub(super) fn is_body_submerged(world: &WorldCore, id: u32) -> bool {
    world
        .bodies
        .get(id)
        .map(|e| world.grid.is_submerged_at(&e.body, world.config.submerged_sample_factor))
        .unwrap_or(false)
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    let views: Vec<BodyView> = world
        .bodies
        .iter()
        .map(|e| BodyView { id: e.id, body: &e.body })
        .collect();
    serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
}

pub(super) fn events_json(world: &WorldCore) -> String {
    serde_json::to_string(&world.last_events).unwrap_or_else(|_| "[]".to_string())
}
