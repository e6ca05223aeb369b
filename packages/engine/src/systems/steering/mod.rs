//! Steering - what horizontal velocity a body wants
//!
//! One enum variant per behaviour instead of a name-to-class lookup. The
//! resolver knows nothing about any of this; it only ever sees the
//! displacement that comes out of `Agent::plan` + motion integration.
//!
//! Every input comes from a `Snapshot` taken before the first resolve of the
//! tick, so results do not depend on the order bodies are processed in.

mod separation;

pub use separation::separation_push;

use serde::{Deserialize, Serialize};

use crate::domain::config::PhysicsConfig;
use crate::systems::body::PhysicsBody;

/// Frozen copy of one body for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapshotEntry {
    pub id: u32,
    pub body: PhysicsBody,
}

#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    pub fn capture<'a, I>(bodies: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a PhysicsBody)>,
    {
        Self {
            entries: bodies
                .into_iter()
                .map(|(id, body)| SnapshotEntry { id, body: *body })
                .collect(),
        }
    }

    pub fn find(&self, id: u32) -> Option<&SnapshotEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Steering {
    Idle,
    SeekCenter { speed: f64 },
    Chase { target: u32, speed: f64 },
    Flee { from: u32, speed: f64 },
    /// Walk one way for `period` ticks, then the other.
    Wander { speed: f64, period: u32 },
}

/// Read-only inputs for one steering decision
pub struct SteeringContext<'a> {
    pub snapshot: &'a Snapshot,
    pub index: usize,
    pub frame: u64,
    pub world_center_x: f64,
}

impl Steering {
    pub fn desired_vx(&self, ctx: &SteeringContext) -> f64 {
        let Some(me) = ctx.snapshot.entries.get(ctx.index) else {
            return 0.0;
        };
        let cx = me.body.center_x();
        // Within half a body of the goal counts as arrived.
        let slack = me.body.width * 0.5;

        match *self {
            Steering::Idle => 0.0,
            Steering::SeekCenter { speed } => toward(cx, ctx.world_center_x, slack) * speed,
            Steering::Chase { target, speed } => match ctx.snapshot.find(target) {
                Some(t) if t.id != me.id => toward(cx, t.body.center_x(), slack) * speed,
                _ => 0.0,
            },
            Steering::Flee { from, speed } => match ctx.snapshot.find(from) {
                Some(t) if t.id != me.id => {
                    let dir = -toward(cx, t.body.center_x(), 0.0);
                    // Directly on top of the threat: break the tie by id.
                    if dir == 0.0 {
                        if me.id < t.id { -speed } else { speed }
                    } else {
                        dir * speed
                    }
                }
                _ => 0.0,
            },
            Steering::Wander { speed, period } => {
                let period = period.max(1) as u64;
                let go_left = ((ctx.frame / period) + me.id as u64) & 1 == 1;
                if go_left { -speed } else { speed }
            }
        }
    }
}

#[inline]
fn toward(from: f64, to: f64, slack: f64) -> f64 {
    let d = to - from;
    if d.abs() <= slack {
        0.0
    } else {
        d.signum()
    }
}

/// Caller-owned AI state, joined with a `PhysicsBody` only for the length of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub steering: Steering,
    pub jump_speed: f64,
    pub jump_cooldown_ticks: u32,
    #[serde(default)]
    pub cooldown: u32,
    /// Set from the previous tick's `collided_x`
    #[serde(default)]
    pub blocked_last_tick: bool,
}

impl Agent {
    pub fn new(steering: Steering) -> Self {
        Self {
            steering,
            jump_speed: 6.0,
            jump_cooldown_ticks: 20,
            cooldown: 0,
            blocked_last_tick: false,
        }
    }

    /// Pick this tick's velocity. Jumps (or swims up) when a wall blocked
    /// last tick and the cooldown allows.
    pub fn plan(
        &mut self,
        body: &mut PhysicsBody,
        ctx: &SteeringContext,
        submerged: bool,
        cfg: &PhysicsConfig,
    ) {
        body.vx = self.steering.desired_vx(ctx) + separation_push(ctx.snapshot, ctx.index, cfg);

        if self.cooldown > 0 {
            self.cooldown -= 1;
        } else if self.blocked_last_tick && body.vx != 0.0 {
            if submerged {
                body.vy = -self.jump_speed * 0.5;
                self.cooldown = self.jump_cooldown_ticks;
            } else if body.on_ground {
                body.vy = -self.jump_speed;
                self.cooldown = self.jump_cooldown_ticks;
            }
        }
    }
}
