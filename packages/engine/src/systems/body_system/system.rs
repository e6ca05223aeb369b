use serde::Serialize;

use crate::core::log::log_warn;
use crate::domain::config::PhysicsConfig;
use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;
use crate::systems::collision::{
    reset_collision_perf_counters, take_collision_perf_counters, track_ground, CollisionCounters,
    CollisionResult, Resolver, StepTier,
};
use crate::systems::motion;
use crate::systems::steering::{Agent, Snapshot, SteeringContext};

use super::placement::overlaps_solid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One simulated entity: the collider, its optional AI and where to put it back.
#[derive(Clone, Debug)]
pub struct BodyEntry {
    pub id: u32,
    pub body: PhysicsBody,
    pub agent: Option<Agent>,
    spawn: PhysicsBody,
}

impl BodyEntry {
    pub fn spawn_point(&self) -> &PhysicsBody {
        &self.spawn
    }
}

/// What happened to one body during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickEvent {
    pub id: u32,
    pub landed: bool,
    pub hit_wall: bool,
    pub hit_ceiling: bool,
    pub stepped_up: bool,
    pub step_tier: Option<StepTier>,
    pub submerged: bool,
    pub on_ground: bool,
    /// Body was invalid or fell out of the world and went back to its spawn point.
    pub respawned: bool,
}

/// Aggregate counters for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub counters: CollisionCounters,
    pub collisions: u32,
    pub step_ups: u32,
    pub respawns: u32,
}

/// Per-body input to the resolve phase, computed before any body moves.
#[derive(Clone, Copy)]
struct PlannedMove {
    move_x: f64,
    move_y: f64,
    start_y: f64,
    was_on_ground: bool,
    submerged: bool,
}

/// Manages all simulated bodies
pub struct BodySystem {
    entries: Vec<BodyEntry>,
    next_id: u32,
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl BodySystem {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a body.
    ///
    /// Returns `None` if the body is invalid or would start inside solid cells.
    pub fn add_body<G: BlockSource + ?Sized>(
        &mut self,
        grid: &G,
        cfg: &PhysicsConfig,
        mut body: PhysicsBody,
        agent: Option<Agent>,
    ) -> Option<u32> {
        if !body.is_valid() {
            log_warn(&format!(
                "add_body rejected: invalid body at ({}, {}) size {}x{}",
                body.x, body.y, body.width, body.height
            ));
            return None;
        }
        if overlaps_solid(grid, &body, cfg.epsilon) {
            log_warn(&format!(
                "add_body rejected: ({}, {}) size {}x{} overlaps solid cells",
                body.x, body.y, body.width, body.height
            ));
            return None;
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        body.on_ground = false;
        self.entries.push(BodyEntry {
            id,
            body,
            agent,
            spawn: body,
        });
        Some(id)
    }

    /// Remove a body by ID. Order of the remaining bodies is preserved.
    pub fn remove_body(&mut self, id: u32) -> bool {
        if let Some(idx) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(idx);
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: u32) -> Option<&BodyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut BodyEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyEntry> {
        self.entries.iter()
    }

    /// Advance every body by one tick.
    ///
    /// Steering reads a snapshot taken before anything moves, so the outcome
    /// does not depend on body order or on how the resolve phase is scheduled.
    pub fn update<G: BlockSource + Sync + ?Sized>(
        &mut self,
        grid: &G,
        cfg: &PhysicsConfig,
        frame: u64,
    ) -> (Vec<TickEvent>, TickStats) {
        let snapshot = Snapshot::capture(self.entries.iter().map(|e| (e.id, &e.body)));
        let world_center_x = grid.cols() as f64 * grid.cell_width() * 0.5;

        // === Plan ===
        let mut planned = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let submerged = grid.is_submerged_at(&entry.body, cfg.submerged_sample_factor);
            if let Some(agent) = entry.agent.as_mut() {
                let ctx = SteeringContext {
                    snapshot: &snapshot,
                    index,
                    frame,
                    world_center_x,
                };
                agent.plan(&mut entry.body, &ctx, submerged, cfg);
            }
            let (move_x, move_y) = motion::integrate(&mut entry.body, submerged, cfg);
            planned.push(PlannedMove {
                move_x,
                move_y,
                start_y: entry.body.y,
                was_on_ground: entry.body.on_ground,
                submerged,
            });
        }

        // === Resolve ===
        reset_collision_perf_counters();
        let resolver = Resolver::new(grid, cfg);
        let outcomes = resolve_all(&resolver, &mut self.entries, &planned);

        // === Apply ===
        let world_w = grid.cols() as f64 * grid.cell_width();
        let world_h = grid.rows() as f64 * grid.cell_height();
        let mut stats = TickStats::default();
        let mut events = Vec::with_capacity(self.entries.len());

        for ((entry, plan), (result, counters)) in
            self.entries.iter_mut().zip(planned.iter()).zip(outcomes)
        {
            stats.counters += counters;

            let mut event = TickEvent {
                id: entry.id,
                hit_wall: result.collided_x,
                hit_ceiling: result.collided_y && plan.move_y < 0.0,
                stepped_up: result.did_step_up,
                step_tier: result.step_tier,
                submerged: plan.submerged,
                ..TickEvent::default()
            };

            if !entry.body.is_valid() || entry.body.top() > world_h {
                entry.body = entry.spawn;
                if let Some(agent) = entry.agent.as_mut() {
                    agent.blocked_last_tick = false;
                    agent.cooldown = 0;
                }
                event.respawned = true;
                stats.respawns += 1;
                events.push(event);
                continue;
            }

            let actual_dy = entry.body.y - plan.start_y;
            entry.body.on_ground =
                track_ground(plan.was_on_ground, &result, plan.move_y, actual_dy, cfg.epsilon);

            if clamp_to_world(&mut entry.body, world_w) {
                event.hit_wall = true;
            }

            if let Some(agent) = entry.agent.as_mut() {
                agent.blocked_last_tick = event.hit_wall;
            }

            event.on_ground = entry.body.on_ground;
            event.landed = entry.body.on_ground && !plan.was_on_ground;
            if result.any_collision() {
                stats.collisions += 1;
            }
            if result.did_step_up {
                stats.step_ups += 1;
            }
            events.push(event);
        }

        (events, stats)
    }
}

#[inline]
fn resolve_one<G: BlockSource + ?Sized>(
    resolver: &Resolver<'_, G>,
    body: &mut PhysicsBody,
    plan: &PlannedMove,
) -> (CollisionResult, CollisionCounters) {
    let result = resolver.resolve(body, plan.move_x, plan.move_y);
    (result, take_collision_perf_counters())
}

/// Below this many bodies the resolve phase stays on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_BODIES: usize = 64;

/// Resolve calls only read the grid and write their own body, so they can
/// run in any order. Counters are thread-local and are taken per call.
fn resolve_all<G: BlockSource + Sync + ?Sized>(
    resolver: &Resolver<'_, G>,
    entries: &mut [BodyEntry],
    planned: &[PlannedMove],
) -> Vec<(CollisionResult, CollisionCounters)> {
    #[cfg(feature = "parallel")]
    {
        if entries.len() >= PARALLEL_MIN_BODIES {
            return entries
                .par_iter_mut()
                .zip(planned.par_iter())
                .map(|(entry, plan)| resolve_one(resolver, &mut entry.body, plan))
                .collect();
        }
    }

    entries
        .iter_mut()
        .zip(planned.iter())
        .map(|(entry, plan)| resolve_one(resolver, &mut entry.body, plan))
        .collect()
}

/// Keep a body inside the world's horizontal extent. Returns true if it was pushed back.
fn clamp_to_world(body: &mut PhysicsBody, world_w: f64) -> bool {
    let max_x = (world_w - body.width).max(0.0);
    if body.x < 0.0 {
        body.x = 0.0;
    } else if body.x > max_x {
        body.x = max_x;
    } else {
        return false;
    }
    body.vx = 0.0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::grid::TileGrid;
    use crate::systems::steering::Steering;

    fn floor_grid() -> TileGrid {
        TileGrid::from_rows(
            &[
                "..........",
                "..........",
                "..........",
                "..........",
                "..........",
                "..........",
                "..........",
                "##########",
            ],
            16.0,
            16.0,
        )
        .unwrap()
    }

    #[test]
    fn add_body_assigns_increasing_ids() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let a = sys.add_body(&grid, &cfg, PhysicsBody::new(10.0, 10.0, 8.0, 8.0), None);
        let b = sys.add_body(&grid, &cfg, PhysicsBody::new(40.0, 10.0, 8.0, 8.0), None);
        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));
        assert_eq!(sys.body_count(), 2);
    }

    #[test]
    fn add_body_rejects_solid_overlap_and_invalid_bodies() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        assert!(sys
            .add_body(&grid, &cfg, PhysicsBody::new(10.0, 100.0, 8.0, 16.0), None)
            .is_none());
        assert!(sys
            .add_body(&grid, &cfg, PhysicsBody::new(10.0, 10.0, 0.0, 8.0), None)
            .is_none());
        // Resting exactly on the floor is fine.
        assert!(sys
            .add_body(&grid, &cfg, PhysicsBody::new(10.0, 96.0, 8.0, 16.0), None)
            .is_some());
    }

    #[test]
    fn huge_body_mostly_off_grid_spawns_quickly() {
        let grid = TileGrid::new(16, 8, 16.0, 16.0);
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let id = sys.add_body(&grid, &cfg, PhysicsBody::new(0.0, -2.0e6, 2.0e5, 2.0e5), None);
        assert!(id.is_some());
    }

    #[test]
    fn remove_and_clear() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let id = sys
            .add_body(&grid, &cfg, PhysicsBody::new(10.0, 10.0, 8.0, 8.0), None)
            .unwrap();
        assert!(sys.remove_body(id));
        assert!(!sys.remove_body(id));
        sys.add_body(&grid, &cfg, PhysicsBody::new(10.0, 10.0, 8.0, 8.0), None);
        sys.clear();
        assert_eq!(sys.body_count(), 0);
        let id = sys
            .add_body(&grid, &cfg, PhysicsBody::new(10.0, 10.0, 8.0, 8.0), None)
            .unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn falling_body_lands_once() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let id = sys
            .add_body(&grid, &cfg, PhysicsBody::new(20.0, 10.0, 8.0, 16.0), None)
            .unwrap();

        let mut landings = 0;
        for frame in 0..200 {
            let (events, _) = sys.update(&grid, &cfg, frame);
            if events[0].landed {
                landings += 1;
            }
        }
        assert_eq!(landings, 1);
        let body = sys.get(id).unwrap().body;
        assert!(body.on_ground);
        assert!((body.bottom() - 112.0).abs() < 2.0 * cfg.epsilon);
    }

    #[test]
    fn walker_is_stopped_at_world_edge() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let mut body = PhysicsBody::new(140.0, 96.0 - cfg.epsilon, 8.0, 16.0);
        body.vx = 5.0;
        let id = sys.add_body(&grid, &cfg, body, None).unwrap();

        let mut hit = false;
        for frame in 0..20 {
            let (events, _) = sys.update(&grid, &cfg, frame);
            hit |= events[0].hit_wall;
        }
        assert!(hit);
        let body = sys.get(id).unwrap().body;
        assert!(body.right() <= 160.0 + 1e-9);
        assert!(body.x >= 0.0);
    }

    #[test]
    fn falling_out_of_world_respawns() {
        let grid = TileGrid::new(4, 4, 16.0, 16.0);
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let id = sys
            .add_body(&grid, &cfg, PhysicsBody::new(8.0, 0.0, 8.0, 8.0), None)
            .unwrap();

        let mut respawned = false;
        for frame in 0..100 {
            let (events, stats) = sys.update(&grid, &cfg, frame);
            if events[0].respawned {
                assert_eq!(stats.respawns, 1);
                respawned = true;
                break;
            }
        }
        assert!(respawned);
        let entry = sys.get(id).unwrap();
        assert_eq!(entry.body, *entry.spawn_point());
    }

    #[test]
    fn invalid_body_is_reset_to_spawn() {
        let grid = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        let id = sys
            .add_body(&grid, &cfg, PhysicsBody::new(20.0, 10.0, 8.0, 16.0), None)
            .unwrap();
        sys.get_mut(id).unwrap().body.vx = f64::NAN;

        let (events, stats) = sys.update(&grid, &cfg, 0);
        assert!(events[0].respawned);
        assert_eq!(stats.counters.invalid_bodies, 1);
        assert!(sys.get(id).unwrap().body.is_valid());
    }

    #[test]
    fn blocked_agent_jumps() {
        let grid = TileGrid::from_rows(
            &[
                "..........",
                "..........",
                "..........",
                "..........",
                "....#.....",
                "....#.....",
                "....#.....",
                "##########",
            ],
            16.0,
            16.0,
        )
        .unwrap();
        let cfg = PhysicsConfig::default();
        let mut sys = BodySystem::new();
        // Center of the world is x=80; the wall's right face is there too.
        let body = PhysicsBody::new(90.0, 96.0 - cfg.epsilon, 8.0, 16.0);
        let agent = Agent::new(Steering::SeekCenter { speed: 2.0 });
        let id = sys.add_body(&grid, &cfg, body, Some(agent)).unwrap();

        let mut blocked = false;
        let mut jumped = false;
        for frame in 0..40 {
            let (events, _) = sys.update(&grid, &cfg, frame);
            blocked |= events[0].hit_wall;
            if sys.get(id).unwrap().body.vy < -1.0 {
                jumped = true;
                break;
            }
        }
        assert!(blocked);
        assert!(jumped);
        assert_eq!(sys.get(id).unwrap().agent.unwrap().cooldown, 20);
    }
}
