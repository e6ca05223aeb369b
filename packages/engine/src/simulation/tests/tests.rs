use super::*;
use crate::domain::blocks::{BLOCK_AIR, BLOCK_SOLID, BLOCK_WATER};

const LEVEL: &str = r###########"{
    "cellWidth": 16,
    "cellHeight": 16,
    "tiles": [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "......~~~~",
        "......~~~~",
        "##########"
    ]
}"###########;

fn level_world() -> WorldCore {
    let mut world = WorldCore::new(1, 1, 16.0, 16.0);
    world.load_level_json(LEVEL).unwrap();
    world
}

#[test]
fn new_world_is_empty_air() {
    let world = WorldCore::new(8, 4, 16.0, 16.0);
    assert_eq!(world.cols(), 8);
    assert_eq!(world.rows(), 4);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.block_at(3, 2), BLOCK_AIR);
}

#[test]
fn set_block_ignores_unknown_codes() {
    let mut world = WorldCore::new(8, 4, 16.0, 16.0);
    assert!(world.set_block(1, 1, BLOCK_SOLID));
    assert_eq!(world.block_at(1, 1), BLOCK_SOLID);
    assert!(!world.set_block(1, 1, 200));
    assert_eq!(world.block_at(1, 1), BLOCK_SOLID);
    assert!(!world.set_block(-1, 0, BLOCK_SOLID));
}

#[test]
fn load_level_replaces_grid_and_drops_bodies() {
    let mut world = WorldCore::new(4, 4, 16.0, 16.0);
    world.spawn_body(0.0, 0.0, 8.0, 8.0);
    world.step();
    world.load_level_json(LEVEL).unwrap();
    assert_eq!(world.cols(), 10);
    assert_eq!(world.rows(), 8);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.block_at(6, 5), BLOCK_WATER);
}

#[test]
fn bad_level_keeps_old_grid() {
    let mut world = level_world();
    assert!(world.load_level_json(r#"{"cellWidth":16,"cellHeight":16,"tiles":["?"]}"#).is_err());
    assert_eq!(world.cols(), 10);
}

#[test]
fn rejected_config_keeps_previous() {
    let mut world = level_world();
    world.load_config_json(r#"{"gravity":0.5}"#).unwrap();
    assert_eq!(world.config().gravity, 0.5);
    assert!(world.load_config_json(r#"{"epsilon":-1}"#).is_err());
    assert_eq!(world.config().gravity, 0.5);
    assert!(world.config_json().contains("\"gravity\":0.5"));
}

#[test]
fn invalid_set_config_keeps_previous() {
    let mut world = level_world();
    let mut cfg = PhysicsConfig::default();
    cfg.gravity = f64::NAN;
    assert!(world.set_config(cfg).is_err());
    assert_eq!(world.config(), &PhysicsConfig::default());
}

#[test]
fn spawn_inside_solid_returns_zero() {
    let mut world = level_world();
    assert_eq!(world.spawn_body(10.0, 110.0, 8.0, 8.0), 0);
    assert_eq!(world.body_count(), 0);
    assert!(world.spawn_agent_json(10.0, 110.0, 8.0, 8.0, r#"{"kind":"idle"}"#).is_err());
    assert!(world.spawn_agent_json(10.0, 10.0, 8.0, 8.0, r#"{"kind":"fly"}"#).is_err());
}

#[test]
fn huge_spawn_above_the_grid_is_accepted() {
    let mut world = level_world();
    assert_ne!(world.spawn_body(0.0, -2.0e6, 2.0e5, 2.0e5), 0);
}

#[test]
fn step_lands_body_and_reports_once() {
    let mut world = level_world();
    let id = world.spawn_body(10.0, 40.0, 8.0, 16.0);
    assert_ne!(id, 0);

    let mut landed = 0;
    for _ in 0..120 {
        world.step();
        landed += world.last_events().iter().filter(|e| e.landed).count();
    }
    assert_eq!(landed, 1);
    let body = world.body(id).unwrap();
    assert!(body.on_ground);
    assert!((body.bottom() - 112.0).abs() <= 2.0 * world.config().epsilon);
    assert_eq!(world.frame(), 120);
}

#[test]
fn body_in_water_is_submerged_and_sinks_slower() {
    let mut world = level_world();
    let dry = world.spawn_body(10.0, 80.0, 8.0, 8.0);
    let wet = world.spawn_body(120.0, 80.0, 8.0, 8.0);
    assert!(!world.is_body_submerged(dry));
    assert!(world.is_body_submerged(wet));

    for _ in 0..3 {
        world.step();
    }
    let dry_y = world.body(dry).unwrap().y;
    let wet_y = world.body(wet).unwrap().y;
    assert!(wet_y < dry_y);
    assert!(world.last_events().iter().any(|e| e.id == wet && e.submerged));
}

#[test]
fn removed_bodies_stop_reporting() {
    let mut world = level_world();
    let a = world.spawn_body(10.0, 40.0, 8.0, 8.0);
    let b = world.spawn_body(40.0, 40.0, 8.0, 8.0);
    assert!(world.remove_body(a));
    world.step();
    let ids: Vec<u32> = world.last_events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b]);
    assert!(world.body(a).is_none());
}

#[test]
fn json_views_are_camel_case() {
    let mut world = level_world();
    let id = world.spawn_agent(10.0, 40.0, 8.0, 8.0, Steering::SeekCenter { speed: 1.0 });
    world.step();

    let bodies: serde_json::Value = serde_json::from_str(&world.bodies_json()).unwrap();
    assert_eq!(bodies[0]["id"], id);
    assert!(bodies[0]["body"]["onGround"].is_boolean());

    let events: serde_json::Value = serde_json::from_str(&world.events_json()).unwrap();
    assert_eq!(events[0]["id"], id);
    assert!(events[0]["hitWall"].is_boolean());
    assert!(events[0]["stepTier"].is_null());
}

#[test]
fn perf_stats_only_fill_when_enabled() {
    let mut world = level_world();
    world.spawn_body(10.0, 40.0, 8.0, 8.0);
    world.spawn_body(40.0, 40.0, 8.0, 8.0);

    world.step();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.step();
    let perf = world.get_perf_stats();
    assert_eq!(perf.bodies(), 2);
    assert_eq!(perf.resolve_calls(), 2);
    assert!(perf.cells_probed() > 0);
    assert_eq!(perf.grid_cells(), 80);
    assert!(perf.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats(), PerfStats::default());
}

#[test]
fn clear_keeps_grid() {
    let mut world = level_world();
    world.spawn_body(10.0, 40.0, 8.0, 8.0);
    world.step();
    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.block_at(0, 7), BLOCK_SOLID);
}
