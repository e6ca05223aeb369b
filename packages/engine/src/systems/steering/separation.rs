use crate::domain::config::PhysicsConfig;

use super::Snapshot;

/// Horizontal push that moves body `index` out of bodies it overlaps.
///
/// Proportional to the horizontal overlap; coincident centres are split by
/// snapshot order so two stacked bodies never push the same way.
pub fn separation_push(snapshot: &Snapshot, index: usize, cfg: &PhysicsConfig) -> f64 {
    let Some(me) = snapshot.entries.get(index) else {
        return 0.0;
    };

    let mut push = 0.0;
    for (i, other) in snapshot.entries.iter().enumerate() {
        if i == index || !me.body.overlaps(&other.body, cfg.epsilon) {
            continue;
        }
        let overlap = me.body.right().min(other.body.right()) - me.body.left().max(other.body.left());
        let d = me.body.center_x() - other.body.center_x();
        let dir = if d.abs() > cfg.epsilon {
            d.signum()
        } else if index < i {
            -1.0
        } else {
            1.0
        };
        push += dir * overlap * cfg.separation_strength;
    }
    push
}
