use crate::spatial::query::BlockSource;
use crate::systems::body::PhysicsBody;
use crate::systems::collision::cell_span;

/// True if the body's box overlaps any solid cell by more than `eps`.
pub(super) fn overlaps_solid<G: BlockSource + ?Sized>(grid: &G, body: &PhysicsBody, eps: f64) -> bool {
    let (c0, c1) = cell_span(body.left(), body.right(), grid.cell_width(), eps);
    let (r0, r1) = cell_span(body.top(), body.bottom(), grid.cell_height(), eps);
    // Only the on-grid part can hold solid cells.
    let (c0, c1) = (c0.max(0), c1.min(grid.cols() - 1));
    let (r0, r1) = (r0.max(0), r1.min(grid.rows() - 1));
    for row in r0..=r1 {
        for col in c0..=c1 {
            if grid.is_solid(col, row) {
                return true;
            }
        }
    }
    false
}
