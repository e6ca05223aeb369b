//! Grid Query Interface
//!
//! The resolver never touches block storage directly. It sees the world
//! through `BlockSource`, so any storage (a flat `TileGrid`, a chunked world,
//! a test fixture) can back it as long as it answers `block_at` and reports
//! its cell size.

use crate::domain::blocks::BlockKind;
use crate::systems::body::PhysicsBody;

pub trait BlockSource {
    /// Block at (col, row). Implementations return `BlockKind::Air` for
    /// anything outside their extent.
    fn block_at(&self, col: i32, row: i32) -> BlockKind;

    fn cols(&self) -> i32;
    fn rows(&self) -> i32;
    fn cell_width(&self) -> f64;
    fn cell_height(&self) -> f64;

    #[inline]
    fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols() && row < self.rows()
    }

    #[inline]
    fn is_solid(&self, col: i32, row: i32) -> bool {
        self.in_bounds(col, row) && self.block_at(col, row).is_solid()
    }

    #[inline]
    fn is_liquid(&self, col: i32, row: i32) -> bool {
        self.in_bounds(col, row) && self.block_at(col, row).is_liquid()
    }

    /// Any of the four cardinal neighbours solid. Used by placement support
    /// checks outside the resolver.
    fn has_solid_neighbor(&self, col: i32, row: i32) -> bool {
        self.is_solid(col - 1, row)
            || self.is_solid(col + 1, row)
            || self.is_solid(col, row - 1)
            || self.is_solid(col, row + 1)
    }

    /// Floor division by cell size. Non-finite coordinates map as zero.
    fn world_to_grid(&self, x: f64, y: f64) -> (i32, i32) {
        let x = if x.is_finite() { x } else { 0.0 };
        let y = if y.is_finite() { y } else { 0.0 };
        (
            (x / self.cell_width()).floor() as i32,
            (y / self.cell_height()).floor() as i32,
        )
    }

    /// Samples the point halfway down the body, horizontally centred.
    fn is_submerged(&self, body: &PhysicsBody) -> bool {
        self.is_submerged_at(body, 0.5)
    }

    /// Same as `is_submerged` with a configurable sample depth (fraction of
    /// height measured from the top edge).
    fn is_submerged_at(&self, body: &PhysicsBody, depth_factor: f64) -> bool {
        let (col, row) = self.world_to_grid(body.center_x(), body.y + body.height * depth_factor);
        self.is_liquid(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::grid::TileGrid;

    fn grid() -> TileGrid {
        TileGrid::from_rows(
            &[
                "....",
                ".#..",
                "..~~",
                "/###",
            ],
            16.0,
            16.0,
        )
        .expect("grid should parse")
    }

    #[test]
    fn out_of_range_is_air() {
        let g = grid();
        assert!(!g.is_solid(-1, 0));
        assert!(!g.is_solid(0, -1));
        assert!(!g.is_solid(4, 3));
        assert!(!g.is_solid(0, 4));
        assert!(!g.is_liquid(100, 100));
    }

    #[test]
    fn liquid_and_air_are_not_solid() {
        let g = grid();
        assert!(!g.is_solid(0, 0));
        assert!(!g.is_solid(2, 2));
        assert!(g.is_liquid(2, 2));
        assert!(g.is_solid(1, 1));
        // slope shape flag is ignored
        assert!(g.is_solid(0, 3));
    }

    #[test]
    fn solid_neighbor_checks_cardinals_only() {
        let g = grid();
        assert!(g.has_solid_neighbor(1, 0));
        assert!(g.has_solid_neighbor(0, 1));
        assert!(!g.has_solid_neighbor(0, 0));
        // diagonal to (1,1) only
        assert!(!g.has_solid_neighbor(2, 0));
        // water cells are not support
        assert!(g.has_solid_neighbor(2, 2));
        assert!(!g.has_solid_neighbor(3, 1));
    }

    #[test]
    fn world_to_grid_floors_and_sanitizes() {
        let g = grid();
        assert_eq!(g.world_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(g.world_to_grid(15.999, 16.0), (0, 1));
        assert_eq!(g.world_to_grid(-0.5, -16.5), (-1, -2));
        assert_eq!(g.world_to_grid(f64::NAN, f64::INFINITY), (0, 0));
    }

    #[test]
    fn submersion_samples_body_middle() {
        let g = grid();
        // Body spanning rows 1..2, middle at y=40 (row 2), centre x=40 (col 2) -> water
        let body = PhysicsBody::new(32.0, 24.0, 16.0, 32.0);
        assert!(g.is_submerged(&body));

        // Same column higher up: middle at row 0 -> air
        let dry = PhysicsBody::new(32.0, 4.0, 16.0, 16.0);
        assert!(!g.is_submerged(&dry));
    }
}
