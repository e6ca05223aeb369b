use super::*;
use crate::domain::blocks::{BlockShape, SolidBlock};

#[test]
fn from_rows_pads_short_rows_with_air() {
    let grid = TileGrid::from_rows(&["###", "#"], 8.0, 8.0).expect("grid should parse");
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 2);
    assert!(grid.is_solid(2, 0));
    assert!(grid.is_solid(0, 1));
    assert!(!grid.is_solid(1, 1));
    assert!(!grid.is_solid(2, 1));
}

#[test]
fn from_rows_reads_materials_and_slopes() {
    let grid = TileGrid::from_rows(&["7/\\"], 16.0, 16.0).expect("grid should parse");
    assert_eq!(grid.block_at(0, 0), BlockKind::solid(7));
    assert_eq!(
        grid.block_at(1, 0),
        BlockKind::Solid(SolidBlock {
            material: 0,
            shape: BlockShape::Slope(SlopeDir::UpRight),
        })
    );
    assert_eq!(grid.block_at(2, 0), BlockKind::slope(0, SlopeDir::UpLeft));
}

#[test]
fn from_rows_rejects_unknown_tiles_and_bad_cells() {
    assert!(TileGrid::from_rows(&["#x#"], 16.0, 16.0).is_err());
    assert!(TileGrid::from_rows(&["###"], 0.0, 16.0).is_err());
    assert!(TileGrid::from_rows::<&str>(&[], 16.0, 16.0).is_err());
    assert!(TileGrid::from_rows(&["", ""], 16.0, 16.0).is_err());
}

#[test]
fn set_block_ignores_out_of_range() {
    let mut grid = TileGrid::new(4, 4, 16.0, 16.0);
    assert!(grid.set_block(3, 3, BlockKind::STONE));
    assert!(!grid.set_block(4, 0, BlockKind::STONE));
    assert!(!grid.set_block(-1, 0, BlockKind::STONE));
    assert_eq!(grid.block_at(4, 0), BlockKind::Air);
    assert!(grid.is_solid(3, 3));
}

#[test]
fn fill_rect_clips_and_clear_resets() {
    let mut grid = TileGrid::new(4, 4, 16.0, 16.0);
    grid.fill_rect(2, 5, -3, 2, BlockKind::Liquid);
    assert!(grid.is_liquid(0, 2));
    assert!(grid.is_liquid(2, 3));
    assert!(!grid.is_liquid(3, 3));
    assert!(!grid.is_liquid(0, 1));

    grid.clear();
    assert_eq!(grid.block_at(0, 2), BlockKind::Air);
}

#[test]
fn level_json_builds_grid() {
    let json = r##"{ "cellWidth": 16, "cellHeight": 8, "tiles": ["..", "#~"] }"##;
    let grid = TileGrid::from_level_json(json).expect("level should parse");
    assert_eq!(grid.cell_height(), 8.0);
    assert!(grid.is_solid(0, 1));
    assert!(grid.is_liquid(1, 1));
    assert_eq!(grid.world_width(), 32.0);
    assert_eq!(grid.world_height(), 16.0);
}

#[test]
fn level_json_reports_missing_fields() {
    let err = TileGrid::from_level_json(r##"{ "tiles": ["#"] }"##).unwrap_err();
    assert!(err.contains("cellWidth"));
}
