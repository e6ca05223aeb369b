//! TileGrid - flat row-major block storage
//!
//! The reference `BlockSource`: a fixed-extent grid of `BlockKind` with a
//! uniform cell size. Everything outside the extent reads as air, which lets
//! bodies walk off the edge of the map (world-boundary clamping is the
//! caller's job).

use crate::domain::blocks::{BlockKind, SlopeDir};
use crate::spatial::query::BlockSource;

mod level;

pub use level::LevelBundle;

#[derive(Debug)]
pub struct TileGrid {
    cols: i32,
    rows: i32,
    cell_width: f64,
    cell_height: f64,
    blocks: Vec<BlockKind>,
}

impl TileGrid {
    /// Empty (all air) grid. Sizes are clamped so the grid is never degenerate.
    pub fn new(cols: u32, rows: u32, cell_width: f64, cell_height: f64) -> Self {
        let cols = cols.clamp(1, i32::MAX as u32) as i32;
        let rows = rows.clamp(1, i32::MAX as u32) as i32;
        let cell_width = if cell_width.is_finite() && cell_width > 0.0 { cell_width } else { 1.0 };
        let cell_height = if cell_height.is_finite() && cell_height > 0.0 { cell_height } else { 1.0 };
        Self {
            cols,
            rows,
            cell_width,
            cell_height,
            blocks: vec![BlockKind::Air; cols as usize * rows as usize],
        }
    }

    /// Build a grid from ASCII rows, top row first.
    ///
    /// Legend: `.` or space air, `#` solid, `~` water, `/` slope rising right,
    /// `\` slope rising left, `0`-`9` solid with that material id.
    /// Short rows are padded with air.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], cell_width: f64, cell_height: f64) -> Result<Self, String> {
        if rows.is_empty() {
            return Err("level has no rows".to_string());
        }
        if !(cell_width.is_finite() && cell_width > 0.0 && cell_height.is_finite() && cell_height > 0.0) {
            return Err(format!("invalid cell size {}x{}", cell_width, cell_height));
        }

        let cols = rows.iter().map(|r| r.as_ref().chars().count()).max().unwrap_or(0);
        if cols == 0 {
            return Err("level rows are all empty".to_string());
        }

        let mut grid = TileGrid::new(cols as u32, rows.len() as u32, cell_width, cell_height);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                let kind = match ch {
                    '.' | ' ' => BlockKind::Air,
                    '#' => BlockKind::STONE,
                    '~' => BlockKind::Liquid,
                    '/' => BlockKind::slope(0, SlopeDir::UpRight),
                    '\\' => BlockKind::slope(0, SlopeDir::UpLeft),
                    d @ '0'..='9' => BlockKind::solid(d as u16 - '0' as u16),
                    other => {
                        return Err(format!("unknown tile '{}' at row {}, col {}", other, row, col))
                    }
                };
                grid.set_block(col as i32, row as i32, kind);
            }
        }
        Ok(grid)
    }

    pub fn from_level_json(json: &str) -> Result<Self, String> {
        let bundle: LevelBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        bundle.into_grid()
    }

    #[inline]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Returns false (and changes nothing) for out-of-range cells.
    pub fn set_block(&mut self, col: i32, row: i32, kind: BlockKind) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.blocks[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Fill an inclusive cell rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, col0: i32, row0: i32, col1: i32, row1: i32, kind: BlockKind) {
        let (c0, c1) = (col0.min(col1).max(0), col0.max(col1).min(self.cols - 1));
        let (r0, r1) = (row0.min(row1).max(0), row0.max(row1).min(self.rows - 1));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set_block(col, row, kind);
            }
        }
    }

    pub fn clear(&mut self) {
        self.blocks.fill(BlockKind::Air);
    }

    /// World-space size of the defined extent.
    pub fn world_width(&self) -> f64 {
        self.cols as f64 * self.cell_width
    }

    pub fn world_height(&self) -> f64 {
        self.rows as f64 * self.cell_height
    }
}

impl BlockSource for TileGrid {
    #[inline]
    fn block_at(&self, col: i32, row: i32) -> BlockKind {
        match self.index(col, row) {
            Some(idx) => self.blocks[idx],
            None => BlockKind::Air,
        }
    }

    fn cols(&self) -> i32 {
        self.cols
    }

    fn rows(&self) -> i32 {
        self.rows
    }

    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn cell_height(&self) -> f64 {
        self.cell_height
    }
}

#[cfg(test)]
mod tests;
