//! Block definitions
//!
//! The resolver only ever asks two questions of a block: does it stop motion
//! (solid) and can a body be submerged in it (liquid). Everything else about a
//! block belongs to the world that owns it.

use serde::{Deserialize, Serialize};

/// Compact codes used across the JS boundary (`World::set_block` / `block_at`).
pub const BLOCK_AIR: u8 = 0;
pub const BLOCK_SOLID: u8 = 1;
pub const BLOCK_WATER: u8 = 2;
pub const BLOCK_SLOPE_UP_RIGHT: u8 = 3;
pub const BLOCK_SLOPE_UP_LEFT: u8 = 4;

/// Direction a slope rises toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlopeDir {
    UpRight,
    UpLeft,
}

/// Shape flag carried by solid blocks.
///
/// Slopes are recorded so the world can render them, but collision treats
/// every solid block as a full cell. There is no slope collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockShape {
    #[default]
    Full,
    Slope(SlopeDir),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidBlock {
    pub material: u16,
    pub shape: BlockShape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    #[default]
    Air,
    Solid(SolidBlock),
    Liquid,
}

impl BlockKind {
    pub const STONE: BlockKind = BlockKind::Solid(SolidBlock {
        material: 0,
        shape: BlockShape::Full,
    });

    pub fn solid(material: u16) -> Self {
        BlockKind::Solid(SolidBlock {
            material,
            shape: BlockShape::Full,
        })
    }

    pub fn slope(material: u16, dir: SlopeDir) -> Self {
        BlockKind::Solid(SolidBlock {
            material,
            shape: BlockShape::Slope(dir),
        })
    }

    /// Anything that is neither air nor liquid stops motion, whatever its shape.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, BlockKind::Solid(_))
    }

    #[inline]
    pub fn is_liquid(self) -> bool {
        matches!(self, BlockKind::Liquid)
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            BLOCK_AIR => Some(BlockKind::Air),
            BLOCK_SOLID => Some(BlockKind::STONE),
            BLOCK_WATER => Some(BlockKind::Liquid),
            BLOCK_SLOPE_UP_RIGHT => Some(BlockKind::slope(0, SlopeDir::UpRight)),
            BLOCK_SLOPE_UP_LEFT => Some(BlockKind::slope(0, SlopeDir::UpLeft)),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            BlockKind::Air => BLOCK_AIR,
            BlockKind::Liquid => BLOCK_WATER,
            BlockKind::Solid(SolidBlock { shape: BlockShape::Full, .. }) => BLOCK_SOLID,
            BlockKind::Solid(SolidBlock { shape: BlockShape::Slope(SlopeDir::UpRight), .. }) => {
                BLOCK_SLOPE_UP_RIGHT
            }
            BlockKind::Solid(SolidBlock { shape: BlockShape::Slope(SlopeDir::UpLeft), .. }) => {
                BLOCK_SLOPE_UP_LEFT
            }
        }
    }
}
