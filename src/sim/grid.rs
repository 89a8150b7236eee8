//! Square pillar grid geometry
//!
//! Tiles are `IVec2` with `x` = column and `y` = row. Cell `(x, y)` lives at
//! index `y * width + x`; the grid is centered on the world origin.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A grid coordinate (`x` = column, `y` = row)
pub type Tile = IVec2;

/// One of the four hop directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Tile offset for one hop. Up/down walk columns and left/right walk
    /// rows, which is how the default camera looks at the grid.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(-1, 0),
            Direction::Down => IVec2::new(1, 0),
            Direction::Left => IVec2::new(0, -1),
            Direction::Right => IVec2::new(0, 1),
        }
    }

    /// Stable slot for per-direction arrays
    pub fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Grid dimensions, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: usize,
    pub tile_distance: f32,
}

impl Grid {
    pub fn new(width: usize, tile_distance: f32) -> Self {
        Self {
            width,
            tile_distance,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.grid_width, tuning.tile_distance)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Is this tile on the grid?
    pub fn contains(&self, tile: Tile) -> bool {
        let w = self.width as i32;
        (0..w).contains(&tile.x) && (0..w).contains(&tile.y)
    }

    /// Cell index of an on-grid tile
    #[inline]
    pub fn index(&self, tile: Tile) -> usize {
        debug_assert!(self.contains(tile), "tile {tile} off grid");
        tile.y as usize * self.width + tile.x as usize
    }

    /// Tile of a cell index
    #[inline]
    pub fn tile_at(&self, index: usize) -> Tile {
        IVec2::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Center tile (where the cube spawns)
    pub fn center(&self) -> Tile {
        let half = (self.width / 2) as i32;
        IVec2::splat(half)
    }

    /// World XY of a tile's pillar center
    pub fn world_xy(&self, tile: Tile) -> Vec2 {
        let half = (self.width / 2) as i32;
        (tile - IVec2::splat(half)).as_vec2() * self.tile_distance
    }

    /// Neighbour one hop away, or `tile` itself if that would leave the grid
    pub fn step(&self, tile: Tile, dir: Direction) -> Tile {
        let next = tile + dir.offset();
        if self.contains(next) { next } else { tile }
    }
}
