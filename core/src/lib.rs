//! Headless Minesweeper engine.
//!
//! A UI layer creates a [`GameEngine`], starts rounds with [`GameEngine::new_game`] using any
//! [`BoardGenerator`], forwards clicks to [`GameEngine::reveal`] and redraws from
//! [`GameEngine::tile_view`] and [`GameEngine::state`].

use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod timer;
mod types;

/// Dimensions and mine count for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Grid shape as `(height, width)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Checks that the board is non-empty and that at least one tile stays safe.
    pub fn validate(&self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(*self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5, 5, 5)
    }
}

/// Raw mine placement produced by a [`BoardGenerator`], indexed `[row, column]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord2,
    mine_count: CellCount,
}

impl MineLayout {
    /// An all-safe layout of the given `(height, width)`.
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            size,
            mine_count: 0,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        let size = (
            Coord::try_from(rows).map_err(|_| GameError::InvalidDimensions)?,
            Coord::try_from(columns).map_err(|_| GameError::InvalidDimensions)?,
        );
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            size,
            mine_count,
        })
    }

    /// Builds a layout with mines exactly at `mines`; duplicates count once.
    pub fn from_mine_positions(size: Coord2, mines: &[Position]) -> Result<Self> {
        let mut layout = Self::empty(size);
        for &pos in mines {
            layout.place_mine(pos)?;
        }
        Ok(layout)
    }

    /// Puts a mine at `pos`, returning whether the cell was previously safe.
    pub fn place_mine(&mut self, pos: Position) -> Result<bool> {
        let pos = self.validate_position(pos)?;
        let cell = &mut self.mine_mask[pos.to_nd_index()];
        if *cell {
            return Ok(false);
        }
        *cell = true;
        self.mine_count += 1;
        Ok(true)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.size.1, self.size.0, self.mine_count)
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        if pos.is_within(self.size) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// `(height, width)` of the layout.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Position) -> bool {
        self[pos]
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> u8 {
        self.iter_neighbors(pos).filter(|&neighbor| self[neighbor]).count() as u8
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size)
    }
}

impl Index<Position> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.mine_mask[pos.to_nd_index()]
    }
}
