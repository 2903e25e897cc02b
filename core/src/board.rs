use core::ops::Index;

use ndarray::Array2;

use crate::*;

/// Dense grid of tiles, one per cell, built once per round from a [`MineLayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: Array2<Tile>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    pub fn build(layout: &MineLayout) -> Self {
        let size = layout.size();
        let tiles = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            Tile::new(layout[Position::new(row as Coord, column as Coord)])
        });
        Self {
            tiles,
            size,
            mine_count: layout.mine_count(),
        }
    }

    pub fn width(&self) -> Coord {
        self.size.1
    }

    pub fn height(&self) -> Coord {
        self.size.0
    }

    /// `(height, width)` of the grid.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.contains(pos).then(|| &self.tiles[pos.to_nd_index()])
    }

    pub(crate) fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        &mut self.tiles[pos.to_nd_index()]
    }

    /// All tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, column), tile)| (Position::new(row as Coord, column as Coord), tile))
    }

    pub fn neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size)
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> u8 {
        self.neighbors(pos).filter(|&n| self[n].is_mine()).count() as u8
    }

    /// Number of tiles that are neither revealed nor mines.
    pub fn hidden_safe_count(&self) -> CellCount {
        self.tiles
            .iter()
            .filter(|tile| !tile.is_mine() && !tile.is_revealed())
            .count() as CellCount
    }

    pub(crate) fn expose_all(&mut self) {
        self.tiles.iter_mut().for_each(Tile::expose);
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_nd_index()]
    }
}
