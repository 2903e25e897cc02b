use core::fmt;

use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Grid position as `(row, column)`, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub column: Coord,
}

impl Position {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    /// Whether this position lies inside a `height` x `width` grid.
    pub const fn is_within(self, (height, width): Coord2) -> bool {
        self.row < height && self.column < width
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, column): (Coord, Coord)) -> Self {
        Self { row, column }
    }
}

impl From<Position> for (Coord, Coord) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Grid size as `(height, width)`, matching `ndarray`'s `(rows, columns)` shape.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.column.into()]
    }
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    a as CellCount * b as CellCount
}

const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Position, (d_row, d_column): (i32, i32), bounds: Coord2) -> Option<Position> {
    let row = Coord::try_from(i32::from(pos.row) + d_row).ok()?;
    let column = Coord::try_from(i32::from(pos.column) + d_column).ok()?;
    let next = Position::new(row, column);
    next.is_within(bounds).then_some(next)
}

/// Iterates the clamped 8-neighbourhood of a position; cells outside the grid are skipped.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Position, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next) = apply_delta(self.center, delta, self.bounds) {
                return Some(next);
            }
        }
        None
    }
}
