use serde::{Deserialize, Serialize};

/// State of a single cell owned by the [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_mine: bool,
    is_revealed: bool,
    adjacent_mines: Option<u8>,
}

impl Tile {
    pub(crate) const fn new(is_mine: bool) -> Self {
        Self {
            is_mine,
            is_revealed: false,
            adjacent_mines: None,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    /// Cached count of neighbouring mines, set the first time a safe tile is revealed.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        self.adjacent_mines
    }

    /// Reveals a safe tile and caches its count; a count cached earlier is kept.
    pub(crate) fn reveal_safe(&mut self, adjacent_mines: u8) -> u8 {
        self.is_revealed = true;
        *self.adjacent_mines.get_or_insert(adjacent_mines)
    }

    /// Shows the tile for the end-of-game display without computing anything.
    pub(crate) fn expose(&mut self) {
        self.is_revealed = true;
    }
}

/// Read-only projection of a tile handed to the UI layer.
///
/// Mine information for a hidden tile is withheld until the game is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub revealed: bool,
    pub mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}

impl TileView {
    pub(crate) fn project(tile: &Tile, game_over: bool) -> Self {
        let visible = tile.is_revealed || game_over;
        Self {
            revealed: tile.is_revealed,
            mine: visible.then_some(tile.is_mine),
            adjacent_mines: if tile.is_revealed {
                tile.adjacent_mines
            } else {
                None
            },
        }
    }

    /// A hidden tile as seen while playing.
    pub const HIDDEN: Self = Self {
        revealed: false,
        mine: None,
        adjacent_mines: None,
    };
}
