use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions:
/// - Idle -> Playing
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Playing, through a new game
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No board has been generated yet
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a single reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// A safe tile was revealed, possibly cascading, possibly winning the game
    Safe,
    /// The tile held a mine, the game is lost
    Mine,
    AlreadyRevealed,
    NotPlaying,
    OutOfBounds,
}

impl RevealOutcome {
    /// Turns rejected requests into their [`GameError`].
    pub const fn into_result(self) -> Result<Self> {
        match self {
            Self::NotPlaying => Err(GameError::NotPlaying),
            Self::OutOfBounds => Err(GameError::OutOfBounds),
            outcome => Ok(outcome),
        }
    }
}

/// Owns the board of the current round and drives it from start to finish.
#[derive(Debug, Default)]
pub struct GameEngine {
    board: Option<Board>,
    config: Option<GameConfig>,
    state: GameState,
    timer: GameTimer,
    revealed_count: CellCount,
    triggered_mine: Option<Position>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any previous round and starts a new one.
    ///
    /// On error the engine is left exactly as it was.
    pub fn new_game(&mut self, config: GameConfig, generator: impl BoardGenerator) -> Result<()> {
        let config = config.validate()?;
        let layout = generator.generate(config)?;
        if layout.size() != config.size() {
            return Err(GameError::InvalidDimensions);
        }
        if layout.mine_count() != config.mines {
            return Err(GameError::InvalidMineCount);
        }

        self.board = Some(Board::build(&layout));
        self.config = Some(config);
        self.state = GameState::Playing;
        self.revealed_count = 0;
        self.triggered_mine = None;
        self.timer.reset();
        self.timer.start();
        log::debug!(
            "New {}x{} game with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> Option<GameConfig> {
        self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// `(height, width)` of the current board, `(0, 0)` while idle.
    pub fn size(&self) -> Coord2 {
        self.board.as_ref().map_or((0, 0), Board::size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.as_ref().map_or(0, Board::mine_count)
    }

    /// Safe tiles revealed so far in this round.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine that ended the round, if it was lost.
    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.timer.elapsed_secs()
    }

    pub fn tile_view(&self, pos: impl Into<Position>) -> Result<TileView> {
        let pos = pos.into();
        let board = self.board.as_ref().ok_or(GameError::OutOfBounds)?;
        let tile = board.get(pos).ok_or(GameError::OutOfBounds)?;
        Ok(TileView::project(tile, self.state.is_finished()))
    }

    /// Views of every tile in row-major order; empty while idle.
    pub fn tile_views(&self) -> impl Iterator<Item = (Position, TileView)> + '_ {
        let game_over = self.state.is_finished();
        self.board
            .iter()
            .flat_map(|board| board.iter())
            .map(move |(pos, tile)| (pos, TileView::project(tile, game_over)))
    }

    /// Hidden neighbours of `pos`, what a UI highlights while a tile is held down.
    pub fn preview(&self, pos: impl Into<Position>) -> Result<SmallVec<[Position; 8]>> {
        let pos = pos.into();
        let board = self.board.as_ref().ok_or(GameError::OutOfBounds)?;
        if !board.contains(pos) {
            return Err(GameError::OutOfBounds);
        }
        if !self.state.is_playing() {
            return Ok(SmallVec::new());
        }
        Ok(board
            .neighbors(pos)
            .filter(|&neighbor| !board[neighbor].is_revealed())
            .collect())
    }

    /// Same as [`reveal`](Self::reveal), with rejected requests reported as errors.
    pub fn try_reveal(&mut self, pos: impl Into<Position>) -> Result<RevealOutcome> {
        self.reveal(pos).into_result()
    }

    pub fn reveal(&mut self, pos: impl Into<Position>) -> RevealOutcome {
        let pos = pos.into();
        if !self.state.is_playing() {
            return RevealOutcome::NotPlaying;
        }
        let Some(board) = self.board.as_mut() else {
            return RevealOutcome::NotPlaying;
        };
        let Some(&tile) = board.get(pos) else {
            return RevealOutcome::OutOfBounds;
        };

        if tile.is_revealed() {
            return RevealOutcome::AlreadyRevealed;
        }

        if tile.is_mine() {
            log::debug!("Hit mine at {}", pos);
            self.triggered_mine = Some(pos);
            self.end_game(false);
            return RevealOutcome::Mine;
        }

        self.revealed_count += flood_reveal(board, pos);

        if self.revealed_count == board.safe_cell_count() {
            self.end_game(true);
        }
        RevealOutcome::Safe
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        self.timer.stop();
        if let Some(board) = self.board.as_mut() {
            board.expose_all();
        }
        log::debug!(
            "Game {} after {:.1}s",
            if won { "won" } else { "lost" },
            self.timer.elapsed_secs()
        );
    }
}

/// Reveals the safe tile at `start` and, when it has no adjacent mines, the whole
/// zero-region around it plus its numbered border. Returns how many tiles were revealed.
///
/// Every cell is queued at most once, so the work is bounded by the board size.
fn flood_reveal(board: &mut Board, start: Position) -> CellCount {
    let mut revealed = 0;
    let mut visited: HashSet<Position> = HashSet::from([start]);
    let mut to_visit = VecDeque::from([start]);

    while let Some(pos) = to_visit.pop_front() {
        let tile = board[pos];
        if tile.is_revealed() || tile.is_mine() {
            continue;
        }

        let count = board.adjacent_mine_count(pos);
        board.tile_mut(pos).reveal_safe(count);
        revealed += 1;
        log::trace!("Revealed {} with {} adjacent mines", pos, count);

        if count == 0 {
            let next: SmallVec<[Position; 8]> = board
                .neighbors(pos)
                .filter(|&neighbor| !board[neighbor].is_revealed())
                .filter(|&neighbor| visited.insert(neighbor))
                .collect();
            to_visit.extend(next);
        }
    }

    revealed
}
