use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board width and height must both be positive")]
    InvalidDimensions,
    #[error("Mine count must leave at least one safe tile")]
    InvalidMineCount,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("No game in progress, no new moves are accepted")]
    NotPlaying,
}

pub type Result<T> = core::result::Result<T, GameError>;
