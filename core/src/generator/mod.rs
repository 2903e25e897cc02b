use crate::*;
pub use random::*;

mod random;

/// Source of mine placements for a new round.
///
/// Generators only produce a [`MineLayout`]; the engine turns it into a [`Board`].
pub trait BoardGenerator {
    fn generate(&self, config: GameConfig) -> Result<MineLayout>;
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for &G {
    fn generate(&self, config: GameConfig) -> Result<MineLayout> {
        (**self).generate(config)
    }
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for Box<G> {
    fn generate(&self, config: GameConfig) -> Result<MineLayout> {
        (**self).generate(config)
    }
}

/// Always produces a board without mines, whatever mine count was requested.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EmptyBoardGenerator;

impl BoardGenerator for EmptyBoardGenerator {
    fn generate(&self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        Ok(MineLayout::empty(config.size()))
    }
}

/// A fixed layout replays itself, as long as the request matches it.
impl BoardGenerator for MineLayout {
    fn generate(&self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        if config.size() != self.size() {
            return Err(GameError::InvalidDimensions);
        }
        if config.mines != self.mine_count() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(self.clone())
    }
}
