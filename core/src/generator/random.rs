use super::*;

/// Uniform mine placement by rejection sampling.
///
/// A seeded generator re-seeds on every call so the same config always yields the same
/// layout; an unseeded one draws a fresh seed from the thread RNG each time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomBoardGenerator {
    seed: Option<u64>,
}

impl RandomBoardGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        let config = config.validate().inspect_err(|err| {
            log::warn!("Refusing to generate {:?}: {}", config, err);
        })?;

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = SmallRng::seed_from_u64(seed);
        let total_cells = config.total_cells();
        let width = CellCount::from(config.width);

        // mines < total_cells was checked above, so a free cell always exists
        let mut layout = MineLayout::empty(config.size());
        let mut rejected = 0usize;
        while layout.mine_count() < config.mines {
            let index = rng.random_range(0..total_cells);
            let pos = Position::new((index / width) as Coord, (index % width) as Coord);
            if !layout.place_mine(pos)? {
                rejected += 1;
            }
        }

        log::debug!(
            "Generated {}x{} board with {} mines (seed {}, {} resamples)",
            config.width,
            config.height,
            layout.mine_count(),
            seed,
            rejected
        );
        Ok(layout)
    }
}
