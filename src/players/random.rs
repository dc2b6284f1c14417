//! Computer player drawing random moves.

use super::Player;
use crate::games::fifteen::contracts::{ValueInRange, validate};
use crate::games::fifteen::{GameInProgress, Mark, Move, Position};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Computer player sampling cells uniformly until it finds an empty one.
///
/// Values follow the mark's parity: `X` draws odd values, `O` even ones.
#[derive(Debug)]
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a player seeded from OS entropy.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self::from_rng(name, mark, StdRng::from_entropy())
    }

    /// Creates a deterministic player.
    pub fn with_seed(name: impl Into<String>, mark: Mark, seed: u64) -> Self {
        Self::from_rng(name, mark, StdRng::seed_from_u64(seed))
    }

    fn from_rng(name: impl Into<String>, mark: Mark, rng: StdRng) -> Self {
        let name = name.into();
        info!(player = %name, %mark, "Creating random player");
        Self { name, mark, rng }
    }
}

impl Player for RandomPlayer {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose_move(&mut self, game: &GameInProgress) -> Result<Move> {
        if game.open_cells().is_empty() {
            anyhow::bail!("No empty cell left for {}", self.name);
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let row = self.rng.gen_range(0..Position::SIZE);
            let col = self.rng.gen_range(0..Position::SIZE);
            let value = *self
                .mark
                .preferred_values()
                .choose(&mut self.rng)
                .context("Mark has no preferred values")?;
            let position = Position::new(row, col).context("Sampled inside the grid")?;

            if validate(game.board(), position, value) {
                debug!(%position, value, attempts, "Random player chose move");
                return Ok(Move::new(
                    &self.name,
                    self.mark,
                    position,
                    ValueInRange::check(value)?,
                ));
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
