//! Random attacker: fires at a random angle and power every turn.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use scorched_core::bot::{BotError, DecisionSource, Move, TankSummary};

/// Names given to random attackers in the default roster.
pub const DEFAULT_NAMES: [&str; 3] = ["Randomer", "Random 2", "Random 3"];

/// Roster name for the `index`-th random attacker.
pub fn default_name(index: usize) -> String {
    DEFAULT_NAMES
        .get(index)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Random {}", index + 1))
}

pub struct RandomAttacker {
    name: String,
    color: String,
    rng: ChaCha8Rng,
}

impl RandomAttacker {
    pub fn new(name: impl Into<String>, color: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The `index`-th attacker of the default roster.
    pub fn numbered(index: usize, seed: u64) -> Self {
        Self::new(default_name(index), "green", seed)
    }
}

impl DecisionSource for RandomAttacker {
    fn name(&self) -> &str {
        &self.name
    }

    fn preferred_color(&self) -> &str {
        &self.color
    }

    fn attack(&mut self, _tanks: &[TankSummary]) -> Result<Move, BotError> {
        let angle = self.rng.gen_range(-90.0..90.0);
        let power = self.rng.gen_range(0.0..100.0);
        Ok(Move::new(angle, power))
    }
}
