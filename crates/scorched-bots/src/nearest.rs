//! Nearest-target bot: aims at the closest enemy tank and walks its shots
//! in using where the previous shell came down.

use log::debug;

use scorched_core::bot::{BotError, DecisionSource, Move, TankSummary};
use scorched_core::constants::DISPLAY_HEIGHT;
use scorched_core::types::Position;

use crate::solver::solve;

/// Fraction of the last miss folded into the next aim point.
const CORRECTION_GAIN: f64 = 0.8;
/// Largest aim-point correction (pixels).
const MAX_CORRECTION: f64 = 150.0;

pub struct NearestTargetBot {
    name: String,
    color: String,
    playfield_height: f64,
    /// Target of the last shot, compared by x only.
    target: Option<Position>,
    /// Horizontal shift applied to the aim point for the current target.
    correction: f64,
}

impl NearestTargetBot {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            playfield_height: DISPLAY_HEIGHT,
            target: None,
            correction: 0.0,
        }
    }

    pub fn with_playfield_height(mut self, height: f64) -> Self {
        self.playfield_height = height;
        self
    }

    pub fn correction(&self) -> f64 {
        self.correction
    }

    fn pick_target<'a>(&self, shooter: &TankSummary, tanks: &'a [TankSummary]) -> Option<&'a TankSummary> {
        let enemies = tanks.iter().filter(|t| !t.active && t.name != self.name);
        let fallback = tanks.iter().filter(|t| !t.active);
        let by_range = |a: &&TankSummary, b: &&TankSummary| {
            let ra = a.position.range_to(&shooter.position);
            let rb = b.position.range_to(&shooter.position);
            ra.total_cmp(&rb)
        };
        enemies.min_by(by_range).or_else(|| fallback.min_by(by_range))
    }
}

impl DecisionSource for NearestTargetBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn preferred_color(&self) -> &str {
        &self.color
    }

    fn attack(&mut self, tanks: &[TankSummary]) -> Result<Move, BotError> {
        let shooter = tanks
            .iter()
            .find(|t| t.active)
            .ok_or_else(|| BotError::Strategy("no active tank in summary".into()))?;
        let target = self
            .pick_target(shooter, tanks)
            .ok_or_else(|| BotError::Declined("no target left".into()))?;

        let same_target = self
            .target
            .map_or(false, |prev| prev.horizontal_range_to(&target.position) < 1.0);
        if !same_target {
            self.correction = 0.0;
        }
        self.target = Some(target.position);

        let aim = Position::new(target.position.x + self.correction, target.position.y);
        let solution = solve(shooter.position, aim, self.playfield_height)
            .ok_or_else(|| BotError::Strategy(format!("no firing solution for {:?}", aim)))?;
        debug!(
            "{} aiming at {} ({:.0}, {:.0}), correction {:.1}, expected miss {:.1}",
            self.name, target.name, aim.x, aim.y, self.correction, solution.miss
        );
        Ok(Move::new(solution.angle, solution.power as f64))
    }

    fn update_last_hit(&mut self, point: Position) {
        if let Some(target) = self.target {
            let miss = point.x - target.x;
            self.correction = (self.correction - CORRECTION_GAIN * miss).clamp(-MAX_CORRECTION, MAX_CORRECTION);
        }
    }
}
