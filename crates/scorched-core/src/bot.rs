//! Decision-source capability: the seam between the turn orchestrator and
//! whatever chooses moves (scripted input, random bots, aiming bots).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::constants::*;
use crate::types::Position;

/// What a decision source sees of each alive tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSummary {
    /// Owning player's name.
    pub name: String,
    pub position: Position,
    pub health: i32,
    /// True for the tank that is about to fire.
    pub active: bool,
}

/// Requested aim. Angle in degrees (0 = straight up, positive leans right).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub angle: f64,
    pub power: f64,
}

impl Move {
    pub fn new(angle: f64, power: f64) -> Self {
        Self { angle, power }
    }

    /// Parse a move from JSON: either `[angle, power]` or
    /// `{"angle": .., "power": ..}`. Anything else is malformed.
    pub fn from_json(value: &Value) -> Result<Self, BotError> {
        let (angle, power) = match value {
            Value::Array(items) if items.len() == 2 => (&items[0], &items[1]),
            Value::Object(map) => match (map.get("angle"), map.get("power")) {
                (Some(a), Some(p)) => (a, p),
                _ => return Err(BotError::Malformed(format!("missing angle/power in {}", value))),
            },
            other => return Err(BotError::Malformed(format!("expected a pair, got {}", other))),
        };
        match (angle.as_f64(), power.as_f64()) {
            (Some(angle), Some(power)) => Ok(Self { angle, power }),
            _ => Err(BotError::Malformed(format!("non-numeric move {}", value))),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.power.is_finite()
    }

    /// Turret angle in radians, clamped to the legal range.
    pub fn turret_angle(&self) -> f64 {
        self.angle
            .clamp(MIN_ANGLE_DEGREES, MAX_ANGLE_DEGREES)
            .to_radians()
    }

    /// Turret power, clamped and rounded.
    pub fn turret_power(&self) -> u32 {
        self.power.clamp(0.0, MAX_POWER as f64).round() as u32
    }
}

/// Why a decision source produced no usable move.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("malformed move: {0}")]
    Malformed(String),
    #[error("move declined: {0}")]
    Declined(String),
    #[error("strategy failure: {0}")]
    Strategy(String),
}

/// Anything that can choose a move for a player.
///
/// `attack` is called at most once per turn with every alive tank. Errors
/// and panics are caught by the engine and forfeit the turn.
pub trait DecisionSource: Send {
    fn name(&self) -> &str;

    /// Colour name the player would like. Invalid or taken colours fall back
    /// to the session palette.
    fn preferred_color(&self) -> &str {
        "green"
    }

    fn attack(&mut self, tanks: &[TankSummary]) -> Result<Move, BotError>;

    /// Where this player's last shell came down (or was last seen).
    fn update_last_hit(&mut self, _point: Position) {}
}
