//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, TankRef};

/// Audio cues for the host's sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Shell launched.
    Fire,
    /// Shell came down on the ground.
    GroundStrike,
    /// A tank took damage.
    TankHit,
    /// A tank was destroyed.
    TankExplosion,
}

/// Gameplay events for the presentation layer, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The active player fired.
    ShotFired {
        player: usize,
        tank: TankRef,
        angle_degrees: f64,
        power: u32,
    },
    /// The active player's decision source failed; the turn was skipped.
    TurnForfeited { player: usize, reason: ForfeitReason },
    /// The shell left the playfield through the bottom.
    ShellLost { last: Position },
    /// The shell hit something.
    Impact { point: Position, kind: ImpactKind },
    /// An explosion was resolved.
    Explosion {
        center: Position,
        radius: f64,
        power: f64,
        chained: bool,
    },
    /// A tank lost health.
    TankDamaged {
        tank: TankRef,
        damage: i32,
        remaining: i32,
    },
    /// A tank's health reached zero.
    TankDestroyed { tank: TankRef, position: Position },
    /// Carved terrain settled after an explosion.
    TerrainSettled { columns: usize },
    /// A player lost its last tank.
    PlayerEliminated { player: usize },
    /// Round over. `None` is a draw.
    GameOver { winner: Option<String> },
}
