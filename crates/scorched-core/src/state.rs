//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{Position, SimTime, TankRef};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: TurnPhase,
    /// Rounds started in this session (1 for the first round).
    pub round: u32,
    pub width: f64,
    pub height: f64,
    /// Terrain polyline, left to right.
    pub terrain: Vec<Position>,
    pub players: Vec<PlayerView>,
    pub tanks: Vec<TankView>,
    pub active_player: Option<usize>,
    pub active_tank: Option<TankRef>,
    pub shell: Option<ShellView>,
    pub winner: Option<String>,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// Per-player summary for the scoreboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub rgb: Rgb,
    pub alive_tanks: usize,
    pub last_hit: Option<Position>,
}

/// A tank as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub tank: TankRef,
    pub position: Position,
    /// Turret angle (radians, 0 = straight up).
    pub angle: f64,
    pub power: u32,
    pub health: i32,
    pub max_health: i32,
    pub rgb: Rgb,
    pub alive: bool,
}

/// The shell in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellView {
    pub position: Position,
    /// Trajectory time already elapsed.
    pub elapsed: f64,
}
