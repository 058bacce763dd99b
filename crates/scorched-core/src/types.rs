//! Fundamental geometric and simulation types.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// 2D position in playfield space (pixels).
/// x grows to the right, y grows upward from the bottom edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Horizontal distance, ignoring height.
    pub fn horizontal_range_to(&self, other: &Position) -> f64 {
        (other.x - self.x).abs()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

/// Stable reference to a tank: owning player index and slot within that
/// player's tank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TankRef {
    pub player: usize,
    pub slot: usize,
}

impl TankRef {
    pub fn new(player: usize, slot: usize) -> Self {
        Self { player, slot }
    }
}

/// An explosion waiting to be resolved. Produced by a shell landing or by a
/// tank being destroyed; consumed immediately by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Position,
    pub radius: f64,
    pub power: f64,
    /// True when a destroyed tank caused this blast.
    pub chained: bool,
}

impl Explosion {
    /// Blast of a fired shell.
    pub fn shell(center: Position) -> Self {
        Self {
            center,
            radius: crate::constants::SHELL_EXPLOSION_RADIUS,
            power: crate::constants::SHELL_EXPLOSION_POWER,
            chained: false,
        }
    }

    /// Blast of a destroyed tank.
    pub fn tank(center: Position) -> Self {
        Self {
            center,
            radius: crate::constants::TANK_EXPLOSION_RADIUS,
            power: crate::constants::TANK_EXPLOSION_POWER,
            chained: true,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Completed turns, forfeits included.
    pub turn: u32,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
