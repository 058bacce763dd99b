//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Identifies a tank entity: owning player index and slot in that
/// player's ordered tank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tank {
    pub player: usize,
    pub slot: usize,
}

/// Turret aim. Angle in radians, 0 = straight up, positive leans right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    pub angle: f64,
    pub power: u32,
}

/// Tank hit points. A tank is alive while `current > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Aim the turret is swinging toward during the animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimTarget {
    pub angle: f64,
    pub power: u32,
}

// Position is defined in types.rs and also used as a component.
