//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Turn orchestrator phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active player's decision source to produce a move.
    #[default]
    AwaitingMove,
    /// Turret swinging toward the requested aim, then the shell in flight.
    Animating,
    /// Shell came down (or was lost); explosions and settling pending.
    Resolving,
    /// At most one player has tanks left.
    GameOver,
}

/// Why a turn ended without a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForfeitReason {
    /// The decision source returned an error or declined.
    Declined,
    /// The move had the wrong shape or non-finite numbers.
    Malformed,
    /// The decision source panicked.
    Panicked,
    /// The active tank could not take the move.
    Unavailable,
}

/// Where the shell ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    Ground,
    Tank,
}
