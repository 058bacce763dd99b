//! Session commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Host-level actions. Moves themselves come from decision sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Rebuild terrain, tanks and colours and start a new round.
    PlayAgain,
    /// Halt the session. A shell in flight is discarded.
    Quit,
}
