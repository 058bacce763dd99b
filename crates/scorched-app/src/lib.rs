//! SCORCHED headless host.
//!
//! Wires the simulation crates together: loads the launch config, builds
//! the roster and drives the session through the game loop.

pub mod game_loop;
pub mod roster;
pub mod settings;
pub mod state;

pub use scorched_core as core;
