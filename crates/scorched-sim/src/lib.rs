//! Session engine for SCORCHED.
//!
//! Owns the hecs ECS world of tanks, the ground and the players, runs the
//! turn state machine one step per tick, and produces GameStateSnapshots
//! for the host.

pub mod engine;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use engine::{Session, SessionConfig, SessionError};
pub use scorched_core as core;
