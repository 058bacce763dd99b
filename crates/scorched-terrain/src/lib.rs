//! Terrain system for SCORCHED.
//!
//! Height-field ground polyline, procedural generation,
//! shell collision queries, crater carving and sloughing.

pub use scorched_core as core;

pub mod collision;
pub mod crater;
pub mod generation;
pub mod ground;

// Re-export key types for convenience.
pub use crater::Overhang;
pub use generation::generate;
pub use ground::Ground;
