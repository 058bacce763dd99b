//! Bot strategies for SCORCHED.
//!
//! Decision sources that play without a human: a random attacker,
//! a ballistic aimer that walks its shots in using last-hit feedback,
//! and a scripted source replaying a fixed input sequence.

pub mod nearest;
pub mod random;
pub mod scripted;
pub mod solver;

pub use scorched_core as core;

pub use nearest::NearestTargetBot;
pub use random::RandomAttacker;
pub use scripted::ScriptedBot;

#[cfg(test)]
mod tests;
