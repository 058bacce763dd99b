//! Core types and definitions for the SCORCHED artillery game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, the ballistic model and
//! the decision-source capability bots implement.
//! It has no dependency on any rendering or runtime framework.

pub mod ballistics;
pub mod bot;
pub mod colors;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
