//! Scripted decision source: replays a queue of JSON moves.
//!
//! Stands in for keyboard input: each entry is whatever the input layer
//! produced, so malformed entries exercise the same forfeits a broken
//! bot would.

use std::collections::VecDeque;

use log::debug;
use serde_json::Value;

use scorched_core::bot::{BotError, DecisionSource, Move, TankSummary};
use scorched_core::types::Position;

pub struct ScriptedBot {
    name: String,
    color: String,
    script: VecDeque<Value>,
    hits: Vec<Position>,
    seen: Vec<Vec<TankSummary>>,
}

impl ScriptedBot {
    pub fn new(name: impl Into<String>, color: impl Into<String>, script: impl IntoIterator<Item = Value>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            script: script.into_iter().collect(),
            hits: Vec::new(),
            seen: Vec::new(),
        }
    }

    /// Script of well-formed `[angle, power]` moves.
    pub fn from_moves(name: impl Into<String>, color: impl Into<String>, moves: &[(f64, f64)]) -> Self {
        Self::new(
            name,
            color,
            moves.iter().map(|(a, p)| serde_json::json!([a, p])),
        )
    }

    /// Last-hit points received so far.
    pub fn hits(&self) -> &[Position] {
        &self.hits
    }

    /// Tank summaries passed to each `attack` call.
    pub fn seen(&self) -> &[Vec<TankSummary>] {
        &self.seen
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionSource for ScriptedBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn preferred_color(&self) -> &str {
        &self.color
    }

    fn attack(&mut self, tanks: &[TankSummary]) -> Result<Move, BotError> {
        self.seen.push(tanks.to_vec());
        let entry = self
            .script
            .pop_front()
            .ok_or_else(|| BotError::Declined("script exhausted".into()))?;
        debug!("{} plays scripted move {}", self.name, entry);
        Move::from_json(&entry)
    }

    fn update_last_hit(&mut self, point: Position) {
        self.hits.push(point);
    }
}
