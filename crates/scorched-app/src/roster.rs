//! Roster: which decision source plays each seat.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use scorched_bots::random::default_name;
use scorched_bots::{NearestTargetBot, RandomAttacker, ScriptedBot};
use scorched_core::bot::DecisionSource;

/// Strategy for one seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BotKind {
    /// Random angle and power every turn. Without a seed, one is derived
    /// from the session seed and the seat index.
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Aims at the nearest enemy and corrects using where its shells land.
    Nearest,
    /// Replays recorded input, one JSON move per turn.
    Scripted { moves: Vec<Value> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub kind: BotKind,
}

/// Three random attackers, as offered by the main menu.
pub fn default_roster() -> Vec<BotSpec> {
    (0..3)
        .map(|_| BotSpec {
            name: None,
            color: None,
            kind: BotKind::Random { seed: None },
        })
        .collect()
}

/// Build decision sources for every seat.
pub fn build(specs: &[BotSpec], session_seed: u64, playfield_height: f64) -> Vec<Box<dyn DecisionSource>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| build_one(i, spec, session_seed, playfield_height))
        .collect()
}

fn build_one(index: usize, spec: &BotSpec, session_seed: u64, playfield_height: f64) -> Box<dyn DecisionSource> {
    let color = spec.color.clone().unwrap_or_else(|| "green".to_string());
    match &spec.kind {
        BotKind::Random { seed } => {
            let seed = seed.unwrap_or_else(|| session_seed.wrapping_add(1 + index as u64));
            let name = spec.name.clone().unwrap_or_else(|| default_name(index));
            Box::new(RandomAttacker::new(name, color, seed))
        }
        BotKind::Nearest => {
            let name = spec.name.clone().unwrap_or_else(|| format!("Aimer {}", index + 1));
            Box::new(NearestTargetBot::new(name, color).with_playfield_height(playfield_height))
        }
        BotKind::Scripted { moves } => {
            let name = spec.name.clone().unwrap_or_else(|| format!("Player {}", index + 1));
            Box::new(ScriptedBot::new(name, color, moves.clone()))
        }
    }
}
