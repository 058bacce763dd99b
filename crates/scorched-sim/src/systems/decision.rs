//! Decision boundary: the only place the engine calls into decision sources.
//!
//! Errors, panics and nonsense numbers coming out of a source are turned
//! into a [`DecisionFault`] so a broken bot costs its turn and nothing else.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use hecs::{Entity, World};
use thiserror::Error;

use scorched_core::bot::{BotError, DecisionSource, Move, TankSummary};
use scorched_core::components::Health;
use scorched_core::enums::ForfeitReason;
use scorched_core::types::Position;

use crate::player::Player;

#[derive(Debug, Error)]
pub enum DecisionFault {
    #[error(transparent)]
    Bot(#[from] BotError),
    #[error("decision source panicked: {0}")]
    Panicked(String),
    #[error("move is not finite (angle={angle}, power={power})")]
    NonFinite { angle: f64, power: f64 },
}

impl DecisionFault {
    pub fn reason(&self) -> ForfeitReason {
        match self {
            DecisionFault::Bot(BotError::Malformed(_)) | DecisionFault::NonFinite { .. } => {
                ForfeitReason::Malformed
            }
            DecisionFault::Bot(_) => ForfeitReason::Declined,
            DecisionFault::Panicked(_) => ForfeitReason::Panicked,
        }
    }
}

/// Summaries of every alive tank, players in index order.
pub fn summaries(world: &World, players: &[Player], active: Option<Entity>) -> Vec<TankSummary> {
    let mut out = Vec::new();
    for player in players {
        for &tank in &player.tanks {
            let (Ok(pos), Ok(health)) = (world.get::<&Position>(tank), world.get::<&Health>(tank)) else {
                continue;
            };
            if health.current <= 0 {
                continue;
            }
            out.push(TankSummary {
                name: player.name.clone(),
                position: *pos,
                health: health.current,
                active: Some(tank) == active,
            });
        }
    }
    out
}

/// Ask a decision source for a move.
pub fn request_move(source: &mut dyn DecisionSource, tanks: &[TankSummary]) -> Result<Move, DecisionFault> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| source.attack(tanks)))
        .map_err(|payload| DecisionFault::Panicked(panic_message(payload.as_ref())))?;
    let mv = result?;
    if !mv.is_finite() {
        return Err(DecisionFault::NonFinite {
            angle: mv.angle,
            power: mv.power,
        });
    }
    Ok(mv)
}

/// Tell a decision source where its shell came down.
pub fn notify_last_hit(source: &mut dyn DecisionSource, point: Position) -> Result<(), DecisionFault> {
    panic::catch_unwind(AssertUnwindSafe(|| source.update_last_hit(point)))
        .map_err(|payload| DecisionFault::Panicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
