//! Projectile system: advances the shell one trajectory step per tick.

use glam::IVec2;
use hecs::{Entity, World};

use scorched_core::ballistics::{muzzle_position, Trajectory, TrajectoryStep};
use scorched_core::components::Turret;
use scorched_core::types::Position;
use scorched_terrain::Ground;

use crate::player::Player;
use crate::systems::collision::{check_collision, Impact};

/// Shell lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellState {
    Flying,
    Landed(Impact),
    Lost,
}

/// The shell in flight.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub shooter: Entity,
    pub trajectory: Trajectory,
    pub state: ShellState,
}

impl Projectile {
    /// Launch from the muzzle of a tank at `base` with the given turret.
    pub fn launch(shooter: Entity, base: Position, turret: &Turret, playfield_height: f64) -> Self {
        let start = muzzle_position(base, turret.angle);
        Self {
            shooter,
            trajectory: Trajectory::new(start, turret.angle, turret.power, playfield_height),
            state: ShellState::Flying,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.trajectory.position()
    }
}

/// Advance the shell one step and test the travelled segment for a hit.
/// Once landed or lost the shell stays put.
pub fn advance(projectile: &mut Projectile, world: &World, players: &[Player], ground: &Ground) -> ShellState {
    if projectile.state != ShellState::Flying {
        return projectile.state;
    }
    projectile.state = match projectile.trajectory.step() {
        None | Some(TrajectoryStep::Lost { .. }) => ShellState::Lost,
        Some(TrajectoryStep::Moved { from, to }) => {
            match check_collision(world, players, ground, from.as_dvec2(), to.as_dvec2()) {
                Some(impact) => ShellState::Landed(impact),
                None => ShellState::Flying,
            }
        }
    };
    projectile.state
}
