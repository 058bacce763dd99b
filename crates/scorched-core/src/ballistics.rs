//! Arcade shell trajectory shared by the projectile simulator and the bots'
//! aim solver.
//!
//! Positions are integer pixels. Each step advances by the truncated
//! displacement for the current elapsed time, so the path is reproducible
//! bit for bit on every platform.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// Launch speed for a power setting.
pub fn shell_speed(power: u32) -> f64 {
    MIN_SHELL_SPEED + SHELL_SPEED_STEP * power as f64
}

/// Muzzle position of a tank standing at `base` with its turret at `angle`.
pub fn muzzle_position(base: Position, angle: f64) -> IVec2 {
    let pivot_y = base.y + TURRET_PIVOT_HEIGHT;
    IVec2::new(
        (base.x + GUN_LENGTH * angle.sin()).round() as i32,
        (pivot_y + GUN_LENGTH * angle.cos()).round() as i32,
    )
}

/// One advance of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrajectoryStep {
    /// Shell moved from `from` to `to` and is still in play.
    Moved { from: IVec2, to: IVec2 },
    /// Shell fell below the playfield floor. The trajectory is finished.
    Lost { from: IVec2, to: IVec2 },
}

impl TrajectoryStep {
    pub fn segment(&self) -> (IVec2, IVec2) {
        match *self {
            TrajectoryStep::Moved { from, to } | TrajectoryStep::Lost { from, to } => (from, to),
        }
    }
}

/// Shell flight state. Iterating yields one [`TrajectoryStep`] per call and
/// ends after the shell is lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    position: IVec2,
    speed: f64,
    angle: f64,
    elapsed: f64,
    /// Lowest y still in play (negative playfield height).
    floor: f64,
    lost: bool,
}

impl Trajectory {
    pub fn new(start: IVec2, angle: f64, power: u32, playfield_height: f64) -> Self {
        Self {
            position: start,
            speed: shell_speed(power),
            angle,
            elapsed: SHELL_INITIAL_ELAPSED,
            floor: -playfield_height,
            lost: false,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Advance one step. Returns `None` once the shell has been lost.
    pub fn step(&mut self) -> Option<TrajectoryStep> {
        if self.lost {
            return None;
        }
        let t = self.elapsed;
        let from = self.position;
        let dx = (self.speed * self.angle.sin() * t).trunc() as i32;
        let dy = ((self.speed * self.angle.cos() - GRAVITY * t / 2.0) * t).trunc() as i32;
        self.position = IVec2::new(from.x + dx, from.y + dy);
        self.elapsed += SHELL_TIME_STEP;

        if (self.position.y as f64) < self.floor {
            self.lost = true;
            Some(TrajectoryStep::Lost {
                from,
                to: self.position,
            })
        } else {
            Some(TrajectoryStep::Moved {
                from,
                to: self.position,
            })
        }
    }
}

impl Iterator for Trajectory {
    type Item = TrajectoryStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

impl std::iter::FusedIterator for Trajectory {}
