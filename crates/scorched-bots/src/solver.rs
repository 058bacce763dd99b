//! Firing solutions against the arcade trajectory.
//!
//! Pure functions: simulate the same integer trajectory the engine flies and
//! pick the angle/power whose descent passes closest to the aim point.
//! Terrain is ignored; bots only see tank positions.

use glam::DVec2;

use scorched_core::ballistics::{muzzle_position, Trajectory, TrajectoryStep};
use scorched_core::constants::{MAX_POWER, TANK_HITBOX_OFFSET};
use scorched_core::types::Position;

/// Angles tried, in degrees away from vertical toward the target.
const ANGLE_CANDIDATES: std::ops::RangeInclusive<i32> = 15..=75;
const POWER_STEP: usize = 2;
const MIN_POWER: u32 = 10;

/// A candidate shot and where it comes down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringSolution {
    /// Degrees, 0 = straight up, positive leans right.
    pub angle: f64,
    pub power: u32,
    /// Horizontal miss distance at the aim height.
    pub miss: f64,
}

/// x where the shell comes down through `level` on its way down, or `None`
/// if it is lost before reaching it.
pub fn descent_crossing(start: Position, angle_rad: f64, power: u32, level: f64, playfield_height: f64) -> Option<f64> {
    let muzzle = muzzle_position(start, angle_rad);
    let trajectory = Trajectory::new(muzzle, angle_rad, power, playfield_height);
    for step in trajectory {
        let (from, to) = step.segment();
        let (from, to) = (from.as_dvec2(), to.as_dvec2());
        if to.y < from.y && from.y >= level && to.y < level {
            return Some(interpolate_x(from, to, level));
        }
        if matches!(step, TrajectoryStep::Lost { .. }) {
            break;
        }
    }
    None
}

fn interpolate_x(from: DVec2, to: DVec2, level: f64) -> f64 {
    let t = (from.y - level) / (from.y - to.y);
    from.x + (to.x - from.x) * t
}

/// Best shot from a tank standing at `shooter` onto `aim`.
pub fn solve(shooter: Position, aim: Position, playfield_height: f64) -> Option<FiringSolution> {
    let side = if aim.x >= shooter.x { 1.0 } else { -1.0 };
    let level = aim.y + TANK_HITBOX_OFFSET;
    let mut best: Option<FiringSolution> = None;

    for degrees in ANGLE_CANDIDATES {
        let angle = side * degrees as f64;
        for power in (MIN_POWER..=MAX_POWER).step_by(POWER_STEP) {
            let Some(x) = descent_crossing(shooter, angle.to_radians(), power, level, playfield_height) else {
                continue;
            };
            let miss = x - aim.x;
            if best.map_or(true, |b| miss.abs() < b.miss.abs()) {
                best = Some(FiringSolution { angle, power, miss });
            }
        }
    }
    best
}
