//! Turret animation: swing toward the requested aim one step per tick.

use scorched_core::components::{AimTarget, Turret};
use scorched_core::constants::ANGLE_STEP;

/// Move the turret one step toward `target`: angle first, then power.
/// Returns `true` once the turret matches the target.
pub fn step_turret(turret: &mut Turret, target: &AimTarget) -> bool {
    let delta = target.angle - turret.angle;
    if delta.abs() > 0.0 {
        if delta.abs() <= ANGLE_STEP {
            turret.angle = target.angle;
        } else {
            turret.angle += ANGLE_STEP * delta.signum();
        }
        return false;
    }
    if turret.power != target.power {
        if turret.power < target.power {
            turret.power += 1;
        } else {
            turret.power -= 1;
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_then_power() {
        let mut turret = Turret { angle: 0.0, power: 50 };
        let target = AimTarget {
            angle: 2.5 * ANGLE_STEP,
            power: 48,
        };
        let mut ticks = 0;
        while !step_turret(&mut turret, &target) {
            if ticks < 3 {
                assert_eq!(turret.power, 50, "power waits for the angle");
            }
            ticks += 1;
            assert!(ticks < 100, "animation must finish");
        }
        assert_eq!(ticks, 5, "3 angle steps then 2 power steps");
        assert_eq!(turret.angle, target.angle);
        assert_eq!(turret.power, 48);
    }

    #[test]
    fn test_already_aimed() {
        let mut turret = Turret { angle: 0.3, power: 10 };
        assert!(step_turret(&mut turret, &AimTarget { angle: 0.3, power: 10 }));
    }
}
