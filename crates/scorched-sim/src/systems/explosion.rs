//! Explosion resolver: carves terrain and damages tanks, following chain
//! reactions through an explicit work queue.

use std::collections::VecDeque;

use hecs::World;
use log::debug;

use scorched_core::events::{AudioEvent, GameEvent};
use scorched_core::types::Explosion;
use scorched_terrain::Ground;

use crate::systems::damage::apply_damage;

/// Summary of one resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Explosions processed, the initial one included.
    pub explosions: usize,
    pub tanks_destroyed: usize,
}

/// Resolve `initial` and every explosion it sets off.
///
/// Explosions are processed first in, first out. Each one carves and settles
/// the terrain before damage is applied, then queues a blast for every tank
/// it destroyed. Dead tanks take no further damage, so at most
/// `1 + number of tanks` explosions are processed.
pub fn resolve(
    world: &mut World,
    ground: &mut Ground,
    initial: Explosion,
    events: &mut Vec<GameEvent>,
    audio_events: &mut Vec<AudioEvent>,
) -> ResolveReport {
    let mut report = ResolveReport::default();
    let mut queue = VecDeque::from([initial]);

    while let Some(explosion) = queue.pop_front() {
        report.explosions += 1;
        debug!(
            "explosion #{} at ({:.1}, {:.1}) r={} p={} chained={}",
            report.explosions,
            explosion.center.x,
            explosion.center.y,
            explosion.radius,
            explosion.power,
            explosion.chained
        );
        events.push(GameEvent::Explosion {
            center: explosion.center,
            radius: explosion.radius,
            power: explosion.power,
            chained: explosion.chained,
        });

        let overhangs = ground.update_after_explosion(explosion.center.as_dvec2(), explosion.radius);
        let settled = ground.update_after_sloughing(&overhangs);
        if settled > 0 {
            events.push(GameEvent::TerrainSettled { columns: settled });
        }

        let destroyed = apply_damage(
            world,
            explosion.center,
            explosion.power,
            explosion.radius,
            events,
            audio_events,
        );
        report.tanks_destroyed += destroyed.len();
        queue.extend(destroyed.into_iter().map(Explosion::tank));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorched_core::components::{Health, Tank, Turret};
    use scorched_core::types::Position;

    fn spawn(world: &mut World, ground: &Ground, slot: usize, x: f64, hp: i32) {
        world.spawn((
            Tank { player: slot, slot: 0 },
            Position::new(x, ground.height_at(x)),
            Turret { angle: 0.0, power: 50 },
            Health { current: hp, max: 100 },
        ));
    }

    #[test]
    fn test_single_explosion_without_tanks() {
        let mut world = World::new();
        let mut ground = Ground::flat(800.0, 600.0, 200.0);
        let mut events = Vec::new();
        let mut audio = Vec::new();
        let report = resolve(
            &mut world,
            &mut ground,
            Explosion::shell(Position::new(400.0, 200.0)),
            &mut events,
            &mut audio,
        );
        assert_eq!(report.explosions, 1);
        assert!(ground.height_at(400.0) < 200.0, "terrain carved");
    }

    #[test]
    fn test_chain_reaction_terminates() {
        // A row of weak tanks 20px apart: each blast destroys the next one.
        let mut world = World::new();
        let mut ground = Ground::flat(800.0, 600.0, 200.0);
        let count = 8;
        for i in 0..count {
            spawn(&mut world, &ground, i, 300.0 + 20.0 * i as f64, 1);
        }
        let mut events = Vec::new();
        let mut audio = Vec::new();
        let report = resolve(
            &mut world,
            &mut ground,
            Explosion::shell(Position::new(300.0, 200.0)),
            &mut events,
            &mut audio,
        );
        assert_eq!(report.tanks_destroyed, count, "every tank in the chain dies");
        assert!(
            report.explosions <= 1 + count,
            "{} explosions for {} tanks",
            report.explosions,
            count
        );
        let chained = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Explosion { chained: true, .. }))
            .count();
        assert_eq!(chained, count);
    }
}
