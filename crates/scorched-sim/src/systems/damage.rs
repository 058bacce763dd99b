//! Damage system: applies blast damage to tanks and reports destroyed ones.

use hecs::{Entity, World};

use scorched_core::components::{Health, Tank};
use scorched_core::events::{AudioEvent, GameEvent};
use scorched_core::types::{Position, TankRef};

/// True while the entity is a tank with health left.
pub fn is_alive(world: &World, tank: Entity) -> bool {
    world
        .get::<&Health>(tank)
        .map(|h| h.current > 0)
        .unwrap_or(false)
}

/// Damage every alive tank closer than `radius` to `center`.
///
/// Damage falls off linearly: `round(power * (1 - distance / radius))`,
/// health floored at 0. Returns the positions of tanks destroyed by this
/// blast, in tank order, so the caller can queue their own explosions.
pub fn apply_damage(
    world: &mut World,
    center: Position,
    power: f64,
    radius: f64,
    events: &mut Vec<GameEvent>,
    audio_events: &mut Vec<AudioEvent>,
) -> Vec<Position> {
    let mut destroyed = Vec::new();
    if !(radius > 0.0) {
        return destroyed;
    }

    let mut hits: Vec<(TankRef, Position, &mut Health)> = world
        .query_mut::<(&Tank, &Position, &mut Health)>()
        .into_iter()
        .filter(|(_, (_, _, health))| health.current > 0)
        .map(|(_, (tank, pos, health))| (TankRef::new(tank.player, tank.slot), *pos, health))
        .filter(|(_, pos, _)| pos.range_to(&center) < radius)
        .collect();
    // Sort for determinism.
    hits.sort_by_key(|(tank, _, _)| *tank);

    for (tank, pos, health) in hits {
        let distance = pos.range_to(&center);
        let damage = (power * (1.0 - distance / radius)).round() as i32;
        if damage <= 0 {
            continue;
        }
        health.current = (health.current - damage).max(0);
        events.push(GameEvent::TankDamaged {
            tank,
            damage,
            remaining: health.current,
        });
        audio_events.push(AudioEvent::TankHit);

        if health.current == 0 {
            events.push(GameEvent::TankDestroyed { tank, position: pos });
            audio_events.push(AudioEvent::TankExplosion);
            destroyed.push(pos);
        }
    }
    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorched_core::components::Turret;

    fn spawn(world: &mut World, slot: usize, x: f64, hp: i32) -> Entity {
        world.spawn((
            Tank { player: 0, slot },
            Position::new(x, 100.0),
            Turret { angle: 0.0, power: 50 },
            Health { current: hp, max: 100 },
        ))
    }

    #[test]
    fn test_linear_falloff() {
        let mut world = World::new();
        let near = spawn(&mut world, 0, 100.0, 100);
        let mid = spawn(&mut world, 1, 115.0, 100);
        let far = spawn(&mut world, 2, 140.0, 100);
        let mut events = Vec::new();
        let mut audio = Vec::new();

        let destroyed = apply_damage(&mut world, Position::new(100.0, 100.0), 50.0, 30.0, &mut events, &mut audio);
        assert!(destroyed.is_empty());
        assert_eq!(world.get::<&Health>(near).unwrap().current, 50, "point blank takes full power");
        assert_eq!(world.get::<&Health>(mid).unwrap().current, 75, "half radius takes half power");
        assert_eq!(world.get::<&Health>(far).unwrap().current, 100, "outside radius untouched");
        assert_eq!(audio, vec![AudioEvent::TankHit, AudioEvent::TankHit]);
    }

    #[test]
    fn test_destroyed_tank_reported_and_floored() {
        let mut world = World::new();
        let tank = spawn(&mut world, 0, 100.0, 20);
        let mut events = Vec::new();
        let mut audio = Vec::new();
        let destroyed = apply_damage(&mut world, Position::new(100.0, 100.0), 50.0, 30.0, &mut events, &mut audio);
        assert_eq!(destroyed, vec![Position::new(100.0, 100.0)]);
        assert_eq!(world.get::<&Health>(tank).unwrap().current, 0);
        assert!(!is_alive(&world, tank));
        assert!(audio.contains(&AudioEvent::TankExplosion));
    }

    #[test]
    fn test_dead_tanks_are_not_damaged_again() {
        let mut world = World::new();
        spawn(&mut world, 0, 100.0, 0);
        let mut events = Vec::new();
        let mut audio = Vec::new();
        let destroyed = apply_damage(&mut world, Position::new(100.0, 100.0), 50.0, 30.0, &mut events, &mut audio);
        assert!(destroyed.is_empty());
        assert!(events.is_empty());
    }
}
