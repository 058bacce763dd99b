//! Collision system: shell segment against tanks, then terrain.

use glam::DVec2;
use hecs::{Entity, World};

use scorched_core::constants::{TANK_HITBOX_OFFSET, TANK_HITBOX_RADIUS};
use scorched_core::geometry::segment_circle_first_contact;
use scorched_core::types::Position;
use scorched_terrain::Ground;

use crate::player::Player;
use crate::systems::damage::is_alive;

/// What the shell struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    Tank { entity: Entity, point: DVec2 },
    Ground { point: DVec2 },
}

impl Impact {
    pub fn point(&self) -> DVec2 {
        match *self {
            Impact::Tank { point, .. } | Impact::Ground { point } => point,
        }
    }
}

/// Centre of a tank's hit circle.
pub fn hitbox_center(pos: &Position) -> DVec2 {
    DVec2::new(pos.x, pos.y + TANK_HITBOX_OFFSET)
}

/// Test the segment `prev→current` for a hit.
///
/// Alive tanks are checked first, players in index order and tanks in
/// insertion order; the first tank touched wins. Otherwise the nearest
/// terrain crossing is returned. Never mutates anything.
pub fn check_collision(
    world: &World,
    players: &[Player],
    ground: &Ground,
    prev: DVec2,
    current: DVec2,
) -> Option<Impact> {
    for player in players {
        for &entity in &player.tanks {
            if !is_alive(world, entity) {
                continue;
            }
            let Ok(pos) = world.get::<&Position>(entity) else {
                continue;
            };
            if let Some((_, point)) =
                segment_circle_first_contact(prev, current, hitbox_center(&pos), TANK_HITBOX_RADIUS)
            {
                return Some(Impact::Tank { entity, point });
            }
        }
    }
    ground
        .check_collision(prev, current)
        .map(|point| Impact::Ground { point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorched_bots::RandomAttacker;
    use scorched_core::components::{Health, Tank, Turret};

    fn player(index: usize) -> Player {
        Player::new(index, Box::new(RandomAttacker::numbered(index, index as u64)))
    }

    fn spawn(world: &mut World, player: &mut Player, x: f64, y: f64, hp: i32) -> Entity {
        let slot = player.tanks.len();
        let entity = world.spawn((
            Tank {
                player: player.index,
                slot,
            },
            Position::new(x, y),
            Turret { angle: 0.0, power: 50 },
            Health { current: hp, max: 100 },
        ));
        player.tanks.push(entity);
        entity
    }

    /// Flat ground at 100 with a 150-high ridge between x=140 and x=160.
    fn ridge() -> Ground {
        Ground::from_fn(400.0, 300.0, 4.0, |x| if (140.0..=160.0).contains(&x) { 150.0 } else { 100.0 })
    }

    #[test]
    fn test_tank_beats_earlier_terrain_crossing() {
        let mut world = World::new();
        let ground = ridge();
        let mut players = vec![player(0)];
        let tank = spawn(&mut world, &mut players[0], 200.0, 100.0, 100);

        let (from, to) = (DVec2::new(100.0, 130.0), DVec2::new(200.0, 105.0));
        assert!(ground.check_collision(from, to).is_some(), "segment crosses the ridge first");
        match check_collision(&world, &players, &ground, from, to) {
            Some(Impact::Tank { entity, .. }) => assert_eq!(entity, tank),
            other => panic!("expected a tank hit, got {:?}", other),
        }
    }

    #[test]
    fn test_lower_player_index_wins_overlap() {
        let mut world = World::new();
        let ground = Ground::flat(400.0, 300.0, 100.0);
        let mut players = vec![player(0), player(1)];
        // Player 1's tank is spawned first and is touched first along the path.
        let _second = spawn(&mut world, &mut players[1], 200.0, 100.0, 100);
        let first = spawn(&mut world, &mut players[0], 205.0, 100.0, 100);

        let hit = check_collision(&world, &players, &ground, DVec2::new(202.0, 200.0), DVec2::new(202.0, 90.0));
        match hit {
            Some(Impact::Tank { entity, .. }) => assert_eq!(entity, first, "player 0 is checked first"),
            other => panic!("expected a tank hit, got {:?}", other),
        }
    }

    #[test]
    fn test_dead_tank_is_skipped() {
        let mut world = World::new();
        let ground = Ground::flat(400.0, 300.0, 100.0);
        let mut players = vec![player(0)];
        spawn(&mut world, &mut players[0], 200.0, 100.0, 0);

        let hit = check_collision(&world, &players, &ground, DVec2::new(200.0, 200.0), DVec2::new(200.0, 90.0));
        match hit {
            Some(Impact::Ground { point }) => assert!((point.y - 100.0).abs() < 1e-6),
            other => panic!("expected a ground hit, got {:?}", other),
        }
    }

    #[test]
    fn test_miss_returns_none() {
        let world = World::new();
        let ground = Ground::flat(400.0, 300.0, 100.0);
        let players = vec![player(0)];
        assert!(check_collision(&world, &players, &ground, DVec2::new(10.0, 200.0), DVec2::new(50.0, 180.0)).is_none());
    }
}
