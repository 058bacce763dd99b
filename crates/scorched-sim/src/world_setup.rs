//! Round setup: terrain, colours and tank placement.

use hecs::{Entity, World};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use scorched_core::colors::{self, Rgb};
use scorched_core::components::*;
use scorched_core::constants::*;
use scorched_core::types::Position;
use scorched_terrain::Ground;

use crate::player::Player;

/// Hands out unique player colours.
///
/// A preferred colour is honoured if it names a known colour nobody has
/// taken yet. Otherwise colours are popped from the end of the fallback
/// palette, skipping any already in use.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    palette: Vec<&'static str>,
    taken: Vec<&'static str>,
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self {
            palette: FALLBACK_PALETTE.to_vec(),
            taken: Vec::new(),
        }
    }
}

impl ColorAllocator {
    pub fn assign(&mut self, preferred: &str) -> Option<(&'static str, Rgb)> {
        if let Some(name) = colors::canonical_name(preferred) {
            if !self.taken.contains(&name) {
                return self.take(name);
            }
        }
        while let Some(name) = self.palette.pop() {
            if !self.taken.contains(&name) {
                return self.take(name);
            }
        }
        None
    }

    fn take(&mut self, name: &'static str) -> Option<(&'static str, Rgb)> {
        self.taken.push(name);
        colors::lookup(name).map(|rgb| (name, rgb))
    }
}

/// Give every player a colour for this round.
/// Returns `false` if the palette ran dry.
pub fn assign_colors(players: &mut [Player]) -> bool {
    let mut allocator = ColorAllocator::default();
    for player in players.iter_mut() {
        let preferred = player.source.preferred_color().to_string();
        match allocator.assign(&preferred) {
            Some((name, rgb)) => {
                player.color = name.to_string();
                player.rgb = rgb;
            }
            None => return false,
        }
    }
    true
}

/// Pick x positions for `count` tanks.
///
/// Random positions at least `TANK_MIN_SPACING` apart; if any tank cannot
/// be placed within `TANK_PLACEMENT_ATTEMPTS` tries, every tank falls back
/// to evenly spaced slots in random order.
pub fn tank_positions(width: f64, count: usize, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let lo = TANK_EDGE_MARGIN.min(width / 2.0);
    let hi = (width - TANK_EDGE_MARGIN).max(lo);
    let mut placed: Vec<f64> = Vec::with_capacity(count);

    'tanks: for _ in 0..count {
        if hi > lo {
            for _ in 0..TANK_PLACEMENT_ATTEMPTS {
                let x = rng.gen_range(lo..hi);
                if placed.iter().all(|p| (p - x).abs() >= TANK_MIN_SPACING) {
                    placed.push(x);
                    continue 'tanks;
                }
            }
        }
        debug!("random tank placement failed, using even spacing for {} tanks", count);
        let mut slots: Vec<f64> = (0..count)
            .map(|j| width * (j + 1) as f64 / (count + 1) as f64)
            .collect();
        slots.shuffle(rng);
        return slots;
    }
    placed
}

/// Spawn one tank standing on the ground at `x`.
pub fn spawn_tank(world: &mut World, ground: &Ground, player: usize, slot: usize, x: f64) -> Entity {
    world.spawn((
        Tank { player, slot },
        Position::new(x, ground.height_at(x)),
        Turret {
            angle: DEFAULT_TURRET_ANGLE,
            power: DEFAULT_TURRET_POWER,
        },
        Health {
            current: TANK_MAX_HEALTH,
            max: TANK_MAX_HEALTH,
        },
    ))
}

/// Build a fresh round: new terrain, new colours, new tanks.
/// Player state from the previous round is discarded.
pub fn reinitialize(
    world: &mut World,
    players: &mut [Player],
    rng: &mut ChaCha8Rng,
    width: f64,
    height: f64,
    tanks_per_player: usize,
) -> Option<Ground> {
    world.clear();
    let ground = scorched_terrain::generate(width, height, rng);

    if !assign_colors(players) {
        return None;
    }

    let total = players.len() * tanks_per_player;
    let xs = tank_positions(width, total, rng);
    for (i, player) in players.iter_mut().enumerate() {
        player.reset_round();
        for slot in 0..tanks_per_player {
            let x = xs[i * tanks_per_player + slot];
            let tank = spawn_tank(world, &ground, i, slot, x);
            player.tanks.push(tank);
        }
    }
    Some(ground)
}
