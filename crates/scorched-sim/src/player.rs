//! Players: a decision source plus the tanks it commands.

use hecs::{Entity, World};

use scorched_core::bot::DecisionSource;
use scorched_core::colors::Rgb;
use scorched_core::types::Position;

use crate::systems::damage::is_alive;

/// One seat at the table.
pub struct Player {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub rgb: Rgb,
    pub source: Box<dyn DecisionSource>,
    /// Tank entities in turn order.
    pub tanks: Vec<Entity>,
    /// Where this player's last shell came down.
    pub last_hit: Option<Position>,
    cursor: usize,
}

impl Player {
    pub fn new(index: usize, source: Box<dyn DecisionSource>) -> Self {
        Self {
            index,
            name: source.name().to_string(),
            color: String::new(),
            rgb: Rgb::default(),
            source,
            tanks: Vec::new(),
            last_hit: None,
            cursor: 0,
        }
    }

    /// Drop all round state (tanks, cursor, last hit) before a new round.
    pub fn reset_round(&mut self) {
        self.tanks.clear();
        self.last_hit = None;
        self.cursor = 0;
    }

    pub fn alive_tanks(&self, world: &World) -> usize {
        self.tanks.iter().filter(|&&t| is_alive(world, t)).count()
    }

    /// A player stays in the rotation while any of its tanks is alive.
    pub fn is_in_game(&self, world: &World) -> bool {
        self.tanks.iter().any(|&t| is_alive(world, t))
    }

    /// Next alive tank in this player's round-robin order, advancing the
    /// cursor past it. `None` once every tank is destroyed.
    pub fn next_active_tank(&mut self, world: &World) -> Option<Entity> {
        let n = self.tanks.len();
        for k in 0..n {
            let idx = (self.cursor + k) % n;
            let tank = self.tanks[idx];
            if is_alive(world, tank) {
                self.cursor = (idx + 1) % n;
                return Some(tank);
            }
        }
        None
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("tanks", &self.tanks)
            .field("last_hit", &self.last_hit)
            .finish()
    }
}
