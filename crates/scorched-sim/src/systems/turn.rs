//! Turn rotation: who plays next.

use hecs::World;

use crate::player::Player;

/// Indices of players that still have an alive tank.
pub fn players_in_game(players: &[Player], world: &World) -> Vec<usize> {
    players
        .iter()
        .filter(|p| p.is_in_game(world))
        .map(|p| p.index)
        .collect()
}

/// Next player after `current` (in index order, wrapping) that is still in
/// the game. `current` itself is considered last.
pub fn next_player(players: &[Player], world: &World, current: usize) -> Option<usize> {
    let n = players.len();
    (1..=n)
        .map(|k| (current + k) % n)
        .find(|&idx| players[idx].is_in_game(world))
}
