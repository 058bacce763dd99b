//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use scorched_core::components::*;
use scorched_core::enums::TurnPhase;
use scorched_core::events::{AudioEvent, GameEvent};
use scorched_core::state::*;
use scorched_core::types::{Position, SimTime, TankRef};
use scorched_terrain::Ground;

use crate::player::Player;
use crate::systems::projectile::{Projectile, ShellState};

/// Everything the snapshot needs besides the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: TurnPhase,
    pub round: u32,
    pub ground: &'a Ground,
    pub players: &'a [Player],
    pub active_player: Option<usize>,
    pub active_tank: Option<Entity>,
    pub projectile: Option<&'a Projectile>,
    pub winner: Option<&'a str>,
}

/// Build a complete GameStateSnapshot from the current session state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        round: ctx.round,
        width: ctx.ground.width(),
        height: ctx.ground.max_height(),
        terrain: ctx.ground.points(),
        players: build_players(world, ctx.players),
        tanks: build_tanks(world, ctx.players),
        active_player: ctx.active_player,
        active_tank: ctx.active_tank.and_then(|e| tank_ref(world, e)),
        shell: ctx.projectile.and_then(build_shell),
        winner: ctx.winner.map(str::to_string),
        events,
        audio_events,
    }
}

fn tank_ref(world: &World, entity: Entity) -> Option<TankRef> {
    world
        .get::<&Tank>(entity)
        .ok()
        .map(|t| TankRef::new(t.player, t.slot))
}

fn build_players(world: &World, players: &[Player]) -> Vec<PlayerView> {
    players
        .iter()
        .map(|p| PlayerView {
            index: p.index,
            name: p.name.clone(),
            color: p.color.clone(),
            rgb: p.rgb,
            alive_tanks: p.alive_tanks(world),
            last_hit: p.last_hit,
        })
        .collect()
}

/// Tank views in player order, then slot order.
fn build_tanks(world: &World, players: &[Player]) -> Vec<TankView> {
    let mut tanks = Vec::new();
    for player in players {
        for &entity in &player.tanks {
            let Ok(mut query) = world.query_one::<(&Tank, &Position, &Turret, &Health)>(entity) else {
                continue;
            };
            if let Some((tank, pos, turret, health)) = query.get() {
                tanks.push(TankView {
                    tank: TankRef::new(tank.player, tank.slot),
                    position: *pos,
                    angle: turret.angle,
                    power: turret.power,
                    health: health.current,
                    max_health: health.max,
                    rgb: player.rgb,
                    alive: health.current > 0,
                });
            }
        }
    }
    tanks
}

fn build_shell(projectile: &Projectile) -> Option<ShellView> {
    if projectile.state != ShellState::Flying {
        return None;
    }
    Some(ShellView {
        position: Position::from(projectile.position()),
        elapsed: projectile.trajectory.elapsed(),
    })
}
