//! Session engine: the turn orchestrator.
//!
//! `Session` owns the hecs world of tanks, the ground and the players,
//! processes host commands, advances the turn state machine one step per
//! tick, and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{ComponentError, Entity, MissingComponent, World};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scorched_core::bot::DecisionSource;
use scorched_core::commands::SessionCommand;
use scorched_core::components::{AimTarget, Tank, Turret};
use scorched_core::constants::*;
use scorched_core::enums::{ForfeitReason, ImpactKind, TurnPhase};
use scorched_core::events::{AudioEvent, GameEvent};
use scorched_core::state::GameStateSnapshot;
use scorched_core::types::{Explosion, Position, SimTime, TankRef};
use scorched_terrain::Ground;

use crate::player::Player;
use crate::systems;
use crate::systems::collision::Impact;
use crate::systems::projectile::{Projectile, ShellState};
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed and roster = same game.
    pub seed: u64,
    pub tanks_per_player: usize,
    pub width: f64,
    pub height: f64,
    /// Swing the turret toward the requested aim before firing.
    pub animate_aim: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tanks_per_player: 1,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            animate_aim: true,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),
    #[error("at most {max} players are supported, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("every player needs at least one tank")]
    NoTanks,
    #[error("playfield {width}x{height} is too small")]
    PlayfieldTooSmall { width: f64, height: f64 },
}

/// One game session: a roster of players playing rounds on fresh terrain.
pub struct Session {
    config: SessionConfig,
    world: World,
    ground: Ground,
    players: Vec<Player>,
    time: SimTime,
    phase: TurnPhase,
    round: u32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    active_player: Option<usize>,
    active_tank: Option<Entity>,
    projectile: Option<Projectile>,
    winner: Option<String>,
    halted: bool,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
}

impl Session {
    /// Create a session and set up its first round.
    pub fn new(config: SessionConfig, roster: Vec<Box<dyn DecisionSource>>) -> Result<Self, SessionError> {
        if roster.len() < 2 {
            return Err(SessionError::NotEnoughPlayers(roster.len()));
        }
        if roster.len() > MAX_PLAYERS {
            return Err(SessionError::TooManyPlayers {
                count: roster.len(),
                max: MAX_PLAYERS,
            });
        }
        if config.tanks_per_player == 0 {
            return Err(SessionError::NoTanks);
        }
        let playable = |v: f64| v.is_finite() && v >= MIN_PLAYFIELD_SIZE;
        if !playable(config.width) || !playable(config.height) {
            return Err(SessionError::PlayfieldTooSmall {
                width: config.width,
                height: config.height,
            });
        }

        let players = roster
            .into_iter()
            .enumerate()
            .map(|(i, source)| Player::new(i, source))
            .collect();

        let mut session = Self {
            ground: Ground::flat(config.width, config.height, 0.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            players,
            time: SimTime::default(),
            phase: TurnPhase::default(),
            round: 0,
            command_queue: VecDeque::new(),
            active_player: None,
            active_tank: None,
            projectile: None,
            winner: None,
            halted: false,
            events: Vec::new(),
            audio_events: Vec::new(),
        };
        session.start_round();
        Ok(session)
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the session by one step and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.halted && self.phase != TurnPhase::GameOver {
            match self.phase {
                TurnPhase::AwaitingMove => self.await_move(),
                TurnPhase::Animating => self.animate(),
                TurnPhase::Resolving => self.resolve(),
                TurnPhase::GameOver => {}
            }
            self.time.advance();
        }

        self.snapshot()
    }

    /// Tick until the current turn is over (the next player is awaited, the
    /// game ended, or the session halted). Returns every event of the turn.
    pub fn play_turn(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.halted || self.phase == TurnPhase::GameOver {
            return events;
        }
        loop {
            let snapshot = self.tick();
            events.extend(snapshot.events);
            if self.halted || matches!(self.phase, TurnPhase::AwaitingMove | TurnPhase::GameOver) {
                break;
            }
        }
        events
    }

    /// Play turns until the game ends, the session halts or `max_turns`
    /// turns have been completed. Returns the winner, if any.
    pub fn run(&mut self, max_turns: u32) -> Option<&str> {
        while !self.halted && self.phase != TurnPhase::GameOver && self.time.turn < max_turns {
            self.play_turn();
        }
        self.winner.as_deref()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn active_player(&self) -> Option<usize> {
        self.active_player
    }

    pub fn active_tank(&self) -> Option<Entity> {
        self.active_tank
    }

    /// Reference of the tank about to fire.
    pub fn active_tank_ref(&self) -> Option<TankRef> {
        let tank = self.world.get::<&Tank>(self.active_tank?).ok()?;
        Some(TankRef::new(tank.player, tank.slot))
    }

    /// Mutable access for tests that stage specific situations.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn set_ground(&mut self, ground: Ground) {
        self.ground = ground;
        systems::height::run(&mut self.world, &self.ground);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SessionCommand) {
        if self.halted {
            return;
        }
        match command {
            SessionCommand::PlayAgain => {
                if self.phase == TurnPhase::GameOver {
                    self.start_round();
                } else {
                    debug!("ignoring PlayAgain during {:?}", self.phase);
                }
            }
            SessionCommand::Quit => {
                info!("session quit during {:?}", self.phase);
                self.projectile = None;
                self.halted = true;
            }
        }
    }

    /// Fresh terrain, colours and tanks; the first player moves first.
    fn start_round(&mut self) {
        self.round += 1;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed.wrapping_add(u64::from(self.round - 1)));
        let ground = world_setup::reinitialize(
            &mut self.world,
            &mut self.players,
            &mut self.rng,
            self.config.width,
            self.config.height,
            self.config.tanks_per_player,
        );
        // Player count is capped at the palette size, so colours never run out.
        if let Some(ground) = ground {
            self.ground = ground;
        }
        self.time = SimTime::default();
        self.projectile = None;
        self.winner = None;
        self.phase = TurnPhase::AwaitingMove;
        self.active_player = Some(0);
        self.active_tank = self.players[0].next_active_tank(&self.world);

        let names: Vec<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        info!(
            "round {} started: seed={} players=[{}] tanks_per_player={}",
            self.round,
            self.config.seed,
            names.join(", "),
            self.config.tanks_per_player
        );
    }

    fn await_move(&mut self) {
        let (Some(p), Some(tank)) = (self.active_player, self.active_tank) else {
            self.finish_turn();
            return;
        };

        let summaries = systems::decision::summaries(&self.world, &self.players, Some(tank));
        let player = &mut self.players[p];
        let result = systems::decision::request_move(player.source.as_mut(), &summaries);
        let name = player.name.clone();
        match result {
            Ok(mv) => {
                let target = AimTarget {
                    angle: mv.turret_angle(),
                    power: mv.turret_power(),
                };
                info!(
                    "{} attacked with angle={:.1}, power={}",
                    name,
                    target.angle.to_degrees(),
                    target.power
                );
                match self.stage_aim(p, tank, target) {
                    Ok(()) => self.phase = TurnPhase::Animating,
                    Err(err) => {
                        warn!("{} forfeits the turn: tank cannot aim ({})", name, err);
                        self.forfeit(p, ForfeitReason::Unavailable);
                    }
                }
            }
            Err(fault) => {
                warn!("{} forfeits the turn: {}", name, fault);
                self.forfeit(p, fault.reason());
            }
        }
    }

    /// Point the turret at the chosen move: queue the swing when aim is
    /// animated, otherwise set the turret and fire at once.
    fn stage_aim(&mut self, player: usize, tank: Entity, target: AimTarget) -> Result<(), ComponentError> {
        if self.config.animate_aim {
            return self
                .world
                .insert_one(tank, target)
                .map_err(|_| ComponentError::NoSuchEntity);
        }
        {
            let mut turret = self.world.get::<&mut Turret>(tank)?;
            turret.angle = target.angle;
            turret.power = target.power;
        }
        self.launch(player, tank)
    }

    /// End the turn without a shot.
    fn forfeit(&mut self, player: usize, reason: ForfeitReason) {
        self.events.push(GameEvent::TurnForfeited { player, reason });
        self.finish_turn();
    }

    fn animate(&mut self) {
        let (Some(p), Some(tank)) = (self.active_player, self.active_tank) else {
            self.phase = TurnPhase::Resolving;
            return;
        };

        let aim = self.world.get::<&AimTarget>(tank).ok().map(|a| *a);
        if let Some(target) = aim {
            let done = match self.world.get::<&mut Turret>(tank) {
                Ok(mut turret) => systems::aim::step_turret(&mut turret, &target),
                Err(_) => true,
            };
            if done {
                let _ = self.world.remove_one::<AimTarget>(tank);
                if let Err(err) = self.launch(p, tank) {
                    warn!("{} forfeits the turn: tank cannot fire ({})", self.players[p].name, err);
                    self.forfeit(p, ForfeitReason::Unavailable);
                }
            }
            return;
        }

        let Some(projectile) = self.projectile.as_mut() else {
            self.phase = TurnPhase::Resolving;
            return;
        };
        match systems::projectile::advance(projectile, &self.world, &self.players, &self.ground) {
            ShellState::Flying => {}
            ShellState::Landed(impact) => {
                let kind = match impact {
                    Impact::Tank { .. } => ImpactKind::Tank,
                    Impact::Ground { .. } => {
                        self.audio_events.push(AudioEvent::GroundStrike);
                        ImpactKind::Ground
                    }
                };
                self.events.push(GameEvent::Impact {
                    point: Position::from(impact.point()),
                    kind,
                });
                self.phase = TurnPhase::Resolving;
            }
            ShellState::Lost => {
                debug!("shell lost at {:?}", projectile.position());
                self.events.push(GameEvent::ShellLost {
                    last: Position::from(projectile.position()),
                });
                self.phase = TurnPhase::Resolving;
            }
        }
    }

    fn launch(&mut self, player: usize, tank: Entity) -> Result<(), ComponentError> {
        let (base, turret, tank_ref) = {
            let mut query = self
                .world
                .query_one::<(&Position, &Turret, &Tank)>(tank)
                .map_err(|_| ComponentError::NoSuchEntity)?;
            let (pos, turret, t) = query
                .get()
                .ok_or_else(|| ComponentError::MissingComponent(MissingComponent::new::<Turret>()))?;
            (*pos, *turret, TankRef::new(t.player, t.slot))
        };
        self.projectile = Some(Projectile::launch(tank, base, &turret, self.config.height));
        self.audio_events.push(AudioEvent::Fire);
        self.events.push(GameEvent::ShotFired {
            player,
            tank: tank_ref,
            angle_degrees: turret.angle.to_degrees(),
            power: turret.power,
        });
        Ok(())
    }

    fn resolve(&mut self) {
        let in_game_before = systems::turn::players_in_game(&self.players, &self.world);

        let Some(projectile) = self.projectile.take() else {
            self.finish_turn();
            return;
        };
        let last_point = match projectile.state {
            ShellState::Landed(impact) => {
                let center = Position::from(impact.point());
                let report = systems::explosion::resolve(
                    &mut self.world,
                    &mut self.ground,
                    Explosion::shell(center),
                    &mut self.events,
                    &mut self.audio_events,
                );
                debug!(
                    "resolved {} explosions, {} tanks destroyed",
                    report.explosions, report.tanks_destroyed
                );
                center
            }
            ShellState::Flying | ShellState::Lost => Position::from(projectile.position()),
        };
        systems::height::run(&mut self.world, &self.ground);

        if let Some(p) = self.active_player {
            let player = &mut self.players[p];
            player.last_hit = Some(last_point);
            if let Err(fault) = systems::decision::notify_last_hit(player.source.as_mut(), last_point) {
                warn!("{} failed to take last-hit feedback: {}", player.name, fault);
            }
        }

        for idx in in_game_before {
            if !self.players[idx].is_in_game(&self.world) {
                info!("{} has been eliminated", self.players[idx].name);
                self.events.push(GameEvent::PlayerEliminated { player: idx });
            }
        }
        self.finish_turn();
    }

    /// Close the current turn and hand over to the next player, or end the game.
    fn finish_turn(&mut self) {
        self.time.turn += 1;
        let remaining = systems::turn::players_in_game(&self.players, &self.world);
        if remaining.len() <= 1 {
            self.winner = remaining.first().map(|&i| self.players[i].name.clone());
            match &self.winner {
                Some(name) => info!("game over after {} turns: {} wins", self.time.turn, name),
                None => info!("game over after {} turns: draw", self.time.turn),
            }
            self.events.push(GameEvent::GameOver {
                winner: self.winner.clone(),
            });
            self.phase = TurnPhase::GameOver;
            self.active_player = None;
            self.active_tank = None;
            return;
        }

        let current = self.active_player.unwrap_or(self.players.len() - 1);
        self.active_player = systems::turn::next_player(&self.players, &self.world, current);
        self.active_tank = self
            .active_player
            .and_then(|p| self.players[p].next_active_tank(&self.world));
        self.phase = TurnPhase::AwaitingMove;
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                round: self.round,
                ground: &self.ground,
                players: &self.players,
                active_player: self.active_player,
                active_tank: self.active_tank,
                projectile: self.projectile.as_ref(),
                winner: self.winner.as_deref(),
            },
            events,
            audio_events,
        )
    }
}
