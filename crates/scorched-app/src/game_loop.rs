//! Game loop: drives a session tick by tick, plays the requested number of
//! rounds and publishes snapshots.
//!
//! `spawn_game_loop` runs the session on its own thread, optionally paced at
//! `TICK_RATE`. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for polling. `run_headless` drives the same loop
//! on the calling thread as fast as possible.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, warn};
use serde::Serialize;

use scorched_core::commands::SessionCommand;
use scorched_core::constants::TICK_RATE;
use scorched_core::enums::TurnPhase;
use scorched_core::state::GameStateSnapshot;
use scorched_sim::Session;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Rounds to play before stopping.
    pub rounds: u32,
    /// Turns after which an unfinished round is abandoned.
    pub max_turns: u32,
    /// Sleep between ticks to run at `TICK_RATE`.
    pub paced: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            rounds: 1,
            max_turns: 1_000,
            paced: false,
        }
    }
}

/// Outcome of one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub round: u32,
    pub winner: Option<String>,
    pub turns: u32,
    /// False when the round hit `max_turns` or the session was stopped.
    pub finished: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoopSummary {
    pub rounds: Vec<RoundResult>,
    pub ticks: u64,
}

enum Control {
    Continue,
    Stop,
}

/// Round bookkeeping shared by the threaded and headless loops.
struct Driver {
    options: LoopOptions,
    summary: LoopSummary,
}

impl Driver {
    fn new(options: LoopOptions) -> Self {
        Self {
            options,
            summary: LoopSummary::default(),
        }
    }

    /// Tick once and decide whether to keep going.
    fn step(&mut self, session: &mut Session) -> (GameStateSnapshot, Control) {
        let snapshot = session.tick();
        self.summary.ticks += 1;

        if session.is_halted() {
            self.record(session, false);
            return (snapshot, Control::Stop);
        }
        if session.phase() == TurnPhase::GameOver {
            self.record(session, true);
            if self.summary.rounds.len() as u32 >= self.options.rounds {
                return (snapshot, Control::Stop);
            }
            session.queue_command(SessionCommand::PlayAgain);
        } else if session.time().turn >= self.options.max_turns {
            warn!("round {} abandoned after {} turns", session.round(), session.time().turn);
            self.record(session, false);
            return (snapshot, Control::Stop);
        }
        (snapshot, Control::Continue)
    }

    fn record(&mut self, session: &Session, finished: bool) {
        let round = session.round();
        if self.summary.rounds.last().map_or(false, |r| r.round == round) {
            return;
        }
        let result = RoundResult {
            round,
            winner: session.winner().map(str::to_string),
            turns: session.time().turn,
            finished,
        };
        info!(
            "round {} result: {} after {} turns",
            round,
            result.winner.as_deref().unwrap_or("no winner"),
            result.turns
        );
        self.summary.rounds.push(result);
    }

    /// Record an interrupted round, if it has not been recorded yet.
    fn interrupt(&mut self, session: &Session) {
        self.record(session, false);
    }
}

/// Drive the session on the calling thread without pacing.
pub fn run_headless(session: &mut Session, options: LoopOptions) -> LoopSummary {
    let mut driver = Driver::new(options);
    loop {
        let (_snapshot, control) = driver.step(session);
        if let Control::Stop = control {
            break;
        }
    }
    driver.summary
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the join handle that
/// yields the loop summary.
pub fn spawn_game_loop(
    session: Session,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("scorched-game-loop".into())
        .spawn(move || run_game_loop(session, options, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until the rounds are played, a Shutdown command
/// arrives or the channel disconnects.
fn run_game_loop(
    mut session: Session,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut driver = Driver::new(options);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Session(cmd)) => session.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    driver.interrupt(&session);
                    return driver.summary;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let (snapshot, control) = driver.step(&mut session);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Control::Stop = control {
            return driver.summary;
        }

        // 4. Sleep until next tick
        if options.paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
