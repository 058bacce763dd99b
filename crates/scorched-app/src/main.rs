use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn};

use scorched_app::core::commands::SessionCommand;
use scorched_app::game_loop::{self, LoopOptions};
use scorched_app::state::{GameLoopCommand, HostState};
use scorched_app::{roster, settings};
use scorched_sim::Session;

/// Turn-based artillery on destructible terrain, played by bots.
#[derive(Debug, Parser)]
#[command(name = "scorched", version)]
struct Cli {
    /// JSON launch config (session settings and roster).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the session seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of tanks per player.
    #[arg(long)]
    tanks: Option<usize>,
    /// Abandon a round after this many turns.
    #[arg(long, default_value_t = 1_000)]
    max_turns: u32,
    /// Run the game loop on its own thread at the real tick rate.
    /// Type `q` and Enter to quit.
    #[arg(long)]
    paced: bool,
    /// Rounds to play.
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Print the round results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut launch = match &cli.config {
        Some(path) => settings::load(path)?,
        None => settings::LaunchConfig::default(),
    };
    if let Some(seed) = cli.seed {
        launch.session.seed = seed;
    }
    if let Some(tanks) = cli.tanks {
        launch.session.tanks_per_player = tanks;
    }
    launch.validate()?;

    let bots = roster::build(&launch.players, launch.session.seed, launch.session.height);
    let mut session = Session::new(launch.session.clone(), bots).context("failed to start session")?;
    let options = LoopOptions {
        rounds: cli.rounds.max(1),
        max_turns: cli.max_turns,
        paced: cli.paced,
    };
    info!("scorched starting: {} rounds, seed {}", options.rounds, launch.session.seed);

    let summary = if cli.paced {
        let host = Arc::new(HostState::new());
        let (tx, handle) = game_loop::spawn_game_loop(session, options, host.latest_snapshot.clone());
        if let Ok(mut lock) = host.command_tx.lock() {
            *lock = Some(tx);
        }
        spawn_quit_listener(host.clone());
        let summary = handle
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
        if let Some(last) = host.snapshot() {
            info!("game loop stopped at tick {} in {:?}", last.time.tick, last.phase);
        }
        summary
    } else {
        game_loop::run_headless(&mut session, options)
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for r in &summary.rounds {
            let outcome = match (&r.winner, r.finished) {
                (Some(name), _) => format!("{} wins", name),
                (None, true) => "draw".to_string(),
                (None, false) => "unfinished".to_string(),
            };
            println!("round {}: {} after {} turns", r.round, outcome, r.turns);
        }
    }
    Ok(())
}

/// Forward a `q` typed on stdin to the game loop as a Quit command.
fn spawn_quit_listener(host: Arc<HostState>) {
    let spawned = std::thread::Builder::new()
        .name("scorched-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().eq_ignore_ascii_case("q") {
                    if !host.send(GameLoopCommand::Session(SessionCommand::Quit)) {
                        warn!("game loop already stopped");
                    }
                    break;
                }
            }
        });
    if let Err(err) = spawned {
        warn!("quit listener unavailable: {}", err);
    }
}
