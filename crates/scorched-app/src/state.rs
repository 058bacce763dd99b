//! Host state shared between the main thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use scorched_core::commands::SessionCommand;
use scorched_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A session command to forward to the engine.
    Session(SessionCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles the host keeps while the game loop runs.
///
/// - `command_tx` forwards commands to the loop thread
/// - `latest_snapshot` is refreshed by the loop after every tick
pub struct HostState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns `false` if no loop is running.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        lock.as_ref().map_or(false, |tx| tx.send(command).is_ok())
    }

    /// Copy of the most recent snapshot, if any tick has run yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
