//! Tokio clock for a shared [`GameLoop`].
//!
//! The driver task follows the loop's [`Schedule`](crate::Schedule): it sleeps
//! for the published interval and then ticks, unless the schedule changed in
//! the meantime. A tick armed under an old epoch never fires, so pausing,
//! restarting or levelling up cannot leave a stray timer behind.
//!
//! Callbacks run on the driver task with the game lock held. They must not
//! lock the game themselves.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::game_loop::{GameLoop, Schedule};

pub type SharedGame = Arc<Mutex<GameLoop>>;

fn lock(game: &SharedGame) -> MutexGuard<'_, GameLoop> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct TickDriver {
    game: SharedGame,
    task: JoinHandle<()>,
}

impl TickDriver {
    /// Spawn the clock on the current tokio runtime.
    pub fn spawn(game: SharedGame) -> Self {
        let schedule = lock(&game).subscribe();
        let task = tokio::spawn(run(game.clone(), schedule));
        Self { game, task }
    }

    /// Stop the clock. A running game is paused so it does not look live.
    pub fn stop(self) {
        self.task.abort();
        lock(&self.game).suspend();
        debug!("tick driver stopped");
    }
}

async fn run(game: SharedGame, mut schedule: watch::Receiver<Schedule>) {
    loop {
        let current = *schedule.borrow_and_update();
        match current.interval {
            None => {
                if schedule.changed().await.is_err() {
                    break;
                }
            }
            Some(interval) => {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        if let Err(err) = lock(&game).tick_if_current(current.epoch) {
                            warn!(%err, "tick failed");
                        }
                    }
                    changed = schedule.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }
    debug!("schedule closed, tick driver exiting");
}
