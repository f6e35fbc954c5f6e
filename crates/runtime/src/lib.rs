//! Serialized session runtime.
//!
//! All mutation funnels through a single intent channel: the player path
//! and the gravity timer both send [`Intent`]s, and exactly one worker
//! thread applies them to the session in submission order. A move and a
//! gravity tick can therefore never interleave mid-mutation.
//!
//! The gravity timer is a generation-stamped thread. Every transition into
//! active play (start, resume) spawns a fresh timer; every transition out
//! (pause, reset, game over) advances the generation, which a sleeping
//! timer notices at its next wake. A timer never outlives its generation by
//! more than one sleep interval, and it re-reads the session's fall
//! interval before each sleep so a level-up takes effect on the next tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::warn;

use brickfall_core::{GameSession, SessionSnapshot};
use brickfall_store::{HighScoreStore, ScoreRecord};
use brickfall_types::Intent;

enum Command {
    Intent(Intent),
    Shutdown,
}

/// Notification emitted to observers after the worker applies an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Observable state changed; re-render from a fresh snapshot.
    Redraw,
    /// The session just entered GameOver and its result was persisted.
    GameOver,
}

/// Handle to a running session worker.
///
/// Dropping the driver shuts the worker down and invalidates any live
/// timer.
pub struct SessionDriver {
    session: Arc<Mutex<GameSession>>,
    store: HighScoreStore,
    commands: Sender<Command>,
    timer_gen: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
}

impl SessionDriver {
    /// Spawn the worker thread around a session. Returns the driver and the
    /// event stream for observers.
    pub fn spawn(session: GameSession, store: HighScoreStore) -> (Self, Receiver<SessionEvent>) {
        let session = Arc::new(Mutex::new(session));
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let timer_gen = Arc::new(AtomicU64::new(0));

        let worker = thread::spawn({
            let session = Arc::clone(&session);
            let store = store.clone();
            let tick_tx = command_tx.clone();
            let timer_gen = Arc::clone(&timer_gen);
            move || worker_loop(session, store, command_rx, tick_tx, event_tx, timer_gen)
        });

        let driver = Self {
            session,
            store,
            commands: command_tx,
            timer_gen,
            worker: Some(worker),
        };
        (driver, event_rx)
    }

    /// Enqueue an intent. Ordering between intents is submission order.
    pub fn submit(&self, intent: Intent) {
        let _ = self.commands.send(Command::Intent(intent));
    }

    /// Read the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.session).snapshot()
    }

    /// Current ranked high-score list (best effort; failures log and yield
    /// an empty table).
    pub fn high_scores(&self) -> Vec<ScoreRecord> {
        self.store.load().unwrap_or_else(|err| {
            warn!("failed to load high scores: {err:#}");
            Vec::new()
        })
    }
}

impl Drop for SessionDriver {
    fn drop(&mut self) {
        self.timer_gen.fetch_add(1, Ordering::SeqCst);
        let _ = self.commands.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn lock(session: &Mutex<GameSession>) -> MutexGuard<'_, GameSession> {
    // A poisoned lock still holds coherent session data.
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn worker_loop(
    session: Arc<Mutex<GameSession>>,
    store: HighScoreStore,
    commands: Receiver<Command>,
    tick_tx: Sender<Command>,
    events: Sender<SessionEvent>,
    timer_gen: Arc<AtomicU64>,
) {
    let mut timer_live = false;

    while let Ok(command) = commands.recv() {
        let intent = match command {
            Command::Shutdown => break,
            Command::Intent(intent) => intent,
        };

        let (changed, outcome, result, active) = {
            let mut session = lock(&session);
            let changed = session.handle(intent);
            let outcome = session.take_last_lock();
            let result = ScoreRecord {
                score: session.score(),
                level: session.level(),
                lines: session.lines(),
            };
            let active = session.running() && !session.paused();
            (changed, outcome, result, active)
        };

        if changed {
            let _ = events.send(SessionEvent::Redraw);
        }

        if outcome.is_some_and(|outcome| outcome.game_over) {
            if let Err(err) = store.record(result) {
                warn!("failed to persist game result: {err:#}");
            }
            let _ = events.send(SessionEvent::GameOver);
        }

        // Timer lifecycle follows the phase transitions this intent caused.
        if active && !timer_live {
            let generation = timer_gen.fetch_add(1, Ordering::SeqCst) + 1;
            let session = Arc::clone(&session);
            let ticks = tick_tx.clone();
            let timer_gen = Arc::clone(&timer_gen);
            thread::spawn(move || timer_loop(session, ticks, timer_gen, generation));
            timer_live = true;
        } else if !active && timer_live {
            timer_gen.fetch_add(1, Ordering::SeqCst);
            timer_live = false;
        }
    }
}

/// Gravity loop for one activation of play.
///
/// Exits at the first wake after its generation is invalidated or the
/// session leaves active play; it never mutates the session itself, only
/// feeds `Tick` intents back into the shared command channel.
fn timer_loop(
    session: Arc<Mutex<GameSession>>,
    ticks: Sender<Command>,
    timer_gen: Arc<AtomicU64>,
    generation: u64,
) {
    loop {
        let interval = {
            let session = lock(&session);
            if timer_gen.load(Ordering::SeqCst) != generation
                || !session.running()
                || session.paused()
            {
                return;
            }
            session.fall_interval_ms()
        };

        thread::sleep(Duration::from_millis(u64::from(interval)));

        if timer_gen.load(Ordering::SeqCst) != generation {
            return;
        }
        if ticks.send(Command::Intent(Intent::Tick)).is_err() {
            return;
        }
    }
}
