//! Terminal brickfall runner.
//!
//! Thin wiring only: the engine lives in `brickfall-core`, intent
//! serialization and the gravity timer in `brickfall-runtime`, and
//! rendering in `brickfall-term`. This loop polls the keyboard, forwards
//! intents, and redraws whenever the runtime reports a change.

use std::fs::File;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use tracing::info;

use brickfall::core::GameSession;
use brickfall::runtime::{SessionDriver, SessionEvent};
use brickfall::store::HighScoreStore;
use brickfall::term::{map_key, should_quit, TermUi};

const INPUT_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    init_logging();

    let session = GameSession::new(wall_clock_seed());
    let store = HighScoreStore::open_default();
    let (driver, events) = SessionDriver::spawn(session, store);
    info!("session driver started");

    let mut ui = TermUi::new();
    ui.enter()?;
    let result = run(&driver, &events, &mut ui);

    // Always try to restore terminal state.
    let _ = ui.exit();
    result
}

fn run(
    driver: &SessionDriver,
    events: &std::sync::mpsc::Receiver<SessionEvent>,
    ui: &mut TermUi,
) -> Result<()> {
    let mut scores = driver.high_scores();
    ui.draw(&driver.snapshot(), &scores)?;

    loop {
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = map_key(key) {
                        driver.submit(intent);
                    }
                }
            }
        }

        let mut dirty = false;
        while let Ok(event) = events.try_recv() {
            if event == SessionEvent::GameOver {
                scores = driver.high_scores();
            }
            dirty = true;
        }
        if dirty {
            ui.draw(&driver.snapshot(), &scores)?;
        }
    }
}

/// Log to a file so diagnostics never corrupt the alternate screen.
fn init_logging() {
    let Ok(file) = File::create("brickfall.log") else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
