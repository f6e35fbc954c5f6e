//! File-backed high-score store.
//!
//! Persistence is best-effort: storage failures must never block or
//! interrupt gameplay. Both operations return `Result` so callers decide
//! what to do, but the expected handling is a `warn!` and nothing else.
//! A missing or unreadable table is just an empty one.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use brickfall_types::HIGH_SCORE_CAP;

/// One finished game, immutable once stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Ranked list of past results, capped at ten entries, persisted as JSON.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the working directory under the default file name.
    pub fn open_default() -> Self {
        Self::new("brickfall_scores.json")
    }

    /// Load the ranked list. A missing file is an empty list, not an error;
    /// an unreadable or corrupt file is an error for the caller to swallow.
    pub fn load(&self) -> Result<Vec<ScoreRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let records: Vec<ScoreRecord> = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(records)
    }

    /// Append a result, re-rank descending by score, cap the list, persist.
    /// Returns the updated list.
    pub fn record(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>> {
        let mut records = self.load().unwrap_or_else(|err| {
            warn!("discarding unreadable high-score table: {err:#}");
            Vec::new()
        });

        records.push(record);
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(HIGH_SCORE_CAP);

        let data = serde_json::to_string(&records).context("encoding high scores")?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(records)
    }
}
