use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sweeper_core::{GameSummary, Outcome};
use thiserror::Error;

use crate::console::Console;

/// Number of records per statistics page.
pub const PER_PAGE: usize = 10;

/// Format of the `timestamp` field, e.g. `Mon, 19 Oct,26 - 17:43:02`.
pub const TIME_FORMAT: &str = "%a, %d %b,%y - %H:%M:%S";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOutcome {
    Win,
    Lose,
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("Win"),
            Self::Lose => f.write_str("Lose"),
        }
    }
}

/// One finished game as stored in the statistics file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub timestamp: String,
    pub duration_seconds: u64,
    pub outcome: RecordOutcome,
    pub mines_left: u16,
    pub turns: u32,
}

impl ResultRecord {
    /// Builds the record of a won or lost game, `None` for one still in progress.
    pub fn new(
        summary: &GameSummary,
        started_at: DateTime<Local>,
        duration: Duration,
    ) -> Option<Self> {
        let outcome = match summary.outcome {
            Outcome::InProgress => return None,
            Outcome::Won => RecordOutcome::Win,
            Outcome::Lost => RecordOutcome::Lose,
        };
        Some(Self {
            timestamp: started_at.format(TIME_FORMAT).to_string(),
            duration_seconds: duration.as_secs(),
            outcome,
            mines_left: summary.mines_left,
            turns: summary.turns,
        })
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} for {} seconds with {} clicks. There are {} mines left.",
            self.outcome, self.timestamp, self.duration_seconds, self.turns, self.mines_left
        )
    }
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("could not access statistics file: {0}")]
    Io(#[from] io::Error),
    #[error("statistics file is not a valid record list: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON array of [`ResultRecord`]s kept in a single file.
#[derive(Clone, Debug)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Vec<ResultRecord>, StatsError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads every record; a missing or unreadable file counts as no history.
    pub fn load(&self) -> Vec<ResultRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(StatsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no statistics at {}", self.path.display());
                Vec::new()
            }
            Err(err) => {
                log::warn!("ignoring statistics at {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Replaces the file contents through a temporary file so a failed write never leaves
    /// a truncated log behind.
    pub fn save(&self, records: &[ResultRecord]) -> Result<(), StatsError> {
        let content = serde_json::to_string(records)?;
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "result.json".to_string());
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.tmp-{}", file_name, std::process::id()));

        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn append(&self, record: ResultRecord) -> Result<(), StatsError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)?;
        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Prints `records` in pages of [`PER_PAGE`], waiting for enter between pages.
pub fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    records: &[ResultRecord],
) -> io::Result<()> {
    if records.is_empty() {
        return console.say("No records saved.");
    }

    let pages = records.len().div_ceil(PER_PAGE);
    for (page, chunk) in records.chunks(PER_PAGE).enumerate() {
        console.say("Statistics:")?;
        for (i, record) in chunk.iter().enumerate() {
            console.say(format_args!("{:2}. {}", page * PER_PAGE + i + 1, record))?;
        }
        if page + 1 < pages && console.ask("   -- press enter to continue --")?.is_none() {
            break;
        }
    }
    Ok(())
}
