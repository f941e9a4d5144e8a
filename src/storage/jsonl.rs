//! JSONL-backed event log.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::traits::EventRecorder;
use crate::domain::{AdIdentifiers, CycleOutcome, EventRecord};
use crate::error::{Result, RewardError};

/// Append-only JSON Lines event log.
///
/// The file is opened, written and closed for every event, so a failed
/// write can never touch lines already on disk.
#[derive(Debug, Clone)]
pub struct JsonlEventLog {
    path: PathBuf,
    ids: AdIdentifiers,
}

impl JsonlEventLog {
    pub fn new(path: impl AsRef<Path>, ids: AdIdentifiers) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ids,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the log, creating parent directories first.
    pub fn append(&self, record: &EventRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.storage_error("create directory for", e))?;
        }

        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage_error("open", e))?;
        writeln!(file, "{}", line).map_err(|e| self.storage_error("append to", e))?;
        file.flush().map_err(|e| self.storage_error("flush", e))?;
        Ok(())
    }

    /// Read every record in file order. A missing file is an empty log.
    pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<EventRecord>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: EventRecord = serde_json::from_str(&line).map_err(|e| {
                RewardError::Storage(format!("{}:{}: malformed record: {}", path.display(), index + 1, e))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn storage_error(&self, action: &str, err: std::io::Error) -> RewardError {
        RewardError::Storage(format!("failed to {} {}: {}", action, self.path.display(), err))
    }
}

impl EventRecorder for JsonlEventLog {
    fn record(&mut self, cycle: u32, outcome: CycleOutcome) -> Result<()> {
        let record = EventRecord::new(cycle, outcome, &self.ids);
        self.append(&record)?;
        log::debug!("Recorded cycle {} ({}) to {}", cycle, outcome, self.path.display());
        Ok(())
    }

    fn destination(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
