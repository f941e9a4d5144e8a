//! Storage layer for reward-video - append-only JSONL event log.
//!
//! Every resolved cycle becomes one line in the log. Records are never
//! rewritten or deleted by this crate.

mod jsonl;
mod traits;

pub use jsonl::JsonlEventLog;
pub use traits::{EventRecorder, NullRecorder};

use std::path::PathBuf;

use crate::domain::AdIdentifiers;

/// Build the recorder for a run: a JSONL log when a destination is set,
/// otherwise a no-op.
pub fn recorder_for(destination: Option<&PathBuf>, ids: &AdIdentifiers) -> Box<dyn EventRecorder> {
    match destination {
        Some(path) => {
            log::info!("Recording cycle events to {}", path.display());
            Box::new(JsonlEventLog::new(path, ids.clone()))
        }
        None => {
            log::info!("No event log configured, outcomes are kept in memory only");
            Box::new(NullRecorder)
        }
    }
}
