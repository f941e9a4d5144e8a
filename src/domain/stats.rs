//! Aggregate share/reject counters.

use serde::{Deserialize, Serialize};

use super::CycleOutcome;

/// Counters for one run. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub shares: u32,
    pub rejects: u32,
}

impl AggregateStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed cycle
    pub fn record(&mut self, outcome: CycleOutcome) {
        match outcome {
            CycleOutcome::Share => self.shares += 1,
            CycleOutcome::Reject => self.rejects += 1,
        }
    }

    /// Number of cycles counted so far
    pub fn completed(&self) -> u32 {
        self.shares + self.rejects
    }
}

impl FromIterator<CycleOutcome> for AggregateStats {
    fn from_iter<I: IntoIterator<Item = CycleOutcome>>(iter: I) -> Self {
        let mut stats = Self::new();
        for outcome in iter {
            stats.record(outcome);
        }
        stats
    }
}
