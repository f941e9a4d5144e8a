//! Per-cycle state machine.
//!
//! ```text
//! Idle -> Presenting -> AwaitingOutcome -> Resolved(Share | Reject)
//! ```
//!
//! Resolved is terminal for a cycle; the orchestrator starts the next cycle
//! from a fresh Idle phase.

use std::fmt;

use super::CycleOutcome;
use crate::error::{Result, RewardError};

/// Phase of a single reward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    #[default]
    Idle,
    Presenting,
    AwaitingOutcome,
    Resolved(CycleOutcome),
}

impl CyclePhase {
    /// Idle -> Presenting
    pub fn start_presenting(self) -> Result<Self> {
        match self {
            CyclePhase::Idle => Ok(CyclePhase::Presenting),
            other => Err(invalid(other, "start presenting")),
        }
    }

    /// Presenting -> AwaitingOutcome
    pub fn await_outcome(self) -> Result<Self> {
        match self {
            CyclePhase::Presenting => Ok(CyclePhase::AwaitingOutcome),
            other => Err(invalid(other, "await an outcome")),
        }
    }

    /// AwaitingOutcome -> Resolved
    pub fn resolve(self, outcome: CycleOutcome) -> Result<Self> {
        match self {
            CyclePhase::AwaitingOutcome => Ok(CyclePhase::Resolved(outcome)),
            other => Err(invalid(other, "resolve")),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CyclePhase::Resolved(_))
    }

    /// Outcome, once resolved
    pub fn outcome(&self) -> Option<CycleOutcome> {
        match self {
            CyclePhase::Resolved(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclePhase::Idle => f.write_str("idle"),
            CyclePhase::Presenting => f.write_str("presenting"),
            CyclePhase::AwaitingOutcome => f.write_str("awaiting_outcome"),
            CyclePhase::Resolved(outcome) => write!(f, "resolved({})", outcome),
        }
    }
}

fn invalid(phase: CyclePhase, action: &str) -> RewardError {
    RewardError::InvalidState(format!("cannot {} while {}", action, phase))
}
