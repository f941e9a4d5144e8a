//! Cycle outcome types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of a single reward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleOutcome {
    /// The viewer shared after watching
    Share,
    /// The viewer rejected, or did not watch in full
    Reject,
}

impl CycleOutcome {
    /// Token written to the event log
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleOutcome::Share => "share",
            CycleOutcome::Reject => "reject",
        }
    }

    pub fn is_share(&self) -> bool {
        matches!(self, CycleOutcome::Share)
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CycleOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "share" => Ok(CycleOutcome::Share),
            "reject" => Ok(CycleOutcome::Reject),
            other => Err(format!("unknown action '{}', expected share or reject", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tokens() {
        assert_eq!(CycleOutcome::Share.as_str(), "share");
        assert_eq!(CycleOutcome::Reject.to_string(), "reject");
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CycleOutcome::Share).unwrap(), "\"share\"");
        assert_eq!(serde_json::to_string(&CycleOutcome::Reject).unwrap(), "\"reject\"");
    }

    #[test]
    fn test_outcome_from_str_is_case_insensitive() {
        assert_eq!(" SHARE ".parse::<CycleOutcome>(), Ok(CycleOutcome::Share));
        assert_eq!("Reject".parse::<CycleOutcome>(), Ok(CycleOutcome::Reject));
        assert!("maybe".parse::<CycleOutcome>().is_err());
    }

    #[test]
    fn test_is_share() {
        assert!(CycleOutcome::Share.is_share());
        assert!(!CycleOutcome::Reject.is_share());
    }
}
