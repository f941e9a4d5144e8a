//! Resolved run configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RunOverrides;
use crate::domain::AdIdentifiers;
use crate::error::{Result, RewardError};

pub const DEFAULT_RUNS: u32 = 5;
pub const DEFAULT_WATCH_SECONDS: u32 = 3;
pub const DEFAULT_SHARE_PROBABILITY: f64 = 0.70;
pub const DEFAULT_EVENTS_LOG: &str = "events_log.jsonl";

/// Non-strict policy choices selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Random,
    Interactive,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Random => f.write_str("random"),
            PolicyKind::Interactive => f.write_str("interactive"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PolicyKind::Random),
            "interactive" => Ok(PolicyKind::Interactive),
            other => Err(format!("unknown policy '{}', expected random or interactive", other)),
        }
    }
}

/// Outcome policy with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Policy {
    Random { share_probability: f64 },
    Interactive,
    Compliance,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Random { .. } => "random",
            Policy::Interactive => "interactive",
            Policy::Compliance => "compliance",
        }
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    pub runs: u32,
    pub watch_seconds: u32,
    pub policy: Policy,
    pub identifiers: AdIdentifiers,
    pub api_key: Option<String>,
    /// Video link shown (and opened) at each presentation
    pub resource_url: Option<String>,
    /// Event log destination; `None` disables durable recording
    pub event_log: Option<PathBuf>,
    /// Seed for the random policy; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            watch_seconds: DEFAULT_WATCH_SECONDS,
            policy: Policy::Random {
                share_probability: DEFAULT_SHARE_PROBABILITY,
            },
            identifiers: AdIdentifiers::default(),
            api_key: None,
            resource_url: None,
            event_log: None,
            seed: None,
        }
    }
}

impl RunConfiguration {
    /// Resolve the effective configuration from layered overrides.
    pub fn resolve(overrides: &RunOverrides) -> Result<Self> {
        let share_probability = overrides.share_probability.unwrap_or(DEFAULT_SHARE_PROBABILITY);
        if !(0.0..=1.0).contains(&share_probability) {
            return Err(RewardError::Config(format!(
                "share probability must be within [0, 1], got {}",
                share_probability
            )));
        }

        let kind = overrides.policy.unwrap_or_default();
        let policy = if overrides.strict.unwrap_or(false) {
            Policy::Compliance
        } else {
            match kind {
                PolicyKind::Random => Policy::Random { share_probability },
                PolicyKind::Interactive => Policy::Interactive,
            }
        };

        let event_log = overrides
            .events_log
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| (policy == Policy::Interactive).then(|| PathBuf::from(DEFAULT_EVENTS_LOG)));

        let config = Self {
            runs: overrides.runs.unwrap_or(DEFAULT_RUNS),
            watch_seconds: overrides.watch_seconds.unwrap_or(DEFAULT_WATCH_SECONDS),
            policy,
            identifiers: AdIdentifiers::new(
                overrides.app_id.clone().unwrap_or_default(),
                overrides.ad_unit_id.clone().unwrap_or_default(),
            ),
            api_key: non_empty(&overrides.api_key),
            resource_url: non_empty(&overrides.video_url),
            event_log,
            seed: overrides.seed,
        };

        log::debug!("Resolved run configuration: {:?}", config.redacted());
        Ok(config)
    }

    /// Copy with the API key masked, for logging.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}
