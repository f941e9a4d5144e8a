//! Configuration overrides.
//!
//! The same optional shape is read from the config file and built from the
//! command line, then layered.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::PolicyKind;

/// Optional values for every configurable setting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RunOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_unit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_probability: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Strict mode selects the compliance policy regardless of `policy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_log: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RunOverrides {
    /// Create empty overrides (no overrides applied).
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if any overrides are set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `self` on top of `base`: any value set here wins.
    pub fn over(self, base: RunOverrides) -> RunOverrides {
        RunOverrides {
            app_id: self.app_id.or(base.app_id),
            ad_unit_id: self.ad_unit_id.or(base.ad_unit_id),
            api_key: self.api_key.or(base.api_key),
            runs: self.runs.or(base.runs),
            watch_seconds: self.watch_seconds.or(base.watch_seconds),
            policy: self.policy.or(base.policy),
            share_probability: self.share_probability.or(base.share_probability),
            video_url: self.video_url.or(base.video_url),
            strict: self.strict.or(base.strict),
            events_log: self.events_log.or(base.events_log),
            seed: self.seed.or(base.seed),
        }
    }
}

/// Builder for RunOverrides.
#[derive(Debug, Default)]
pub struct RunOverridesBuilder {
    overrides: RunOverrides,
}

impl RunOverridesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifiers(mut self, app_id: impl Into<String>, ad_unit_id: impl Into<String>) -> Self {
        self.overrides.app_id = Some(app_id.into());
        self.overrides.ad_unit_id = Some(ad_unit_id.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.overrides.api_key = Some(key.into());
        self
    }

    pub fn runs(mut self, runs: u32) -> Self {
        self.overrides.runs = Some(runs);
        self
    }

    pub fn watch_seconds(mut self, seconds: u32) -> Self {
        self.overrides.watch_seconds = Some(seconds);
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.overrides.policy = Some(policy);
        self
    }

    pub fn share_probability(mut self, p: f64) -> Self {
        self.overrides.share_probability = Some(p);
        self
    }

    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.overrides.video_url = Some(url.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.overrides.strict = Some(strict);
        self
    }

    pub fn events_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.events_log = Some(path.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.overrides.seed = Some(seed);
        self
    }

    pub fn build(self) -> RunOverrides {
        self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides() {
        assert!(RunOverrides::none().is_empty());
        assert!(!RunOverridesBuilder::new().runs(1).build().is_empty());
    }

    #[test]
    fn test_builder() {
        let overrides = RunOverridesBuilder::new()
            .runs(10)
            .policy(PolicyKind::Interactive)
            .video_url("https://example.com/v")
            .build();

        assert_eq!(overrides.runs, Some(10));
        assert_eq!(overrides.policy, Some(PolicyKind::Interactive));
        assert_eq!(overrides.video_url.as_deref(), Some("https://example.com/v"));
        assert!(overrides.watch_seconds.is_none());
    }

    #[test]
    fn test_upper_layer_wins() {
        let file = RunOverridesBuilder::new().runs(10).watch_seconds(7).build();
        let cli = RunOverridesBuilder::new().runs(2).build();

        let merged = cli.over(file);
        assert_eq!(merged.runs, Some(2));
        assert_eq!(merged.watch_seconds, Some(7));
    }

    #[test]
    fn test_serialize_skips_unset() {
        let overrides = RunOverridesBuilder::new().share_probability(0.75).build();
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"share-probability":0.75}"#);
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = "runs: 12\nwatch-seconds: 1\npolicy: interactive\nevents-log: /tmp/events.jsonl\n";
        let overrides: RunOverrides = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(overrides.runs, Some(12));
        assert_eq!(overrides.watch_seconds, Some(1));
        assert_eq!(overrides.policy, Some(PolicyKind::Interactive));
        assert_eq!(overrides.events_log, Some(PathBuf::from("/tmp/events.jsonl")));
    }
}
