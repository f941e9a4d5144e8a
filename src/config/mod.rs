//! Configuration system for reward-video.
//!
//! Three-layer configuration hierarchy, later layers win:
//! 1. Compiled defaults (`RunConfiguration::default`)
//! 2. Config file (./reward-video.yml or ~/.config/reward-video/reward-video.yml)
//! 3. Command-line flags and environment variables
//!
//! The result is an immutable `RunConfiguration`, read once at startup.

pub use self::file::load_config;
pub use self::overrides::{RunOverrides, RunOverridesBuilder};
pub use self::run::{
    DEFAULT_EVENTS_LOG, DEFAULT_RUNS, DEFAULT_SHARE_PROBABILITY, DEFAULT_WATCH_SECONDS, Policy, PolicyKind,
    RunConfiguration,
};

mod file;
mod overrides;
mod run;
