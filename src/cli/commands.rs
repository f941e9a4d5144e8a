//! CLI command definitions using clap.
//!
//! Every run setting can come from a flag or from its environment variable.
//! Defined subcommands:
//! - events: print the records and totals of an event log

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use reward_video::config::{PolicyKind, RunOverrides};

/// Reward Video - simulate rewarded-video share/reject cycles in the terminal
#[derive(Parser, Debug)]
#[command(name = "reward-video")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub run: RunArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Settings for a run of reward cycles
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// AdMob application identifier
    #[arg(long, env = "ADMOB_APP_ID")]
    pub app_id: Option<String>,

    /// AdMob rewarded ad-unit identifier
    #[arg(long, env = "ADMOB_REWARDED_AD_UNIT_ID")]
    pub ad_unit_id: Option<String>,

    /// Google API key for the optional AdMob API client
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of cycles to run [default: 5]
    #[arg(short = 'n', long, env = "RUNS")]
    pub runs: Option<u32>,

    /// Seconds of simulated playback per cycle [default: 3]
    #[arg(short = 'w', long, env = "WATCH_SECONDS")]
    pub watch_seconds: Option<u32>,

    /// Outcome policy (random, interactive) [default: random]
    #[arg(short, long, env = "POLICY")]
    pub policy: Option<PolicyKind>,

    /// Share probability for the random policy [default: 0.70]
    #[arg(long, env = "SHARE_PROBABILITY")]
    pub share_probability: Option<f64>,

    /// Video link shown and opened at each presentation
    #[arg(long, env = "VIDEO_URL")]
    pub video_url: Option<String>,

    /// Require real AdMob view counting (always refused from a terminal)
    #[arg(
        long,
        env = "REAL_ADMOB_MODE",
        value_parser = parse_strict,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub strict: Option<bool>,

    /// Event log destination (JSONL) [default for interactive: events_log.jsonl]
    #[arg(short, long, env = "EVENTS_LOG")]
    pub events_log: Option<PathBuf>,

    /// Seed for reproducible random outcomes
    #[arg(long, env = "REWARD_SEED")]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Command-line layer of the configuration
    pub fn to_overrides(&self) -> RunOverrides {
        RunOverrides {
            app_id: self.app_id.clone(),
            ad_unit_id: self.ad_unit_id.clone(),
            api_key: self.api_key.clone(),
            runs: self.runs,
            watch_seconds: self.watch_seconds,
            policy: self.policy,
            share_probability: self.share_probability,
            video_url: self.video_url.clone(),
            strict: self.strict,
            events_log: self.events_log.clone(),
            seed: self.seed,
        }
    }
}

/// Only a case-insensitive `true` turns strict mode on; any other value turns it off.
fn parse_strict(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the records of an event log with share/reject totals
    Events {
        /// Event log to read
        #[arg(short, long, default_value = "events_log.jsonl")]
        path: PathBuf,
    },
}
