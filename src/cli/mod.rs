//! CLI module for reward-video - command-line interface and subcommands.
//!
//! Without a subcommand the binary runs the reward cycles; `events` inspects
//! an existing event log.

pub mod commands;

pub use commands::Cli;
