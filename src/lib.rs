//! reward-video - terminal simulation of a rewarded-video cycle
//!
//! Each cycle presents a (simulated) video, decides whether the viewer shares
//! or rejects, and optionally appends the outcome to a JSONL event log. No ad
//! SDK is involved; real view counting only happens inside mobile clients.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod presenter;
pub mod resolver;
pub mod runner;
pub mod storage;

pub use error::{Result, RewardError};
