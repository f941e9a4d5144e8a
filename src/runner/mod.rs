//! Cycle runner module - drives present → decide → record.
//!
//! This module provides the run-level logic, including:
//! - CycleOrchestrator for executing every cycle of a run in order
//! - RunSummary for representing the result of a completed run

mod cycle_runner;

pub use cycle_runner::{CycleOrchestrator, RunSummary};
