//! Domain types for reward-video
//!
//! This module contains all core domain types:
//! - CycleOutcome: terminal decision of a cycle (Share, Reject)
//! - CyclePhase: per-cycle state machine
//! - AggregateStats: share/reject counters for one run
//! - AdIdentifiers: application and ad-unit identifiers
//! - EventRecord: one durable line per resolved cycle

pub mod event;
pub mod identifiers;
pub mod outcome;
pub mod phase;
pub mod stats;

pub use event::EventRecord;
pub use identifiers::{AD_UNIT_ID_FIELD, APP_ID_FIELD, AdIdentifiers};
pub use outcome::CycleOutcome;
pub use phase::CyclePhase;
pub use stats::AggregateStats;
