//! Event record written once per resolved cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AdIdentifiers, CycleOutcome};

/// One line of the append-only event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    /// UTC time the record was written (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// 1-based cycle index
    pub cycle: u32,
    /// Resolved outcome token
    pub action: CycleOutcome,
    pub app_id: String,
    pub ad_unit_id: String,
}

impl EventRecord {
    /// Create a record stamped with the current time
    pub fn new(cycle: u32, action: CycleOutcome, ids: &AdIdentifiers) -> Self {
        Self::at(Utc::now(), cycle, action, ids)
    }

    pub fn at(timestamp: DateTime<Utc>, cycle: u32, action: CycleOutcome, ids: &AdIdentifiers) -> Self {
        Self {
            timestamp,
            cycle,
            action,
            app_id: ids.app_id.clone(),
            ad_unit_id: ids.ad_unit_id.clone(),
        }
    }
}
