//! Application and ad-unit identifiers.

use serde::{Deserialize, Serialize};

/// Environment name of the application identifier
pub const APP_ID_FIELD: &str = "ADMOB_APP_ID";

/// Environment name of the rewarded ad-unit identifier
pub const AD_UNIT_ID_FIELD: &str = "ADMOB_REWARDED_AD_UNIT_ID";

/// Identifiers stamped on every event record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdIdentifiers {
    pub app_id: String,
    pub ad_unit_id: String,
}

impl AdIdentifiers {
    pub fn new(app_id: impl Into<String>, ad_unit_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            ad_unit_id: ad_unit_id.into(),
        }
    }

    /// Names of the identifiers that are empty, app id first.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.app_id.trim().is_empty() {
            missing.push(APP_ID_FIELD.to_string());
        }
        if self.ad_unit_id.trim().is_empty() {
            missing.push(AD_UNIT_ID_FIELD.to_string());
        }
        missing
    }

    /// Display form used in the run banner
    pub fn display_app_id(&self) -> &str {
        display_or_unset(&self.app_id)
    }

    pub fn display_ad_unit_id(&self) -> &str {
        display_or_unset(&self.ad_unit_id)
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.trim().is_empty() { "NOT CONFIGURED" } else { value }
}
