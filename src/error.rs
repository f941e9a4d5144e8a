//! Error types for reward-video
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while running reward cycles
#[derive(Debug, Error)]
pub enum RewardError {
    /// Required identifiers are missing for strict mode
    #[error("Incomplete configuration for the mobile ad integration: {}.", .0.join(", "))]
    MissingIdentifiers(Vec<String>),

    /// Strict mode can never be certified from a terminal process
    #[error(
        "REAL_ADMOB_MODE cannot be satisfied from a terminal app. For a video to count as \
         genuinely viewed, the Android/iOS Mobile Ads SDK must receive the official callbacks \
         (onUserEarnedReward/onAdDismissedFullScreenContent) and let the SDK count the impression."
    )]
    TerminalCertificationUnsupported,

    /// Invalid cycle phase transition
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Operator input stream ended before a valid answer was given
    #[error("Operator input closed before a valid answer was given")]
    InputClosed,

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Event log persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RewardError {
    /// Whether this error was raised by the strict-mode preflight
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            RewardError::MissingIdentifiers(_) | RewardError::TerminalCertificationUnsupported
        )
    }
}

/// Result type alias for reward-video operations
pub type Result<T> = std::result::Result<T, RewardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifiers_names_every_field() {
        let err = RewardError::MissingIdentifiers(vec![
            "ADMOB_APP_ID".to_string(),
            "ADMOB_REWARDED_AD_UNIT_ID".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Incomplete configuration for the mobile ad integration: ADMOB_APP_ID, ADMOB_REWARDED_AD_UNIT_ID."
        );
    }

    #[test]
    fn test_terminal_certification_message() {
        let msg = RewardError::TerminalCertificationUnsupported.to_string();
        assert!(msg.contains("REAL_ADMOB_MODE"));
        assert!(msg.contains("onUserEarnedReward"));
    }

    #[test]
    fn test_invalid_state_error() {
        let err = RewardError::InvalidState("cannot resolve while idle".to_string());
        assert_eq!(err.to_string(), "Invalid state: cannot resolve while idle");
    }

    #[test]
    fn test_storage_error() {
        let err = RewardError::Storage("read-only filesystem".to_string());
        assert_eq!(err.to_string(), "Storage error: read-only filesystem");
    }

    #[test]
    fn test_is_preflight() {
        assert!(RewardError::TerminalCertificationUnsupported.is_preflight());
        assert!(RewardError::MissingIdentifiers(vec![]).is_preflight());
        assert!(!RewardError::InputClosed.is_preflight());
        assert!(!RewardError::Config("x".into()).is_preflight());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RewardError = io_err.into();
        assert!(matches!(err, RewardError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: RewardError = json_err.into();
        assert!(matches!(err, RewardError::Json(_)));
    }
}
