//! Strict-mode policy.
//!
//! Genuine rewarded-ad views are only counted by the mobile SDK when it
//! receives first-party callbacks. A terminal process can never produce
//! those, so this policy always aborts the run before cycle 1.

use super::OutcomeResolver;
use crate::domain::{AdIdentifiers, CycleOutcome};
use crate::error::{Result, RewardError};

#[derive(Debug, Clone)]
pub struct ComplianceResolver {
    identifiers: AdIdentifiers,
}

impl ComplianceResolver {
    pub fn new(identifiers: AdIdentifiers) -> Self {
        Self { identifiers }
    }

    fn check(&self) -> RewardError {
        let missing = self.identifiers.missing_fields();
        if missing.is_empty() {
            RewardError::TerminalCertificationUnsupported
        } else {
            RewardError::MissingIdentifiers(missing)
        }
    }
}

impl OutcomeResolver for ComplianceResolver {
    fn name(&self) -> &'static str {
        "compliance"
    }

    fn preflight(&self) -> Result<()> {
        log::info!("Strict mode check enabled");
        Err(self.check())
    }

    fn resolve(&mut self, cycle: u32) -> Result<CycleOutcome> {
        log::warn!("Cycle {} reached the strict-mode resolver", cycle);
        Err(self.check())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AD_UNIT_ID_FIELD, APP_ID_FIELD};

    #[test]
    fn test_both_missing_names_both() {
        let resolver = ComplianceResolver::new(AdIdentifiers::default());
        match resolver.preflight() {
            Err(RewardError::MissingIdentifiers(fields)) => {
                assert_eq!(fields, vec![APP_ID_FIELD, AD_UNIT_ID_FIELD]);
            }
            other => panic!("Expected MissingIdentifiers, got {:?}", other),
        }
    }

    #[test]
    fn test_one_missing_names_exactly_that_one() {
        let resolver = ComplianceResolver::new(AdIdentifiers::new("", "ca-app-pub-1/2"));
        let err = resolver.preflight().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(APP_ID_FIELD));
        assert!(!msg.contains(AD_UNIT_ID_FIELD));

        let resolver = ComplianceResolver::new(AdIdentifiers::new("ca-app-pub-1~2", ""));
        match resolver.preflight() {
            Err(RewardError::MissingIdentifiers(fields)) => assert_eq!(fields, vec![AD_UNIT_ID_FIELD]),
            other => panic!("Expected MissingIdentifiers, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_configuration_still_refuses() {
        let resolver = ComplianceResolver::new(AdIdentifiers::new("ca-app-pub-1~2", "ca-app-pub-1/3"));
        assert!(matches!(
            resolver.preflight(),
            Err(RewardError::TerminalCertificationUnsupported)
        ));
    }

    #[test]
    fn test_resolve_never_emits_outcome() {
        let mut resolver = ComplianceResolver::new(AdIdentifiers::new("a", "b"));
        assert!(resolver.resolve(1).is_err());
    }
}
