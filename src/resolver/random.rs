//! Weighted random outcome policy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::OutcomeResolver;
use crate::domain::CycleOutcome;
use crate::error::Result;

/// Shares with probability `share_probability`, independently per cycle.
#[derive(Debug, Clone)]
pub struct RandomResolver<R: Rng = StdRng> {
    share_probability: f64,
    rng: R,
}

impl RandomResolver<StdRng> {
    /// Resolver seeded from operating-system entropy
    pub fn from_os_rng(share_probability: f64) -> Self {
        Self::with_rng(share_probability, StdRng::from_os_rng())
    }

    /// Deterministic resolver for reproducible runs
    pub fn seeded(share_probability: f64, seed: u64) -> Self {
        Self::with_rng(share_probability, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomResolver<R> {
    pub fn with_rng(share_probability: f64, rng: R) -> Self {
        Self { share_probability, rng }
    }

    pub fn share_probability(&self) -> f64 {
        self.share_probability
    }
}

impl<R: Rng> OutcomeResolver for RandomResolver<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn resolve(&mut self, cycle: u32) -> Result<CycleOutcome> {
        // Uniform in [0, 1); share iff strictly below the threshold
        let draw: f64 = self.rng.random();
        let outcome = if draw < self.share_probability {
            CycleOutcome::Share
        } else {
            CycleOutcome::Reject
        };
        log::debug!(
            "Cycle {}: draw {:.4} vs p={:.2} -> {}",
            cycle,
            draw,
            self.share_probability,
            outcome
        );
        Ok(outcome)
    }
}
