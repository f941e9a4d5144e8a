//! Outcome resolution policies.
//!
//! One `OutcomeResolver` is chosen when the run is configured and used for
//! every cycle of that run:
//! - `RandomResolver`: weighted coin flip
//! - `InteractiveResolver`: asks the operator
//! - `ComplianceResolver`: strict mode, refuses to run from a terminal

mod compliance;
mod interactive;
mod random;

pub use compliance::ComplianceResolver;
pub use interactive::InteractiveResolver;
pub use random::RandomResolver;

use crate::config::{Policy, RunConfiguration};
use crate::domain::CycleOutcome;
use crate::error::Result;

/// Decides the outcome of each cycle once its video has been presented.
pub trait OutcomeResolver {
    /// Short policy name for banners and logs
    fn name(&self) -> &'static str;

    /// Run-level check performed before cycle 1. An error aborts the run.
    fn preflight(&self) -> Result<()> {
        Ok(())
    }

    /// Produce exactly one outcome for the given 1-based cycle.
    fn resolve(&mut self, cycle: u32) -> Result<CycleOutcome>;
}

impl<R: OutcomeResolver + ?Sized> OutcomeResolver for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn preflight(&self) -> Result<()> {
        (**self).preflight()
    }

    fn resolve(&mut self, cycle: u32) -> Result<CycleOutcome> {
        (**self).resolve(cycle)
    }
}

/// Build the resolver selected by the configuration, wired to the real
/// terminal and an entropy-seeded (or explicitly seeded) RNG.
pub fn from_config(config: &RunConfiguration) -> Box<dyn OutcomeResolver> {
    match &config.policy {
        Policy::Random { share_probability } => {
            let resolver = match config.seed {
                Some(seed) => RandomResolver::seeded(*share_probability, seed),
                None => RandomResolver::from_os_rng(*share_probability),
            };
            Box::new(resolver)
        }
        Policy::Interactive => Box::new(InteractiveResolver::stdio()),
        Policy::Compliance => Box::new(ComplianceResolver::new(config.identifiers.clone())),
    }
}
