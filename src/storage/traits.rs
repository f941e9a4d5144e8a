//! Event recorder trait definitions.

use std::path::Path;

use crate::domain::CycleOutcome;
use crate::error::Result;

/// Sink for resolved cycle outcomes.
///
/// A failed `record` is fatal to the run: the record is the only durable
/// evidence of the cycle.
pub trait EventRecorder {
    /// Append one record for the given 1-based cycle.
    fn record(&mut self, cycle: u32, outcome: CycleOutcome) -> Result<()>;

    /// Where records go, if anywhere.
    fn destination(&self) -> Option<&Path> {
        None
    }
}

impl<E: EventRecorder + ?Sized> EventRecorder for Box<E> {
    fn record(&mut self, cycle: u32, outcome: CycleOutcome) -> Result<()> {
        (**self).record(cycle, outcome)
    }

    fn destination(&self) -> Option<&Path> {
        (**self).destination()
    }
}

/// Recorder used when no event log is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl EventRecorder for NullRecorder {
    fn record(&mut self, cycle: u32, outcome: CycleOutcome) -> Result<()> {
        log::debug!("Cycle {} resolved to {} (not recorded)", cycle, outcome);
        Ok(())
    }
}
