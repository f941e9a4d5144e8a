//! Cycle orchestrator implementation.
//!
//! The orchestrator runs `runs` cycles strictly in sequence. Each cycle walks
//! the `CyclePhase` state machine:
//! 1. Idle → Presenting: the presenter plays the video
//! 2. Presenting → AwaitingOutcome: the resolver decides
//! 3. AwaitingOutcome → Resolved: the recorder persists, counters update
//!
//! A failing resolver preflight aborts the run before anything is written.

use std::io::Write;

use colored::*;

use crate::api::{ApiBootstrap, OfflineBootstrap};
use crate::config::RunConfiguration;
use crate::domain::{AdIdentifiers, AggregateStats, CycleOutcome, CyclePhase};
use crate::error::Result;
use crate::presenter::VideoPresenter;
use crate::resolver::OutcomeResolver;
use crate::storage::EventRecorder;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Outcome of every cycle, in cycle order
    pub outcomes: Vec<CycleOutcome>,
    /// Final counters
    pub stats: AggregateStats,
    /// Whether the optional API client was available
    pub api_connected: bool,
}

/// Runs every cycle of a run with one resolver.
pub struct CycleOrchestrator<R, W>
where
    R: OutcomeResolver,
    W: Write,
{
    runs: u32,
    identifiers: AdIdentifiers,
    api_key: Option<String>,
    presenter: VideoPresenter,
    resolver: R,
    recorder: Box<dyn EventRecorder>,
    bootstrap: Box<dyn ApiBootstrap>,
    /// Terminal output
    out: W,
}

impl<R, W> CycleOrchestrator<R, W>
where
    R: OutcomeResolver,
    W: Write,
{
    /// Create an orchestrator for the given configuration and collaborators.
    ///
    /// No API bootstrap is attempted unless one is supplied with
    /// `with_api_bootstrap`.
    pub fn new(
        config: &RunConfiguration,
        presenter: VideoPresenter,
        resolver: R,
        recorder: Box<dyn EventRecorder>,
        out: W,
    ) -> Self {
        Self {
            runs: config.runs,
            identifiers: config.identifiers.clone(),
            api_key: config.api_key.clone(),
            presenter,
            resolver,
            recorder,
            bootstrap: Box::new(OfflineBootstrap),
            out,
        }
    }

    /// Use the given API bootstrap after preflight succeeds.
    pub fn with_api_bootstrap(mut self, bootstrap: Box<dyn ApiBootstrap>) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run all cycles. Counters start from zero on every call.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.resolver.preflight()?;

        log::info!("Starting run: {} cycles, policy {}", self.runs, self.resolver.name());
        let api_connected = self.bootstrap.try_initialize(self.api_key.as_deref()).is_some();
        self.print_banner(api_connected)?;

        let mut stats = AggregateStats::new();
        let mut outcomes = Vec::new();

        for cycle in 1..=self.runs {
            let outcome = self.run_cycle(cycle)?;
            stats.record(outcome);
            outcomes.push(outcome);
            debug_assert_eq!(stats.completed(), cycle);

            match outcome {
                CycleOutcome::Share => writeln!(self.out, "{}", "✅ SHARE recorded.".green())?,
                CycleOutcome::Reject => writeln!(self.out, "{}", "❌ REJECT recorded.".red())?,
            }
            writeln!(
                self.out,
                "Counters => share: {} | reject: {}",
                stats.shares, stats.rejects
            )?;
        }

        self.print_summary(&stats)?;
        log::info!(
            "Run complete: {} shares, {} rejects",
            stats.shares,
            stats.rejects
        );

        Ok(RunSummary {
            outcomes,
            stats,
            api_connected,
        })
    }

    /// Execute one cycle through every phase.
    fn run_cycle(&mut self, cycle: u32) -> Result<CycleOutcome> {
        writeln!(self.out, "\n{} {}/{}", "Cycle".bold(), cycle, self.runs)?;

        let phase = CyclePhase::Idle.start_presenting()?;
        log::debug!("Cycle {}: {}", cycle, phase);
        self.presenter.present(cycle, &mut self.out)?;

        let phase = phase.await_outcome()?;
        log::debug!("Cycle {}: {}", cycle, phase);
        let outcome = self.resolver.resolve(cycle)?;

        let phase = phase.resolve(outcome)?;
        log::debug!("Cycle {}: {}", cycle, phase);
        self.recorder.record(cycle, outcome)?;

        Ok(outcome)
    }

    fn print_banner(&mut self, api_connected: bool) -> Result<()> {
        writeln!(self.out, "{}", "=== Reward Video Terminal App ===".bold())?;
        writeln!(self.out, "App ID      : {}", self.identifiers.display_app_id())?;
        writeln!(self.out, "Ad Unit ID  : {}", self.identifiers.display_ad_unit_id())?;
        writeln!(self.out, "Policy      : {}", self.resolver.name())?;
        if let Some(path) = self.recorder.destination() {
            writeln!(self.out, "Events log  : {}", path.display())?;
        }
        if api_connected {
            writeln!(self.out, "{} AdMob API client ready.", "[OK]".green())?;
        } else {
            writeln!(self.out, "{} Local simulation mode.", "[INFO]".blue())?;
        }
        writeln!(self.out, "----------------------------------------")?;
        Ok(())
    }

    fn print_summary(&mut self, stats: &AggregateStats) -> Result<()> {
        writeln!(self.out, "\n{}", "=== Final result ===".bold())?;
        writeln!(self.out, "Shares : {}", stats.shares)?;
        writeln!(self.out, "Rejects: {}", stats.rejects)?;
        Ok(())
    }
}
