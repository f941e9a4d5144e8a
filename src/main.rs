use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod cli;

use cli::Cli;
use cli::commands::Commands;
use reward_video::api::AdmobBootstrap;
use reward_video::config::{RunConfiguration, load_config};
use reward_video::domain::AggregateStats;
use reward_video::notify::DesktopNotifier;
use reward_video::presenter::{SleepTicker, SystemOpener, VideoPresenter};
use reward_video::resolver;
use reward_video::runner::CycleOrchestrator;
use reward_video::storage::{self, JsonlEventLog};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reward-video")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("reward-video.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli) -> Result<()> {
    info!("Starting application");

    match &cli.command {
        None => run_cycles(cli),
        Some(Commands::Events { path }) => handle_events_command(path),
    }
}

fn run_cycles(cli: &Cli) -> Result<()> {
    let file_layer = load_config(cli.config.as_ref()).context("Failed to load configuration")?;
    let overrides = cli.run.to_overrides().over(file_layer);
    let config = RunConfiguration::resolve(&overrides).context("Invalid configuration")?;

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("{:#?}", config.redacted());
    }

    let presenter = VideoPresenter::new(
        config.watch_seconds,
        config.resource_url.clone(),
        Box::new(SleepTicker),
        Box::new(DesktopNotifier::new()),
        Box::new(SystemOpener),
    );
    let resolver = resolver::from_config(&config);
    let recorder = storage::recorder_for(config.event_log.as_ref(), &config.identifiers);

    let mut orchestrator = CycleOrchestrator::new(&config, presenter, resolver, recorder, io::stdout())
        .with_api_bootstrap(Box::new(AdmobBootstrap::new()));

    let summary = orchestrator.run().context("Run aborted")?;
    info!(
        "Finished {} cycles ({} shares, {} rejects)",
        summary.outcomes.len(),
        summary.stats.shares,
        summary.stats.rejects
    );
    Ok(())
}

fn handle_events_command(path: &Path) -> Result<()> {
    info!("Reading event log: {}", path.display());
    let records = JsonlEventLog::read_all(path).context(format!("Failed to read {}", path.display()))?;

    if records.is_empty() {
        println!("{} {}", "No events in".yellow(), path.display());
        return Ok(());
    }

    for record in &records {
        let action = if record.action.is_share() {
            record.action.as_str().green()
        } else {
            record.action.as_str().red()
        };
        println!(
            "{}  cycle {:>3}  {}  {} / {}",
            record.timestamp.to_rfc3339(),
            record.cycle,
            action,
            record.app_id,
            record.ad_unit_id
        );
    }

    let stats: AggregateStats = records.iter().map(|r| r.action).collect();
    println!("\n{} {}", "Events:".green(), records.len());
    println!("Shares : {}", stats.shares);
    println!("Rejects: {}", stats.rejects);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli).context("Application failed")?;

    Ok(())
}
