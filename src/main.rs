//! Spider-Run main entry point
//!
//! This is the command-line interface for running a single spider through an
//! external crawling framework and reporting on its JSON-lines output.

use anyhow::Context;
use clap::Parser;
use spider_run::config::{load_config_with_hash, validate, Config};
use spider_run::process::SystemRunner;
use spider_run::{Orchestrator, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Spider-Run: run one spider and report on its output
///
/// Prepares the output directory, prints the project layout and available
/// spiders, runs the crawl and reports the runtime plus the size and line
/// count of the JSON-lines file it produced.
#[derive(Parser, Debug)]
#[command(name = "spider-run")]
#[command(version)]
#[command(about = "Run a spider and report on its JSON-lines output", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spider to run (overrides the config file)
    #[arg(short, long, value_name = "NAME")]
    spider: Option<String>,

    /// JSON-lines output file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Directory to create before crawling (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Remove an existing output file before crawling
    #[arg(long)]
    fresh_output: bool,

    /// Do not print the working directory tree
    #[arg(long)]
    no_tree: bool,

    /// Do not list the available spiders
    #[arg(long)]
    no_list: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);
    tracing::debug!("Run started at {}", chrono::Local::now().to_rfc3339());

    match run(cli, started) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The failure message is already on the console
            if !matches!(
                e.downcast_ref::<RunnerError>(),
                Some(RunnerError::CrawlFailed { .. })
            ) {
                tracing::error!("{:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("spider_run=warn"),
            1 => EnvFilter::new("spider_run=info,warn"),
            2 => EnvFilter::new("spider_run=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn run(cli: Cli, started: Instant) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let workdir = std::env::current_dir().context("Failed to determine working directory")?;

    let stdout = std::io::stdout();
    let mut orchestrator = Orchestrator::new(
        config,
        &workdir,
        SystemRunner::new(),
        stdout.lock(),
        started,
    );

    let report = orchestrator.run()?;
    tracing::info!(
        "Run finished in {:.2}s with state {}",
        report.timing.seconds(),
        report.state
    );
    Ok(())
}

/// Loads the config file if one was given and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(spider) = &cli.spider {
        config.crawl.spider = spider.clone();
    }
    if let Some(output) = &cli.output {
        config.crawl.output = output.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        config.crawl.output_dir = output_dir.clone();
    }
    if cli.fresh_output {
        config.crawl.fresh_output = true;
    }
    if cli.no_tree {
        config.report.show_tree = false;
    }
    if cli.no_list {
        config.report.list_spiders = false;
    }

    validate(&config)?;
    Ok(config)
}
