//! IR Monitor CLI
//!
//! Checks every watched investor-relations page once and emails the
//! differences. Meant to be invoked periodically by an external scheduler.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ir_monitor::{
    error::Result,
    models::MonitorConfig,
    notify::{MailCredentials, SmtpNotifier},
    pipeline::{Monitor, RunOptions, RunOutcome},
    services::HttpFetcher,
    storage::LocalStorage,
};

/// Monitor investor relations pages and send email alerts on changes.
#[derive(Parser, Debug)]
#[command(name = "ir-monitor", version, about)]
struct Cli {
    /// Path to YAML watchlist config
    #[arg(long, default_value = "portfolio.yaml")]
    config: PathBuf,

    /// Path to local state file
    #[arg(long, default_value = "state.json")]
    state: PathBuf,

    /// Send alert even when no previous state exists
    #[arg(long)]
    notify_on_first_run: bool,

    /// Print alert instead of sending email
    #[arg(long)]
    dry_run: bool,

    /// Print additional debug logs
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = MonitorConfig::load(&cli.config)?;
    log::info!(
        "Loaded {} companies from {}",
        config.companies.len(),
        cli.config.display()
    );

    let options = RunOptions {
        notify_on_first_run: cli.notify_on_first_run,
        dry_run: cli.dry_run,
    };
    let credentials = MailCredentials::from_env();

    let fetcher = HttpFetcher::new(&config.crawler)?;
    let storage = LocalStorage::new(&cli.state);
    let notifier = SmtpNotifier::new(config.mail.clone(), credentials.clone());

    let monitor = Monitor::new(config, options, credentials)?;
    let summary = monitor.run(&fetcher, &storage, &notifier).await?;

    match summary.outcome {
        RunOutcome::NoChanges => println!("No changes detected."),
        RunOutcome::DryRun(alert) => {
            println!("Dry run mode: would send this email:\n");
            println!("{alert}");
        }
        RunOutcome::Sent(_) => println!(
            "Sent email for {} company update(s).",
            summary.changes.len()
        ),
    }

    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_network() {
                eprintln!("Network error while checking pages: {e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
