//! Freightbooks report generator.
//!
//! Reads a record snapshot, derives the books and prints one report as JSON.

mod cli;
mod report;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use freightbooks_core::ledger::DateRange;
use freightbooks_shared::{AppConfig, AppError, snapshot};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::report::{ReportContext, Snapshot};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return exit_code(&err);
        }
    };
    init_tracing(&config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Report failed");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, exit_code)
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log.filter.as_str().into());
    let json = config.log.json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let range = DateRange::new(cli.from, cli.to)
        .map_err(|err| AppError::Validation(err.to_string()))?;
    let records: Snapshot = snapshot::read_json(&cli.snapshot)?;
    info!(
        path = %cli.snapshot.display(),
        invoices = records.invoices.len(),
        expenses = records.expenses.len(),
        "Snapshot loaded"
    );

    let context = ReportContext::new(records, config, range);
    let value = context.render(&cli.command)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &value).context("writing report")?;
    writeln!(stdout).context("writing report")?;
    Ok(())
}

fn exit_code(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
