use anyhow::{Context, Result};
use clap::Parser;
use extractors::ContactExtractor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

mod batch;
mod config;
mod output;

use crate::config::{ImportConfig, OutputFormat};
use crate::output::ImportReport;

#[derive(Parser, Debug)]
#[command(
    name = "contact-import",
    version,
    about = "Extract contacts from converted membership lists"
)]
struct Args {
    /// Plain-text or HTML files to read
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON array of stored contacts; matching records are left out
    #[arg(long, value_name = "PATH")]
    existing: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let config = match &args.config {
        Some(path) => ImportConfig::load_from(path)
            .with_context(|| format!("Failed to load config at {:?}", path))?,
        None => {
            let (config, config_path) = ImportConfig::load().context("Failed to load config")?;
            tracing::debug!("Using config at {:?}", config_path);
            config
        }
    };

    let extractor = Arc::new(
        ContactExtractor::new(config.patterns.clone()).context("Invalid [patterns] config")?,
    );

    let mut outcome = batch::extract_files(extractor, &args.files).await?;
    if let Some(path) = &args.existing {
        let existing = batch::load_existing(path)?;
        outcome.contacts = batch::drop_known(outcome.contacts, &existing);
    }

    if outcome.contacts.is_empty() {
        anyhow::bail!(
            "No contacts found in {} of {} files",
            outcome.files_processed,
            args.files.len()
        );
    }

    let report = ImportReport::new(outcome, &config.output.unknown_name);
    let stdout = std::io::stdout().lock();
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => output::write_json(stdout, &report)?,
        OutputFormat::Csv => output::write_csv(stdout, &report)?,
    }

    Ok(())
}

/// Logs go to stderr, and to `log_file_path` as well when given.
fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("contact-import.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
