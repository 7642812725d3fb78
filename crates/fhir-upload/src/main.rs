use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use fhir_upload_core::{build_client, load_and_submit, resolve_inputs, UploadConfig, DEFAULT_TIMEOUT};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upload all given, or all available, FHIR resources to the given FHIR server
/// as a single transaction Bundle.
#[derive(Debug, Parser)]
#[command(name = "fhir-upload", version)]
struct Cli {
    /// Increase verbosity.
    #[arg(long)]
    verbose: bool,

    /// Directory scanned for *.json files when no files are given.
    /// Defaults to the directory holding this executable.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Request timeout for the upload.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// FHIR server base URL, e.g. http://localhost:8080/fhir
    fhir_server_url: String,

    /// FHIR JSON files to upload.
    fhir_files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("started");
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        println!("{cli:?}");
    }

    let files = resolve_inputs(cli.fhir_files, cli.dir.as_deref())?;
    info!("uploading {} file(s)", files.len());

    let cfg = UploadConfig::new(cli.fhir_server_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = build_client(&cfg).context("build http client")?;

    let mut stdout = std::io::stdout().lock();
    load_and_submit(&client, &cfg, &files, &mut stdout)
        .await
        .with_context(|| format!("upload to {}", cfg.server_url))?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
