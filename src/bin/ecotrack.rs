//! Replay an intent script against a fresh ecosystem and print the resulting state.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ecotrack::config::ConfigError;
use ecotrack::script::{ScriptError, load_script};
use ecotrack::{EcoConfig, Ecosystem};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ecotrack",
    version,
    about = "Track species populations and food-chain cascades"
)]
struct Cli {
    /// JSON Lines file of intents to replay, one per line
    #[arg(short, long)]
    script: PathBuf,

    /// JSON file overriding cascade rates and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Species to run a what-if projection for after the replay
    #[arg(long, requires = "deaths")]
    what_if: Option<String>,

    /// Hypothetical deaths for --what-if
    #[arg(long)]
    deaths: Option<u64>,

    /// Print the risk-ordered report instead of the JSON snapshot
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("failed to render snapshot: {0}")]
    Render(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EcoConfig::from_json_file(path)?,
        None => EcoConfig::default(),
    };
    let intents = load_script(&cli.script)?;
    info!(path = %cli.script.display(), intents = intents.len(), "script loaded");

    let mut eco = Ecosystem::with_config(config);
    let summary = eco.replay(&intents);
    for (index, err) in &summary.rejected {
        info!(intent = index + 1, %err, "intent skipped");
    }

    if let (Some(name), Some(deaths)) = (&cli.what_if, cli.deaths) {
        eco.run_what_if(name, deaths);
    }

    if cli.report {
        for row in eco.risk_report() {
            println!("{row}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&eco.snapshot())?);
    }
    Ok(())
}
