use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use masthead_core::EngineConfig;
use masthead_core::sim::{ReplayScript, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "masthead", version, about = "Scroll-linked header layout engine")]
struct Cli {
    /// Engine configuration (JSON). Defaults apply when omitted.
    #[arg(long, global = true, env = "MASTHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// Log every layout pass to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a scroll script and print the published styles after each step,
    /// one JSON object per line.
    Replay { script: PathBuf },
    /// Print the effective engine configuration.
    Defaults,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "masthead_core=trace,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    EngineConfig::from_json(&data).with_context(|| format!("loading config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Replay { script } => {
            let data = std::fs::read(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let script_data: ReplayScript = serde_json::from_slice(&data)
                .with_context(|| format!("parsing script {}", script.display()))?;
            info!(
                route = %script_data.route,
                events = script_data.events.len(),
                "replaying"
            );

            for record in replay(&script_data, config) {
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
            }
        }
        Command::Defaults => {
            serde_json::to_writer_pretty(&mut out, &config)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use masthead_core::{PassOutcome, Regime};

    use super::*;

    #[test]
    fn bundled_home_script_replays() {
        let script: ReplayScript =
            serde_json::from_str(include_str!("../scripts/home.json")).unwrap();
        let records = replay(&script, EngineConfig::default());

        let outcomes: Vec<PassOutcome> = records.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                PassOutcome::Recomputed(Regime::Docked),
                PassOutcome::Recomputed(Regime::Docked),
                PassOutcome::Recomputed(Regime::Pinned),
                PassOutcome::Recomputed(Regime::Pinned),
                PassOutcome::Recomputed(Regime::Hold),
                PassOutcome::Recomputed(Regime::Collapsing),
                PassOutcome::Recomputed(Regime::Collapsing),
                PassOutcome::Recomputed(Regime::Pinned),
                PassOutcome::Ignored,
            ]
        );
        // Torn down: the last step leaves the previous styles untouched.
        assert_eq!(records[8].styles, records[7].styles);
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());
    }
}
