//! batchsim - Batch experiment harness for gcsim
//!
//! A run:
//! - Expands one config template into a config per variable table row
//! - Runs gcsim on each generated config, one at a time
//! - Joins every result with its table row into a single CSV sheet

mod application;
mod domain;
mod infrastructure;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::services::ConfigTemplate;
use crate::domain::value_objects::{BatchSummary, RunLayout};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv_table::load_variable_table;
use crate::infrastructure::state::AppState;

#[derive(Parser)]
#[command(name = "batchsim", version)]
#[command(about = "Expand a gcsim config template over a variable table, simulate every row, collect the results")]
struct Cli {
    /// Config template containing $char1..$char4 placeholders (also -cfg)
    #[arg(short = 'c', long = "config", visible_alias = "cfg")]
    config: PathBuf,
    /// Variable table (CSV with $charK_<field> columns) (also -var)
    #[arg(short = 'v', long = "variables", visible_alias = "var")]
    variables: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "batchsim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Simulator: {}", config.simulator_path.display());
    tracing::info!("  Characters: {}", config.character_url);
    tracing::info!("  Weapons: {}", config.weapon_url);

    // Inputs are checked before anything is generated
    let template_text = tokio::fs::read_to_string(&cli.config)
        .await
        .with_context(|| format!("failed to read template {}", cli.config.display()))?;
    let template = ConfigTemplate::new(&template_text);
    let table = load_variable_table(&cli.variables)?;
    let layout = RunLayout::for_template(&cli.config);
    tracing::info!(
        "Template {} with {} variable rows",
        cli.config.display(),
        table.len()
    );

    let state = AppState::new(config).await?;
    tracing::info!(
        "Name tables loaded: {} characters, {} weapons",
        state.names.character_count(),
        state.names.weapon_count()
    );

    let report = state.run_batch(&template, &table, &layout).await?;
    tracing::info!("Results saved to {}", report.sheet.display());

    log_summary("Simulations", &report.simulations);
    log_summary("Report rows", &report.report_rows);

    Ok(())
}

/// Rewrite the single-dash `-cfg`/`-var` spellings to their long forms
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-cfg") => "--cfg".into(),
            Some("-var") => "--var".into(),
            Some(s) if s.starts_with("-cfg=") || s.starts_with("-var=") => format!("-{s}").into(),
            _ => arg,
        })
        .collect()
}

fn log_summary(stage: &str, summary: &BatchSummary) {
    tracing::info!("{}: {}", stage, summary);
    for (index, reason) in summary.problems() {
        tracing::warn!("  row {}: {}", index, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_single_dash_long_flags() {
        let cli = parse(&["batchsim", "-cfg", "team.txt", "-var", "vars.csv"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("team.txt"));
        assert_eq!(cli.variables, PathBuf::from("vars.csv"));

        let cli = parse(&["batchsim", "-cfg=team.txt", "-var=vars.csv"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("team.txt"));
        assert_eq!(cli.variables, PathBuf::from("vars.csv"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = parse(&["batchsim", "-c", "a.txt", "--variables", "b.csv"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("a.txt"));
        assert_eq!(cli.variables, PathBuf::from("b.csv"));

        let cli = parse(&["batchsim", "--cfg", "a.txt", "--var", "b.csv"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("a.txt"));
    }

    #[test]
    fn test_both_flags_required() {
        assert!(parse(&["batchsim", "-c", "a.txt"]).is_err());
    }
}
