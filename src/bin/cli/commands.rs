//! Command Execution Logic

use clap::CommandFactory;
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::args::Cli;
use crate::cli::config_layer::build_layered_config;
use crate::cli::output::display_run_summary;
use wordsieve_rs::{SieveConfig, SieveEngine};

/// Exit status after printing usage; `--help` is treated as an aborted run.
pub const HELP_EXIT_CODE: i32 = 1;

/// Print usage to stdout.
pub fn print_usage() -> anyhow::Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default wordsieve configuration".dimmed());
    println!(
        "{}",
        "# Save this to .wordsieve.yml or pass it with --config".dimmed()
    );
    println!();

    let yaml_output = SieveConfig::default().to_yaml()?;
    println!("{}", yaml_output);

    Ok(())
}

/// Build the configuration, run the engine and report.
pub async fn rank_command(args: &Cli) -> anyhow::Result<()> {
    let config = build_layered_config(args)?;
    info!(
        "Ranking {} against {}",
        config.corpus.unknown_words_dir.display(),
        config.corpus.known_words_dir.display()
    );

    let engine = SieveEngine::new(config)?;
    let summary = engine.run().await?;

    display_run_summary(&summary);
    Ok(())
}
