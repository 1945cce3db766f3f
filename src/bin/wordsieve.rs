//! wordsieve CLI - rank the unknown words of a text corpus by frequency.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.help {
        cli::print_usage()?;
        std::process::exit(cli::HELP_EXIT_CODE);
    }

    // Initialize tracing/logging; RUST_LOG overrides the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.print_default_config {
        return cli::print_default_config();
    }

    cli::rank_command(&cli).await
}
