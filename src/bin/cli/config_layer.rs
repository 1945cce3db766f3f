//! Configuration Layer Management
//!
//! Layers, lowest priority first: built-in defaults, a YAML config file
//! (explicit `--config` or an implicit `.wordsieve.yml`), command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::args::Cli;
use wordsieve_rs::core::config::SieveConfig;

const IMPLICIT_CONFIG_FILES: [&str; 2] = [".wordsieve.yml", ".wordsieve.yaml"];

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

/// Values given explicitly on the command line
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliOverrides {
    pub resulting_file: Option<PathBuf>,
    pub unknown_words_dir: Option<PathBuf>,
    pub known_words_dir: Option<PathBuf>,
    pub max_threads: Option<usize>,
}

impl FromCliArgs<Cli> for CliOverrides {
    fn from_cli_args(args: &Cli) -> Self {
        Self {
            resulting_file: args.resulting_file.clone(),
            unknown_words_dir: args.unknown_words_dir.clone(),
            known_words_dir: args.known_words_dir.clone(),
            max_threads: args.threads,
        }
    }
}

impl ConfigMerge<CliOverrides> for SieveConfig {
    fn merge_with(&mut self, other: CliOverrides) {
        if let Some(path) = other.resulting_file {
            self.output.resulting_file = path;
        }
        if let Some(dir) = other.unknown_words_dir {
            self.corpus.unknown_words_dir = dir;
        }
        if let Some(dir) = other.known_words_dir {
            self.corpus.known_words_dir = dir;
        }
        if other.max_threads.is_some() {
            self.performance.max_threads = other.max_threads;
        }
    }
}

/// Find `.wordsieve.yml` / `.wordsieve.yaml` in `dir`.
fn implicit_config_path(dir: &Path) -> Option<PathBuf> {
    IMPLICIT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Build the effective configuration for a run.
pub fn build_layered_config(args: &Cli) -> anyhow::Result<SieveConfig> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => implicit_config_path(Path::new(".")),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SieveConfig::from_yaml_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?
        }
        None => SieveConfig::default(),
    };

    config.merge_with(CliOverrides::from_cli_args(args));
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
