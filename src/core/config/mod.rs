//! Configuration types and management for wordsieve-rs.
//!
//! A run is fully described by a [`SieveConfig`]: where the two corpora live,
//! where the ranking is written, and how much parallelism to use. The config
//! is passed by value into the engine; the ranking core never reads it.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SieveError};

pub use validation::{validate_non_empty_path, validate_positive_usize};

/// Main configuration for a ranking run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Input corpora
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Result file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Parallelism and batching
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Configuration construction and I/O methods for [`SieveConfig`].
impl SieveConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SieveError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = self.to_yaml()?;
        std::fs::write(&path, content).map_err(|e| {
            SieveError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Render configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.corpus.validate()?;
        self.output.validate()?;
        self.performance.validate()?;
        Ok(())
    }
}

/// Locations of the two corpora
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory whose words are ranked
    #[serde(default = "CorpusConfig::default_unknown_words_dir")]
    pub unknown_words_dir: PathBuf,

    /// Directory whose words are excluded from the ranking
    #[serde(default = "CorpusConfig::default_known_words_dir")]
    pub known_words_dir: PathBuf,

    /// Create missing corpus directories instead of failing
    #[serde(default = "CorpusConfig::default_create_missing_dirs")]
    pub create_missing_dirs: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            unknown_words_dir: Self::default_unknown_words_dir(),
            known_words_dir: Self::default_known_words_dir(),
            create_missing_dirs: Self::default_create_missing_dirs(),
        }
    }
}

impl CorpusConfig {
    fn default_unknown_words_dir() -> PathBuf {
        PathBuf::from("./unknownWords/")
    }

    fn default_known_words_dir() -> PathBuf {
        PathBuf::from("./knownWords/")
    }

    const fn default_create_missing_dirs() -> bool {
        true
    }

    /// Validate corpus configuration
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_path(&self.unknown_words_dir, "corpus.unknown_words_dir")?;
        validate_non_empty_path(&self.known_words_dir, "corpus.known_words_dir")?;
        Ok(())
    }
}

/// Result file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV ranking
    #[serde(default = "OutputConfig::default_resulting_file")]
    pub resulting_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resulting_file: Self::default_resulting_file(),
        }
    }
}

impl OutputConfig {
    fn default_resulting_file() -> PathBuf {
        PathBuf::from("result.csv")
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_path(&self.resulting_file, "output.resulting_file")
    }
}

/// Performance and resource configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Worker pool size; `None` uses one thread per available CPU
    #[serde(default)]
    pub max_threads: Option<usize>,

    /// Number of files read concurrently per batch
    #[serde(default = "PerformanceConfig::default_read_batch_size")]
    pub read_batch_size: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_threads: None,
            read_batch_size: Self::default_read_batch_size(),
        }
    }
}

impl PerformanceConfig {
    const fn default_read_batch_size() -> usize {
        200
    }

    /// Validate performance configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(threads) = self.max_threads {
            validate_positive_usize(threads, "performance.max_threads")?;
        }
        validate_positive_usize(self.read_batch_size, "performance.read_batch_size")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
