//! Run results for public API consumption.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::pipeline::{PipelineResults, PipelineStatistics};
use crate::core::ranking::RankedPair;

/// Outcome of a complete ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Corpus that was ranked
    pub unknown_words_dir: PathBuf,

    /// Corpus whose words were excluded
    pub known_words_dir: PathBuf,

    /// Where the CSV ranking was written
    pub resulting_file: PathBuf,

    /// Surviving words, most frequent first
    pub ranking: Vec<RankedPair>,

    /// Pipeline counters and timings
    pub statistics: PipelineStatistics,
}

impl RunSummary {
    /// Assemble a summary from pipeline output and the paths used
    pub fn from_pipeline_results(
        results: PipelineResults,
        unknown_words_dir: PathBuf,
        known_words_dir: PathBuf,
        resulting_file: PathBuf,
    ) -> Self {
        Self {
            unknown_words_dir,
            known_words_dir,
            resulting_file,
            ranking: results.ranking,
            statistics: results.statistics,
        }
    }

    /// The `n` most frequent surviving words
    pub fn top(&self, n: usize) -> &[RankedPair] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Whether nothing survived filtering
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}
