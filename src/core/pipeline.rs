//! Ranking pipeline: load both corpora, drop known words, rank the rest.
//!
//! Each phase runs on a bounded rayon pool and finishes completely before the
//! next one starts.

use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::PerformanceConfig;
use crate::core::errors::Result;
use crate::core::filter::remove_known;
use crate::core::loader::{load, CorpusFile};
use crate::core::ranking::{rank, RankedPair};

/// Counters and timings collected while the pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStatistics {
    /// Files in the unknown-words corpus
    pub unknown_files: usize,
    /// Files in the known-words corpus
    pub known_files: usize,
    /// Distinct words in the unknown corpus before filtering
    pub unknown_words: usize,
    /// Distinct words in the known corpus
    pub known_words: usize,
    /// Words removed because they were known
    pub removed_words: usize,
    /// Rows in the final ranking
    pub ranked_words: usize,
    /// Time spent building both frequency tables
    pub load_duration: Duration,
    /// Time spent filtering
    pub filter_duration: Duration,
    /// Time spent sorting
    pub rank_duration: Duration,
}

/// Output of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineResults {
    /// Surviving words, most frequent first
    pub ranking: Vec<RankedPair>,
    /// Run statistics
    pub statistics: PipelineStatistics,
}

/// Runs the ranking phases on a dedicated worker pool
#[derive(Debug)]
pub struct SievePipeline {
    pool: ThreadPool,
}

impl SievePipeline {
    /// Build a pipeline with a pool sized from `performance.max_threads`.
    pub fn new(performance: &PerformanceConfig) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("wordsieve-{i}"));
        if let Some(threads) = performance.max_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;
        info!("Worker pool ready with {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Rank the words of `unknown` that never occur in `known`.
    pub fn run(&self, unknown: &[CorpusFile], known: &[CorpusFile]) -> PipelineResults {
        self.pool.install(|| {
            let mut statistics = PipelineStatistics {
                unknown_files: unknown.len(),
                known_files: known.len(),
                ..PipelineStatistics::default()
            };

            let started = Instant::now();
            let (unknown_table, known_table) = rayon::join(|| load(unknown), || load(known));
            statistics.load_duration = started.elapsed();
            statistics.unknown_words = unknown_table.len();
            statistics.known_words = known_table.len();
            info!(
                "Loaded {} distinct unknown words from {} files and {} distinct known words from {} files",
                statistics.unknown_words, statistics.unknown_files, statistics.known_words, statistics.known_files
            );

            let started = Instant::now();
            statistics.removed_words = remove_known(&unknown_table, &known_table);
            statistics.filter_duration = started.elapsed();
            drop(known_table);
            info!("Removed {} known words", statistics.removed_words);

            let started = Instant::now();
            let ranking = rank(unknown_table);
            statistics.rank_duration = started.elapsed();
            statistics.ranked_words = ranking.len();
            info!("Ranked {} words", statistics.ranked_words);

            PipelineResults {
                ranking,
                statistics,
            }
        })
    }
}
