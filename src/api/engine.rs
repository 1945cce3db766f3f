//! Main ranking engine implementation.

use std::sync::Arc;

use tracing::info;

use crate::api::results::RunSummary;
use crate::core::config::SieveConfig;
use crate::core::errors::{Result, SieveError};
use crate::core::loader::CorpusFile;
use crate::core::pipeline::{PipelineResults, SievePipeline};
use crate::io::corpus::{
    ensure_dir, normalize_dir, read_corpus, BatchedCorpusReader, FileBatchReader,
};
use crate::io::csv_export::write_ranking;

/// Main wordsieve engine
pub struct SieveEngine {
    /// Ranking phases and their worker pool
    pipeline: Arc<SievePipeline>,

    /// Corpus file reader
    reader: Arc<dyn FileBatchReader>,

    /// Engine configuration
    config: Arc<SieveConfig>,
}

impl SieveEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: SieveConfig) -> Result<Self> {
        info!("Initializing wordsieve engine");
        config.validate()?;

        let pipeline = SievePipeline::new(&config.performance)?;
        let reader: Arc<dyn FileBatchReader> =
            Arc::new(BatchedCorpusReader::new(config.performance.read_batch_size));

        Ok(Self {
            pipeline: Arc::new(pipeline),
            reader,
            config: Arc::new(config),
        })
    }

    /// Replace the corpus reader
    pub fn with_reader(mut self, reader: Arc<dyn FileBatchReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Read both corpora from disk, rank, and write the CSV result.
    pub async fn run(&self) -> Result<RunSummary> {
        let unknown_dir = normalize_dir(&self.config.corpus.unknown_words_dir);
        let known_dir = normalize_dir(&self.config.corpus.known_words_dir);

        if self.config.corpus.create_missing_dirs {
            ensure_dir(&unknown_dir).await?;
            ensure_dir(&known_dir).await?;
        }

        let (unknown, known) = tokio::try_join!(
            read_corpus(&unknown_dir, self.reader.as_ref()),
            read_corpus(&known_dir, self.reader.as_ref()),
        )?;

        let pipeline = Arc::clone(&self.pipeline);
        let results = tokio::task::spawn_blocking(move || pipeline.run(&unknown, &known))
            .await
            .map_err(|e| SieveError::internal(format!("Ranking task failed: {e}")))?;

        let resulting_file = self.config.output.resulting_file.clone();
        write_ranking(&resulting_file, &results.ranking)?;

        info!(
            "Ranking complete: {} words written to {}",
            results.statistics.ranked_words,
            resulting_file.display()
        );

        Ok(RunSummary::from_pipeline_results(
            results,
            unknown_dir,
            known_dir,
            resulting_file,
        ))
    }

    /// Rank in-memory corpora without touching the filesystem
    pub fn rank_contents(&self, unknown: &[CorpusFile], known: &[CorpusFile]) -> PipelineResults {
        self.pipeline.run(unknown, known)
    }
}
