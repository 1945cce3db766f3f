//! Corpus directory handling and file reading.
//!
//! Everything here is fail-fast: the first directory or file that cannot be
//! read aborts the whole operation, so the pipeline never ranks a partial
//! corpus.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use async_trait::async_trait;
use futures::future;
use tracing::{debug, info};

use crate::core::errors::{Result, ResultExt, SieveError};
use crate::core::loader::CorpusFile;

/// Make sure `dir` ends with the platform path separator.
pub fn normalize_dir(dir: &Path) -> PathBuf {
    let raw = dir.as_os_str().to_string_lossy();
    if raw.is_empty() || raw.ends_with(MAIN_SEPARATOR) || raw.ends_with('/') {
        return dir.to_path_buf();
    }
    PathBuf::from(format!("{raw}{MAIN_SEPARATOR}"))
}

/// Create `dir` (and any missing parents) if it does not exist yet.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(SieveError::config_field(
            format!("{} exists but is not a directory", dir.display()),
            dir.display().to_string(),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("Creating missing corpus directory {}", dir.display());
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create directory {}", dir.display()))
        }
        Err(e) => Err(SieveError::io(
            format!("Failed to inspect directory {}", dir.display()),
            e,
        )),
    }
}

/// List the regular files directly inside `dir`, sorted by path.
///
/// Subdirectories are skipped; the corpus is not walked recursively.
pub async fn list_corpus_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let listing = || format!("Failed to list directory {}", dir.display());
    let mut entries = tokio::fs::read_dir(dir).await.with_context(listing)?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.with_context(listing)? {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            debug!("Skipping subdirectory {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Service responsible for turning file paths into corpus files.
#[async_trait]
pub trait FileBatchReader: Send + Sync {
    /// Read every file; the first failure aborts the whole read.
    async fn read_files(&self, files: &[PathBuf]) -> Result<Vec<CorpusFile>>;
}

/// Reads files concurrently in fixed-size batches using Tokio I/O.
#[derive(Debug, Default)]
pub struct BatchedCorpusReader {
    batch_size: usize,
}

impl BatchedCorpusReader {
    /// Create a reader that keeps at most `batch_size` reads in flight
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

#[async_trait]
impl FileBatchReader for BatchedCorpusReader {
    async fn read_files(&self, files: &[PathBuf]) -> Result<Vec<CorpusFile>> {
        let mut corpus = Vec::with_capacity(files.len());
        for batch in files.chunks(self.effective_batch_size()) {
            let reads = batch.iter().map(|path| async move {
                let content = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read file {}", path.display()))?;
                Ok::<_, SieveError>(CorpusFile::new(file_name(path), content))
            });

            for result in future::join_all(reads).await {
                corpus.push(result?);
            }
        }

        debug!("Read {} corpus files", corpus.len());
        Ok(corpus)
    }
}

/// Read a whole corpus directory with the given reader.
pub async fn read_corpus(dir: &Path, reader: &dyn FileBatchReader) -> Result<Vec<CorpusFile>> {
    let files = list_corpus_files(dir).await?;
    info!("Reading {} files from {}", files.len(), dir.display());
    reader.read_files(&files).await
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_dir_appends_separator_once() {
        let normalized = normalize_dir(Path::new("corpus"));
        assert!(normalized.to_string_lossy().ends_with(MAIN_SEPARATOR));

        let again = normalize_dir(&normalized);
        assert_eq!(again, normalized);

        assert_eq!(
            normalize_dir(Path::new("./knownWords/")),
            PathBuf::from("./knownWords/")
        );
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("unknownWords");

        ensure_dir(&target).await.unwrap();
        assert!(target.is_dir());

        ensure_dir(&target).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_dir_rejects_regular_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not_a_dir");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file).await.unwrap_err();
        assert!(matches!(err, SieveError::Config { .. }));
    }

    #[tokio::test]
    async fn test_list_skips_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let files = list_corpus_files(temp.path()).await.unwrap();
        let names: Vec<_> = files.iter().map(|p| file_name(p)).collect();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = list_corpus_files(&temp.path().join("absent"))
            .await
            .unwrap_err();
        assert!(matches!(err, SieveError::Io { .. }));
    }

    #[tokio::test]
    async fn test_batched_reader_reads_all_files() {
        let temp = TempDir::new().unwrap();
        for i in 0..7 {
            fs::write(temp.path().join(format!("{i}.txt")), format!("word{i}")).unwrap();
        }

        let reader = BatchedCorpusReader::new(3);
        let corpus = read_corpus(temp.path(), &reader).await.unwrap();

        assert_eq!(corpus.len(), 7);
        assert!(corpus
            .iter()
            .any(|f| f.name == "3.txt" && f.content == b"word3".to_vec()));
    }

    #[tokio::test]
    async fn test_batched_reader_fails_fast_on_missing_file() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("present.txt");
        fs::write(&present, "hello").unwrap();

        let reader = BatchedCorpusReader::new(0);
        let err = reader
            .read_files(&[present, temp.path().join("missing.txt")])
            .await
            .unwrap_err();

        assert!(matches!(err, SieveError::Io { .. }));
        let message = err.to_string();
        assert!(message.contains("Failed to read file"), "{message}");
        assert!(message.contains("missing.txt"), "{message}");
    }
}
