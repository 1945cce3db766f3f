//! Corpus loading: folding many files into one frequency table.

use std::borrow::Cow;

use rayon::prelude::*;
use tracing::{debug, warn};

use super::frequency::FrequencyTable;
use super::tokenizer::tokenize;

/// A file handed over by the corpus reader: its name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    /// File name, used for diagnostics only
    pub name: String,
    /// Undecoded content
    pub content: Vec<u8>,
}

impl CorpusFile {
    /// Create a corpus file from a name and its bytes
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Decode the content as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        let text = String::from_utf8_lossy(&self.content);
        if let Cow::Owned(_) = text {
            warn!(
                "File contained invalid UTF-8, converted with lossy encoding: {}",
                self.name
            );
        }
        text
    }
}

/// Build one frequency table from a set of files.
///
/// Files are processed in parallel on the current rayon pool; every token of
/// every file, empty tokens included, is counted once. Returns only after all
/// files have been folded in.
pub fn load(files: &[CorpusFile]) -> FrequencyTable {
    let table = FrequencyTable::new();
    load_into(&table, files);
    table
}

/// Fold `files` into an existing table.
pub fn load_into(table: &FrequencyTable, files: &[CorpusFile]) {
    files.par_iter().for_each(|file| {
        let tokens = tokenize(&file.text());
        debug!("{}: {} tokens", file.name, tokens.len());
        for token in &tokens {
            table.increment(token);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_counts_across_files() {
        let files = vec![
            CorpusFile::new("a.txt", "the cat sat on the mat"),
            CorpusFile::new("b.txt", "The Cat!"),
        ];

        let table = load(&files);

        assert_eq!(table.get("the"), Some(3));
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("mat"), Some(1));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_load_empty_corpus() {
        let table = load(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_file_contributes_empty_token() {
        let table = load(&[CorpusFile::new("empty.txt", "")]);
        assert_eq!(table.get(""), Some(1));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut bytes = b"good ".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"words");
        let file = CorpusFile::new("broken.bin", bytes);

        let table = load(&[file]);

        assert_eq!(table.get("good"), Some(1));
        assert_eq!(table.get("words"), Some(1));
    }

    #[test]
    fn test_many_files_fold_without_lost_updates() {
        let files: Vec<_> = (0..200)
            .map(|i| CorpusFile::new(format!("{i}.txt"), "alpha beta beta"))
            .collect();

        let table = load(&files);

        assert_eq!(table.get("alpha"), Some(200));
        assert_eq!(table.get("beta"), Some(400));
    }

    #[test]
    fn test_load_into_accumulates() {
        let table = FrequencyTable::new();
        load_into(&table, &[CorpusFile::new("a", "one two")]);
        load_into(&table, &[CorpusFile::new("b", "two")]);

        assert_eq!(table.get("one"), Some(1));
        assert_eq!(table.get("two"), Some(2));
    }
}
