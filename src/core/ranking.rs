//! Frequency ranking.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;

/// A word and its occurrence count in the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedPair {
    /// The normalized word
    pub word: String,
    /// Number of occurrences across the corpus
    pub count: u64,
}

impl RankedPair {
    /// Create a ranked pair
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, u64)> for RankedPair {
    fn from((word, count): (String, u64)) -> Self {
        Self { word, count }
    }
}

/// Collect every entry of `table`, most frequent first.
///
/// Words with equal counts come out in no particular order.
pub fn rank(table: FrequencyTable) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = table
        .into_entries()
        .into_iter()
        .map(RankedPair::from)
        .collect();
    pairs.sort_unstable_by(|a, b| b.count.cmp(&a.count));
    pairs
}
