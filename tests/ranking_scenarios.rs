//! End-to-end ranking scenarios through the public library API.

use std::collections::{HashMap, HashSet};

use wordsieve_rs::core::filter::remove_known;
use wordsieve_rs::core::loader::load;
use wordsieve_rs::core::ranking::rank;
use wordsieve_rs::core::tokenizer::tokenize;
use wordsieve_rs::{CorpusFile, FrequencyTable, SieveConfig, SieveEngine};

fn keys(table: &FrequencyTable) -> HashSet<String> {
    table.keys().into_iter().collect()
}

#[test]
fn cat_sat_on_the_mat_scenario() {
    let unknown = load(&[CorpusFile::new("u.txt", "the cat sat on the mat")]);
    let known = load(&[CorpusFile::new("k.txt", "the on")]);

    remove_known(&unknown, &known);
    let ranked = rank(unknown);

    let as_map: HashMap<_, _> = ranked.iter().map(|p| (p.word.as_str(), p.count)).collect();
    assert_eq!(as_map, HashMap::from([("cat", 1), ("sat", 1), ("mat", 1)]));
}

#[test]
fn filter_twice_matches_filter_once() {
    let files = [
        CorpusFile::new("a", "alpha beta gamma delta"),
        CorpusFile::new("b", "beta epsilon"),
    ];
    let once = load(&files);
    let twice = load(&files);
    let known = load(&[CorpusFile::new("k", "beta delta zeta")]);

    remove_known(&once, &known);
    remove_known(&twice, &known);
    remove_known(&twice, &known);

    assert_eq!(keys(&once), keys(&twice));
    assert_eq!(known.len(), 3);
}

#[test]
fn every_counted_word_is_normalized() {
    let table = load(&[
        CorpusFile::new("mixed", "Rust 2021, self-hosted\tCOMPILER\r\n\u{00e9}t\u{00e9}!"),
        CorpusFile::new("blank", "   "),
    ]);

    for word in table.keys() {
        assert!(word.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{word:?}");
    }
    assert_eq!(table.get("self-hosted"), Some(1));
    assert_eq!(table.get("compiler"), Some(1));
    assert_eq!(table.get(""), Some(1));
}

#[test]
fn engine_ranks_in_memory_corpora() {
    let mut config = SieveConfig::default();
    config.performance.max_threads = Some(4);
    let engine = SieveEngine::new(config).unwrap();

    let unknown: Vec<_> = (0..50)
        .map(|i| CorpusFile::new(format!("{i}.txt"), "common rare common"))
        .collect();
    let results = engine.rank_contents(&unknown, &[CorpusFile::new("k", "rare")]);

    assert_eq!(results.ranking.len(), 1);
    assert_eq!(results.ranking[0].word, "common");
    assert_eq!(results.ranking[0].count, 100);
    assert_eq!(results.statistics.removed_words, 1);
}

#[test]
fn tokenizer_examples() {
    assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    assert_eq!(tokenize("a--b\n\nc"), vec!["a--b", "c"]);
}
