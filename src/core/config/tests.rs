use super::*;
use crate::core::errors::SieveError;
use tempfile::tempdir;

fn expect_error<T: std::fmt::Debug>(result: Result<T>) -> SieveError {
    result.expect_err("expected validation failure")
}

#[test]
fn default_config_validates_successfully() {
    SieveConfig::default().validate().expect("sieve default");
    PerformanceConfig::default()
        .validate()
        .expect("performance default");
}

#[test]
fn defaults_match_command_line_defaults() {
    let config = SieveConfig::default();
    assert_eq!(config.output.resulting_file, PathBuf::from("result.csv"));
    assert_eq!(
        config.corpus.unknown_words_dir,
        PathBuf::from("./unknownWords/")
    );
    assert_eq!(config.corpus.known_words_dir, PathBuf::from("./knownWords/"));
    assert!(config.corpus.create_missing_dirs);
    assert_eq!(config.performance.max_threads, None);
}

#[test]
fn performance_config_rejects_zero_limits() {
    let mut config = PerformanceConfig::default();
    config.max_threads = Some(0);
    let err = expect_error(config.validate());
    assert!(matches!(err, SieveError::Validation { .. }));
    assert!(format!("{err}").contains("max_threads"));

    let mut config = PerformanceConfig::default();
    config.read_batch_size = 0;
    let err = expect_error(config.validate());
    assert!(format!("{err}").contains("read_batch_size"));
}

#[test]
fn empty_paths_are_rejected() {
    let mut config = SieveConfig::default();
    config.corpus.known_words_dir = PathBuf::new();
    let err = expect_error(config.validate());
    assert!(matches!(err, SieveError::Config { .. }));

    let mut config = SieveConfig::default();
    config.output.resulting_file = PathBuf::new();
    let err = expect_error(config.validate());
    assert!(format!("{err}").contains("resulting_file"));
}

#[test]
fn partial_yaml_fills_defaults() {
    let config: SieveConfig = serde_yaml::from_str(
        r#"
performance:
  max_threads: 2
"#,
    )
    .unwrap();

    assert_eq!(config.performance.max_threads, Some(2));
    assert_eq!(config.performance.read_batch_size, 200);
    assert_eq!(config.output, OutputConfig::default());
    assert_eq!(config.corpus, CorpusConfig::default());
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordsieve.yml");

    let mut config = SieveConfig::default();
    config.output.resulting_file = PathBuf::from("out/ranking.csv");
    config.corpus.create_missing_dirs = false;
    config.to_yaml_file(&path).unwrap();

    let loaded = SieveConfig::from_yaml_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = expect_error(SieveConfig::from_yaml_file(dir.path().join("absent.yml")));
    assert!(matches!(err, SieveError::Io { .. }));
}
