//! CLI Argument Structures
//!
//! Flag names keep the camelCase spelling users already script against
//! (`--resultingFile`, `--unknownWordsDir`, `--knownWordsDir`).

use clap::{ArgAction, Parser};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rank the words of a corpus that are missing from a known-words corpus
#[derive(Parser, Debug)]
#[command(name = "wordsieve")]
#[command(version = VERSION)]
#[command(disable_help_flag = true)]
#[command(about = "Rank unknown words of a text corpus by frequency")]
#[command(long_about = "
Count every word in the files of the unknown-words directory, drop every word
that also appears in the files of the known-words directory, and write the
survivors to a CSV file as `word,count` rows, most frequent first.

Common Usage:

  # Use ./unknownWords/ and ./knownWords/, write result.csv
  wordsieve

  # Custom locations
  wordsieve --unknownWordsDir ./book/ --knownWordsDir ./vocab/ --resultingFile book.csv

  # Load settings from a YAML file, limit the worker pool
  wordsieve --config wordsieve.yml --threads 4
")]
pub struct Cli {
    /// Path to the resulting CSV file [default: result.csv]
    #[arg(long = "resultingFile", value_name = "PATH")]
    pub resulting_file: Option<PathBuf>,

    /// Directory with files containing unknown words [default: ./unknownWords/]
    #[arg(long = "unknownWordsDir", value_name = "DIR")]
    pub unknown_words_dir: Option<PathBuf>,

    /// Directory with files containing known words [default: ./knownWords/]
    #[arg(long = "knownWordsDir", value_name = "DIR")]
    pub known_words_dir: Option<PathBuf>,

    /// YAML configuration file (defaults to .wordsieve.yml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads [default: one per CPU]
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the default configuration in YAML format and exit
    #[arg(long)]
    pub print_default_config: bool,

    /// Show this message
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,
}
