//! # wordsieve-rs: Concurrent Word-Frequency Ranking
//!
//! Ranks the words of a text corpus by how often they occur, after removing
//! every word that also appears in a second "known words" corpus. The result
//! is a `word,count` CSV table, most frequent first.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     API Layer (SieveEngine)                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Core                              │  I/O                    │
//! │ • Tokenizer                        │ • Corpus dirs & reads   │
//! │ • FrequencyTable (DashMap)         │ • CSV export            │
//! │ • Loader / Filter / Ranker (rayon) │                         │
//! │ • Pipeline & Config                │                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordsieve_rs::{SieveConfig, SieveEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = SieveEngine::new(SieveConfig::default())?;
//!     let summary = engine.run().await?;
//!
//!     println!("{} words ranked", summary.ranking.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Memory allocator selection (mutually exclusive)
#[cfg(all(feature = "mimalloc", not(feature = "jemalloc")))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(all(feature = "jemalloc", not(feature = "mimalloc")))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

// Core ranking algorithms and data structures
pub mod core {
    //! Tokenization, frequency counting, filtering and ranking.

    pub mod config;
    pub mod errors;
    pub mod filter;
    pub mod frequency;
    pub mod loader;
    pub mod pipeline;
    pub mod ranking;
    pub mod tokenizer;
}

// Corpus reading and result writing
pub mod io {
    //! Corpus directory I/O and CSV export.

    pub mod corpus;
    pub mod csv_export;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::SieveEngine;
pub use api::results::RunSummary;
pub use core::config::SieveConfig;
pub use core::errors::{Result, ResultExt, SieveError};
pub use core::frequency::FrequencyTable;
pub use core::loader::CorpusFile;
pub use core::ranking::RankedPair;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
