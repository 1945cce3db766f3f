//! CLI Module Organization
//!
//! - args: CLI argument structure
//! - commands: command execution
//! - config_layer: configuration layer management and merging
//! - output: terminal summary

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

pub use args::*;
pub use commands::*;
