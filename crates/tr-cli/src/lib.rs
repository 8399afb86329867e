//! Toggl report converter CLI library.
//!
//! This crate provides the CLI interface around `tr-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
