//! CLI subcommand implementations.

pub mod rows;
pub mod summary;
pub mod util;
