//! Command-line surface: `search`, `history` and `stats`

pub mod commands;

pub use commands::{Cli, Commands, run};
