//! Computer club simulator CLI library.
//!
//! This crate provides the command-line interface around `club-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
