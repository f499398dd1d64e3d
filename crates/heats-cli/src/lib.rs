//! Start list CLI library.
//!
//! This crate provides the CLI interface for heat generation.

mod cli;
pub mod commands;
mod config;
pub mod entries;

pub use cli::{Cli, Commands};
pub use config::Config;
