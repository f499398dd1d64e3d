//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::seed::SeedArgs;

/// Swim meet start list generator.
///
/// Places entrants into heats by seed time and seeds lanes center-out,
/// fastest swimmer in the middle lane.
#[derive(Debug, Parser)]
#[command(name = "heats", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate heats and lane assignments from an entries file.
    Seed(SeedArgs),

    /// Show the center-out lane order.
    Lanes {
        /// Lanes per heat (overrides config).
        #[arg(long, allow_negative_numbers = true)]
        lanes: Option<i64>,
    },

    /// Show the heat sizes for a number of entrants.
    Sizes {
        /// Number of entrants in the event.
        entrants: usize,

        /// Lanes per heat (overrides config).
        #[arg(long, allow_negative_numbers = true)]
        lanes: Option<i64>,
    },
}
