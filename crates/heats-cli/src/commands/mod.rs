//! CLI subcommand implementations.

pub mod lanes;
pub mod seed;
pub mod sizes;
