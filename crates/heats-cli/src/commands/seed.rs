//! Seed command for generating start lists.
//!
//! This module implements `heats seed`, which reads an event's entries,
//! generates heats and prints the start list as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use heats_core::{Heat, generate_heats};

use crate::Config;
use crate::entries::{EntryRecord, load_entries};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Entries file (JSON array or JSON Lines). Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Lanes per heat (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    pub lanes: Option<i64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &SeedArgs, config: &Config) -> Result<()> {
    let entries = load_entries(args.input.as_deref())?;
    let lanes = config.lanes(args.lanes);
    let heats = generate_heats(&entries, lanes);

    if args.json {
        let json = serde_json::to_string_pretty(&heats).context("failed to encode heats")?;
        writeln!(writer, "{json}")?;
    } else {
        write!(writer, "{}", format_start_list(&heats, lanes))?;
    }

    Ok(())
}

/// Formats heats as a human-readable start list.
pub fn format_start_list(heats: &[Heat<EntryRecord>], lanes: usize) -> String {
    if heats.is_empty() {
        return "No heats.\n".to_string();
    }

    let entrants: usize = heats.iter().map(Heat::len).sum();
    let total = heats.len();
    let mut lines = vec![format!(
        "{}, {}, {}",
        plural(entrants, "entrant"),
        plural(total, "heat"),
        plural(lanes, "lane")
    )];

    for heat in heats {
        lines.push(String::new());
        lines.push(format!("Heat {} of {total}", heat.heat_number));
        for assignment in &heat.assignments {
            let entry = &assignment.entrant;
            let time = entry.seed_time.to_string();
            let row = format!(
                "  Lane {:>2}  {:<24} {:<12} {:>8}",
                assignment.lane,
                entry.name,
                entry.team.as_deref().unwrap_or(""),
                time
            );
            lines.push(row.trim_end().to_string());
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Formats a count with its noun, pluralized.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
