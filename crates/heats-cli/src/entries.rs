//! Entry file loading.
//!
//! Entries arrive either as a JSON array or as JSON Lines, one entry per line.
//! `seed_time` may be integer milliseconds (`0` meaning NT) or a time string
//! such as `"1:02.35"` or `"NT"`. A missing `seed_time` is NT.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use heats_core::{EntrantId, SeedTime, Seeded};

/// An athlete or relay team entered in one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: EntrantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default)]
    pub seed_time: SeedTime,
}

impl Seeded for EntryRecord {
    fn seed_time(&self) -> SeedTime {
        self.seed_time
    }
}

/// Loads entries from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_entries(path: Option<&Path>) -> Result<Vec<EntryRecord>> {
    let mut input = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?
                .read_to_string(&mut input)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read entries from stdin")?;
        }
    }
    parse_entries(&input)
}

/// Parses an entries document.
pub fn parse_entries(input: &str) -> Result<Vec<EntryRecord>> {
    let entries = if input.trim_start().starts_with('[') {
        parse_array(input)?
    } else {
        parse_lines(input)?
    };

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.id.as_str()) {
            bail!("duplicate entrant ID: {}", entry.id);
        }
    }

    tracing::debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}

fn parse_array(input: &str) -> Result<Vec<EntryRecord>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(input).context("invalid JSON array of entries")?;
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let entry: EntryRecord = serde_json::from_value(value)
                .with_context(|| format!("invalid entry at index {idx}"))?;
            validate(entry).with_context(|| format!("invalid entry at index {idx}"))
        })
        .collect()
}

fn parse_lines(input: &str) -> Result<Vec<EntryRecord>> {
    let mut entries = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let entry: EntryRecord = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;
        let entry = validate(entry).with_context(|| format!("invalid entry on line {}", idx + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

fn validate(mut entry: EntryRecord) -> Result<EntryRecord> {
    if entry.name.trim().is_empty() {
        bail!("missing name for {}", entry.id);
    }
    entry.team = entry.team.and_then(|team| {
        let trimmed = team.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    });
    Ok(entry)
}
