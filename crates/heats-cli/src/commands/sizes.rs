//! Sizes command for previewing how many entrants swim in each heat.

use std::io::Write;

use anyhow::Result;

use heats_core::heat_sizes;

use super::seed::plural;

/// Prints the heat sizes for `entrants` entrants in `lanes` lanes.
pub fn run<W: Write>(writer: &mut W, entrants: usize, lanes: usize) -> Result<()> {
    let sizes = heat_sizes(entrants, lanes);
    if sizes.is_empty() {
        writeln!(writer, "No heats.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} in {}: {}",
        plural(entrants, "entrant"),
        plural(lanes, "lane"),
        plural(sizes.len(), "heat")
    )?;
    for (idx, size) in sizes.iter().enumerate() {
        writeln!(writer, "Heat {}: {size}", idx + 1)?;
    }
    Ok(())
}
