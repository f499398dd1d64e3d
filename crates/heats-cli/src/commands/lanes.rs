//! Lanes command for showing the center-out seeding order.

use std::io::Write;

use anyhow::Result;

use heats_core::lane_order;

/// Prints the order in which lanes are filled, fastest entrant first.
pub fn run<W: Write>(writer: &mut W, lanes: usize) -> Result<()> {
    if lanes == 0 {
        writeln!(writer, "No lanes.")?;
        return Ok(());
    }

    write!(writer, "Lane order for {lanes} lanes:")?;
    for lane in lane_order(lanes) {
        write!(writer, " {lane}")?;
    }
    writeln!(writer)?;
    Ok(())
}
