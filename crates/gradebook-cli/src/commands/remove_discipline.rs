//! Remove-discipline command.

use anyhow::Result;

use crate::cli_utils;

/// Remove the discipline at a 1-based position, dropping its grades from
/// every student, and save the roster.
pub fn run(roster_file: &str, index: usize) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    let removed = roster.remove_discipline(cli_utils::to_zero_based(index)?)?;
    cli_utils::save_roster(roster_file, &roster)?;

    println!(
        "Removed discipline: {} (grades dropped from every student)",
        removed.name()
    );
    Ok(())
}
