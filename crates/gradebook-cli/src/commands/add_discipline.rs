//! Add-discipline command.

use anyhow::Result;
use gradebook::Discipline;

use crate::cli_utils;

/// Register a new discipline and save the roster.
///
/// Appends without a duplicate check; only the import path dedups
/// disciplines.
pub fn run(roster_file: &str, name: &str) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    roster.add_discipline(Discipline::new(name));
    cli_utils::save_roster(roster_file, &roster)?;

    println!(
        "Added discipline: {} ({} total)",
        name,
        roster.discipline_count()
    );
    Ok(())
}
