//! Remove-student command.

use anyhow::Result;

use crate::cli_utils;

/// Remove the student at a 1-based roster position and save the roster.
pub fn run(roster_file: &str, index: usize) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    let removed = roster.remove_student(cli_utils::to_zero_based(index)?)?;
    cli_utils::save_roster(roster_file, &roster)?;

    println!(
        "Removed student: {} ({} remaining)",
        removed.name(),
        roster.student_count()
    );
    Ok(())
}
