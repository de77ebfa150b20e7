//! Import command.

use anyhow::Result;
use gradebook::{format_roster_summary, load_roster_into};

use crate::cli_utils;

/// Merge student records from a text file into the roster and save it.
pub fn run(roster_file: &str, input: &str) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    let students_before = roster.student_count();
    load_roster_into(&mut roster, input)?;
    cli_utils::save_roster(roster_file, &roster)?;

    println!(
        "Imported {} students from: {}",
        roster.student_count() - students_before,
        input
    );
    println!("{}", format_roster_summary(&roster));
    Ok(())
}
