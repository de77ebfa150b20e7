//! Add-student command.

use anyhow::Result;
use gradebook::Student;

use crate::cli_utils;

/// Register a new student and save the roster.
pub fn run(roster_file: &str, name: &str) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    roster.add_student(Student::new(name));
    cli_utils::save_roster(roster_file, &roster)?;

    println!("Added student: {} ({} total)", name, roster.student_count());
    Ok(())
}
