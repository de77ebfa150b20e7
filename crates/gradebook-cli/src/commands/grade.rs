//! Grade command.

use anyhow::Result;
use gradebook::format_student_console;

use crate::cli_utils;

/// Record a grade for a student in a discipline and save the roster.
pub fn run(roster_file: &str, student: &str, discipline: &str, grade: i32) -> Result<()> {
    let mut roster = cli_utils::load_roster_or_empty(roster_file)?;

    let discipline = roster.ensure_discipline(discipline);
    let Some(record) = roster.find_student_mut(student) else {
        anyhow::bail!("No student named {:?} in the roster", student);
    };
    record.add_grade(&discipline, grade);
    let block = format_student_console(record);

    cli_utils::save_roster(roster_file, &roster)?;
    println!("{}", block);
    Ok(())
}
