//! Average command.

use anyhow::Result;

use crate::cli_utils;

/// Print a student's average, or the school average when no student is
/// named.
pub fn run(roster_file: &str, student: Option<&str>) -> Result<()> {
    let roster = cli_utils::load_roster_or_empty(roster_file)?;

    match student {
        Some(name) => {
            let Some(record) = roster.find_student(name) else {
                anyhow::bail!("No student named {:?} in the roster", name);
            };
            println!("{:.2}", record.calculate_average());
        }
        None => {
            println!("{:.2}", roster.calculate_school_average());
        }
    }
    Ok(())
}
