//! Show command.

use anyhow::Result;
use gradebook::format_roster_console;

use crate::cli_utils;

/// Print the full roster report to the console.
pub fn run(roster_file: &str) -> Result<()> {
    let roster = cli_utils::load_roster_or_empty(roster_file)?;
    println!("{}", format_roster_console(&roster));
    Ok(())
}
