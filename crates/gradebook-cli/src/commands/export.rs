//! Export command.

use anyhow::Result;
use gradebook::{StudentOrder, render_roster, render_roster_json};

use crate::cli::ExportFormat;
use crate::cli_utils;

/// Render the roster and write it to a file or stdout.
pub fn run(
    roster_file: &str,
    output: Option<&str>,
    format: ExportFormat,
    order: StudentOrder,
) -> Result<()> {
    let roster = cli_utils::load_roster_or_empty(roster_file)?;

    let content = match format {
        ExportFormat::Text => render_roster(&roster, order),
        ExportFormat::Json => render_roster_json(&roster, order)?,
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!(
            "Exported {} students to: {}",
            roster.student_count(),
            output_path
        );
    } else {
        // Text renders with a trailing newline, JSON without one.
        if content.ends_with('\n') {
            print!("{}", content);
        } else {
            println!("{}", content);
        }
    }
    Ok(())
}
