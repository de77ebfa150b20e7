//! Export formats for roster data.

mod console;

pub use console::{format_roster_console, format_roster_summary, format_student_console};

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::roster::{Roster, Student, StudentOrder};

/// Render the roster in the line-oriented text format.
///
/// One `Student: <name>` header per student in the requested order,
/// then one `  <discipline>: [g1, g2]` line per discipline the student
/// has grades for, in recording order. Every line is newline-terminated,
/// and the output round-trips through the importer byte for byte.
pub fn render_roster(roster: &Roster, order: StudentOrder) -> String {
    render_roster_with(roster, |a, b| order.compare(a, b))
}

/// Render with an arbitrary student comparator. The sort is stable, so
/// a comparator that reports every pair equal keeps roster order.
pub fn render_roster_with(
    roster: &Roster,
    mut compare: impl FnMut(&Student, &Student) -> Ordering,
) -> String {
    let mut students: Vec<&Student> = roster.students().iter().collect();
    students.sort_by(|a, b| compare(a, b));

    let mut output = String::new();
    for student in students {
        let _ = writeln!(output, "Student: {}", student.name());
        for (discipline, grades) in student.grades() {
            let _ = writeln!(output, "  {}: {}", discipline.name(), format_grade_list(grades));
        }
    }
    output
}

/// Grade sequence rendered as `[9, 8]`; an empty sequence renders `[]`.
pub fn format_grade_list(grades: &[i32]) -> String {
    let body = grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

/// Write the text rendering to `path` in a single write.
pub fn export_roster<P: AsRef<Path>>(path: P, roster: &Roster, order: StudentOrder) -> Result<()> {
    let content = render_roster(roster, order);
    debug!(
        "Writing {} students ({} bytes) sorted by {}",
        roster.student_count(),
        content.len(),
        order.as_str()
    );
    fs::write(path, content)?;
    Ok(())
}

/// Discipline entry for JSON export
#[derive(Debug, Serialize)]
pub struct DisciplineJson {
    pub name: String,
    pub grades: Vec<i32>,
}

/// Student entry for JSON export
#[derive(Debug, Serialize)]
pub struct StudentJson {
    pub name: String,
    pub average: f64,
    pub disciplines: Vec<DisciplineJson>,
}

/// Top-level JSON export document
#[derive(Debug, Serialize)]
pub struct RosterJson {
    pub school_average: f64,
    pub students: Vec<StudentJson>,
}

/// Generate the JSON export document (for stdout output).
///
/// Carries the same state as the text format plus the computed
/// averages. Export-only: the importer reads the text format.
pub fn render_roster_json(roster: &Roster, order: StudentOrder) -> Result<String> {
    let mut students: Vec<&Student> = roster.students().iter().collect();
    students.sort_by(|a, b| order.compare(a, b));

    let students = students
        .into_iter()
        .map(|student| StudentJson {
            name: student.name().to_string(),
            average: student.calculate_average(),
            disciplines: student
                .grades()
                .iter()
                .map(|(discipline, grades)| DisciplineJson {
                    name: discipline.name().to_string(),
                    grades: grades.clone(),
                })
                .collect(),
        })
        .collect();

    let document = RosterJson {
        school_average: roster.calculate_school_average(),
        students,
    };
    let json = serde_json::to_string_pretty(&document)?;
    Ok(json)
}

/// Write the JSON export document to `path`.
pub fn export_roster_json<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    order: StudentOrder,
) -> Result<()> {
    let content = render_roster_json(roster, order)?;
    fs::write(path, content)?;
    Ok(())
}
