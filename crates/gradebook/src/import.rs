//! Lenient line-oriented importer for roster text.
//!
//! The importer runs a two-state machine over input lines: outside a
//! student only `Student: ` headers do anything; under a student,
//! two-space-indented lines record grades. Nothing here is fatal:
//! unknown lines are ignored and malformed grade tokens are dropped
//! one by one, so a damaged file yields whatever records survive.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::roster::{Roster, Student};

/// Prefix of a student header line.
const STUDENT_PREFIX: &str = "Student: ";
/// Prefix of a grade line.
const GRADE_INDENT: &str = "  ";

/// Parse `content` into a fresh roster.
pub fn parse_roster(content: &str) -> Roster {
    let mut roster = Roster::new();
    merge_roster(&mut roster, content);
    roster
}

/// Parse `content` into an existing roster.
///
/// Parsed students are appended, never merged with same-named students
/// already present. Disciplines are resolved by name and reuse
/// existing registrations.
pub fn merge_roster(roster: &mut Roster, content: &str) {
    let students_before = roster.student_count();
    let mut current: Option<usize> = None;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(STUDENT_PREFIX) {
            roster.add_student(Student::new(rest.trim()));
            current = Some(roster.student_count() - 1);
        } else if line.starts_with(GRADE_INDENT) {
            match current {
                Some(index) => parse_grade_line(roster, index, line),
                None => debug!("Skipping grade line before any student header: {:?}", line),
            }
        } else if !line.trim().is_empty() {
            debug!("Ignoring unrecognized line: {:?}", line);
        }
    }

    debug!(
        "Imported {} students ({} disciplines registered)",
        roster.student_count() - students_before,
        roster.discipline_count()
    );
}

/// Record one `  <discipline>: [grades]` line against the student at
/// `student_index`. The discipline is registered even when every
/// token is malformed; only parseable tokens become grades.
fn parse_grade_line(roster: &mut Roster, student_index: usize, line: &str) {
    let Some((name, body)) = line.trim().split_once(": ") else {
        debug!("Ignoring grade line without separator: {:?}", line);
        return;
    };
    let discipline = roster.ensure_discipline(name.trim());

    let body = body.replace(['[', ']'], "");
    for token in body.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i32>() {
            Ok(grade) => {
                if let Some(student) = roster.student_mut(student_index) {
                    student.add_grade(&discipline, grade);
                }
            }
            Err(_) => debug!("Dropping malformed grade token {:?}", token),
        }
    }
}

/// Load a roster from a text file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let content = fs::read_to_string(path)?;
    Ok(parse_roster(&content))
}

/// Merge a text file's records into an existing roster.
pub fn load_roster_into<P: AsRef<Path>>(roster: &mut Roster, path: P) -> Result<()> {
    let content = fs::read_to_string(path)?;
    merge_roster(roster, &content);
    Ok(())
}
