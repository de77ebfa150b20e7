//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::roster::{Roster, Student};

use super::format_grade_list;

const REPORT_WIDTH: usize = 50;

/// Format the whole roster for console display with colored output.
///
/// Students and disciplines carry 1-based indices, the same indices
/// the remove commands accept. Ends with the school average.
pub fn format_roster_console(roster: &Roster) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(REPORT_WIDTH);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  Roster: {} students, {} disciplines",
        roster.student_count(),
        roster.discipline_count()
    );
    let _ = writeln!(output, "{}", border_dim);

    if roster.students().is_empty() {
        let _ = writeln!(output, "  (no students yet)");
    }
    for (i, student) in roster.students().iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:2}. {}  ({})",
            i + 1,
            student.name().bold(),
            format_average_label(student)
        );
        for (discipline, grades) in student.grades() {
            let _ = writeln!(
                output,
                "        {}: {}",
                discipline.name(),
                format_grade_list(grades)
            );
        }
    }

    if !roster.disciplines().is_empty() {
        let _ = writeln!(output, "{}", border_dim);
        let _ = writeln!(output, "  Disciplines:");
        for (i, discipline) in roster.disciplines().iter().enumerate() {
            let _ = writeln!(output, "  {:2}. {}", i + 1, discipline.name());
        }
    }

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  School average: {}",
        format_colored_average(roster.calculate_school_average())
    );
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format one student's record as a boxed block.
pub fn format_student_console(student: &Student) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(REPORT_WIDTH);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  ({})",
        student.name().bold(),
        format_average_label(student)
    );
    let _ = writeln!(output, "{}", border_dim);

    if student.grades().is_empty() {
        let _ = writeln!(output, "  (no grades yet)");
    }
    let width = student
        .grades()
        .iter()
        .map(|(d, _)| d.name().len())
        .max()
        .unwrap_or(0);
    for (discipline, grades) in student.grades() {
        let _ = writeln!(
            output,
            "  {:<width$} : {}",
            discipline.name(),
            format_grade_list(grades)
        );
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Simple roster summary for logging
pub fn format_roster_summary(roster: &Roster) -> String {
    format!(
        "{} students, {} disciplines, school average {:.2}",
        roster.student_count(),
        roster.discipline_count(),
        roster.calculate_school_average()
    )
}

/// Average label for a student, dimmed when nothing is recorded yet.
fn format_average_label(student: &Student) -> String {
    if student.grade_count() == 0 {
        "no grades".dimmed().to_string()
    } else {
        format!("avg {}", format_colored_average(student.calculate_average()))
    }
}

/// Format an average with color
fn format_colored_average(average: f64) -> String {
    let text = format!("{:.2}", average);
    if average >= 9.0 {
        // gold
        text.truecolor(255, 200, 0).bold().to_string()
    } else if average >= 7.0 {
        text.green().to_string()
    } else if average >= 5.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
