//! Roster data model: disciplines, students, and their averages.

mod discipline;
mod order;
mod student;

pub use discipline::Discipline;
pub use order::StudentOrder;
pub use student::Student;

use tracing::debug;

use crate::error::{Error, Result};

/// The aggregate holding every student and registered discipline.
///
/// Both collections keep the order entries were added. Students are
/// never deduplicated (two "Ana"s are two records); disciplines are
/// deduplicated only on the import path, through [`Roster::ensure_discipline`].
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    disciplines: Vec<Discipline>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        debug!("Adding student: {}", student.name());
        self.students.push(student);
    }

    pub fn add_discipline(&mut self, discipline: Discipline) {
        debug!("Adding discipline: {}", discipline);
        self.disciplines.push(discipline);
    }

    /// Reuse the registered discipline equal to `name`, or register a
    /// new one. Every grade line the importer reads resolves through
    /// this, so a name repeated across lines maps to one registration.
    pub fn ensure_discipline(&mut self, name: &str) -> Discipline {
        if let Some(existing) = self.disciplines.iter().find(|d| d.name() == name) {
            return existing.clone();
        }
        let discipline = Discipline::new(name);
        self.add_discipline(discipline.clone());
        discipline
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn discipline_count(&self) -> usize {
        self.disciplines.len()
    }

    /// First student with the given name. Names may collide; later
    /// records with the same name are only reachable by index.
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    pub fn find_student_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.name() == name)
    }

    pub fn student_mut(&mut self, index: usize) -> Option<&mut Student> {
        self.students.get_mut(index)
    }

    /// Remove and return the student at `index` (0-based). The roster
    /// is untouched when the index is out of range. Registered
    /// disciplines are kept even if no other student references them.
    pub fn remove_student(&mut self, index: usize) -> Result<Student> {
        if index >= self.students.len() {
            return Err(Error::IndexOutOfRange {
                kind: "student",
                index,
                len: self.students.len(),
            });
        }
        let student = self.students.remove(index);
        debug!("Removed student: {}", student.name());
        Ok(student)
    }

    /// Remove and return the discipline at `index` (0-based), dropping
    /// its grade history from every student (matched by name equality,
    /// not position). The roster is untouched when the index is out of
    /// range.
    pub fn remove_discipline(&mut self, index: usize) -> Result<Discipline> {
        if index >= self.disciplines.len() {
            return Err(Error::IndexOutOfRange {
                kind: "discipline",
                index,
                len: self.disciplines.len(),
            });
        }
        let discipline = self.disciplines.remove(index);
        for student in &mut self.students {
            student.remove_discipline(&discipline);
        }
        debug!("Removed discipline: {}", discipline);
        Ok(discipline)
    }

    /// Mean of each student's own average, not a pooled mean of all
    /// grades: a student with one grade weighs as much as one with
    /// twenty. An empty roster averages 0.
    pub fn calculate_school_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.students.iter().map(Student::calculate_average).sum();
        sum / self.students.len() as f64
    }
}
