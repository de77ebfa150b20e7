use crate::roster::Discipline;

/// A learner and their grade history, keyed by discipline.
///
/// Disciplines appear in the order the first grade for each was
/// recorded; grades within a discipline keep assignment order. Both
/// orders survive the export/import round-trip. Lookups scan linearly,
/// which is fine at per-student discipline counts.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    grades: Vec<(Discipline, Vec<i32>)>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a grade to the sequence for `discipline`, starting the
    /// sequence on first use. Any integer is accepted; the data model
    /// imposes no range.
    pub fn add_grade(&mut self, discipline: &Discipline, grade: i32) {
        match self.grades.iter_mut().find(|(d, _)| d == discipline) {
            Some((_, grades)) => grades.push(grade),
            None => self.grades.push((discipline.clone(), vec![grade])),
        }
    }

    /// Grade sequences in first-recorded discipline order.
    pub fn grades(&self) -> &[(Discipline, Vec<i32>)] {
        &self.grades
    }

    pub fn grades_for(&self, discipline: &Discipline) -> Option<&[i32]> {
        self.grades
            .iter()
            .find(|(d, _)| d == discipline)
            .map(|(_, grades)| grades.as_slice())
    }

    /// Total number of recorded grades across all disciplines.
    pub fn grade_count(&self) -> usize {
        self.grades.iter().map(|(_, grades)| grades.len()).sum()
    }

    /// Mean of every grade across every discipline, flattened.
    ///
    /// Formula: sum(all grades) / count(all grades). A student with no
    /// grades averages 0 (defined, not an error).
    pub fn calculate_average(&self) -> f64 {
        let count = self.grade_count();
        if count == 0 {
            return 0.0;
        }
        let sum: i64 = self
            .grades
            .iter()
            .flat_map(|(_, grades)| grades)
            .map(|&g| i64::from(g))
            .sum();
        sum as f64 / count as f64
    }

    /// Drop the grade history for `discipline`, keeping the order of
    /// the remaining entries. Roster-driven as part of discipline
    /// removal.
    pub(crate) fn remove_discipline(&mut self, discipline: &Discipline) {
        self.grades.retain(|(d, _)| d != discipline);
    }
}
