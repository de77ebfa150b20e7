use std::cmp::Ordering;

use serde::Deserialize;
use strum::IntoStaticStr;

use crate::roster::Student;

/// Ordering applied to students at export time.
///
/// Export callers pick the order; the roster itself always keeps
/// insertion order. `Name` is the default for the `export` command,
/// while the CLI saves the roster file with `Insertion` so displayed
/// indices stay stable between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StudentOrder {
    /// Ascending by student name.
    #[default]
    Name,
    /// Roster order (the order students were added).
    Insertion,
    /// Descending by personal average, ties broken by name.
    Average,
}

impl StudentOrder {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Comparator form of the ordering. `Insertion` compares every
    /// pair equal, which leaves a stable sort untouched.
    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            StudentOrder::Name => a.name().cmp(b.name()),
            StudentOrder::Insertion => Ordering::Equal,
            StudentOrder::Average => b
                .calculate_average()
                .total_cmp(&a.calculate_average())
                .then_with(|| a.name().cmp(b.name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Discipline;

    fn student_with_average(name: &str, grade: i32) -> Student {
        let mut student = Student::new(name);
        student.add_grade(&Discipline::new("Math"), grade);
        student
    }

    #[test]
    fn test_name_order_is_ascending() {
        let ana = Student::new("Ana");
        let bob = Student::new("Bob");

        assert_eq!(StudentOrder::Name.compare(&ana, &bob), Ordering::Less);
        assert_eq!(StudentOrder::Name.compare(&bob, &ana), Ordering::Greater);
        assert_eq!(StudentOrder::Name.compare(&ana, &ana), Ordering::Equal);
    }

    #[test]
    fn test_insertion_order_compares_equal() {
        let ana = Student::new("Ana");
        let bob = Student::new("Bob");

        assert_eq!(StudentOrder::Insertion.compare(&bob, &ana), Ordering::Equal);
    }

    #[test]
    fn test_average_order_is_descending() {
        let low = student_with_average("Low", 4);
        let high = student_with_average("High", 9);

        assert_eq!(StudentOrder::Average.compare(&high, &low), Ordering::Less);
        assert_eq!(StudentOrder::Average.compare(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_average_order_ties_break_by_name() {
        let ana = student_with_average("Ana", 7);
        let bob = student_with_average("Bob", 7);

        assert_eq!(StudentOrder::Average.compare(&ana, &bob), Ordering::Less);
    }

    #[test]
    fn test_default_is_name() {
        assert_eq!(StudentOrder::default(), StudentOrder::Name);
    }

    #[test]
    fn test_static_names_are_lowercase() {
        assert_eq!(StudentOrder::Name.as_str(), "name");
        assert_eq!(StudentOrder::Insertion.as_str(), "insertion");
        assert_eq!(StudentOrder::Average.as_str(), "average");
    }
}
