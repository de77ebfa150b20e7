use std::fmt;
use std::sync::Arc;

/// A named subject grades are recorded under.
///
/// Identity is the name alone: two disciplines constructed with the
/// same name are equal, which is what lets the importer reuse a
/// registration across lines. The name cannot change after
/// construction; cloning shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discipline {
    name: Arc<str>,
}

impl Discipline {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
