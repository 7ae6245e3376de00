use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// RosterError – structured parse failures
// ---------------------------------------------------------------------------

/// Errors raised while parsing a roster flat-file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: u64, found: usize },
}

// ---------------------------------------------------------------------------
// Cohort – a semester label or the ghost/instructor sentinel
// ---------------------------------------------------------------------------

/// A person's cohort: a semester label like "Fall 2015", or one of the two
/// sentinels the data file uses for people who aren't enrolled students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cohort {
    /// Enrolled student in the named semester.
    Term(String),
    /// The `G` sentinel.
    Ghost,
    /// The `I` sentinel.
    Instructor,
}

impl Cohort {
    /// Interpret the raw cohort field from a roster line.
    pub fn parse(label: &str) -> Self {
        match label {
            "G" => Cohort::Ghost,
            "I" => Cohort::Instructor,
            term => Cohort::Term(term.to_string()),
        }
    }

    /// The text label as it appears in the file.
    pub fn label(&self) -> &str {
        match self {
            Cohort::Term(term) => term,
            Cohort::Ghost => "G",
            Cohort::Instructor => "I",
        }
    }

    /// Whether this cohort denotes an enrolled student.
    pub fn is_student(&self) -> bool {
        matches!(self, Cohort::Term(_))
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the file label so JSON output round-trips with the data file.
impl Serialize for Cohort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one line of the roster file
// ---------------------------------------------------------------------------

/// A single parsed roster line.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Empty when the person has no house (typically ghosts and instructors).
    pub house: String,
    pub head_of_house: String,
    pub cohort: Cohort,
}

impl Record {
    /// "first last" – the lookup key used throughout. Not guaranteed unique
    /// in the data; lookups take the last match.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// CohortDataset – the complete parsed roster
// ---------------------------------------------------------------------------

/// All records from one roster file, in file order. Parsed once; every query
/// is a read-only scan over this list.
#[derive(Debug, Clone, Default)]
pub struct CohortDataset {
    pub records: Vec<Record>,
}

impl CohortDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        CohortDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_label_round_trips() {
        for label in ["Fall 2015", "Winter 2016", "G", "I"] {
            assert_eq!(Cohort::parse(label).label(), label);
        }
    }

    #[test]
    fn sentinels_are_not_students() {
        assert!(Cohort::parse("Spring 2016").is_student());
        assert!(!Cohort::Ghost.is_student());
        assert!(!Cohort::Instructor.is_student());
    }

    #[test]
    fn full_name_joins_with_a_space() {
        let record = Record {
            first_name: "Harry".into(),
            last_name: "Potter".into(),
            house: "Gryffindor".into(),
            head_of_house: "McGonagall".into(),
            cohort: Cohort::parse("Fall 2015"),
        };
        assert_eq!(record.full_name(), "Harry Potter");
    }
}
