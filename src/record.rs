//! Child Record
//!
//! The fixed sample profile shown by every dashboard.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// An attendance percentage, rendered as `NN%`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Percent(pub u8);

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A number of holiday days, rendered as `N Days`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Days(pub u16);

impl Display for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Days", self.0)
    }
}

/// Score for a single subject.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectMark {
    pub subject: &'static str,
    pub score: u32,
}

/// A student's profile and grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildRecord {
    pub name: &'static str,
    pub age: u8,
    pub address: &'static str,
    pub mobile: &'static str,
    pub attendance: Percent,
    pub overall_attendance: Percent,
    /// Marks per subject, in report-card order.
    pub marks: &'static [SubjectMark],
    pub total_grade: &'static str,
    pub holidays: Days,
    pub cgpa: f32,
}

/// The only record the application knows about.
pub const SAMPLE_RECORD: ChildRecord = ChildRecord {
    name: "John Doe",
    age: 15,
    address: "123 Street, City",
    mobile: "9876543210",
    attendance: Percent(90),
    overall_attendance: Percent(85),
    marks: &[
        SubjectMark {
            subject: "Math",
            score: 95,
        },
        SubjectMark {
            subject: "Science",
            score: 89,
        },
        SubjectMark {
            subject: "English",
            score: 92,
        },
    ],
    total_grade: "A",
    holidays: Days(10),
    cgpa: 8.9,
};

impl ChildRecord {
    /// Returns the process-wide sample record.
    pub fn sample() -> &'static ChildRecord {
        &SAMPLE_RECORD
    }

    /// Formats the marks as `Subject: score` pairs separated by commas.
    pub fn marks_summary(&self) -> String {
        self.marks
            .iter()
            .map(|mark| format!("{}: {}", mark.subject, mark.score))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
