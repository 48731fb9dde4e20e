//! Dashboard fields
//!
//! Maps a role to the labelled values of the record it is allowed to see.

use crate::record::ChildRecord;
use crate::role::Role;
use serde::Serialize;
use std::fmt::Display;

/// A single labelled line on a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Display) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Fields shared by both dashboards.
fn profile_fields(record: &ChildRecord) -> Vec<Field> {
    vec![
        Field::new("Name", record.name),
        Field::new("Age", record.age),
        Field::new("Address", record.address),
        Field::new("Mobile", record.mobile),
        Field::new("Attendance", record.attendance),
        Field::new("Overall Attendance", record.overall_attendance),
    ]
}

/// Returns the fields a dashboard for `role` renders, in display order.
pub fn dashboard_fields(role: Role, record: &ChildRecord) -> Vec<Field> {
    let mut fields = profile_fields(record);
    if role == Role::Parent {
        fields.extend([
            Field::new("Marks", record.marks_summary()),
            Field::new("Total Grade", record.total_grade),
            Field::new("Holidays", record.holidays),
            Field::new("CGPA", record.cgpa),
        ]);
    }
    fields
}
