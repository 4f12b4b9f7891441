use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog courses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

/// Timetable slots a course can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
}

impl Slot {
    pub const ALL: [Slot; 15] = [
        Slot::A,
        Slot::B,
        Slot::C,
        Slot::D,
        Slot::E,
        Slot::F,
        Slot::G,
        Slot::H,
        Slot::I,
        Slot::J,
        Slot::K,
        Slot::L,
        Slot::M,
        Slot::N,
        Slot::O,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
            Slot::C => "C",
            Slot::D => "D",
            Slot::E => "E",
            Slot::F => "F",
            Slot::G => "G",
            Slot::H => "H",
            Slot::I => "I",
            Slot::J => "J",
            Slot::K => "K",
            Slot::L => "L",
            Slot::M => "M",
            Slot::N => "N",
            Slot::O => "O",
        }
    }

    /// Parse a path segment, ignoring case.
    pub fn from_path(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub name: String,
    pub faculty: String,
    pub slot: Slot,
    pub credits: u8,
    pub semester: String,
    pub is_active: bool,
}

/// Identifier wrapper for ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Current,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub student_id: crate::portal::auth::StudentId,
    pub course_id: CourseId,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    pub feedback: String,
}

/// Ledger entry joined with its catalog record for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EnrolledCourseView {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Option<Course>,
}
