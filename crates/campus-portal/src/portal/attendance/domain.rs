use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::portal::auth::StudentId;
use crate::portal::courses::{Course, CourseId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub absent_dates: Vec<NaiveDate>,
    pub percentage: f32,
}

impl Attendance {
    /// Fresh record for a course the student has no attendance history in.
    pub fn empty(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
            total_classes: 0,
            attended_classes: 0,
            absent_dates: Vec::new(),
            percentage: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceView {
    pub course: Option<Course>,
    pub attendance: Attendance,
}
