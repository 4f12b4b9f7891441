use super::domain::Attendance;
use crate::portal::auth::StudentId;
use crate::portal::courses::CourseId;
use crate::portal::store::StoreError;

/// Log abstraction over the attendance collection, keyed by student and
/// course.
pub trait AttendanceLog: Send + Sync {
    fn find(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Option<Attendance>, StoreError>;
    fn upsert(&self, attendance: &Attendance) -> Result<(), StoreError>;
}
