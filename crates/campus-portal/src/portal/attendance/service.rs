use std::sync::Arc;

use super::domain::{Attendance, AttendanceView};
use super::repository::AttendanceLog;
use crate::portal::auth::StudentId;
use crate::portal::courses::{CourseCatalog, CourseId, EnrollmentLedger, EnrollmentStatus};
use crate::portal::store::StoreError;

/// Service joining the ledger, catalog, and attendance log.
pub struct AttendanceService<C, E, L> {
    catalog: Arc<C>,
    ledger: Arc<E>,
    log: Arc<L>,
}

impl<C, E, L> AttendanceService<C, E, L>
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    L: AttendanceLog + 'static,
{
    pub fn new(catalog: Arc<C>, ledger: Arc<E>, log: Arc<L>) -> Self {
        Self {
            catalog,
            ledger,
            log,
        }
    }

    /// Attendance for every current enrollment, creating empty records on
    /// first sight.
    pub fn overview(&self, student_id: &StudentId) -> Result<Vec<AttendanceView>, AttendanceError> {
        let enrollments = self
            .ledger
            .for_student(student_id, EnrollmentStatus::Current)?;

        let mut views = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self.catalog.find(&enrollment.course_id)?;
            let attendance = self.fetch_or_initialize(student_id, &enrollment.course_id)?;
            views.push(AttendanceView { course, attendance });
        }
        Ok(views)
    }

    /// Attendance detail for one course.
    pub fn for_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<AttendanceView, AttendanceError> {
        let course = self
            .catalog
            .find(course_id)?
            .ok_or(AttendanceError::CourseNotFound)?;

        let attendance = self.fetch_or_initialize(student_id, course_id)?;
        Ok(AttendanceView {
            course: Some(course),
            attendance,
        })
    }

    fn fetch_or_initialize(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Attendance, AttendanceError> {
        if let Some(attendance) = self.log.find(student_id, course_id)? {
            return Ok(attendance);
        }

        let attendance = Attendance::empty(student_id.clone(), course_id.clone());
        self.log.upsert(&attendance)?;
        Ok(attendance)
    }
}

/// Error raised by the attendance service.
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error("course not found")]
    CourseNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}
