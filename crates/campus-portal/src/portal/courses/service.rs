use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    Course, CourseId, EnrolledCourseView, Enrollment, EnrollmentId, EnrollmentStatus, Slot,
};
use super::repository::{CourseCatalog, EnrollmentLedger};
use crate::portal::auth::StudentId;
use crate::portal::store::StoreError;

/// Service joining the course catalog and the enrollment ledger.
pub struct CourseService<C, E> {
    catalog: Arc<C>,
    ledger: Arc<E>,
}

static ENROLLMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_enrollment_id() -> EnrollmentId {
    let id = ENROLLMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EnrollmentId(format!("enr-{id:06}"))
}

impl<C, E> CourseService<C, E>
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    pub fn new(catalog: Arc<C>, ledger: Arc<E>) -> Self {
        Self { catalog, ledger }
    }

    pub fn current_courses(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<EnrolledCourseView>, CourseServiceError> {
        self.courses_with_status(student_id, EnrollmentStatus::Current)
    }

    pub fn completed_courses(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<EnrolledCourseView>, CourseServiceError> {
        self.courses_with_status(student_id, EnrollmentStatus::Completed)
    }

    fn courses_with_status(
        &self,
        student_id: &StudentId,
        status: EnrollmentStatus,
    ) -> Result<Vec<EnrolledCourseView>, CourseServiceError> {
        let enrollments = self.ledger.for_student(student_id, status)?;
        let mut views = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self.catalog.find(&enrollment.course_id)?;
            views.push(EnrolledCourseView { enrollment, course });
        }
        Ok(views)
    }

    /// Record feedback on one of the student's own enrollments.
    pub fn submit_feedback(
        &self,
        student_id: &StudentId,
        enrollment_id: &EnrollmentId,
        feedback: &str,
    ) -> Result<(), CourseServiceError> {
        if feedback.trim().is_empty() {
            return Err(CourseServiceError::EmptyFeedback);
        }

        let mut enrollment = self
            .ledger
            .find(enrollment_id)?
            .filter(|enrollment| &enrollment.student_id == student_id)
            .ok_or(CourseServiceError::EnrollmentNotFound)?;

        enrollment.feedback = feedback.to_string();
        self.ledger.update(enrollment)?;
        Ok(())
    }

    /// Active courses in a slot the student is not already taking.
    pub fn available_for_slot(
        &self,
        student_id: &StudentId,
        slot: Slot,
    ) -> Result<Vec<Course>, CourseServiceError> {
        let courses = self.catalog.by_slot(slot)?;
        let enrolled = self
            .ledger
            .for_student(student_id, EnrollmentStatus::Current)?;
        let enrolled_ids: Vec<&CourseId> = enrolled
            .iter()
            .map(|enrollment| &enrollment.course_id)
            .collect();

        Ok(courses
            .into_iter()
            .filter(|course| course.is_active && !enrolled_ids.contains(&&course.course_id))
            .collect())
    }

    pub fn enroll(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Enrollment, CourseServiceError> {
        let course = self
            .catalog
            .find(course_id)?
            .filter(|course| course.is_active)
            .ok_or(CourseServiceError::CourseNotFound)?;

        if self.ledger.find_current(student_id, course_id)?.is_some() {
            return Err(CourseServiceError::AlreadyEnrolled);
        }

        let enrollment = Enrollment {
            enrollment_id: next_enrollment_id(),
            student_id: student_id.clone(),
            course_id: course.course_id,
            enrollment_date: Utc::now(),
            status: EnrollmentStatus::Current,
            grade: String::new(),
            completed_date: None,
            feedback: String::new(),
        };

        let stored = self.ledger.insert(enrollment)?;
        Ok(stored)
    }
}

/// Error raised by the course service.
#[derive(Debug, thiserror::Error)]
pub enum CourseServiceError {
    #[error("enrollment not found")]
    EnrollmentNotFound,
    #[error("course not found or inactive")]
    CourseNotFound,
    #[error("already enrolled in this course")]
    AlreadyEnrolled,
    #[error("feedback is required")]
    EmptyFeedback,
    #[error(transparent)]
    Store(#[from] StoreError),
}
