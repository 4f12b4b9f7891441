use std::sync::Arc;

use chrono::Utc;

use super::domain::{AssignmentId, AssignmentStatusView, Submission, SubmissionRequest};
use super::repository::{AssignmentBoard, SubmissionStore};
use crate::portal::auth::StudentId;
use crate::portal::courses::{Course, CourseCatalog, CourseId, EnrollmentLedger, EnrollmentStatus};
use crate::portal::store::StoreError;

/// Service composing the assignment board, submission store, and enrollment
/// checks.
pub struct AssignmentService<B, S, C, E> {
    board: Arc<B>,
    submissions: Arc<S>,
    catalog: Arc<C>,
    ledger: Arc<E>,
}

impl<B, S, C, E> AssignmentService<B, S, C, E>
where
    B: AssignmentBoard + 'static,
    S: SubmissionStore + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    pub fn new(board: Arc<B>, submissions: Arc<S>, catalog: Arc<C>, ledger: Arc<E>) -> Self {
        Self {
            board,
            submissions,
            catalog,
            ledger,
        }
    }

    /// Assignments for a course the student currently takes, each annotated
    /// with the student's submission state.
    pub fn list_for_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Vec<AssignmentStatusView>, AssignmentError> {
        if self.ledger.find_current(student_id, course_id)?.is_none() {
            return Err(AssignmentError::NotEnrolled);
        }

        let assignments = self.board.for_course(course_id)?;
        let mut views = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let submission = self
                .submissions
                .find(student_id, &assignment.assignment_id)?;
            views.push(AssignmentStatusView {
                assignment,
                submitted: submission.is_some(),
                submission,
            });
        }
        Ok(views)
    }

    /// Record a submission's file metadata. Resubmitting replaces the file
    /// and date but keeps any marks already awarded.
    pub fn submit(
        &self,
        student_id: &StudentId,
        request: SubmissionRequest,
    ) -> Result<Submission, AssignmentError> {
        if request.file_name.trim().is_empty() || request.storage_key.trim().is_empty() {
            return Err(AssignmentError::MissingFile);
        }

        let assignment_id = AssignmentId(request.assignment_id);
        let assignment = self
            .board
            .find(&assignment_id)?
            .ok_or(AssignmentError::AssignmentNotFound)?;

        let now = Utc::now();
        if now > assignment.due_date {
            return Err(AssignmentError::DeadlinePassed);
        }

        if self
            .ledger
            .find_current(student_id, &assignment.course_id)?
            .is_none()
        {
            return Err(AssignmentError::NotEnrolled);
        }

        let submission = match self.submissions.find(student_id, &assignment_id)? {
            Some(mut existing) => {
                existing.file_name = request.file_name;
                existing.storage_key = request.storage_key;
                existing.submission_date = now;
                existing
            }
            None => Submission {
                student_id: student_id.clone(),
                assignment_id,
                file_name: request.file_name,
                storage_key: request.storage_key,
                submission_date: now,
                marks: 0,
            },
        };

        self.submissions.upsert(&submission)?;
        Ok(submission)
    }

    /// Courses the student can pick from when submitting.
    pub fn enrolled_courses(&self, student_id: &StudentId) -> Result<Vec<Course>, AssignmentError> {
        let enrollments = self
            .ledger
            .for_student(student_id, EnrollmentStatus::Current)?;

        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            if let Some(course) = self.catalog.find(&enrollment.course_id)? {
                courses.push(course);
            }
        }
        Ok(courses)
    }
}

/// Error raised by the assignment service.
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("not enrolled in this course")]
    NotEnrolled,
    #[error("assignment not found")]
    AssignmentNotFound,
    #[error("assignment deadline has passed")]
    DeadlinePassed,
    #[error("file is required")]
    MissingFile,
    #[error(transparent)]
    Store(#[from] StoreError),
}
