use chrono::{DateTime, Utc};

use super::domain::{Assignment, AssignmentId, Submission};
use crate::portal::auth::StudentId;
use crate::portal::courses::CourseId;
use crate::portal::store::StoreError;

/// Board abstraction over the assignment collection.
pub trait AssignmentBoard: Send + Sync {
    fn find(&self, assignment_id: &AssignmentId) -> Result<Option<Assignment>, StoreError>;
    /// Assignments for a course, ordered by due date ascending.
    fn for_course(&self, course_id: &CourseId) -> Result<Vec<Assignment>, StoreError>;
    /// Assignments across the given courses due on or after `after`, ordered
    /// by due date ascending and capped at `limit`.
    fn upcoming(
        &self,
        course_ids: &[CourseId],
        after: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Assignment>, StoreError>;
    fn insert(&self, assignment: Assignment) -> Result<(), StoreError>;
}

/// Store abstraction over the submission collection, keyed by student and
/// assignment.
pub trait SubmissionStore: Send + Sync {
    fn find(
        &self,
        student_id: &StudentId,
        assignment_id: &AssignmentId,
    ) -> Result<Option<Submission>, StoreError>;
    fn upsert(&self, submission: &Submission) -> Result<(), StoreError>;
}
