use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portal::auth::StudentId;
use crate::portal::courses::CourseId;

/// Identifier wrapper for published assignments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub assignment_id: AssignmentId,
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub max_marks: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub student_id: StudentId,
    pub assignment_id: AssignmentId,
    pub file_name: String,
    pub storage_key: String,
    pub submission_date: DateTime<Utc>,
    pub marks: u32,
}

/// Metadata handed over by the upload layer once the file is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub assignment_id: String,
    pub file_name: String,
    pub storage_key: String,
}

/// Assignment joined with the student's submission state for listings.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentStatusView {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submitted: bool,
    pub submission: Option<Submission>,
}
