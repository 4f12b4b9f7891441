use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portal::assignments::Assignment;
use crate::portal::courses::EnrolledCourseView;

/// Identifier wrapper for posted announcements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnouncementId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub announcement_id: AnnouncementId,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Landing-page payload: recent announcements, the student's current courses,
/// and the next few assignment deadlines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub announcements: Vec<Announcement>,
    pub current_courses: Vec<EnrolledCourseView>,
    pub upcoming_assignments: Vec<Assignment>,
}
