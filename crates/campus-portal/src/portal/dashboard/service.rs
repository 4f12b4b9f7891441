use std::sync::Arc;

use chrono::{NaiveTime, Utc};

use super::domain::{Announcement, DashboardOverview};
use super::repository::AnnouncementBoard;
use crate::portal::assignments::AssignmentBoard;
use crate::portal::auth::StudentId;
use crate::portal::courses::{
    CourseCatalog, CourseId, EnrolledCourseView, EnrollmentLedger, EnrollmentStatus,
};
use crate::portal::store::StoreError;

const ANNOUNCEMENT_LIMIT: usize = 5;
const UPCOMING_ASSIGNMENT_LIMIT: usize = 3;

/// Service assembling the landing-page view from the other areas' stores.
pub struct DashboardService<A, C, E, B> {
    announcements: Arc<A>,
    catalog: Arc<C>,
    ledger: Arc<E>,
    board: Arc<B>,
}

impl<A, C, E, B> DashboardService<A, C, E, B>
where
    A: AnnouncementBoard + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    B: AssignmentBoard + 'static,
{
    pub fn new(announcements: Arc<A>, catalog: Arc<C>, ledger: Arc<E>, board: Arc<B>) -> Self {
        Self {
            announcements,
            catalog,
            ledger,
            board,
        }
    }

    pub fn overview(&self, student_id: &StudentId) -> Result<DashboardOverview, DashboardError> {
        let mut announcements = self.announcements.active()?;
        announcements.truncate(ANNOUNCEMENT_LIMIT);

        let enrollments = self
            .ledger
            .for_student(student_id, EnrollmentStatus::Current)?;
        let course_ids: Vec<CourseId> = enrollments
            .iter()
            .map(|enrollment| enrollment.course_id.clone())
            .collect();

        let mut current_courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self.catalog.find(&enrollment.course_id)?;
            current_courses.push(EnrolledCourseView { enrollment, course });
        }

        // Deadlines from the start of today count as upcoming.
        let start_of_today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let upcoming_assignments =
            self.board
                .upcoming(&course_ids, start_of_today, UPCOMING_ASSIGNMENT_LIMIT)?;

        Ok(DashboardOverview {
            announcements,
            current_courses,
            upcoming_assignments,
        })
    }

    /// Every active announcement, not just the landing-page slice.
    pub fn announcements(&self) -> Result<Vec<Announcement>, DashboardError> {
        Ok(self.announcements.active()?)
    }
}

/// Error raised by the dashboard service.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
