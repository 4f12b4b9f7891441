use super::domain::{Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, Slot};
use crate::portal::auth::StudentId;
use crate::portal::store::StoreError;

/// Catalog abstraction over the course collection.
pub trait CourseCatalog: Send + Sync {
    fn find(&self, course_id: &CourseId) -> Result<Option<Course>, StoreError>;
    fn by_slot(&self, slot: Slot) -> Result<Vec<Course>, StoreError>;
    fn insert(&self, course: Course) -> Result<(), StoreError>;
}

/// Ledger abstraction over the enrollment collection.
pub trait EnrollmentLedger: Send + Sync {
    fn for_student(
        &self,
        student_id: &StudentId,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, StoreError>;
    fn find(&self, enrollment_id: &EnrollmentId) -> Result<Option<Enrollment>, StoreError>;
    fn find_current(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, StoreError>;
    fn insert(&self, enrollment: Enrollment) -> Result<Enrollment, StoreError>;
    fn update(&self, enrollment: Enrollment) -> Result<(), StoreError>;
}
