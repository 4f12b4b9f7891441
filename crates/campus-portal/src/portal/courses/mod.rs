//! Course catalog and the enrollment ledger: current/completed course views,
//! feedback, slot-based browsing, and enrolling.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    Course, CourseId, EnrolledCourseView, Enrollment, EnrollmentId, EnrollmentStatus, Slot,
};
pub use repository::{CourseCatalog, EnrollmentLedger};
pub use router::courses_router;
pub use service::{CourseService, CourseServiceError};
