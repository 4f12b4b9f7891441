//! Per-course attendance, lazily zero-initialized the first time a student
//! looks at it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Attendance, AttendanceView};
pub use repository::AttendanceLog;
pub use router::attendance_router;
pub use service::{AttendanceError, AttendanceService};
