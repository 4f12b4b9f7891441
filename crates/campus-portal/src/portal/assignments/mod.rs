//! Assignments and submissions. Upload byte handling lives outside this
//! crate; submissions carry file metadata (name plus storage key) only.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Assignment, AssignmentId, AssignmentStatusView, Submission, SubmissionRequest};
pub use repository::{AssignmentBoard, SubmissionStore};
pub use router::assignments_router;
pub use service::{AssignmentError, AssignmentService};
