//! Examination records: internal marks per enrolled course, and the
//! departmental no-due clearance workflow.

pub mod clearance;
pub mod marks;

pub use clearance::{
    clearance_router, ClearanceError, ClearanceRecord, ClearanceService, ClearanceStatus,
    ClearanceStore, Department, DepartmentClearance, DepartmentStatus,
};
pub use marks::{
    marks_router, CourseMarksView, InternalMarks, MarksError, MarksRegister, MarksService,
};
