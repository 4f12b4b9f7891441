//! Departmental no-due clearance tracker.
//!
//! One record per student holds a fixed five-department roster, each entry
//! pending or approved, plus an aggregate status derived from the roster:
//! approved exactly when every department has signed off. `request` re-arms
//! the whole workflow; `approve` moves a single department forward and
//! recomputes the aggregate. The record is never deleted.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ClearanceRecord, ClearanceStatus, Department, DepartmentClearance, DepartmentStatus,
};
pub use repository::ClearanceStore;
pub use router::clearance_router;
pub use service::{ClearanceError, ClearanceService};
