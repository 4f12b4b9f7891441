use std::sync::Arc;

use chrono::Utc;

use super::domain::{ClearanceRecord, Department};
use super::repository::ClearanceStore;
use crate::portal::auth::StudentId;
use crate::portal::store::StoreError;

/// Service owning the clearance state transitions. Every mutation persists the
/// roster and the derived aggregate in one upsert.
pub struct ClearanceService<S> {
    store: Arc<S>,
}

impl<S> ClearanceService<S>
where
    S: ClearanceStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Return the student's record, creating a fresh pending one the first
    /// time the student is seen. Idempotent thereafter.
    pub fn fetch_or_initialize(
        &self,
        student_id: &StudentId,
    ) -> Result<ClearanceRecord, ClearanceError> {
        if let Some(record) = self.store.fetch(student_id)? {
            return Ok(record);
        }

        let record = ClearanceRecord::new(student_id.clone(), Utc::now());
        self.store.upsert(&record)?;
        Ok(record)
    }

    /// Start (or restart) a clearance request: whatever the prior state, the
    /// record comes out fully pending with a fresh request date.
    pub fn request(&self, student_id: &StudentId) -> Result<ClearanceRecord, ClearanceError> {
        let now = Utc::now();
        let mut record = match self.store.fetch(student_id)? {
            Some(record) => record,
            None => ClearanceRecord::new(student_id.clone(), now),
        };

        record.rearm(now);
        self.store.upsert(&record)?;
        Ok(record)
    }

    /// Sign off one department, matched case-insensitively against the
    /// roster, and recompute the aggregate. The record is untouched when the
    /// name matches no department.
    pub fn approve_department(
        &self,
        student_id: &StudentId,
        department_name: &str,
    ) -> Result<ClearanceRecord, ClearanceError> {
        let department = Department::from_path(department_name)
            .ok_or(ClearanceError::DepartmentNotFound)?;

        let mut record = self
            .store
            .fetch(student_id)?
            .ok_or(ClearanceError::RecordNotFound)?;

        record.approve(department, Utc::now());
        self.store.upsert(&record)?;
        Ok(record)
    }
}

/// Error raised by the clearance service.
#[derive(Debug, thiserror::Error)]
pub enum ClearanceError {
    #[error("no-due record not found")]
    RecordNotFound,
    #[error("department not found")]
    DepartmentNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}
