use super::domain::ClearanceRecord;
use crate::portal::auth::StudentId;
use crate::portal::store::StoreError;

/// Store abstraction over the clearance collection, keyed uniquely by
/// student.
///
/// `upsert` must replace the whole document in one write so the roster and
/// the derived aggregate can never diverge in storage, and implementations
/// must serialize concurrent upserts for the same student.
pub trait ClearanceStore: Send + Sync {
    fn fetch(&self, student_id: &StudentId) -> Result<Option<ClearanceRecord>, StoreError>;
    fn upsert(&self, record: &ClearanceRecord) -> Result<(), StoreError>;
}
