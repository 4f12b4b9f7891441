use super::domain::{Student, StudentId};
use crate::portal::store::StoreError;

/// Directory abstraction over the student collection.
pub trait StudentDirectory: Send + Sync {
    fn find(&self, student_id: &StudentId) -> Result<Option<Student>, StoreError>;
    fn insert(&self, student: Student) -> Result<(), StoreError>;
    fn update_password(&self, student_id: &StudentId, password_hash: &str)
        -> Result<(), StoreError>;
}
