use super::domain::Announcement;
use crate::portal::store::StoreError;

/// Board abstraction over the announcement collection.
pub trait AnnouncementBoard: Send + Sync {
    /// Active announcements, most recent first.
    fn active(&self) -> Result<Vec<Announcement>, StoreError>;
    fn insert(&self, announcement: Announcement) -> Result<(), StoreError>;
}
