/// Failure modes shared by every document-store trait in the portal.
///
/// Stores are keyed lookups plus full-document upserts; anything richer is the
/// backend's concern. `Unavailable` carries the backend's own description and
/// surfaces to callers as an infrastructure fault.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
