//! Portal areas, one module per surface: each owns its entities, store
//! traits, service, and router.

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod examination;
pub mod store;

pub use store::StoreError;
