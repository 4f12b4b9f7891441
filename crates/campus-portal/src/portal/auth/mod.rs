//! Student identity: login, password changes, bearer-token verification, and
//! the request extractor the other areas use to resolve the current student.

pub mod domain;
pub mod extract;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ChangePasswordRequest, Claims, LoginRequest, LoginResponse, Student, StudentId, StudentProfile,
    StudentSummary,
};
pub use extract::CurrentStudent;
pub use repository::StudentDirectory;
pub use router::auth_router;
pub use service::{AuthError, AuthService, AuthServiceError, Authenticator};
