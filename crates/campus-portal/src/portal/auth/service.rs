use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::domain::{ChangePasswordRequest, Claims, LoginRequest, LoginResponse, Student, StudentId};
use super::repository::StudentDirectory;
use crate::config::AuthConfig;
use crate::portal::store::StoreError;

const MIN_PASSWORD_LEN: usize = 6;

/// Service issuing and verifying bearer tokens against the student directory.
pub struct AuthService<D> {
    directory: Arc<D>,
    config: AuthConfig,
}

impl<D> AuthService<D>
where
    D: StudentDirectory + 'static,
{
    pub fn new(directory: Arc<D>, config: AuthConfig) -> Self {
        Self { directory, config }
    }

    /// Verify credentials and issue a signed token plus the login view.
    ///
    /// An unknown student id and a wrong password are indistinguishable to the
    /// caller.
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthServiceError> {
        let student_id = StudentId(request.student_id);
        let student = self
            .directory
            .find(&student_id)?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let valid = bcrypt::verify(&request.password, &student.password_hash)?;
        if !valid {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.issue_token(&student.student_id)?;
        Ok(LoginResponse {
            token,
            student: student.summary(),
        })
    }

    /// Rotate the stored hash after validating the current password and the
    /// new-password rules.
    pub fn change_password(
        &self,
        student: &Student,
        request: ChangePasswordRequest,
    ) -> Result<(), AuthServiceError> {
        if request.new_password != request.confirm_password {
            return Err(AuthServiceError::PasswordMismatch);
        }
        if request.new_password.len() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::WeakPassword);
        }

        let valid = bcrypt::verify(&request.current_password, &student.password_hash)?;
        if !valid {
            return Err(AuthServiceError::CurrentPasswordIncorrect);
        }

        let password_hash = bcrypt::hash(&request.new_password, bcrypt::DEFAULT_COST)?;
        self.directory
            .update_password(&student.student_id, &password_hash)?;
        Ok(())
    }

    pub fn issue_token(&self, student_id: &StudentId) -> Result<String, AuthServiceError> {
        let now = Utc::now();
        let claims = Claims {
            sub: student_id.0.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.token_ttl_hours)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthServiceError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

/// Error raised by the auth service.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("current password is incorrect")]
    CurrentPasswordIncorrect,
    #[error("passwords don't match")]
    PasswordMismatch,
    #[error("new password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Directory(#[from] StoreError),
}

/// Failure modes surfaced while resolving a bearer token to a student.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,
    #[error("invalid token")]
    UnknownStudent,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Token-to-student resolution, type-erased so routers can share one instance
/// through an extension regardless of the directory backend.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<Student, AuthError>;
}

impl<D> Authenticator for AuthService<D>
where
    D: StudentDirectory + 'static,
{
    fn authenticate(&self, token: &str) -> Result<Student, AuthError> {
        let claims = self
            .verify_token(token)
            .map_err(|_| AuthError::InvalidToken)?;

        let student_id = StudentId(claims.sub);
        match self.directory.find(&student_id) {
            Ok(Some(student)) => Ok(student),
            Ok(None) => Err(AuthError::UnknownStudent),
            Err(err) => Err(AuthError::Unavailable(err.to_string())),
        }
    }
}
