use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for enrolled students; unique across the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Directory record for a student, including the stored password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub father_name: String,
    pub phone_number: String,
    pub parent_phone_number: String,
    pub degree: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            degree: self.degree.clone(),
            profile_picture: self.profile_picture.clone(),
        }
    }

    pub fn profile(&self) -> StudentProfile {
        StudentProfile {
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth,
            father_name: self.father_name.clone(),
            phone_number: self.phone_number.clone(),
            parent_phone_number: self.parent_phone_number.clone(),
            degree: self.degree.clone(),
            profile_picture: self.profile_picture.clone(),
        }
    }
}

/// Slim view returned alongside a fresh token at login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub student_id: StudentId,
    pub name: String,
    pub email: String,
    pub degree: String,
    pub profile_picture: String,
}

/// Full profile view, never exposing the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub student_id: StudentId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub father_name: String,
    pub phone_number: String,
    pub parent_phone_number: String,
    pub degree: String,
    pub profile_picture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub student_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub student: StudentSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Bearer-token claims: subject is the student identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
