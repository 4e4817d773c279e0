use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 200;
pub const MAX_PROFESSION_LEN: usize = 100;
pub const MAX_SKILLS_LEN: usize = 300;
pub const MIN_PASSWORD_LEN: usize = 6;

/// A registered candidate. The password column is kept out of every response
/// body, so this row type deliberately does not implement `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Option<String>,
    pub skills: String,
}

/// Candidate representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profession: Option<String>,
    pub skills: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        CandidateResponse {
            id: candidate.id,
            name: candidate.name,
            email: candidate.email,
            profession: candidate.profession,
            skills: candidate.skills,
        }
    }
}

/// Payload for creating a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Option<String>,
    pub skills: String,
}

impl CandidateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Name must not exceed {MAX_NAME_LEN} characters"
            )));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if let Some(profession) = &self.profession {
            validate_profession(profession)?;
        }
        validate_skills(&self.skills)?;
        Ok(())
    }
}

/// Payload for updating a candidate. Absent or blank fields keep the stored
/// value, so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profession: Option<String>,
    pub skills: Option<String>,
}

impl CandidateUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = non_blank(&self.name) {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(AppError::Validation(format!(
                    "Name must not exceed {MAX_NAME_LEN} characters"
                )));
            }
        }
        if let Some(email) = non_blank(&self.email) {
            validate_email(email)?;
        }
        if let Some(password) = non_blank(&self.password) {
            validate_password(password)?;
        }
        if let Some(profession) = non_blank(&self.profession) {
            validate_profession(profession)?;
        }
        if let Some(skills) = non_blank(&self.skills) {
            validate_skills(skills)?;
        }
        Ok(())
    }
}

/// Returns the field only when it is present and not just whitespace.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(AppError::Validation(format!(
            "Email must not exceed {MAX_EMAIL_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must have at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_profession(profession: &str) -> Result<(), AppError> {
    if profession.chars().count() > MAX_PROFESSION_LEN {
        return Err(AppError::Validation(format!(
            "Profession must not exceed {MAX_PROFESSION_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_skills(skills: &str) -> Result<(), AppError> {
    if skills.trim().is_empty() {
        return Err(AppError::Validation("Skills are required".to_string()));
    }
    if skills.chars().count() > MAX_SKILLS_LEN {
        return Err(AppError::Validation(format!(
            "Skills must not exceed {MAX_SKILLS_LEN} characters"
        )));
    }
    Ok(())
}
