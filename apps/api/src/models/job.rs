use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_REQUIREMENTS_LEN: usize = 300;
pub const MAX_COMPANY_LEN: usize = 100;

/// A job posting. `requirements` is the free-text blob scored by the
/// recommender; `title` and `company` are display fields only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub requirements: String,
    pub company: String,
}

/// Payload for creating or replacing a job posting.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub requirements: String,
    pub company: String,
}

impl JobRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_within("Title", &self.title, MAX_TITLE_LEN)?;
        require_within("Requirements", &self.requirements, MAX_REQUIREMENTS_LEN)?;
        require_within("Company", &self.company, MAX_COMPANY_LEN)?;
        Ok(())
    }
}

fn require_within(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{field} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> JobRequest {
        JobRequest {
            title: "Junior Rust Developer".to_string(),
            requirements: "Rust, SQL, Docker".to_string(),
            company: "Acme".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut req = valid_request();
        req.title = "  ".to_string();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_oversized_requirements_rejected() {
        let mut req = valid_request();
        req.requirements = "a".repeat(MAX_REQUIREMENTS_LEN + 1);
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_company_rejected() {
        let mut req = valid_request();
        req.company = String::new();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }
}
