//! Persistence for candidate records.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::candidate::{non_blank, Candidate, CandidateRequest, CandidateUpdateRequest};

const COLUMNS: &str = "id, name, email, password, profession, skills";

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Candidate>, AppError> {
    let rows = sqlx::query_as::<_, Candidate>(&format!(
        "SELECT {COLUMNS} FROM candidates ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Candidate>, AppError> {
    let row = sqlx::query_as::<_, Candidate>(&format!(
        "SELECT {COLUMNS} FROM candidates WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Candidate>, AppError> {
    let row = sqlx::query_as::<_, Candidate>(&format!(
        "SELECT {COLUMNS} FROM candidates WHERE LOWER(email) = LOWER($1)"
    ))
    .bind(email.trim())
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Inserts a candidate. Email is normalized to lowercase and must be unique.
pub async fn create(pool: &PgPool, req: &CandidateRequest) -> Result<Candidate, AppError> {
    let email = req.email.trim().to_lowercase();

    if find_by_email(pool, &email).await?.is_some() {
        return Err(AppError::Conflict(
            "A candidate with this email already exists".to_string(),
        ));
    }

    let candidate = sqlx::query_as::<_, Candidate>(&format!(
        "INSERT INTO candidates (name, email, password, profession, skills)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(&req.name)
    .bind(&email)
    .bind(&req.password)
    .bind(&req.profession)
    .bind(&req.skills)
    .fetch_one(pool)
    .await?;

    Ok(candidate)
}

/// Field-wise update: absent or blank fields keep the stored value. Moving to
/// an email already owned by another candidate is a conflict.
pub async fn update(
    pool: &PgPool,
    id: i64,
    req: &CandidateUpdateRequest,
) -> Result<Candidate, AppError> {
    let Some(mut candidate) = find_by_id(pool, id).await? else {
        return Err(AppError::NotFound(format!("Candidate {id} not found")));
    };

    if let Some(name) = non_blank(&req.name) {
        candidate.name = name.to_string();
    }
    if let Some(email) = non_blank(&req.email) {
        let email = email.trim().to_lowercase();
        let taken = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {COLUMNS} FROM candidates WHERE LOWER(email) = $1 AND id <> $2"
        ))
        .bind(&email)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        if taken.is_some() {
            return Err(AppError::Conflict(
                "Another candidate already uses this email".to_string(),
            ));
        }
        candidate.email = email;
    }
    if let Some(password) = non_blank(&req.password) {
        candidate.password = password.to_string();
    }
    if let Some(profession) = non_blank(&req.profession) {
        candidate.profession = Some(profession.to_string());
    }
    if let Some(skills) = non_blank(&req.skills) {
        candidate.skills = skills.to_string();
    }

    sqlx::query(
        "UPDATE candidates SET name = $1, email = $2, password = $3, profession = $4, skills = $5
         WHERE id = $6",
    )
    .bind(&candidate.name)
    .bind(&candidate.email)
    .bind(&candidate.password)
    .bind(&candidate.profession)
    .bind(&candidate.skills)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(candidate)
}

/// Returns whether a row was actually removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Looks up a candidate by normalized email and exact password match.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<Candidate>, AppError> {
    let row = sqlx::query_as::<_, Candidate>(&format!(
        "SELECT {COLUMNS} FROM candidates WHERE LOWER(email) = LOWER($1) AND password = $2"
    ))
    .bind(email.trim())
    .bind(password)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
