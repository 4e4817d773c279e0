//! Persistence for job postings.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::{Job, JobRequest};

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Full catalog in id order; used by the recommender, which needs every job.
pub async fn list(pool: &PgPool) -> Result<Vec<Job>, AppError> {
    let rows = sqlx::query_as::<_, Job>(
        "SELECT id, title, requirements, company FROM jobs ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_page(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Job>, AppError> {
    let rows = sqlx::query_as::<_, Job>(
        "SELECT id, title, requirements, company FROM jobs ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Job>, AppError> {
    let row = sqlx::query_as::<_, Job>(
        "SELECT id, title, requirements, company FROM jobs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, req: &JobRequest) -> Result<Job, AppError> {
    let job = sqlx::query_as::<_, Job>(
        "INSERT INTO jobs (title, requirements, company)
         VALUES ($1, $2, $3)
         RETURNING id, title, requirements, company",
    )
    .bind(&req.title)
    .bind(&req.requirements)
    .bind(&req.company)
    .fetch_one(pool)
    .await?;
    Ok(job)
}

/// Full replace; returns None when the job does not exist.
pub async fn update(pool: &PgPool, id: i64, req: &JobRequest) -> Result<Option<Job>, AppError> {
    let row = sqlx::query_as::<_, Job>(
        "UPDATE jobs SET title = $1, requirements = $2, company = $3
         WHERE id = $4
         RETURNING id, title, requirements, company",
    )
    .bind(&req.title)
    .bind(&req.requirements)
    .bind(&req.company)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Returns whether a row was actually removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
