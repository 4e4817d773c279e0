use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthClaims;
use crate::errors::AppError;
use crate::models::job::{Job, JobRequest};
use crate::pagination::{offset, Link, Paged, PageQuery};
use crate::state::AppState;

use super::store;

#[derive(Debug, Serialize)]
pub struct JobItem {
    pub job: Job,
    pub links: Vec<Link>,
}

fn item_links(id: i64) -> Vec<Link> {
    vec![
        Link::new("self", format!("/api/v1/jobs/{id}")),
        Link::new("update", format!("/api/v1/jobs/{id}")),
        Link::new("delete", format!("/api/v1/jobs/{id}")),
    ]
}

/// GET /api/v1/jobs
pub async fn handle_list(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<JobItem>>, AppError> {
    let (page, page_size) = query.normalize();
    let trace_id = Uuid::new_v4();

    let total = store::count(&state.db).await?;
    let jobs = store::list_page(&state.db, offset(page, page_size), page_size).await?;

    let items = jobs
        .into_iter()
        .map(|job| {
            let links = item_links(job.id);
            JobItem { job, links }
        })
        .collect();

    info!("Listing jobs - page {page}, page_size {page_size}, total {total} | trace_id {trace_id}");

    Ok(Json(Paged {
        total,
        page,
        page_size,
        trace_id,
        items,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(id): Path<i64>,
) -> Result<Json<Job>, AppError> {
    let job = store::find_by_id(&state.db, id).await?.ok_or_else(|| {
        warn!("Job {id} not found");
        AppError::NotFound(format!("Job {id} not found"))
    })?;

    Ok(Json(job))
}

/// POST /api/v1/jobs
pub async fn handle_create(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Json(req): Json<JobRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let created = store::create(&state.db, &req).await?;
    info!("Job created with id {}", created.id);

    let location = format!("/api/v1/jobs/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(id): Path<i64>,
    Json(req): Json<JobRequest>,
) -> Result<Json<Job>, AppError> {
    req.validate()?;

    let updated = store::update(&state.db, id, &req).await?.ok_or_else(|| {
        warn!("Attempt to update missing job {id}");
        AppError::NotFound(format!("Job {id} not found"))
    })?;

    info!("Job {id} updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, id).await? {
        warn!("Attempt to delete missing job {id}");
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }

    info!("Job {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}
