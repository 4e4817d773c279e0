use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRequest, CandidateResponse, CandidateUpdateRequest};
use crate::pagination::{offset, Link, Paged, PageQuery};
use crate::state::AppState;

use super::store;

#[derive(Debug, Serialize)]
pub struct CandidateItem {
    pub candidate: CandidateResponse,
    pub links: Vec<Link>,
}

fn item_links(id: i64) -> Vec<Link> {
    vec![
        Link::new("self", format!("/api/v1/candidates/{id}")),
        Link::new("update", format!("/api/v1/candidates/{id}")),
        Link::new("delete", format!("/api/v1/candidates/{id}")),
    ]
}

/// GET /api/v1/candidates
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<CandidateItem>>, AppError> {
    let (page, page_size) = query.normalize();
    let trace_id = Uuid::new_v4();

    let total = store::count(&state.db).await?;
    let candidates = store::list(&state.db, offset(page, page_size), page_size).await?;

    let items = candidates
        .into_iter()
        .map(|candidate| {
            let links = item_links(candidate.id);
            CandidateItem {
                candidate: CandidateResponse::from(candidate),
                links,
            }
        })
        .collect();

    info!("Listing candidates - page {page}, page_size {page_size}, total {total} | trace_id {trace_id}");

    Ok(Json(Paged {
        total,
        page,
        page_size,
        trace_id,
        items,
    }))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CandidateResponse>, AppError> {
    let candidate = store::find_by_id(&state.db, id).await?.ok_or_else(|| {
        warn!("Candidate {id} not found");
        AppError::NotFound(format!("Candidate {id} not found"))
    })?;

    Ok(Json(CandidateResponse::from(candidate)))
}

/// POST /api/v1/candidates
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CandidateRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let created = store::create(&state.db, &req).await?;
    info!("Candidate created with id {}", created.id);

    let location = format!("/api/v1/candidates/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CandidateResponse::from(created)),
    ))
}

/// PUT /api/v1/candidates/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CandidateUpdateRequest>,
) -> Result<Json<CandidateResponse>, AppError> {
    req.validate()?;

    let updated = store::update(&state.db, id, &req).await?;
    info!("Candidate {id} updated");

    Ok(Json(CandidateResponse::from(updated)))
}

/// DELETE /api/v1/candidates/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, id).await? {
        warn!("Attempt to delete missing candidate {id}");
        return Err(AppError::NotFound(format!("Candidate {id} not found")));
    }

    info!("Candidate {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_links_point_at_resource() {
        let links = item_links(42);
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.href == "/api/v1/candidates/42"));
        let rels: Vec<&str> = links.iter().map(|l| l.rel).collect();
        assert_eq!(rels, vec!["self", "update", "delete"]);
    }
}
