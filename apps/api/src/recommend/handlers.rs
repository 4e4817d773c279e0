use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthClaims;
use crate::candidates;
use crate::errors::AppError;
use crate::jobs;
use crate::state::AppState;

use super::{recommend_jobs, MatchTier, DEFAULT_TOP_N};

#[derive(Debug, Deserialize)]
pub struct TopNQuery {
    pub top_n: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub job_id: i64,
    pub title: String,
    pub company: String,
    pub requirements: String,
    pub similarity_percent: f64,
    pub tier: MatchTier,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub candidate_id: i64,
    pub total: usize,
    pub trace_id: Uuid,
    pub recommendations: Vec<RecommendationItem>,
}

/// GET /api/v1/recommendations/jobs/:candidate_id
///
/// Ranks the full job catalog against the candidate's stated skills. The
/// ranking core itself never fails; 404s here come from the record lookups.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(candidate_id): Path<i64>,
    Query(query): Query<TopNQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let trace_id = Uuid::new_v4();

    let candidate = candidates::store::find_by_id(&state.db, candidate_id)
        .await?
        .ok_or_else(|| {
            warn!("Candidate {candidate_id} not found | trace_id {trace_id}");
            AppError::NotFound(format!("Candidate {candidate_id} not found"))
        })?;

    let jobs = jobs::store::list(&state.db).await?;
    if jobs.is_empty() {
        warn!("No jobs available to recommend | trace_id {trace_id}");
        return Err(AppError::NotFound("No jobs available".to_string()));
    }

    let top_n = query.top_n.unwrap_or(DEFAULT_TOP_N);
    let ranked = recommend_jobs(&candidate.skills, jobs, top_n, state.similarity.as_ref());

    let recommendations: Vec<RecommendationItem> = ranked
        .into_iter()
        .map(|rec| {
            let similarity_percent = rec.similarity_percent();
            RecommendationItem {
                job_id: rec.job.id,
                title: rec.job.title,
                company: rec.job.company,
                requirements: rec.job.requirements,
                similarity_percent,
                tier: rec.tier,
            }
        })
        .collect();

    info!(
        "Recommended {} of requested {top_n} jobs for candidate {candidate_id} | trace_id {trace_id}",
        recommendations.len()
    );

    Ok(Json(RecommendationResponse {
        candidate_id,
        total: recommendations.len(),
        trace_id,
        recommendations,
    }))
}
