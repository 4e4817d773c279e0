pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::candidates::handlers as candidate_handlers;
use crate::jobs::handlers as job_handlers;
use crate::recommend::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::readiness_handler))
        // Auth
        .route("/api/v1/auth/login", post(auth::handle_login))
        // Candidates
        .route(
            "/api/v1/candidates",
            get(candidate_handlers::handle_list).post(candidate_handlers::handle_create),
        )
        .route(
            "/api/v1/candidates/:id",
            get(candidate_handlers::handle_get)
                .put(candidate_handlers::handle_update)
                .delete(candidate_handlers::handle_delete),
        )
        // Jobs (JWT protected)
        .route(
            "/api/v1/jobs",
            get(job_handlers::handle_list).post(job_handlers::handle_create),
        )
        .route(
            "/api/v1/jobs/:id",
            get(job_handlers::handle_get)
                .put(job_handlers::handle_update)
                .delete(job_handlers::handle_delete),
        )
        // Recommendations (JWT protected)
        .route(
            "/api/v1/recommendations/jobs/:candidate_id",
            get(recommendation_handlers::handle_recommend_jobs),
        )
        .with_state(state)
}
