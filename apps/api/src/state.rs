use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommend::Similarity;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable similarity strategy used by the job recommender.
    /// Default: cosine over term-frequency vectors.
    pub similarity: Arc<dyn Similarity>,
}
