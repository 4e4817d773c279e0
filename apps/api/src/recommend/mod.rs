//! Job relevance ranking.
//!
//! Pure, synchronous pipeline: tokenize the candidate's skills and every job's
//! requirements, build one shared vocabulary for the call, vectorize each text
//! as term counts, score with the configured similarity strategy, and rank.
//! Nothing is cached between invocations.

pub mod handlers;
pub mod ranker;
pub mod similarity;
pub mod tokenize;
pub mod vectorize;

pub use ranker::{recommend_jobs, MatchTier, ScoredRecommendation, DEFAULT_TOP_N};
pub use similarity::{CosineSimilarity, Similarity};
