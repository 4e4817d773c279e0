//! Orders job postings by similarity to a candidate's skills.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::job::Job;

use super::similarity::Similarity;
use super::tokenize::tokenize;
use super::vectorize::{build_vocabulary, vectorize};

/// Used when the caller passes a non-positive `top_n`.
pub const DEFAULT_TOP_N: i64 = 5;

const STRONG_THRESHOLD: f32 = 0.5;
const MEDIUM_THRESHOLD: f32 = 0.3;

/// Qualitative bucket derived from the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Strong,
    Medium,
    Weak,
}

impl MatchTier {
    pub fn from_score(score: f32) -> Self {
        if score >= STRONG_THRESHOLD {
            MatchTier::Strong
        } else if score >= MEDIUM_THRESHOLD {
            MatchTier::Medium
        } else {
            MatchTier::Weak
        }
    }
}

/// One ranked job with its raw similarity and derived tier.
#[derive(Debug, Clone)]
pub struct ScoredRecommendation {
    pub job: Job,
    pub score: f32,
    pub tier: MatchTier,
}

impl ScoredRecommendation {
    /// Similarity expressed as a percentage, rounded to one decimal place.
    /// The raw score keeps full precision; rounding happens only here, at
    /// output formatting.
    pub fn similarity_percent(&self) -> f64 {
        (f64::from(self.score) * 1000.0).round() / 10.0
    }
}

/// Ranks `jobs` by textual relevance to `candidate_skills`.
///
/// Pure and stateless: the vocabulary is rebuilt from this call's inputs, so
/// repeated calls with identical arguments yield identical output. Degenerate
/// input degrades instead of failing — an empty jobs list gives an empty
/// result, and a candidate text that tokenizes to nothing scores every job
/// 0.0 (order then falls back to ascending job id).
pub fn recommend_jobs(
    candidate_skills: &str,
    jobs: Vec<Job>,
    top_n: i64,
    scorer: &dyn Similarity,
) -> Vec<ScoredRecommendation> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let candidate_tokens = tokenize(candidate_skills);
    let job_tokens: Vec<Vec<String>> = jobs.iter().map(|job| tokenize(&job.requirements)).collect();

    let vocabulary = build_vocabulary(
        std::iter::once(candidate_tokens.as_slice())
            .chain(job_tokens.iter().map(|tokens| tokens.as_slice())),
    );

    let candidate_vector = vectorize(&candidate_tokens, &vocabulary);

    let mut ranked: Vec<ScoredRecommendation> = jobs
        .into_iter()
        .zip(job_tokens.iter())
        .map(|(job, tokens)| {
            let job_vector = vectorize(tokens, &vocabulary);
            let score = scorer.score(&candidate_vector, &job_vector);
            ScoredRecommendation {
                tier: MatchTier::from_score(score),
                score,
                job,
            }
        })
        .collect();

    // Descending score; equal scores fall back to ascending job id so the
    // ordering is total and reproducible. Scores are guarded against NaN by
    // the Similarity contract.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.job.id.cmp(&b.job.id))
    });

    let limit = if top_n <= 0 { DEFAULT_TOP_N } else { top_n } as usize;
    ranked.truncate(limit);
    ranked
}
