//! Similarity strategies over feature vectors.

/// A similarity measure between two equal-dimension feature vectors.
///
/// Modeled as a trait so scoring backends can be swapped without touching the
/// ranker or handlers; `AppState` carries the selected strategy as
/// `Arc<dyn Similarity>`.
pub trait Similarity: Send + Sync {
    /// Returns a score in [0, 1]. Zero-magnitude input must score 0.0,
    /// never NaN.
    fn score(&self, a: &[f32], b: &[f32]) -> f32;
}

/// Cosine similarity: dot(a, b) / (‖a‖ · ‖b‖), clamped to [0, 1] to absorb
/// floating-point overshoot.
pub struct CosineSimilarity;

impl Similarity for CosineSimilarity {
    fn score(&self, a: &[f32], b: &[f32]) -> f32 {
        let mut dot = 0.0_f32;
        let mut norm_a = 0.0_f32;
        let mut norm_b = 0.0_f32;
        for (x, y) in a.iter().zip(b.iter()) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vec![1.0, 2.0, 3.0];
        let score = CosineSimilarity.score(&v, &v);
        assert!((score - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(CosineSimilarity.score(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_vector_scores_zero_not_nan() {
        let zero = vec![0.0, 0.0, 0.0];
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(CosineSimilarity.score(&zero, &v), 0.0);
        assert_eq!(CosineSimilarity.score(&v, &zero), 0.0);
        assert_eq!(CosineSimilarity.score(&zero, &zero), 0.0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = vec![3.0, 1.0, 0.0];
        let b = vec![1.0, 2.0, 1.0];
        let ab = CosineSimilarity.score(&a, &b);
        let ba = CosineSimilarity.score(&b, &a);
        assert!((ab - ba).abs() < EPSILON);
    }

    #[test]
    fn test_score_stays_within_unit_interval() {
        // Scaled copies of the same direction can overshoot 1.0 in f32.
        let a = vec![0.1, 0.2, 0.3];
        let b = vec![1000.0, 2000.0, 3000.0];
        let score = CosineSimilarity.score(&a, &b);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_known_value() {
        // cos([1,1,0], [1,0,0]) = 1 / sqrt(2)
        let a = vec![1.0, 1.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        let score = CosineSimilarity.score(&a, &b);
        assert!((score - std::f32::consts::FRAC_1_SQRT_2).abs() < EPSILON);
    }
}
