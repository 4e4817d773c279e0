//! Term-frequency vectorization over a per-request vocabulary.

use std::collections::HashMap;

/// Upper bound on distinct terms tracked in one invocation. Terms past the
/// cap are dropped deterministically (first seen wins).
pub const MAX_VOCABULARY: usize = 20_000;

/// The distinct terms observed across one request's texts, mapped to vector
/// indices in first-seen order. Rebuilt on every ranking call; never cached
/// or shared, so correctness does not depend on invalidation.
#[derive(Debug, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

/// Builds the shared vocabulary from every tokenized text involved in one
/// ranking call (candidate first, then all jobs). First-occurrence index
/// order makes identical inputs produce identical vocabularies.
pub fn build_vocabulary<'a, I>(texts: I) -> Vocabulary
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    for tokens in texts {
        for term in tokens {
            if index.contains_key(term.as_str()) {
                continue;
            }
            if index.len() >= MAX_VOCABULARY {
                return Vocabulary { index };
            }
            index.insert(term.clone(), index.len());
        }
    }
    Vocabulary { index }
}

/// Maps a token sequence to a term-count vector over the vocabulary.
/// Dimension always equals the vocabulary size; terms outside the vocabulary
/// contribute nothing, and an empty text yields the all-zero vector.
pub fn vectorize(tokens: &[String], vocabulary: &Vocabulary) -> Vec<f32> {
    let mut vector = vec![0.0_f32; vocabulary.len()];
    for term in tokens {
        if let Some(i) = vocabulary.index_of(term) {
            vector[i] += 1.0;
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_union_of_distinct_terms() {
        let candidate = toks(&["java", "sql"]);
        let job = toks(&["java", "python"]);
        let vocabulary = build_vocabulary([candidate.as_slice(), job.as_slice()]);
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.index_of("java").is_some());
        assert!(vocabulary.index_of("python").is_some());
        assert!(vocabulary.index_of("rust").is_none());
    }

    #[test]
    fn test_vocabulary_indices_follow_first_seen_order() {
        let a = toks(&["alpha", "beta"]);
        let b = toks(&["beta", "gamma"]);
        let vocabulary = build_vocabulary([a.as_slice(), b.as_slice()]);
        assert_eq!(vocabulary.index_of("alpha"), Some(0));
        assert_eq!(vocabulary.index_of("beta"), Some(1));
        assert_eq!(vocabulary.index_of("gamma"), Some(2));
    }

    #[test]
    fn test_empty_texts_build_empty_vocabulary() {
        let empty: Vec<String> = Vec::new();
        let vocabulary = build_vocabulary([empty.as_slice()]);
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn test_vector_dimension_matches_vocabulary() {
        let a = toks(&["java", "sql", "java"]);
        let vocabulary = build_vocabulary([a.as_slice()]);
        let vector = vectorize(&a, &vocabulary);
        assert_eq!(vector.len(), vocabulary.len());
    }

    #[test]
    fn test_vector_counts_term_frequency() {
        let a = toks(&["java", "sql", "java"]);
        let vocabulary = build_vocabulary([a.as_slice()]);
        let vector = vectorize(&a, &vocabulary);
        assert_eq!(vector[vocabulary.index_of("java").unwrap()], 2.0);
        assert_eq!(vector[vocabulary.index_of("sql").unwrap()], 1.0);
    }

    #[test]
    fn test_empty_tokens_give_all_zero_vector() {
        let a = toks(&["java", "sql"]);
        let vocabulary = build_vocabulary([a.as_slice()]);
        let vector = vectorize(&[], &vocabulary);
        assert!(vector.iter().all(|w| *w == 0.0));
        assert_eq!(vector.len(), 2);
    }

    #[test]
    fn test_vocabulary_size_is_capped() {
        let many: Vec<String> = (0..MAX_VOCABULARY + 100).map(|i| format!("t{i}")).collect();
        let vocabulary = build_vocabulary([many.as_slice()]);
        assert_eq!(vocabulary.len(), MAX_VOCABULARY);
        // first-seen terms survive the cap
        assert_eq!(vocabulary.index_of("t0"), Some(0));
        assert!(vocabulary.index_of(&format!("t{}", MAX_VOCABULARY + 50)).is_none());
    }
}
