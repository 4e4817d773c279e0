//! Lexical tokenizer for skill and requirement text.

/// Upper bound on tokens taken from a single text. Oversized payloads are
/// truncated deterministically rather than rejected.
pub const MAX_TOKENS: usize = 10_000;

const SEPARATORS: &[char] = &[',', '/', ';', '|', '(', ')'];

/// Splits raw text into lowercase terms.
///
/// Splits on whitespace and common list separators, then strips surrounding
/// punctuation from each piece. Order-preserving, and duplicates are kept so
/// term-frequency weighting sees repeated mentions. Empty input yields an
/// empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|term| !term.is_empty())
        .take(MAX_TOKENS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_commas() {
        assert_eq!(tokenize("Java, Spring, SQL"), vec!["java", "spring", "sql"]);
    }

    #[test]
    fn test_splits_on_slashes_and_whitespace() {
        assert_eq!(
            tokenize("CI/CD pipelines\tand Docker"),
            vec!["ci", "cd", "pipelines", "and", "docker"]
        );
    }

    #[test]
    fn test_strips_surrounding_punctuation() {
        assert_eq!(tokenize("(Rust) .NET! \"SQL\""), vec!["rust", "net", "sql"]);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ,, / ;").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        assert_eq!(tokenize("sql java sql"), vec!["sql", "java", "sql"]);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let text = "Java Spring Boot SQL";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_token_count_is_capped() {
        let text = "term ".repeat(MAX_TOKENS + 50);
        assert_eq!(tokenize(&text).len(), MAX_TOKENS);
    }
}
