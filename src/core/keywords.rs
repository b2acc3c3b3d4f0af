use std::collections::HashSet;

/// Domain keywords kept regardless of token length.
///
/// Short technology names ("java", "aws", "sql", "ai") would otherwise be
/// dropped by the length filter below.
const DOMAIN_KEYWORDS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "typescript",
    "react",
    "angular",
    "spring",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "sql",
    "mongodb",
    "ai",
    "ml",
    "frontend",
    "backend",
    "devops",
];

/// Minimum token length for non-keyword tokens
const MIN_TOKEN_LENGTH: usize = 4;

/// Local keyword-overlap similarity used when the AI backend is unavailable.
///
/// Lowercases both texts, tokenizes on non-alphanumeric boundaries, keeps a
/// token if it is a known domain keyword or longer than four characters, and
/// returns the Jaccard index of the two token sets scaled to 0-100.
///
/// Deterministic and symmetric; performs no I/O and touches no shared state,
/// so it is safe to call from any number of concurrent tasks.
pub fn keyword_similarity(text_a: &str, text_b: &str) -> f64 {
    let keywords_a = extract_keywords(text_a);
    let keywords_b = extract_keywords(text_b);

    if keywords_a.is_empty() || keywords_b.is_empty() {
        return 0.0;
    }

    let intersection = keywords_a.intersection(&keywords_b).count();
    let union = keywords_a.union(&keywords_b).count();

    intersection as f64 / union as f64 * 100.0
}

/// Extract the scoring-relevant token set from a text
fn extract_keywords(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| DOMAIN_KEYWORDS.contains(token) || token.len() > MIN_TOKEN_LENGTH)
        .map(str::to_string)
        .collect()
}
