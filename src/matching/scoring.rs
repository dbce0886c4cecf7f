use crate::core::types::Confidence;
use crate::matching::engine::ScoringWeights;
use crate::matching::normalize::{normalize, tokenize};

/// Tokens this short ("of", "an", "db") carry no meaning for overlap scoring
pub const MIN_TOKEN_LEN: usize = 3;

/// Lexical similarity above which two tokens count as the same word
pub const FUZZY_TOKEN_THRESHOLD: f64 = 80.0;

/// Score returned for identical normalized names
pub const PERFECT_SCORE: f64 = 100.0;

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Detailed similarity scores between a candidate name and a catalog name
#[derive(Debug, Clone, PartialEq)]
pub struct NameScore {
    /// Normalized form of the candidate name
    pub normalized_search: String,

    /// Normalized form of the catalog name
    pub normalized_catalog: String,

    /// Character-level similarity of the normalized names (0-100)
    pub lexical: f64,

    /// Significant-word overlap of the normalized names (0-100)
    pub word_overlap: f64,

    /// Weighted blend of the two, or exactly 100 for identical normalized names
    pub composite: f64,

    /// True when the normalized names are identical
    pub exact: bool,

    /// Confidence level derived from the composite score
    pub confidence: Confidence,
}

impl NameScore {
    /// Score a candidate against a catalog name with the default weights
    #[must_use]
    pub fn calculate(search_name: &str, catalog_name: &str) -> Self {
        Self::calculate_with_weights(search_name, catalog_name, &ScoringWeights::default())
    }

    /// Score a candidate against a catalog name with custom weights
    #[must_use]
    pub fn calculate_with_weights(
        search_name: &str,
        catalog_name: &str,
        weights: &ScoringWeights,
    ) -> Self {
        Self::from_normalized_search(&normalize(search_name), catalog_name, weights)
    }

    /// Score an already-normalized candidate against a catalog name.
    ///
    /// Lets a caller scanning a whole catalog normalize the candidate once.
    #[must_use]
    pub fn from_normalized_search(
        normalized_search: &str,
        catalog_name: &str,
        weights: &ScoringWeights,
    ) -> Self {
        let normalized_search = normalized_search.to_string();
        let normalized_catalog = normalize(catalog_name);

        // Identical normalized forms short-circuit; the blend is never compared to 100
        if normalized_search == normalized_catalog {
            return Self {
                normalized_search,
                normalized_catalog,
                lexical: PERFECT_SCORE,
                word_overlap: PERFECT_SCORE,
                composite: PERFECT_SCORE,
                exact: true,
                confidence: Confidence::Exact,
            };
        }

        let lexical = lexical_similarity(&normalized_search, &normalized_catalog);
        let word_overlap = word_overlap_similarity(&normalized_search, &normalized_catalog);

        let weights = weights.normalized();
        let composite = weights.lexical * lexical + weights.word_overlap * word_overlap;

        Self {
            normalized_search,
            normalized_catalog,
            lexical,
            word_overlap,
            composite,
            exact: false,
            confidence: Confidence::from_score(composite),
        }
    }
}

/// Blended similarity (0-100) between a candidate name and a catalog name.
///
/// Both names are normalized first. Identical normalized forms (including two
/// empty strings) score exactly 100; otherwise the score is
/// `0.4 * lexical + 0.6 * word_overlap`.
///
/// # Examples
///
/// ```
/// use exercise_matcher::matching::scoring::similarity;
///
/// assert_eq!(similarity("DB Bench Press", "Dumbbell Bench Press"), 100.0);
/// assert!(similarity("Bench Press", "Leg Curl") < 50.0);
/// ```
#[must_use]
pub fn similarity(search_name: &str, catalog_name: &str) -> f64 {
    NameScore::calculate(search_name, catalog_name).composite
}

/// Levenshtein distance with unit-cost insertion, deletion and substitution.
///
/// Operates on Unicode scalar values and is case-sensitive; callers lowercase first.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Character-level similarity: `(max_len - distance) / max_len * 100`.
///
/// Case-insensitive. Two empty strings are identical (100).
#[must_use]
pub fn lexical_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return PERFECT_SCORE;
    }

    // Levenshtein distance never exceeds the longer length, so this stays in [0, 100]
    let distance = edit_distance(&a, &b).min(max_len);
    count_to_f64(max_len - distance) / count_to_f64(max_len) * 100.0
}

/// Fraction (0-100) of significant words shared by two names.
///
/// Tokens of two characters or fewer are ignored. Each token of `a` counts once
/// if `b` has an identical token or one with lexical similarity above 80, which
/// tolerates small spelling differences.
#[must_use]
pub fn word_overlap_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = significant_tokens(a);
    let tokens_b = significant_tokens(b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let matches = tokens_a
        .iter()
        .filter(|token_a| {
            tokens_b.iter().any(|token_b| {
                token_a == &token_b || lexical_similarity(token_a, token_b) > FUZZY_TOKEN_THRESHOLD
            })
        })
        .count();

    count_to_f64(matches) / count_to_f64(tokens_a.len().max(tokens_b.len())) * 100.0
}

/// Tokens long enough to take part in word-overlap scoring
pub fn significant_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}
