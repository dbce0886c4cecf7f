use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::exercise::CatalogExercise;
use crate::core::types::Confidence;
use crate::matching::normalize::normalize;
use crate::matching::scoring::{NameScore, PERFECT_SCORE};

/// Default minimum similarity for accepting a catalog match
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Decision for one candidate name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The catalog exercise the name refers to, if any
    pub matched_exercise: Option<CatalogExercise>,

    /// Best similarity score seen (0-100)
    pub similarity_score: f64,

    /// True when no catalog entry was good enough and a new exercise is needed
    pub is_new_exercise: bool,
}

impl MatchResult {
    fn matched(exercise: &CatalogExercise, similarity_score: f64) -> Self {
        Self {
            matched_exercise: Some(exercise.clone()),
            similarity_score,
            is_new_exercise: false,
        }
    }

    fn new_exercise(similarity_score: f64) -> Self {
        Self {
            matched_exercise: None,
            similarity_score,
            is_new_exercise: true,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> Confidence {
        Confidence::from_score(self.similarity_score)
    }
}

/// Candidate name -> decision
pub type BatchMatchResult = HashMap<String, MatchResult>;

/// A catalog entry with its score, as returned by [`MatchingEngine::rank`]
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub exercise: &'a CatalogExercise,
    pub score: NameScore,
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum score (0-100) for accepting a match
    pub threshold: f64,
    /// Blend of lexical and word-overlap similarity
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

impl MatchingConfig {
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Configurable weights for the two similarity components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for character-level (edit distance) similarity
    pub lexical: f64,
    /// Weight for significant-word overlap
    pub word_overlap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lexical: 0.4,      // 40%
            word_overlap: 0.6, // 60%
        }
    }
}

impl ScoringWeights {
    /// Normalize weights to sum to 1.0.
    ///
    /// Negative or non-finite weights, or a zero total, fall back to the defaults
    /// so the blended score stays within 0-100.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        let total = self.lexical + self.word_overlap;

        if !valid(self.lexical) || !valid(self.word_overlap) || total <= 0.0 {
            return Self::default();
        }

        Self {
            lexical: self.lexical / total,
            word_overlap: self.word_overlap / total,
        }
    }
}

/// Matches candidate names against a borrowed catalog
pub struct MatchingEngine<'a> {
    catalog: &'a [CatalogExercise],
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a [CatalogExercise]) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a [CatalogExercise], config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find the catalog exercise a name refers to.
    ///
    /// Scans the catalog in order and keeps the strictly highest score, so the
    /// first entry wins ties. An entry whose normalized name equals the
    /// normalized search name ends the scan with a score of exactly 100.
    pub fn find_best_match(&self, search_name: &str) -> MatchResult {
        let normalized_search = normalize(search_name);
        let mut best: Option<&CatalogExercise> = None;
        let mut best_score = 0.0;

        for exercise in self.catalog {
            let score = NameScore::from_normalized_search(
                &normalized_search,
                &exercise.name,
                &self.config.scoring_weights,
            );

            if score.exact {
                best = Some(exercise);
                best_score = PERFECT_SCORE;
                break;
            }

            if score.composite > best_score {
                best = Some(exercise);
                best_score = score.composite;
            }
        }

        let result = match best {
            Some(exercise) if best_score >= self.config.threshold => {
                MatchResult::matched(exercise, best_score)
            }
            _ => MatchResult::new_exercise(best_score),
        };

        debug!(
            search_name,
            score = result.similarity_score,
            matched = result.matched_exercise.as_ref().map(|e| e.name.as_str()),
            "matched exercise name"
        );

        result
    }

    /// Match every name independently against the full catalog.
    ///
    /// Names are scored in parallel; a repeated name maps to the same result.
    pub fn match_batch<S>(&self, search_names: &[S]) -> BatchMatchResult
    where
        S: AsRef<str> + Sync,
    {
        search_names
            .par_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), self.find_best_match(name))
            })
            .collect()
    }

    /// Score every catalog entry and return the top `limit`, best first.
    /// Equal scores keep catalog order.
    pub fn rank(&self, search_name: &str, limit: usize) -> Vec<RankedCandidate<'a>> {
        let normalized_search = normalize(search_name);
        let mut ranked: Vec<RankedCandidate<'a>> = self
            .catalog
            .iter()
            .map(|exercise| RankedCandidate {
                exercise,
                score: NameScore::from_normalized_search(
                    &normalized_search,
                    &exercise.name,
                    &self.config.scoring_weights,
                ),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .composite
                .partial_cmp(&a.score.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked.truncate(limit);
        ranked
    }
}

/// Find the best catalog match for one name.
///
/// Returns a new-exercise result (score 0) for an empty catalog.
///
/// # Examples
///
/// ```
/// use exercise_matcher::core::exercise::CatalogExercise;
/// use exercise_matcher::matching::engine::{find_best_match, DEFAULT_THRESHOLD};
///
/// let catalog = vec![CatalogExercise::new("1", "Dumbbell Bench Press", "chest")];
/// let result = find_best_match("DB Bench Press", &catalog, DEFAULT_THRESHOLD);
/// assert!(!result.is_new_exercise);
/// assert_eq!(result.similarity_score, 100.0);
/// ```
#[must_use]
pub fn find_best_match(
    search_name: &str,
    catalog: &[CatalogExercise],
    threshold: f64,
) -> MatchResult {
    MatchingEngine::with_config(catalog, MatchingConfig::with_threshold(threshold))
        .find_best_match(search_name)
}

/// Match many names against the same catalog
#[must_use]
pub fn match_batch<S>(
    search_names: &[S],
    catalog: &[CatalogExercise],
    threshold: f64,
) -> BatchMatchResult
where
    S: AsRef<str> + Sync,
{
    MatchingEngine::with_config(catalog, MatchingConfig::with_threshold(threshold))
        .match_batch(search_names)
}
