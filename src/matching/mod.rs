//! Exercise name matching.
//!
//! - [`normalize`]: Canonical spelling of a name (case, whitespace, equipment synonyms, punctuation)
//! - [`scoring`]: Edit distance, lexical and word-overlap similarity, and the blended score
//! - [`engine`]: Best-match and batch matching against a catalog
//! - [`resolver`]: Sequential matching that creates catalog entries for unmatched names
//!
//! ## Scoring
//!
//! Both names are normalized first. Identical normalized names score exactly 100.
//! Otherwise the score blends two components:
//!
//! - **Lexical** (40%): `(max_len - edit_distance) / max_len`
//! - **Word overlap** (60%): share of significant words (3+ characters) found on
//!   both sides, tolerating small spelling differences
//!
//! A name whose best score is below the threshold (default 70) is a new exercise.
//!
//! ## Example
//!
//! ```rust
//! use exercise_matcher::{CatalogExercise, MatchingEngine};
//!
//! let catalog = vec![
//!     CatalogExercise::new("1", "Barbell Back Squat", "legs"),
//!     CatalogExercise::new("2", "Leg Press", "legs"),
//! ];
//!
//! let engine = MatchingEngine::new(&catalog);
//! let result = engine.find_best_match("BB Back Squat");
//!
//! assert!(!result.is_new_exercise);
//! assert_eq!(result.matched_exercise.unwrap().name, "Barbell Back Squat");
//! ```

pub mod engine;
pub mod normalize;
pub mod resolver;
pub mod scoring;

pub use engine::{find_best_match, match_batch, BatchMatchResult, MatchResult, DEFAULT_THRESHOLD};
pub use scoring::similarity;
