//! # exercise-matcher
//!
//! Decide whether a free-text exercise name refers to an exercise already in a
//! catalog, or names a new exercise.
//!
//! Workout planners and generative models write the same movement many ways:
//! "DB Bench Press", "Dumbbell bench press", "Bench Press (Dumbbell)". Creating a
//! new catalog row for each spelling fragments a user's training history, while
//! merging distinct movements corrupts it. This crate scores names with a
//! blend of edit distance and significant-word overlap after normalizing case,
//! whitespace, equipment synonyms and punctuation.
//!
//! ## Features
//!
//! - **Normalization**: `db` -> `dumbbell`, `bb` -> `barbell`, parenthesized notes dropped
//! - **Blended scoring**: 40% lexical similarity, 60% word overlap
//! - **Best match / batch match**: threshold-based decisions against a catalog
//! - **Resolution**: sequential matching that grows the catalog with new exercises
//! - **Parsing**: TSV/CSV catalogs, name lists and generative-model JSON output
//!
//! ## Example
//!
//! ```rust
//! use exercise_matcher::{find_best_match, similarity, CatalogExercise, DEFAULT_THRESHOLD};
//!
//! let catalog = vec![
//!     CatalogExercise::new("1", "Dumbbell Bench Press", "chest"),
//!     CatalogExercise::new("2", "Lat Pulldown", "back"),
//! ];
//!
//! let result = find_best_match("DB Bench Press", &catalog, DEFAULT_THRESHOLD);
//! assert!(!result.is_new_exercise);
//!
//! let result = find_best_match("Turkish Get Up", &catalog, DEFAULT_THRESHOLD);
//! assert!(result.is_new_exercise);
//!
//! assert_eq!(similarity("Bench Press", "bench   press"), 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Exercise catalog storage
//! - [`core`]: Core data types
//! - [`matching`]: Normalization, scoring and matching
//! - [`parsing`]: Catalog and name list parsers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::ExerciseCatalog;
pub use crate::core::exercise::CatalogExercise;
pub use crate::core::types::*;
pub use crate::matching::engine::{
    find_best_match, match_batch, BatchMatchResult, MatchResult, MatchingConfig, MatchingEngine,
    ScoringWeights, DEFAULT_THRESHOLD,
};
pub use crate::matching::resolver::{resolve_names, Resolution};
pub use crate::matching::scoring::{similarity, NameScore};
