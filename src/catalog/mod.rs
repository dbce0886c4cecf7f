//! Exercise catalog storage.
//!
//! The catalog holds the known exercises a candidate name is matched against.
//! A default catalog of common strength exercises is compiled into the binary;
//! custom catalogs can be loaded from JSON (or TSV/CSV via [`crate::parsing::tsv`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use exercise_matcher::ExerciseCatalog;
//! use exercise_matcher::core::types::ExerciseId;
//! use std::path::Path;
//!
//! // Load embedded catalog
//! let catalog = ExerciseCatalog::load_embedded().unwrap();
//! for exercise in catalog.exercises() {
//!     println!("{} ({})", exercise.name, exercise.muscle_group);
//! }
//!
//! let squat = catalog.get(&ExerciseId::new("barbell-back-squat"));
//!
//! // Export, edit, and load a custom catalog
//! let json = catalog.to_json().unwrap();
//! let custom = ExerciseCatalog::load_from_file(Path::new("my_exercises.json")).unwrap();
//! ```

pub mod store;
