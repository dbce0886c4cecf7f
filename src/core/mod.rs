//! Core data types for exercise name matching.
//!
//! - [`CatalogExercise`]: One known exercise (id, name, muscle group, equipment)
//! - [`ExerciseId`]: Opaque catalog identifier
//! - [`Confidence`]: Coarse classification of a similarity score
//!
//! [`CatalogExercise`]: exercise::CatalogExercise
//! [`ExerciseId`]: types::ExerciseId
//! [`Confidence`]: types::Confidence

pub mod exercise;
pub mod types;
