//! Parsers for exercise catalogs and candidate name lists.
//!
//! - **TSV/CSV catalogs**: `id, name, muscle_group, [equipment]` rows
//! - **Plain name lists**: one candidate name per line
//! - **Generated names**: JSON produced by a generative model, either a list of
//!   names or a list of objects carrying a `name` field
//!
//! ## Example
//!
//! ```rust
//! use exercise_matcher::parsing::names::parse_generated_names;
//!
//! let reply = "```json\n[{\"name\": \"DB Bench Press\", \"sets\": 3}, {\"name\": \"Plank\"}]\n```";
//! let names = parse_generated_names(reply).unwrap();
//! assert_eq!(names, vec!["DB Bench Press", "Plank"]);
//! ```

use thiserror::Error;

pub mod names;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Too many entries: {0} exceeds maximum allowed")]
    TooManyEntries(usize),
}
