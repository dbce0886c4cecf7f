//! Command-line interface for exercise-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Match exercise names against the catalog
//! - **score**: Show the similarity breakdown for two names
//! - **normalize**: Print the normalized form of names
//! - **catalog**: List, show, or export exercises from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Match names against the embedded catalog
//! exercise-matcher match "DB Bench Press" "Lat Pulldowns"
//!
//! # Match names from a model reply, JSON output for scripting
//! exercise-matcher match --generated reply.json --format json
//!
//! # Resolve names, creating catalog entries for new exercises
//! exercise-matcher match --names-file workout.txt --catalog mine.json --resolve --save mine.json
//!
//! # Inspect a score
//! exercise-matcher score "Back Squat (Barbell)" "Barbell Back Squat"
//! ```

use std::io::Read;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::ExerciseCatalog;
use crate::matching::engine::ScoringWeights;
use crate::parsing;

pub mod catalog;
pub mod match_names;
pub mod normalize;
pub mod score;

#[derive(Parser)]
#[command(name = "exercise-matcher")]
#[command(version)]
#[command(about = "Match free-text exercise names against an exercise catalog")]
#[command(
    long_about = "exercise-matcher decides whether a free-text exercise name (for example one written by a workout planner or a generative model) refers to an exercise already in your catalog.\n\nNames are normalized (case, whitespace, equipment synonyms such as DB/BB, parenthesized notes, punctuation) and scored with a blend of edit distance and word overlap. Names scoring below the threshold are reported as new exercises."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match exercise names against the catalog
    Match(match_names::MatchArgs),

    /// Show the similarity breakdown for two names
    Score(score::ScoreArgs),

    /// Print the normalized form of exercise names
    Normalize(normalize::NormalizeArgs),

    /// Manage the exercise catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scoring weight options shared by `match` and `score`
#[derive(clap::Args, Clone, Debug)]
pub struct WeightArgs {
    /// Weight for character-level similarity (0-100, default 40)
    #[arg(long, default_value = "40", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_lexical: u32,

    /// Weight for significant-word overlap (0-100, default 60)
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_overlap: u32,
}

impl WeightArgs {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            lexical: f64::from(self.weight_lexical) / 100.0,
            word_overlap: f64::from(self.weight_overlap) / 100.0,
        }
    }
}

/// Load a catalog from a JSON, TSV or CSV file, or the embedded catalog when no path is given
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<ExerciseCatalog> {
    let Some(path) = path else {
        return Ok(ExerciseCatalog::load_embedded()?);
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let catalog = match ext.as_deref() {
        Some("tsv") => ExerciseCatalog::from_exercises(parsing::tsv::parse_catalog_file(path, '\t')?)?,
        Some("csv") => ExerciseCatalog::from_exercises(parsing::tsv::parse_catalog_file(path, ',')?)?,
        _ => ExerciseCatalog::load_from_file(path)?,
    };
    Ok(catalog)
}

/// True when a path argument names stdin (`-`)
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read all of stdin
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
