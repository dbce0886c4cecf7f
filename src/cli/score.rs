//! Score command - show how two exercise names compare.
//!
//! Prints the normalized forms of both names and each component of the blended
//! similarity score, without consulting a catalog. Useful for tuning thresholds.

use clap::Args;

use crate::cli::{OutputFormat, WeightArgs};
use crate::matching::engine::{ScoringWeights, DEFAULT_THRESHOLD};
use crate::matching::scoring::{edit_distance, NameScore};
use crate::utils::validation::parse_threshold;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Candidate name (e.g. as written by a workout generator)
    #[arg(required = true)]
    pub search: String,

    /// Catalog name to compare against
    #[arg(required = true)]
    pub catalog_name: String,

    /// Threshold used to report whether the pair would match
    #[arg(short, long, default_value = "70", value_parser = parse_threshold)]
    pub threshold: f64,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let weights = args.weights.to_weights();

    if verbose {
        let norm = weights.normalized();
        eprintln!(
            "Scoring weights: {:.0}% lexical, {:.0}% overlap",
            norm.lexical * 100.0,
            norm.word_overlap * 100.0,
        );
        if (args.threshold - DEFAULT_THRESHOLD).abs() > f64::EPSILON {
            eprintln!("Using non-default threshold {:.1}", args.threshold);
        }
    }

    let score = NameScore::calculate_with_weights(&args.search, &args.catalog_name, &weights);
    let distance = edit_distance(&score.normalized_search, &score.normalized_catalog);
    let is_match = score.composite >= args.threshold;

    match format {
        OutputFormat::Text => print_text(&args, &score, distance, is_match, &weights),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "search": args.search,
                "catalog_name": args.catalog_name,
                "normalized_search": score.normalized_search,
                "normalized_catalog": score.normalized_catalog,
                "edit_distance": distance,
                "lexical": score.lexical,
                "word_overlap": score.word_overlap,
                "composite": score.composite,
                "exact": score.exact,
                "confidence": format!("{}", score.confidence),
                "threshold": args.threshold,
                "is_match": is_match,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("search\tcatalog_name\tlexical\tword_overlap\tcomposite\texact\tis_match");
            println!(
                "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}\t{}",
                args.search,
                args.catalog_name,
                score.lexical,
                score.word_overlap,
                score.composite,
                score.exact,
                is_match
            );
        }
    }

    Ok(())
}

fn print_text(
    args: &ScoreArgs,
    score: &NameScore,
    distance: usize,
    is_match: bool,
    weights: &ScoringWeights,
) {
    let norm = weights.normalized();

    println!("Scoring: {:?} vs {:?}\n", args.search, args.catalog_name);
    println!("  Normalized:    {:?} vs {:?}", score.normalized_search, score.normalized_catalog);

    if score.exact {
        println!("  Exact match after normalization");
    } else {
        println!("  Edit distance: {distance}");
        println!(
            "  Lexical:       {:>6.2}  (weight {:.0}%)",
            score.lexical,
            norm.lexical * 100.0
        );
        println!(
            "  Word overlap:  {:>6.2}  (weight {:.0}%)",
            score.word_overlap,
            norm.word_overlap * 100.0
        );
    }

    println!("  Composite:     {:>6.2}  ({})", score.composite, score.confidence);
    println!(
        "\n  {} at threshold {:.1}",
        if is_match { "MATCH" } else { "NO MATCH" },
        args.threshold
    );
}
