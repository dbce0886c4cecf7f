//! Match command - decide which catalog exercise each candidate name refers to.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{is_stdin, load_catalog, read_stdin, OutputFormat, WeightArgs};
use crate::core::exercise::CatalogExercise;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
use crate::matching::resolver::{new_exercise_factory, resolve_names, Resolution};
use crate::parsing;
use crate::utils::validation::{check_name_count, parse_threshold};

/// Arguments for the match command
#[derive(Args)]
pub struct MatchArgs {
    /// Exercise names to match
    pub names: Vec<String>,

    /// File with one exercise name per line ("-" for stdin)
    #[arg(long)]
    pub names_file: Option<PathBuf>,

    /// JSON reply from a workout generator: an array of names, an array of
    /// objects with a "name" field, or {"exercises": [...]} ("-" for stdin)
    #[arg(long)]
    pub generated: Option<PathBuf>,

    /// Path to custom catalog file (JSON, TSV or CSV)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Minimum similarity (0-100) for accepting a catalog match
    #[arg(short, long, default_value = "70", value_parser = parse_threshold)]
    pub threshold: f64,

    /// Number of runner-up candidates to show per name
    #[arg(short = 'n', long, default_value = "0")]
    pub candidates: usize,

    /// Resolve names in order, adding unmatched names to the catalog so later
    /// names can match them
    #[arg(long)]
    pub resolve: bool,

    /// Muscle group for exercises created by --resolve
    #[arg(long, default_value = "other", requires = "resolve")]
    pub muscle_group: String,

    /// Write the resolved catalog to this file (JSON)
    #[arg(long, requires = "resolve")]
    pub save: Option<PathBuf>,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if the catalog or name inputs cannot be read, or no names are given.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let names = collect_names(&args)?;
    if names.is_empty() {
        anyhow::bail!("No exercise names given; pass names, --names-file or --generated");
    }
    if let Some(msg) = check_name_count(names.len()) {
        anyhow::bail!(msg);
    }

    let mut catalog = load_catalog(args.catalog.as_deref())?;

    let config = MatchingConfig {
        threshold: args.threshold,
        scoring_weights: args.weights.to_weights(),
    };

    if verbose {
        let weights = config.scoring_weights.normalized();
        eprintln!("Loaded catalog with {} exercises", catalog.len());
        eprintln!(
            "Matching {} names (threshold {:.1}, weights {:.0}% lexical, {:.0}% overlap)",
            names.len(),
            config.threshold,
            weights.lexical * 100.0,
            weights.word_overlap * 100.0,
        );
    }

    if args.resolve {
        let resolutions = resolve_names(
            &names,
            &mut catalog,
            &config,
            new_exercise_factory(args.muscle_group.as_str()),
        )?;

        print_resolutions(&resolutions, format)?;

        if let Some(path) = &args.save {
            std::fs::write(path, catalog.to_json()?)?;
            if verbose {
                eprintln!("Saved catalog with {} exercises to {}", catalog.len(), path.display());
            }
        }
        return Ok(());
    }

    let engine = MatchingEngine::with_config(catalog.exercises(), config);
    let batch = engine.match_batch(&names);

    // Report in input order, once per distinct name
    let mut seen = HashSet::new();
    let rows: Vec<(&str, &MatchResult)> = names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .filter_map(|name| batch.get(name).map(|result| (name.as_str(), result)))
        .collect();

    match format {
        OutputFormat::Text => print_text(&rows, &engine, args.candidates),
        OutputFormat::Json => print_json(&rows, &engine, args.candidates)?,
        OutputFormat::Tsv => print_tsv(&rows),
    }

    Ok(())
}

fn collect_names(args: &MatchArgs) -> anyhow::Result<Vec<String>> {
    if let (Some(names_file), Some(generated)) = (&args.names_file, &args.generated) {
        if is_stdin(names_file) && is_stdin(generated) {
            anyhow::bail!("--names-file and --generated cannot both read from stdin ('-')");
        }
    }

    let mut names: Vec<String> = args
        .names
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    if let Some(path) = &args.names_file {
        let parsed = if is_stdin(path) {
            parsing::names::parse_names_text(&read_stdin()?)?
        } else {
            parsing::names::parse_names_file(path)?
        };
        names.extend(parsed);
    }
    if let Some(path) = &args.generated {
        let parsed = if is_stdin(path) {
            parsing::names::parse_generated_names(&read_stdin()?)?
        } else {
            parsing::names::parse_generated_file(path)?
        };
        names.extend(parsed);
    }

    Ok(names)
}

fn describe(exercise: &CatalogExercise) -> String {
    format!("{} [{}]", exercise.name, exercise.id)
}

fn print_text(rows: &[(&str, &MatchResult)], engine: &MatchingEngine<'_>, candidates: usize) {
    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count().min(40))
        .max()
        .unwrap_or(4)
        .max(4);

    let matched = rows.iter().filter(|(_, r)| !r.is_new_exercise).count();
    println!(
        "Matched {} of {} names (threshold {:.1})\n",
        matched,
        rows.len(),
        engine.config().threshold
    );

    for (name, result) in rows {
        let target = match &result.matched_exercise {
            Some(exercise) => describe(exercise),
            None => "NEW EXERCISE".to_string(),
        };
        println!(
            "{:<name_w$}  ->  {}  ({:.1}%, {})",
            name,
            target,
            result.similarity_score,
            result.confidence(),
            name_w = name_width
        );

        if candidates > 0 {
            for candidate in engine.rank(name, candidates) {
                println!(
                    "    {:>6.1}%  {}  (lexical {:.1}, overlap {:.1})",
                    candidate.score.composite,
                    describe(candidate.exercise),
                    candidate.score.lexical,
                    candidate.score.word_overlap
                );
            }
        }
    }
}

fn print_json(
    rows: &[(&str, &MatchResult)],
    engine: &MatchingEngine<'_>,
    candidates: usize,
) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|(name, result)| {
            let mut json = serde_json::json!({
                "name": name,
                "matched_exercise": result.matched_exercise,
                "similarity_score": result.similarity_score,
                "is_new_exercise": result.is_new_exercise,
                "confidence": format!("{}", result.confidence()),
            });
            if candidates > 0 {
                json["candidates"] = engine
                    .rank(name, candidates)
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "id": c.exercise.id,
                            "name": c.exercise.name,
                            "score": c.score.composite,
                            "lexical": c.score.lexical,
                            "word_overlap": c.score.word_overlap,
                        })
                    })
                    .collect();
            }
            json
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(rows: &[(&str, &MatchResult)]) {
    println!("name\tmatched_id\tmatched_name\tscore\tis_new\tconfidence");
    for (name, result) in rows {
        let (id, matched_name) = result
            .matched_exercise
            .as_ref()
            .map_or(("", ""), |e| (e.id.as_str(), e.name.as_str()));
        println!(
            "{}\t{}\t{}\t{:.2}\t{}\t{}",
            name,
            id,
            matched_name,
            result.similarity_score,
            result.is_new_exercise,
            result.confidence()
        );
    }
}

fn print_resolutions(resolutions: &[Resolution], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let created = resolutions.iter().filter(|r| r.created).count();
            println!(
                "Resolved {} names ({} new exercises)\n",
                resolutions.len(),
                created
            );
            for r in resolutions {
                let marker = if r.created { "created" } else { "matched" };
                println!(
                    "{}  ->  {}  ({}, {:.1}%)",
                    r.name,
                    describe(&r.exercise),
                    marker,
                    r.similarity_score
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resolutions)?);
        }
        OutputFormat::Tsv => {
            println!("name\texercise_id\texercise_name\tscore\tcreated");
            for r in resolutions {
                println!(
                    "{}\t{}\t{}\t{:.2}\t{}",
                    r.name, r.exercise.id, r.exercise.name, r.similarity_score, r.created
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(names: Vec<String>) -> MatchArgs {
        MatchArgs {
            names,
            names_file: None,
            generated: None,
            catalog: None,
            threshold: 70.0,
            candidates: 0,
            resolve: false,
            muscle_group: "other".to_string(),
            save: None,
            weights: WeightArgs {
                weight_lexical: 40,
                weight_overlap: 60,
            },
        }
    }

    #[test]
    fn test_collect_names_trims_and_skips_blank() {
        let args = args_with(vec!["  Lat Pulldown ".to_string(), "   ".to_string()]);
        assert_eq!(collect_names(&args).unwrap(), vec!["Lat Pulldown"]);
    }

    #[test]
    fn test_collect_names_rejects_two_stdin_sources() {
        let mut args = args_with(Vec::new());
        args.names_file = Some(PathBuf::from("-"));
        args.generated = Some(PathBuf::from("-"));

        let err = collect_names(&args).unwrap_err();
        assert!(err.to_string().contains("cannot both read from stdin"));
    }

    #[test]
    fn test_describe() {
        let exercise = CatalogExercise::new("lat", "Lat Pulldown", "back");
        assert_eq!(describe(&exercise), "Lat Pulldown [lat]");
    }
}
