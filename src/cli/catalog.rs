use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::ExerciseCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::exercise::CatalogExercise;
use crate::core::types::ExerciseId;
use crate::matching::engine::MatchingEngine;
use crate::parsing;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all exercises in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by muscle group (e.g., "legs")
        #[arg(long)]
        muscle_group: Option<String>,
    },

    /// Show details of a specific exercise
    Show {
        /// Exercise ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Also list the N most similar other exercises
        #[arg(long, default_value = "0")]
        similar: usize,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Build a JSON catalog from a TSV or CSV file (id, name, muscle_group, [equipment])
    Import {
        /// TSV or CSV file with one exercise per line
        #[arg(required = true)]
        input: PathBuf,

        /// Output catalog file
        #[arg(short, long, required = true)]
        output: PathBuf,

        /// Append to an existing catalog instead of starting empty
        #[arg(long)]
        append_to: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

/// Execute catalog subcommands
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the operation fails.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            catalog,
            muscle_group,
        } => run_list(catalog, muscle_group.as_deref(), format, verbose),
        CatalogCommands::Show {
            id,
            catalog,
            similar,
        } => run_show(&id, catalog, similar, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
        CatalogCommands::Import {
            input,
            output,
            append_to,
            force,
        } => run_import(input, output, append_to, force, verbose),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    muscle_group: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} exercises", catalog.len());
    }

    let filtered: Vec<&CatalogExercise> = match muscle_group {
        Some(group) => catalog.by_muscle_group(group).collect(),
        None => catalog.exercises().iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = filtered
                .iter()
                .map(|e| e.id.as_str().chars().count())
                .max()
                .unwrap_or(2)
                .max(2);
            let name_width = filtered
                .iter()
                .map(|e| e.name.chars().count().min(35))
                .max()
                .unwrap_or(4)
                .max(4);
            let group_width = filtered
                .iter()
                .map(|e| e.muscle_group.chars().count())
                .max()
                .unwrap_or(12)
                .max(12);

            let total_width = id_width + name_width + group_width + 9 + 3;

            println!("Exercise Catalog ({} exercises)\n", filtered.len());
            println!(
                "{:<id_w$} {:<name_w$} {:<grp_w$} {}",
                "ID",
                "Name",
                "Muscle Group",
                "Equipment",
                id_w = id_width,
                name_w = name_width,
                grp_w = group_width
            );
            println!("{}", "-".repeat(total_width));

            for e in &filtered {
                println!(
                    "{:<id_w$} {:<name_w$} {:<grp_w$} {}",
                    e.id.as_str(),
                    truncate(&e.name, name_width),
                    e.muscle_group,
                    e.equipment.as_deref().unwrap_or("-"),
                    id_w = id_width,
                    name_w = name_width,
                    grp_w = group_width
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tmuscle_group\tequipment");
            for e in &filtered {
                println!(
                    "{}\t{}\t{}\t{}",
                    e.id,
                    e.name,
                    e.muscle_group,
                    e.equipment.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    id: &str,
    catalog_path: Option<PathBuf>,
    similar: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let exercise = catalog
        .get(&ExerciseId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Exercise not found: {id}"))?;

    // Rank one extra candidate so the exercise itself can be dropped
    let neighbours: Vec<(&CatalogExercise, f64)> = if similar > 0 {
        MatchingEngine::new(catalog.exercises())
            .rank(&exercise.name, similar + 1)
            .into_iter()
            .filter(|c| c.exercise.id != exercise.id)
            .take(similar)
            .map(|c| (c.exercise, c.score.composite))
            .collect()
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Text => {
            println!("ID:           {}", exercise.id);
            println!("Name:         {}", exercise.name);
            println!("Muscle group: {}", exercise.muscle_group);
            println!(
                "Equipment:    {}",
                exercise.equipment.as_deref().unwrap_or("-")
            );

            if !neighbours.is_empty() {
                println!("\nMost similar:");
                for (other, score) in &neighbours {
                    println!("  {:>6.1}%  {} [{}]", score, other.name, other.id);
                }
            }
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_value(exercise)?;
            if similar > 0 {
                json["similar"] = neighbours
                    .iter()
                    .map(|(other, score)| {
                        serde_json::json!({
                            "id": other.id,
                            "name": other.name,
                            "score": score,
                        })
                    })
                    .collect();
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tmuscle_group\tequipment");
            println!(
                "{}\t{}\t{}\t{}",
                exercise.id,
                exercise.name,
                exercise.muscle_group,
                exercise.equipment.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} exercises to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn run_import(
    input: PathBuf,
    output: PathBuf,
    append_to: Option<PathBuf>,
    force: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    if output.exists() && !force && append_to.as_ref() != Some(&output) {
        anyhow::bail!(
            "Output file {} already exists. Use --force to overwrite.",
            output.display()
        );
    }

    let delimiter = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => ',',
        _ => '\t',
    };
    let exercises = parsing::tsv::parse_catalog_file(&input, delimiter)?;

    if verbose {
        eprintln!(
            "Parsed {} exercises from {}",
            exercises.len(),
            input.display()
        );
    }

    let mut catalog = match &append_to {
        Some(path) => ExerciseCatalog::load_from_file(path)?,
        None => ExerciseCatalog::new(),
    };
    let existing = catalog.len();

    for exercise in exercises {
        catalog.add_exercise(exercise)?;
    }

    std::fs::write(&output, catalog.to_json()?)?;

    println!(
        "Imported {} exercises ({} total) to {}",
        catalog.len() - existing,
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
