//! Normalize command - print the canonical form used for matching.

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::normalize::normalize;
use crate::matching::scoring::significant_tokens;

/// Arguments for the normalize command
#[derive(Args)]
pub struct NormalizeArgs {
    /// Exercise names to normalize
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Execute the normalize command
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: NormalizeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rows: Vec<(&str, String)> = args
        .names
        .iter()
        .map(|name| (name.as_str(), normalize(name)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (name, normalized) in &rows {
                println!("{name}\t{normalized}");
                if verbose {
                    println!("  tokens: {}", significant_tokens(normalized).join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, normalized)| {
                    serde_json::json!({
                        "name": name,
                        "normalized": normalized,
                        "tokens": significant_tokens(normalized),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tnormalized");
            for (name, normalized) in &rows {
                println!("{name}\t{normalized}");
            }
        }
    }

    Ok(())
}
