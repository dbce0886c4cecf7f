use std::path::Path;

use serde_json::Value;

use crate::parsing::ParseError;
use crate::utils::validation::check_name_limit;

/// Read candidate names from a file, one per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_names_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_names_text(&content)
}

/// Parse candidate names, one per line. Blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_names_text(text: &str) -> Result<Vec<String>, ParseError> {
    let names = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string);
    collect_limited(names)
}

/// Read generated names from a file (see [`parse_generated_names`])
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`parse_generated_names`].
pub fn parse_generated_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_generated_names(&content)
}

/// Extract exercise names from generative-model output.
///
/// Accepted shapes, optionally wrapped in a Markdown code fence:
/// - `["Bench Press", "Squat"]`
/// - `[{"name": "Bench Press", "sets": 3}, ...]`
/// - `{"exercises": [...]}` holding either of the above
///
/// Blank names are dropped.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not JSON,
/// `ParseError::InvalidFormat` if the JSON has none of the shapes above, or
/// `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_generated_names(text: &str) -> Result<Vec<String>, ParseError> {
    let value: Value = serde_json::from_str(extract_json(text))?;

    let items = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("exercises") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "Expected an 'exercises' array".to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "Expected a JSON array or object".to_string(),
            ))
        }
    };

    let mut names = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let name = match item {
            Value::String(name) => name.as_str(),
            Value::Object(map) => map.get("name").and_then(Value::as_str).ok_or_else(|| {
                ParseError::InvalidFormat(format!("Item {} has no 'name' string", i + 1))
            })?,
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Item {} is neither a string nor an object",
                    i + 1
                )))
            }
        };
        names.push(name.trim().to_string());
    }

    collect_limited(names.into_iter().filter(|name| !name.is_empty()))
}

/// Locate the JSON payload in a model reply.
///
/// Prefers the body of a ```` ```json ```` (or bare ```` ``` ````) fence anywhere in
/// the text, then the outermost `[...]` or `{...}`. Falls back to the trimmed text.
fn extract_json(text: &str) -> &str {
    for marker in ["```json", "```"] {
        if let Some(start_marker) = text.find(marker) {
            let start = start_marker + marker.len();
            if let Some(end_offset) = text[start..].find("```") {
                // Skip an info string such as "JSON" after a bare fence
                return text[start..start + end_offset]
                    .trim_start()
                    .trim_start_matches(|c: char| c.is_ascii_alphabetic())
                    .trim();
            }
        }
    }

    let open = match (text.find('['), text.find('{')) {
        (Some(a), Some(o)) => Some(a.min(o)),
        (a, o) => a.or(o),
    };
    if let Some(start) = open {
        let close = if text[start..].starts_with('[') { ']' } else { '}' };
        if let Some(end) = text.rfind(close) {
            if end > start {
                return &text[start..=end];
            }
        }
    }

    text.trim()
}

fn collect_limited(names: impl Iterator<Item = String>) -> Result<Vec<String>, ParseError> {
    let mut collected = Vec::new();
    for name in names {
        if check_name_limit(collected.len()).is_some() {
            return Err(ParseError::TooManyEntries(collected.len()));
        }
        collected.push(name);
    }
    Ok(collected)
}
