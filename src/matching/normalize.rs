//! Exercise name normalization.
//!
//! Names coming from a generative model rarely match catalog spelling exactly:
//! "DB Bench Press", "dumbbell bench-press" and "Dumbbell Bench Press (3x10)"
//! should all compare as the same exercise. [`normalize`] folds these variations
//! into one canonical spelling before any scoring happens.

use lazy_static::lazy_static;
use regex::Regex;

/// Equipment spellings and the canonical word they fold into.
///
/// `cable` and `machine` map to themselves so every equipment term goes through
/// the same rule table.
pub const EQUIPMENT_SYNONYMS: &[(&[&str], &str)] = &[
    (&["dumbbell", "dumbell", "db"], "dumbbell"),
    (&["barbell", "bb"], "barbell"),
    (&["cable"], "cable"),
    (&["machine"], "machine"),
];

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
    static ref PARENTHESIZED_RE: Regex =
        Regex::new(r"\([^)]*\)").expect("parenthesis pattern is valid");
    static ref SYNONYM_RULES: Vec<(Regex, &'static str)> = EQUIPMENT_SYNONYMS
        .iter()
        .map(|(variants, canonical)| {
            let pattern = format!(r"(?i)\b(?:{})\b", variants.join("|"));
            let re = Regex::new(&pattern).expect("synonym pattern is valid");
            (re, *canonical)
        })
        .collect();
}

/// Normalize an exercise name into a stable, comparable spelling.
///
/// Steps, in order:
/// 1. Lowercase
/// 2. Collapse whitespace runs into a single space
/// 3. Fold equipment synonyms (`db` -> `dumbbell`, `bb` -> `barbell`, ...)
/// 4. Drop parenthesized text, e.g. "(150g)"
/// 5. Drop everything except `a-z`, `0-9` and spaces
/// 6. Trim
///
/// Never fails; empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use exercise_matcher::matching::normalize::normalize;
///
/// assert_eq!(normalize("DB  Bench-Press"), "dumbbell benchpress");
/// assert_eq!(normalize("Chicken Breast (150g)"), "chicken breast");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut text = WHITESPACE_RE.replace_all(&lowered, " ").into_owned();

    for (re, canonical) in SYNONYM_RULES.iter() {
        text = re.replace_all(&text, *canonical).into_owned();
    }

    let text = PARENTHESIZED_RE.replace_all(&text, "");

    text.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split text into lowercase whitespace-separated tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
