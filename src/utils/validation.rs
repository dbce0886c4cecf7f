//! Centralized validation and input limits.

/// Maximum number of exercises accepted in one catalog
pub const MAX_CATALOG_ENTRIES: usize = 100_000;

/// Maximum number of candidate names accepted in one batch
pub const MAX_NAMES: usize = 10_000;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Threshold must be a number, got '{0}'")]
    ThresholdNotANumber(String),
    #[error("Threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(f64),
}

/// Parse and validate a similarity threshold (0-100).
///
/// Used as a clap value parser.
///
/// # Errors
///
/// Returns `ValidationError::ThresholdNotANumber` if the input does not parse, or
/// `ValidationError::ThresholdOutOfRange` if it is not a finite value in [0, 100].
///
/// # Examples
///
/// ```
/// use exercise_matcher::utils::validation::parse_threshold;
///
/// assert_eq!(parse_threshold("70").unwrap(), 70.0);
/// assert!(parse_threshold("101").is_err());
/// assert!(parse_threshold("high").is_err());
/// ```
pub fn parse_threshold(s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| ValidationError::ThresholdNotANumber(s.to_string()))?;

    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ThresholdOutOfRange(value))
    }
}

/// Check if adding another catalog entry would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new entry.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_catalog_limit(count: usize) -> Option<String> {
    if count >= MAX_CATALOG_ENTRIES {
        Some(format!(
            "Too many exercises: adding another would exceed maximum of {MAX_CATALOG_ENTRIES}"
        ))
    } else {
        None
    }
}

/// Check if adding another candidate name would exceed the maximum allowed.
#[must_use]
pub fn check_name_limit(count: usize) -> Option<String> {
    if count >= MAX_NAMES {
        Some(format!(
            "Too many names: adding another would exceed maximum of {MAX_NAMES}"
        ))
    } else {
        None
    }
}

/// Check a complete list of candidate names against the maximum allowed.
///
/// Returns an error message if `count` exceeds the limit, None if it fits.
#[must_use]
pub fn check_name_count(count: usize) -> Option<String> {
    if count > MAX_NAMES {
        Some(format!(
            "Too many names: {count} exceeds maximum of {MAX_NAMES}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert!((parse_threshold("0").unwrap() - 0.0).abs() < f64::EPSILON);
        assert!((parse_threshold(" 85.5 ").unwrap() - 85.5).abs() < f64::EPSILON);
        assert!((parse_threshold("100").unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_threshold_rejects() {
        assert!(matches!(
            parse_threshold("-1"),
            Err(ValidationError::ThresholdOutOfRange(_))
        ));
        assert!(matches!(
            parse_threshold("NaN"),
            Err(ValidationError::ThresholdOutOfRange(_))
        ));
        assert!(matches!(
            parse_threshold("seventy"),
            Err(ValidationError::ThresholdNotANumber(_))
        ));
    }

    #[test]
    fn test_limits() {
        assert!(check_catalog_limit(0).is_none());
        assert!(check_catalog_limit(MAX_CATALOG_ENTRIES - 1).is_none());
        assert!(check_catalog_limit(MAX_CATALOG_ENTRIES).is_some());
        assert!(check_name_limit(MAX_NAMES).is_some());
    }

    #[test]
    fn test_check_name_count_allows_exactly_max() {
        assert!(check_name_count(MAX_NAMES).is_none());
        assert!(check_name_count(MAX_NAMES + 1).is_some());
    }
}
