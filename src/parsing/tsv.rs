use std::path::Path;

use crate::core::exercise::CatalogExercise;
use crate::parsing::ParseError;
use crate::utils::validation::check_catalog_limit;

/// Parse a TSV/CSV catalog file with columns: id, name, `muscle_group`, [equipment]
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_catalog_file(
    path: &Path,
    delimiter: char,
) -> Result<Vec<CatalogExercise>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog_text(&content, delimiter)
}

/// Parse TSV/CSV text with columns: id, name, `muscle_group`, [equipment]
///
/// Blank lines and `#` comments are skipped, and a leading header row
/// (first field `id`) is ignored.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if lines have fewer than 3 fields, have an
/// empty id or name, or no exercises are found, or
/// `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_catalog_text(
    text: &str,
    delimiter: char,
) -> Result<Vec<CatalogExercise>, ParseError> {
    let mut exercises = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            if fields.first().is_some_and(|f| f.eq_ignore_ascii_case("id")) {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 3 fields"
            )));
        }

        if fields[0].is_empty() || fields[1].is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty id or name"
            )));
        }

        let mut exercise = CatalogExercise::new(fields[0], fields[1], fields[2]);

        // Optional equipment in fourth column
        if let Some(equipment) = fields.get(3).filter(|e| !e.is_empty()) {
            exercise = exercise.with_equipment(*equipment);
        }

        if check_catalog_limit(exercises.len()).is_some() {
            return Err(ParseError::TooManyEntries(exercises.len()));
        }

        exercises.push(exercise);
    }

    if exercises.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No exercises found in file".to_string(),
        ));
    }

    Ok(exercises)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_text() {
        let tsv = "id\tname\tmuscle_group\tequipment
squat\tBarbell Back Squat\tlegs\tbarbell
plank\tPlank\tcore
row\tSeated Cable Row\tback\tcable
";

        let exercises = parse_catalog_text(tsv, '\t').unwrap();
        assert_eq!(exercises.len(), 3);
        assert_eq!(exercises[0].id.as_str(), "squat");
        assert_eq!(exercises[0].name, "Barbell Back Squat");
        assert_eq!(exercises[0].equipment.as_deref(), Some("barbell"));
        assert!(exercises[1].equipment.is_none());
    }

    #[test]
    fn test_parse_csv_text() {
        let csv = "id,name,muscle_group
curl,Barbell Curl,arms
dip,Dip,chest
";

        let exercises = parse_catalog_text(csv, ',').unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[1].muscle_group, "chest");
    }

    #[test]
    fn test_parse_tsv_comments_before_header() {
        let tsv = "# exported exercises

ID\tname\tmuscle_group
squat\tFront Squat\tlegs
";
        let exercises = parse_catalog_text(tsv, '\t').unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Front Squat");
    }

    #[test]
    fn test_parse_tsv_too_few_fields() {
        let err = parse_catalog_text("squat\tFront Squat\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("Line 1")));
    }

    #[test]
    fn test_parse_tsv_empty() {
        assert!(matches!(
            parse_catalog_text("# nothing here\n", '\t'),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
