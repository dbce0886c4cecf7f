use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::exercise::CatalogExercise;
use crate::core::types::ExerciseId;
use crate::matching::normalize::normalize;
use crate::utils::validation::check_catalog_limit;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate exercise id: {0}")]
    DuplicateId(String),

    #[error("Catalog is full ({0} exercises)")]
    TooManyExercises(usize),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub exercises: Vec<CatalogExercise>,
}

/// The exercise catalog with an id index
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    /// All known exercises, in insertion order
    exercises: Vec<CatalogExercise>,

    /// Index: exercise ID -> index in exercises vec
    id_to_index: HashMap<ExerciseId, usize>,
}

impl ExerciseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            exercises: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Build a catalog from a list of exercises
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two exercises share an id, or
    /// `CatalogError::TooManyExercises` if the entry limit is exceeded.
    pub fn from_exercises(exercises: Vec<CatalogExercise>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for exercise in exercises {
            catalog.add_exercise(exercise)?;
        }
        Ok(catalog)
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog is malformed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/exercises.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or contains duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        Self::from_exercises(data.exercises)
    }

    /// Add an exercise to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if the id is already present, or
    /// `CatalogError::TooManyExercises` if the catalog is full.
    pub fn add_exercise(&mut self, exercise: CatalogExercise) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&exercise.id) {
            return Err(CatalogError::DuplicateId(exercise.id.to_string()));
        }
        if check_catalog_limit(self.exercises.len()).is_some() {
            return Err(CatalogError::TooManyExercises(self.exercises.len()));
        }

        self.id_to_index
            .insert(exercise.id.clone(), self.exercises.len());
        self.exercises.push(exercise);
        Ok(())
    }

    /// Get an exercise by ID
    pub fn get(&self, id: &ExerciseId) -> Option<&CatalogExercise> {
        self.id_to_index.get(id).map(|&idx| &self.exercises[idx])
    }

    /// Check whether an id is taken
    pub fn contains_id(&self, id: &ExerciseId) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Find the first exercise whose normalized name equals the normalized `name`
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogExercise> {
        let wanted = normalize(name);
        self.exercises.iter().find(|e| normalize(&e.name) == wanted)
    }

    /// Exercises targeting a muscle group, in catalog order
    pub fn by_muscle_group<'a>(
        &'a self,
        muscle_group: &'a str,
    ) -> impl Iterator<Item = &'a CatalogExercise> + 'a {
        self.exercises.iter().filter(move |e| e.targets(muscle_group))
    }

    /// All exercises, in insertion order
    pub fn exercises(&self) -> &[CatalogExercise] {
        &self.exercises
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            exercises: self.exercises.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of exercises in catalog
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = ExerciseCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find_by_name("Barbell Back Squat").is_some());
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = ExerciseCatalog::load_embedded().unwrap();

        let squat = catalog.get(&ExerciseId::new("barbell-back-squat"));
        assert!(squat.is_some());
        let squat = squat.unwrap();
        assert_eq!(squat.name, "Barbell Back Squat");
        assert_eq!(squat.muscle_group, "legs");
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = ExerciseCatalog::load_embedded().unwrap();
        assert!(catalog.get(&ExerciseId::new("nonexistent")).is_none());
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = ExerciseCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"exercises\""));

        let reloaded = ExerciseCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.exercises(), catalog.exercises());
    }

    #[test]
    fn test_add_exercise() {
        let mut catalog = ExerciseCatalog::new();
        assert_eq!(catalog.len(), 0);

        catalog
            .add_exercise(CatalogExercise::new("ex-1", "Face Pull", "shoulders"))
            .unwrap();
        assert_eq!(catalog.len(), 1);

        let retrieved = catalog.get(&ExerciseId::new("ex-1"));
        assert_eq!(retrieved.unwrap().name, "Face Pull");
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut catalog = ExerciseCatalog::new();
        catalog
            .add_exercise(CatalogExercise::new("ex-1", "Face Pull", "shoulders"))
            .unwrap();

        let err = catalog
            .add_exercise(CatalogExercise::new("ex-1", "Shrug", "traps"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "ex-1"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_find_by_name_normalizes() {
        let catalog = ExerciseCatalog::from_exercises(vec![CatalogExercise::new(
            "1",
            "Dumbbell Curl",
            "arms",
        )])
        .unwrap();
        assert!(catalog.find_by_name("DB curl").is_some());
        assert!(catalog.find_by_name("hammer curl").is_none());
    }

    #[test]
    fn test_by_muscle_group() {
        let catalog = ExerciseCatalog::load_embedded().unwrap();
        let legs: Vec<_> = catalog.by_muscle_group("legs").collect();
        assert!(!legs.is_empty());
        assert!(legs.iter().all(|e| e.muscle_group == "legs"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ExerciseCatalog::from_json("{ not json"),
            Err(CatalogError::ParseError(_))
        ));
    }
}
