use serde::{Deserialize, Serialize};

use crate::core::types::ExerciseId;

/// A single exercise in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExercise {
    /// Unique identifier (opaque to the matcher)
    pub id: ExerciseId,

    /// Display name, e.g. "Barbell Back Squat"
    pub name: String,

    /// Primary muscle group, e.g. "legs"
    pub muscle_group: String,

    /// Equipment needed, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
}

impl CatalogExercise {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        muscle_group: impl Into<String>,
    ) -> Self {
        Self {
            id: ExerciseId::new(id),
            name: name.into(),
            muscle_group: muscle_group.into(),
            equipment: None,
        }
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    /// Check whether this exercise targets the given muscle group (case-insensitive)
    pub fn targets(&self, muscle_group: &str) -> bool {
        self.muscle_group.eq_ignore_ascii_case(muscle_group.trim())
    }
}
