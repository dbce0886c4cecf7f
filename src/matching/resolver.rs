//! Sequential resolution of candidate names into catalog exercises.
//!
//! When a completed workout is saved, every exercise name must end up pointing
//! at a catalog row. Names are resolved one at a time and each newly created
//! exercise is appended to the catalog before the next name is matched, so
//! "Cable Face Pulls" followed by "cable face pull" creates one exercise, not two.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::store::{CatalogError, ExerciseCatalog};
use crate::core::exercise::CatalogExercise;
use crate::core::types::ExerciseId;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::matching::normalize::normalize;

/// Outcome of resolving one candidate name
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Candidate name as given
    pub name: String,

    /// The catalog exercise the name now refers to
    pub exercise: CatalogExercise,

    /// Similarity of the name to an existing exercise (0-100); for created
    /// exercises this is the best score that fell short of the threshold
    pub similarity_score: f64,

    /// True when the exercise was created for this name
    pub created: bool,
}

/// Resolve names in order, creating catalog entries for names with no good match.
///
/// `factory` builds the new exercise for an unmatched name; it sees the current
/// catalog so it can choose a free id.
///
/// # Errors
///
/// Returns a `CatalogError` if a created exercise cannot be added (duplicate id
/// or full catalog). Names resolved before the failure stay in the catalog.
pub fn resolve_names<S, F>(
    names: &[S],
    catalog: &mut ExerciseCatalog,
    config: &MatchingConfig,
    mut factory: F,
) -> Result<Vec<Resolution>, CatalogError>
where
    S: AsRef<str>,
    F: FnMut(&str, &ExerciseCatalog) -> CatalogExercise,
{
    let mut resolutions = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let result =
            MatchingEngine::with_config(catalog.exercises(), config.clone()).find_best_match(name);

        let resolution = match result.matched_exercise {
            Some(exercise) => {
                debug!(name, exercise = %exercise.id, "resolved to existing exercise");
                Resolution {
                    name: name.to_string(),
                    exercise,
                    similarity_score: result.similarity_score,
                    created: false,
                }
            }
            None => {
                let exercise = factory(name, catalog);
                info!(name, exercise = %exercise.id, "creating new exercise");
                catalog.add_exercise(exercise.clone())?;
                Resolution {
                    name: name.to_string(),
                    exercise,
                    similarity_score: result.similarity_score,
                    created: true,
                }
            }
        };

        resolutions.push(resolution);
    }

    Ok(resolutions)
}

/// Factory that names new exercises after the candidate and files them under
/// `muscle_group`.
///
/// Ids are `custom-<slug>` built from the normalized name, with `-2`, `-3`, ...
/// appended when the id is already taken.
pub fn new_exercise_factory(
    muscle_group: impl Into<String>,
) -> impl FnMut(&str, &ExerciseCatalog) -> CatalogExercise {
    let muscle_group = muscle_group.into();
    move |name, catalog| {
        let id = free_id(&format!("custom-{}", slugify(name)), catalog);
        CatalogExercise::new(id, name.trim(), muscle_group.clone())
    }
}

fn slugify(name: &str) -> String {
    let slug = normalize(name).split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        "exercise".to_string()
    } else {
        slug
    }
}

fn free_id(base: &str, catalog: &ExerciseCatalog) -> String {
    if !catalog.contains_id(&ExerciseId::new(base)) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !catalog.contains_id(&ExerciseId::new(candidate.as_str())))
        .unwrap_or_else(|| base.to_string())
}
