//! Matching behaviour through the public library API.

use exercise_matcher::matching::normalize::normalize;
use exercise_matcher::matching::scoring::{
    edit_distance, lexical_similarity, word_overlap_similarity,
};
use exercise_matcher::matching::resolver::new_exercise_factory;
use exercise_matcher::{
    find_best_match, match_batch, resolve_names, similarity, CatalogExercise, ExerciseCatalog,
    MatchingConfig, DEFAULT_THRESHOLD,
};

fn gym_catalog() -> Vec<CatalogExercise> {
    vec![
        CatalogExercise::new("1", "Barbell Back Squat", "legs"),
        CatalogExercise::new("2", "Dumbbell Bench Press", "chest"),
        CatalogExercise::new("3", "Lat Pulldown", "back"),
        CatalogExercise::new("4", "Seated Cable Row", "back"),
        CatalogExercise::new("5", "Face Pull", "shoulders"),
    ]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected:.2}, got {actual:.4}"
    );
}

#[test]
fn test_identity_scores_perfect() {
    for name in ["Bench Press", "", "!!!", "(Barbell)", "Lat Pulldown", "Côte"] {
        assert_eq!(similarity(name, name), 100.0, "similarity({name:?}, itself)");
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    assert_eq!(similarity("Bench Press", "bench   press"), 100.0);
    assert_eq!(similarity("  LAT PULLDOWN\t", "lat pulldown"), 100.0);
}

#[test]
fn test_edit_distance_symmetric() {
    let pairs = [
        ("kitten", "sitting"),
        ("", "squat"),
        ("lat pulldown", "lat pull down"),
        ("dumbbell", "barbell"),
    ];
    for (a, b) in pairs {
        assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a:?} / {b:?}");
    }
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("", "squat"), 5);
}

#[test]
fn test_scores_bounded() {
    let names = [
        "",
        "a",
        "DB Bench Press",
        "Bench Press (Barbell)",
        "----",
        "Bulgarian Split Squat",
        "squat squat squat squat",
    ];
    for a in names {
        for b in names {
            for score in [
                similarity(a, b),
                lexical_similarity(a, b),
                word_overlap_similarity(a, b),
            ] {
                assert!((0.0..=100.0).contains(&score), "{a:?} / {b:?} -> {score}");
            }
        }
    }
}

#[test]
fn test_long_and_punctuation_only_inputs() {
    let long_a = "squat ".repeat(400);
    let long_b = "press ".repeat(400);
    let score = similarity(&long_a, &long_b);
    assert!((0.0..=100.0).contains(&score));

    assert_eq!(normalize("!@#$%^&*"), "");
    assert_eq!(similarity("!@#$", "()"), 100.0);
    assert!(similarity("!@#$", "Squat") < DEFAULT_THRESHOLD);
}

#[test]
fn test_threshold_boundary() {
    let catalog = vec![CatalogExercise::new("1", "Seated Cable Row", "back")];
    let score = similarity("Cable Rows", "Seated Cable Row");

    let at = find_best_match("Cable Rows", &catalog, score);
    assert!(!at.is_new_exercise);
    assert_eq!(at.similarity_score, score);

    let above = find_best_match("Cable Rows", &catalog, score + 0.01);
    assert!(above.is_new_exercise);
    assert!(above.matched_exercise.is_none());
    assert_eq!(above.similarity_score, score);
}

#[test]
fn test_empty_catalog_is_always_new() {
    for threshold in [0.0, DEFAULT_THRESHOLD, 100.0] {
        let result = find_best_match("Bench Press", &[], threshold);
        assert!(result.is_new_exercise);
        assert!(result.matched_exercise.is_none());
        assert_eq!(result.similarity_score, 0.0);
    }
}

#[test]
fn test_synonyms_fold_to_exact_match() {
    assert_eq!(similarity("DB Curl", "Dumbbell Curl"), 100.0);
    assert_eq!(similarity("Dumbell Curl", "dumbbell curl"), 100.0);
    assert_eq!(similarity("BB Row", "Barbell Row"), 100.0);

    let result = find_best_match("DB Bench Press", &gym_catalog(), DEFAULT_THRESHOLD);
    assert_eq!(result.similarity_score, 100.0);
    assert_eq!(result.matched_exercise.unwrap().id.as_str(), "2");
}

#[test]
fn test_parenthetical_notes_ignored() {
    assert_eq!(normalize("Bench Press (Barbell)"), "bench press");
    assert_eq!(similarity("Lat Pulldown (wide grip)", "Lat Pulldown"), 100.0);
}

#[test]
fn test_parenthesized_equipment_scores_below_default_threshold() {
    // "back squat" vs "barbell back squat": lexical 10/18, overlap 2/3
    let score = similarity("Back Squat (Barbell)", "Barbell Back Squat");
    assert_close(score, 62.22);

    let catalog = gym_catalog();
    let strict = find_best_match("Back Squat (Barbell)", &catalog, DEFAULT_THRESHOLD);
    assert!(strict.is_new_exercise);
    assert_close(strict.similarity_score, 62.22);

    let relaxed = find_best_match("Back Squat (Barbell)", &catalog, 60.0);
    assert_eq!(relaxed.matched_exercise.unwrap().name, "Barbell Back Squat");
}

#[test]
fn test_plural_matches_singular() {
    let result = find_best_match("Lat Pulldowns", &gym_catalog(), DEFAULT_THRESHOLD);
    assert!(!result.is_new_exercise);
    assert_eq!(result.matched_exercise.unwrap().name, "Lat Pulldown");
    assert!(result.similarity_score > 90.0);
}

#[test]
fn test_unrelated_name_is_new() {
    let result = find_best_match("Turkish Get Up", &gym_catalog(), DEFAULT_THRESHOLD);
    assert!(result.is_new_exercise);
    assert!(result.matched_exercise.is_none());
}

#[test]
fn test_batch_matches_individual_calls() {
    let catalog = gym_catalog();
    let names = [
        "DB Bench Press",
        "Lat Pulldowns",
        "Turkish Get Up",
        "Cable Rows",
        "Lat Pulldowns",
    ];

    let batch = match_batch(&names, &catalog, DEFAULT_THRESHOLD);
    assert_eq!(batch.len(), 4);
    for name in names {
        assert_eq!(
            batch[name],
            find_best_match(name, &catalog, DEFAULT_THRESHOLD),
            "{name}"
        );
    }
}

#[test]
fn test_exact_match_stops_at_first_hit() {
    let catalog = vec![
        CatalogExercise::new("a", "Dumbbell Bench Press", "chest"),
        CatalogExercise::new("b", "DB Bench Press", "chest"),
    ];
    let result = find_best_match("db bench press", &catalog, DEFAULT_THRESHOLD);
    assert_eq!(result.similarity_score, 100.0);
    assert_eq!(result.matched_exercise.unwrap().id.as_str(), "a");
}

#[test]
fn test_match_against_embedded_catalog() {
    let catalog = ExerciseCatalog::load_embedded().unwrap();

    let result = find_best_match("Dumbbell Hammer Curls", catalog.exercises(), DEFAULT_THRESHOLD);
    assert_eq!(
        result.matched_exercise.unwrap().id.as_str(),
        "dumbbell-hammer-curl"
    );

    let result = find_best_match("BB Bench Press", catalog.exercises(), DEFAULT_THRESHOLD);
    assert_eq!(result.similarity_score, 100.0);
    assert_eq!(
        result.matched_exercise.unwrap().id.as_str(),
        "barbell-bench-press"
    );
}

#[test]
fn test_resolver_reuses_created_exercise() {
    let mut catalog = ExerciseCatalog::from_exercises(gym_catalog()).unwrap();
    let before = catalog.len();

    let resolutions = resolve_names(
        &["Turkish Get Up", "turkish get ups", "Lat Pulldowns"],
        &mut catalog,
        &MatchingConfig::default(),
        new_exercise_factory("core"),
    )
    .unwrap();

    assert_eq!(catalog.len(), before + 1);
    assert!(resolutions[0].created);
    assert!(!resolutions[1].created);
    assert_eq!(resolutions[0].exercise.id, resolutions[1].exercise.id);
    assert_eq!(resolutions[0].exercise.muscle_group, "core");
    assert_eq!(resolutions[2].exercise.name, "Lat Pulldown");
}

#[test]
fn test_catalog_json_round_trip() {
    let catalog = ExerciseCatalog::load_embedded().unwrap();
    let json = catalog.to_json().unwrap();
    let reloaded = ExerciseCatalog::from_json(&json).unwrap();

    assert_eq!(reloaded.len(), catalog.len());
    assert_eq!(reloaded.exercises(), catalog.exercises());
}
