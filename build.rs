use std::collections::HashSet;
use std::path::Path;

const CATALOG_PATH: &str = "catalogs/exercises.json";

fn main() {
    let catalog_path = Path::new(CATALOG_PATH);
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    for field in ["version", "created_at"] {
        assert!(
            catalog.get(field).and_then(serde_json::Value::as_str).is_some(),
            "\n\nCATALOG BUILD ERROR: Missing string field '{field}'\n"
        );
    }

    let exercises = catalog.get("exercises").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'exercises' field\n\
             The catalog must have a top-level 'exercises' array.\n"
        );
    });

    let entries = exercises.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'exercises' must be an array\n\
             Got: {exercises}\n"
        );
    });

    validate_exercises(entries);

    println!(
        "cargo:warning=Validated catalog: {} exercises",
        entries.len()
    );
}

fn validate_exercises(entries: &[serde_json::Value]) {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for (i, exercise) in entries.iter().enumerate() {
        for field in ["id", "name", "muscle_group"] {
            let value = exercise
                .get(field)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default();
            assert!(
                !value.trim().is_empty(),
                "\n\nCATALOG BUILD ERROR: Exercise at index {i} has missing or empty '{field}'\n"
            );
        }

        if let Some(equipment) = exercise.get("equipment") {
            assert!(
                equipment.is_string(),
                "\n\nCATALOG BUILD ERROR: Exercise at index {i} has non-string 'equipment'\n"
            );
        }

        let id = exercise
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        assert!(
            seen_ids.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate exercise id '{id}' (index {i})\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed={CATALOG_PATH}");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
