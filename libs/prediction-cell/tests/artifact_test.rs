use std::io::Write;

use prediction_cell::{DiagnosisModel, LinearClassifier, ModelError, PrescriptionTable};

fn write_artifact(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write artifact");
    file
}

#[test]
fn loads_a_valid_artifact_from_disk() {
    let file = write_artifact(
        r#"{
            "vocabulary": ["fever", "cough"],
            "labels": ["Influenza"],
            "weights": [[1.5, 1.5]],
            "bias": [0.0]
        }"#,
    );

    let model = LinearClassifier::load(file.path()).expect("load");
    assert_eq!(model.labels(), ["Influenza".to_string()]);
    assert_eq!(model.vocabulary().len(), 2);
}

#[test]
fn missing_artifact_is_reported_as_not_found() {
    let result = LinearClassifier::load(std::path::Path::new("/nonexistent/model.json"));
    assert!(matches!(result, Err(ModelError::ArtifactNotFound(_))));
}

#[test]
fn malformed_artifact_is_rejected() {
    let file = write_artifact("{\"vocabulary\": [\"fever\"]");
    let result = LinearClassifier::load(file.path());
    assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));
}

#[test]
fn inconsistent_dimensions_are_rejected() {
    let file = write_artifact(
        r#"{
            "vocabulary": ["fever", "cough"],
            "labels": ["Influenza", "Migraine"],
            "weights": [[1.0, 1.0]],
            "bias": [0.0, 0.0]
        }"#,
    );
    let result = LinearClassifier::load(file.path());
    assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));
}

#[test]
fn prescription_table_loads_from_disk() {
    let file = write_artifact(r#"{"Influenza": ["Oseltamivir", "Rest", "Fluids"]}"#);
    let table = PrescriptionTable::load(file.path()).expect("load table");
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("influenza").len(), 3);
}
