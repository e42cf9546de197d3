use appointment_cell::models::{AppointmentError, AppointmentStatus, NewPatientRecord};
use appointment_cell::PatientRecordStore;

fn new_record(name: &str) -> NewPatientRecord {
    NewPatientRecord {
        name: name.to_string(),
        phone: "555-1234".to_string(),
        date: "2024-01-01".to_string(),
        appointment_type: "checkup".to_string(),
        symptoms: vec!["fever".to_string()],
        predicted_disease: Some("Flu".to_string()),
        confidence: Some(0.9),
        common_prescriptions: vec!["Rest".to_string()],
        status: AppointmentStatus::Booked,
    }
}

#[tokio::test]
async fn insert_assigns_strictly_increasing_ids() {
    let store = PatientRecordStore::new();

    let mut last_id = 0;
    for name in ["Alice", "Bob", "Carol"] {
        let record = store.insert(new_record(name)).await;
        assert!(record.id > last_id);
        last_id = record.id;
    }
    assert_eq!(store.count().await, 3);
}

#[tokio::test]
async fn list_returns_insertion_order_and_is_idempotent() {
    let store = PatientRecordStore::new();
    store.insert(new_record("Alice")).await;
    store.insert(new_record("Bob")).await;

    let first = store.list().await;
    let second = store.list().await;

    assert_eq!(first, second);
    assert_eq!(first[0].name, "Alice");
    assert_eq!(first[1].name, "Bob");
}

#[tokio::test]
async fn update_status_changes_only_the_status_field() {
    let store = PatientRecordStore::new();
    let before = store.insert(new_record("Alice")).await;

    let after = store
        .update_status(before.id, AppointmentStatus::Completed)
        .await
        .expect("record exists");

    assert_eq!(after.status, AppointmentStatus::Completed);

    let expected = appointment_cell::models::PatientRecord {
        status: AppointmentStatus::Completed,
        ..before
    };
    assert_eq!(after, expected);
}

#[tokio::test]
async fn any_status_is_reachable_from_any_other() {
    let store = PatientRecordStore::new();
    let record = store.insert(new_record("Alice")).await;

    for status in [
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Booked,
        AppointmentStatus::Cancelled,
    ] {
        let updated = store.update_status(record.id, status).await.expect("exists");
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn update_status_for_unknown_id_leaves_store_unmodified() {
    let store = PatientRecordStore::new();
    store.insert(new_record("Alice")).await;
    let before = store.list().await;

    let result = store.update_status(999, AppointmentStatus::Cancelled).await;

    assert_eq!(result, Err(AppointmentError::NotFound));
    assert_eq!(store.list().await, before);
}

#[tokio::test]
async fn get_finds_records_by_id() {
    let store = PatientRecordStore::new();
    let record = store.insert(new_record("Alice")).await;

    assert_eq!(store.get(record.id).await, Some(record));
    assert_eq!(store.get(999).await, None);
}
