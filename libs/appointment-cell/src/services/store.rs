use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{AppointmentError, AppointmentStatus, NewPatientRecord, PatientRecord};

/// In-memory patient record store, owned for the lifetime of the process.
///
/// A single lock serializes every insert/update/list, which is the whole
/// concurrency story: records never leave this process and die with it.
pub struct PatientRecordStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    records: Vec<PatientRecord>,
    next_id: u64,
}

impl PatientRecordStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Assign the next id, append, and return the stored record.
    pub async fn insert(&self, new: NewPatientRecord) -> PatientRecord {
        let mut inner = self.inner.write().await;

        let record = PatientRecord {
            id: inner.next_id,
            name: new.name,
            phone: new.phone,
            date: new.date,
            appointment_type: new.appointment_type,
            symptoms: new.symptoms,
            predicted_disease: new.predicted_disease,
            confidence: new.confidence,
            common_prescriptions: new.common_prescriptions,
            status: new.status,
        };
        inner.next_id += 1;
        inner.records.push(record.clone());

        debug!("Patient record {} stored", record.id);
        record
    }

    /// All records, in insertion order.
    pub async fn list(&self) -> Vec<PatientRecord> {
        self.inner.read().await.records.clone()
    }

    pub async fn get(&self, id: u64) -> Option<PatientRecord> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Overwrite only the status of an existing record.
    ///
    /// Any status is reachable from any other; the store deliberately
    /// enforces no transition graph.
    pub async fn update_status(
        &self,
        id: u64,
        status: AppointmentStatus,
    ) -> Result<PatientRecord, AppointmentError> {
        let mut inner = self.inner.write().await;

        match inner.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                let previous = record.status;
                record.status = status;
                debug!("Patient {} status {} -> {}", id, previous, status);
                Ok(record.clone())
            }
            None => Err(AppointmentError::NotFound),
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

impl Default for PatientRecordStore {
    fn default() -> Self {
        Self::new()
    }
}
