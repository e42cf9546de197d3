use std::sync::Arc;

use prediction_cell::DiseasePredictor;
use shared_config::AppConfig;

use crate::services::store::PatientRecordStore;

/// Shared state handed to the appointment handlers: the record store, the
/// predictor handle, and the clinic configuration. Constructed once at
/// startup and torn down with the process.
pub struct AppointmentState {
    pub config: Arc<AppConfig>,
    pub store: PatientRecordStore,
    pub predictor: DiseasePredictor,
}

impl AppointmentState {
    pub fn new(config: Arc<AppConfig>, predictor: DiseasePredictor) -> Self {
        Self {
            config,
            store: PatientRecordStore::new(),
            predictor,
        }
    }
}
