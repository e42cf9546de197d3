use tracing::info;

use prediction_cell::DiseasePredictor;

use crate::models::{
    AppointmentError, AppointmentStatus, BookAppointmentRequest, NewPatientRecord, PatientRecord,
};
use crate::services::store::PatientRecordStore;

/// Front-desk booking flow: validate, predict, store.
pub struct BookingService<'a> {
    store: &'a PatientRecordStore,
    predictor: &'a DiseasePredictor,
}

impl<'a> BookingService<'a> {
    pub fn new(store: &'a PatientRecordStore, predictor: &'a DiseasePredictor) -> Self {
        Self { store, predictor }
    }

    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<PatientRecord, AppointmentError> {
        validate(&request)?;

        let symptoms = split_symptoms(&request.symptoms);

        let (predicted_disease, confidence, common_prescriptions) =
            match self.predictor.predict(&symptoms) {
                Some(prediction) => (
                    Some(prediction.disease),
                    Some(prediction.confidence),
                    prediction.common_prescriptions,
                ),
                None => (None, None, Vec::new()),
            };

        let record = self
            .store
            .insert(NewPatientRecord {
                name: request.name,
                phone: request.phone,
                date: request.date,
                appointment_type: request.appointment_type,
                symptoms,
                predicted_disease,
                confidence,
                common_prescriptions,
                status: AppointmentStatus::Booked,
            })
            .await;

        info!(
            "Appointment {} booked for {} ({})",
            record.id, record.name, record.date
        );
        Ok(record)
    }
}

/// All five booking fields are required; the error names the first one
/// missing, in form order.
fn validate(request: &BookAppointmentRequest) -> Result<(), AppointmentError> {
    let fields = [
        ("name", &request.name),
        ("phone", &request.phone),
        ("date", &request.date),
        ("type", &request.appointment_type),
        ("symptoms", &request.symptoms),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(AppointmentError::MissingField { field });
        }
    }

    Ok(())
}

/// Comma-split and trim the front-desk symptoms text, dropping empties.
pub fn split_symptoms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
