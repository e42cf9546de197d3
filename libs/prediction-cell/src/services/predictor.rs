use std::cmp::Ordering;

use shared_config::AppConfig;
use tracing::{debug, error, warn};

use crate::models::Prediction;
use crate::services::classifier::{DiagnosisModel, LinearClassifier};
use crate::services::prescriptions::PrescriptionTable;

/// Owns the classifier handle and the prescription lookup for the lifetime
/// of the process.
///
/// Construction is an explicit startup step; a missing or invalid model
/// artifact disables prediction rather than failing the boot, so bookings
/// always go through.
pub struct DiseasePredictor {
    model: Option<Box<dyn DiagnosisModel>>,
    prescriptions: PrescriptionTable,
}

impl DiseasePredictor {
    pub fn new(model: Option<Box<dyn DiagnosisModel>>, prescriptions: PrescriptionTable) -> Self {
        Self {
            model,
            prescriptions,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let prescriptions = match &config.prescription_table_path {
            Some(path) => match PrescriptionTable::load(path) {
                Ok(table) => table,
                Err(e) => {
                    warn!(
                        "Failed to load prescription table from {}: {}. Using the bundled table",
                        path.display(),
                        e
                    );
                    PrescriptionTable::bundled()
                }
            },
            None => PrescriptionTable::bundled(),
        };

        let model = match &config.disease_model_path {
            Some(path) => match LinearClassifier::load(path) {
                Ok(model) => Some(Box::new(model) as Box<dyn DiagnosisModel>),
                Err(e) => {
                    warn!(
                        "Failed to load disease model from {}: {}. Prediction disabled",
                        path.display(),
                        e
                    );
                    None
                }
            },
            None => None,
        };

        Self::new(model, prescriptions)
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Map a symptom list to a diagnosis suggestion.
    ///
    /// `None` means prediction is unavailable (no model loaded). Symptoms
    /// with no vocabulary overlap yield the `Unknown` zero-confidence
    /// fallback, never an error.
    pub fn predict(&self, symptoms: &[String]) -> Option<Prediction> {
        let model = self.model.as_ref()?;

        let (features, unseen) = model.vocabulary().encode(symptoms);
        if features.sum() == 0.0 {
            debug!("No vocabulary overlap, unseen symptoms: {:?}", unseen);
            return Some(Prediction::unknown());
        }

        let probabilities = match model.predict_proba(&features) {
            Ok(probabilities) => probabilities,
            Err(e) => {
                error!("Inference failed: {}", e);
                return Some(Prediction::unknown());
            }
        };

        let top = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal));

        match top {
            Some((index, &confidence)) => {
                let disease = model.labels()[index].clone();
                let common_prescriptions = self.prescriptions.lookup(&disease);
                debug!(
                    "Predicted {} with confidence {:.3} from {} symptoms",
                    disease,
                    confidence,
                    symptoms.len()
                );
                Some(Prediction {
                    disease,
                    confidence: confidence.clamp(0.0, 1.0),
                    common_prescriptions,
                })
            }
            None => Some(Prediction::unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::models::{LinearModelArtifact, UNKNOWN_DISEASE};
    use crate::services::classifier::LinearClassifier;

    use super::*;

    fn influenza_predictor() -> DiseasePredictor {
        let artifact = LinearModelArtifact {
            vocabulary: vec!["fever".into(), "cough".into(), "nausea".into()],
            labels: vec!["Influenza".into(), "Gastritis".into()],
            weights: vec![vec![3.0, 3.0, 0.0], vec![0.0, 0.0, 4.0]],
            bias: vec![0.0, 0.0],
        };
        let model = LinearClassifier::from_artifact(artifact).unwrap();

        let mut entries = HashMap::new();
        entries.insert(
            "Influenza".to_string(),
            vec!["Oseltamivir".to_string(), "Rest".to_string()],
        );

        DiseasePredictor::new(
            Some(Box::new(model)),
            PrescriptionTable::from_entries(entries),
        )
    }

    #[test]
    fn predicts_influenza_from_fever_and_cough() {
        let predictor = influenza_predictor();
        let prediction = predictor
            .predict(&["fever".to_string(), "cough".to_string()])
            .unwrap();

        assert_eq!(prediction.disease, "Influenza");
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
        assert_eq!(
            prediction.common_prescriptions,
            vec!["Oseltamivir".to_string(), "Rest".to_string()]
        );
    }

    #[test]
    fn no_overlap_falls_back_to_unknown() {
        let predictor = influenza_predictor();
        let prediction = predictor.predict(&["rash".to_string()]).unwrap();

        assert_eq!(prediction.disease, UNKNOWN_DISEASE);
        assert_eq!(prediction.confidence, 0.0);
        assert!(prediction.common_prescriptions.is_empty());
        assert!(!prediction.is_conclusive());
    }

    #[test]
    fn missing_model_disables_prediction() {
        let predictor = DiseasePredictor::new(None, PrescriptionTable::bundled());
        assert!(!predictor.is_available());
        assert!(predictor.predict(&["fever".to_string()]).is_none());
    }

    #[test]
    fn disease_without_table_entry_has_empty_prescriptions() {
        let predictor = influenza_predictor();
        let prediction = predictor.predict(&["nausea".to_string()]).unwrap();

        assert_eq!(prediction.disease, "Gastritis");
        assert!(prediction.common_prescriptions.is_empty());
    }
}
