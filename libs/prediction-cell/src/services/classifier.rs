use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use tracing::info;

use crate::error::ModelError;
use crate::models::LinearModelArtifact;
use crate::services::vocab::SymptomVocabulary;

/// A trained symptom-to-diagnosis classifier.
///
/// Implementations own the feature vocabulary and label set they were
/// trained with; `predict_proba` reports a probability for every label,
/// in `labels()` order.
pub trait DiagnosisModel: Send + Sync {
    fn vocabulary(&self) -> &SymptomVocabulary;

    fn labels(&self) -> &[String];

    fn predict_proba(&self, features: &Array1<f32>) -> Result<Vec<f32>, ModelError>;
}

/// Multinomial linear classifier loaded from a JSON artifact.
///
/// The artifact is exported by the offline training job; inference is a
/// softmax over `W·x + b`.
pub struct LinearClassifier {
    vocabulary: SymptomVocabulary,
    labels: Vec<String>,
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl LinearClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let artifact: LinearModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| ModelError::InvalidArtifact(e.to_string()))?;

        let model = Self::from_artifact(artifact)?;
        info!(
            "Disease model loaded from {}: {} labels, {} symptom features",
            path.display(),
            model.labels.len(),
            model.vocabulary.len()
        );
        Ok(model)
    }

    pub fn from_artifact(artifact: LinearModelArtifact) -> Result<Self, ModelError> {
        let n_labels = artifact.labels.len();
        let n_terms = artifact.vocabulary.len();

        if n_labels == 0 {
            return Err(ModelError::InvalidArtifact("no labels".to_string()));
        }
        if n_terms == 0 {
            return Err(ModelError::InvalidArtifact("empty vocabulary".to_string()));
        }
        if artifact.weights.len() != n_labels {
            return Err(ModelError::InvalidArtifact(format!(
                "expected {} weight rows, found {}",
                n_labels,
                artifact.weights.len()
            )));
        }
        if let Some(row) = artifact.weights.iter().find(|row| row.len() != n_terms) {
            return Err(ModelError::InvalidArtifact(format!(
                "weight row has {} columns, vocabulary has {} terms",
                row.len(),
                n_terms
            )));
        }
        if artifact.bias.len() != n_labels {
            return Err(ModelError::InvalidArtifact(format!(
                "expected {} bias entries, found {}",
                n_labels,
                artifact.bias.len()
            )));
        }

        let flat: Vec<f32> = artifact.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((n_labels, n_terms), flat)
            .map_err(|e| ModelError::InvalidArtifact(e.to_string()))?;

        Ok(Self {
            vocabulary: SymptomVocabulary::new(artifact.vocabulary),
            labels: artifact.labels,
            weights,
            bias: Array1::from_vec(artifact.bias),
        })
    }
}

impl DiagnosisModel for LinearClassifier {
    fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_proba(&self, features: &Array1<f32>) -> Result<Vec<f32>, ModelError> {
        if features.len() != self.vocabulary.len() {
            return Err(ModelError::Inference(format!(
                "feature vector has {} entries, vocabulary has {} terms",
                features.len(),
                self.vocabulary.len()
            )));
        }

        let logits = self.weights.dot(features) + &self.bias;
        Ok(softmax(&logits.to_vec()))
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 {
        return vec![0.0; logits.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

// ═══════════════════════════════════════════════════════════
// ONNX classifier — behind the `onnx-model` feature
// ═══════════════════════════════════════════════════════════

#[cfg(feature = "onnx-model")]
mod onnx {
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;

    use ndarray::Array1;
    use ort::session::Session;
    use serde::Deserialize;

    use crate::error::ModelError;
    use crate::services::vocab::SymptomVocabulary;

    use super::DiagnosisModel;

    /// Vocabulary and label sidecar shipped next to the ONNX weights.
    #[derive(Debug, Deserialize)]
    struct ModelMetadata {
        vocabulary: Vec<String>,
        labels: Vec<String>,
    }

    /// Classifier backed by ONNX Runtime.
    ///
    /// Requires two files in the model directory:
    /// - `model.onnx` — the exported classifier; its first output must be
    ///   the class-probability tensor of shape `[1, n_labels]`
    /// - `metadata.json` — vocabulary and label order
    ///
    /// Uses interior mutability (Mutex) because `ort::Session::run` takes
    /// `&mut self` while `DiagnosisModel` exposes `&self`.
    pub struct OnnxClassifier {
        session: Mutex<Session>,
        vocabulary: SymptomVocabulary,
        labels: Vec<String>,
    }

    impl OnnxClassifier {
        pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
            let model_path = model_dir.join("model.onnx");
            let metadata_path = model_dir.join("metadata.json");

            if !model_path.exists() {
                return Err(ModelError::ArtifactNotFound(model_path));
            }
            if !metadata_path.exists() {
                return Err(ModelError::ArtifactNotFound(metadata_path));
            }

            let metadata: ModelMetadata =
                serde_json::from_str(&fs::read_to_string(&metadata_path)?)
                    .map_err(|e| ModelError::InvalidArtifact(e.to_string()))?;

            if metadata.labels.is_empty() || metadata.vocabulary.is_empty() {
                return Err(ModelError::InvalidArtifact(
                    "metadata must list labels and vocabulary".to_string(),
                ));
            }

            let session = Session::builder()
                .map_err(|e: ort::Error| ModelError::ModelInit(e.to_string()))?
                .with_intra_threads(2)
                .map_err(|e: ort::Error| ModelError::ModelInit(e.to_string()))?
                .commit_from_file(&model_path)
                .map_err(|e: ort::Error| ModelError::ModelInit(format!("ONNX load failed: {e}")))?;

            tracing::info!("ONNX disease model loaded from {}", model_dir.display());

            Ok(Self {
                session: Mutex::new(session),
                vocabulary: SymptomVocabulary::new(metadata.vocabulary),
                labels: metadata.labels,
            })
        }
    }

    impl DiagnosisModel for OnnxClassifier {
        fn vocabulary(&self) -> &SymptomVocabulary {
            &self.vocabulary
        }

        fn labels(&self) -> &[String] {
            &self.labels
        }

        fn predict_proba(&self, features: &Array1<f32>) -> Result<Vec<f32>, ModelError> {
            use ort::value::TensorRef;

            let input = features
                .clone()
                .into_shape_with_order((1, features.len()))
                .map_err(|e| ModelError::Inference(e.to_string()))?;

            let tensor = TensorRef::from_array_view(&input)
                .map_err(|e| ModelError::Inference(e.to_string()))?;

            let mut session = self
                .session
                .lock()
                .map_err(|_| ModelError::Inference("Session lock poisoned".to_string()))?;

            let outputs = session
                .run(ort::inputs![tensor])
                .map_err(|e| ModelError::Inference(format!("ONNX inference failed: {e}")))?;

            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| ModelError::Inference(format!("Output extraction: {e}")))?;

            if shape.len() != 2 || shape[1] as usize != self.labels.len() {
                return Err(ModelError::Inference(format!(
                    "unexpected output shape {shape:?}, expected [1, {}]",
                    self.labels.len()
                )));
            }

            Ok(data[..self.labels.len()].to_vec())
        }
    }
}

#[cfg(feature = "onnx-model")]
pub use onnx::OnnxClassifier;

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> LinearModelArtifact {
        LinearModelArtifact {
            vocabulary: vec!["fever".into(), "cough".into(), "headache".into()],
            labels: vec!["Influenza".into(), "Migraine".into()],
            weights: vec![vec![2.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]],
            bias: vec![0.0, 0.0],
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = LinearClassifier::from_artifact(artifact()).unwrap();
        let (features, _) = model.vocabulary().encode(&["fever".to_string()]);
        let probs = model.predict_proba(&features).unwrap();
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn matching_symptoms_win_the_argmax() {
        let model = LinearClassifier::from_artifact(artifact()).unwrap();
        let (features, _) = model
            .vocabulary()
            .encode(&["fever".to_string(), "cough".to_string()]);
        let probs = model.predict_proba(&features).unwrap();
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn mismatched_weight_rows_are_rejected() {
        let mut bad = artifact();
        bad.weights.pop();
        assert!(matches!(
            LinearClassifier::from_artifact(bad),
            Err(ModelError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn ragged_weight_row_is_rejected() {
        let mut bad = artifact();
        bad.weights[1] = vec![1.0];
        assert!(matches!(
            LinearClassifier::from_artifact(bad),
            Err(ModelError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn wrong_feature_width_is_an_inference_error() {
        let model = LinearClassifier::from_artifact(artifact()).unwrap();
        let narrow = Array1::<f32>::zeros(1);
        assert!(matches!(
            model.predict_proba(&narrow),
            Err(ModelError::Inference(_))
        ));
    }
}
