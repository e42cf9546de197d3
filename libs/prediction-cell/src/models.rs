use serde::{Deserialize, Serialize};

/// Label reported when the symptoms share no terms with the training
/// vocabulary. Bookings still go through with this prediction.
pub const UNKNOWN_DISEASE: &str = "Unknown";

/// Outcome of a single classifier call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    /// Probability of the top-ranked label, in [0,1].
    pub confidence: f32,
    pub common_prescriptions: Vec<String>,
}

impl Prediction {
    pub fn unknown() -> Self {
        Self {
            disease: UNKNOWN_DISEASE.to_string(),
            confidence: 0.0,
            common_prescriptions: Vec::new(),
        }
    }

    pub fn is_conclusive(&self) -> bool {
        self.disease != UNKNOWN_DISEASE
    }
}

/// On-disk schema of the linear model artifact exported by the offline
/// training job. `weights` holds one row per label, one column per
/// vocabulary term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    pub vocabulary: Vec<String>,
    pub labels: Vec<String>,
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}
