use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub clinic_name: String,
    pub house_doctor_name: String,
    pub disease_model_path: Option<PathBuf>,
    pub prescription_table_path: Option<PathBuf>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            clinic_name: env::var("CLINIC_NAME")
                .unwrap_or_else(|_| "Clinic Desk".to_string()),
            house_doctor_name: env::var("HOUSE_DOCTOR_NAME")
                .unwrap_or_else(|_| "On-call Physician".to_string()),
            disease_model_path: env::var("DISEASE_MODEL_PATH").ok().map(PathBuf::from),
            prescription_table_path: env::var("PRESCRIPTION_TABLE_PATH").ok().map(PathBuf::from),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_prediction_configured() {
            warn!("DISEASE_MODEL_PATH not set - bookings will be stored without a predicted diagnosis");
        }

        config
    }

    pub fn is_prediction_configured(&self) -> bool {
        self.disease_model_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_model() {
        let config = AppConfig {
            clinic_name: "Clinic Desk".into(),
            house_doctor_name: "On-call Physician".into(),
            disease_model_path: None,
            prescription_table_path: None,
            port: 3000,
        };
        assert!(!config.is_prediction_configured());
    }
}
