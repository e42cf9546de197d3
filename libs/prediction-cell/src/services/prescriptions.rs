use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::ModelError;

/// Disease-keyed table of commonly prescribed items. The lists are
/// population-level associations, not individually tailored.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionTable {
    entries: HashMap<String, Vec<String>>,
}

const BUNDLED_TABLE: &str = include_str!("../../assets/common_prescriptions.json");

impl PrescriptionTable {
    pub fn from_entries(entries: HashMap<String, Vec<String>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(disease, items)| (disease.trim().to_lowercase(), items))
            .collect();
        Self { entries }
    }

    /// Table shipped with the binary, covering the diseases of the default
    /// training dataset.
    pub fn bundled() -> Self {
        match serde_json::from_str::<HashMap<String, Vec<String>>>(BUNDLED_TABLE) {
            Ok(entries) => Self::from_entries(entries),
            Err(e) => {
                error!("Bundled prescription table failed to parse: {}", e);
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
            .map_err(|e| ModelError::InvalidArtifact(e.to_string()))?;

        info!(
            "Prescription table loaded from {}: {} diseases",
            path.display(),
            entries.len()
        );
        Ok(Self::from_entries(entries))
    }

    /// Commonly prescribed items for a disease, empty when the table has
    /// no entry for it.
    pub fn lookup(&self, disease: &str) -> Vec<String> {
        self.entries
            .get(&disease.trim().to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_covers_default_diseases() {
        let table = PrescriptionTable::bundled();
        assert!(!table.is_empty());
        assert_eq!(
            table.lookup("Flu"),
            vec!["Tamiflu".to_string(), "Rest".to_string(), "Fluids".to_string()]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = PrescriptionTable::bundled();
        assert_eq!(table.lookup("common cold"), table.lookup("Common Cold"));
    }

    #[test]
    fn unknown_disease_has_no_prescriptions() {
        let table = PrescriptionTable::bundled();
        assert!(table.lookup("Dragon Pox").is_empty());
    }
}
