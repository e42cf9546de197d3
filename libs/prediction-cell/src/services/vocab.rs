use std::collections::HashMap;

use ndarray::Array1;

/// Fixed symptom vocabulary the classifier was trained against.
///
/// Encoding is presence/absence against the vocabulary. Lookup is
/// case-insensitive on trimmed terms; the artifact's original casing is
/// kept for display.
#[derive(Debug, Clone)]
pub struct SymptomVocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymptomVocabulary {
    pub fn new(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (normalize(term), i))
            .collect();
        Self { terms, index }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.index.contains_key(&normalize(symptom))
    }

    /// Encode a symptom list into a feature vector, reporting the symptoms
    /// the vocabulary has never seen.
    pub fn encode(&self, symptoms: &[String]) -> (Array1<f32>, Vec<String>) {
        let mut features = Array1::<f32>::zeros(self.terms.len());
        let mut unseen = Vec::new();

        for symptom in symptoms {
            match self.index.get(&normalize(symptom)) {
                Some(&column) => features[column] = 1.0,
                None => unseen.push(symptom.clone()),
            }
        }

        (features, unseen)
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}
