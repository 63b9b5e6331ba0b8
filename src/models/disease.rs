use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::checker::normalize::normalize_token;

/// One catalog entry: a disease and the symptoms it presents with.
///
/// Symptoms are stored normalized (lower-cased, trimmed) and deduplicated.
/// A record always carries at least one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    pub symptoms: BTreeSet<String>,
}

impl DiseaseRecord {
    /// Build a record from raw source values.
    ///
    /// Returns `None` when the name is blank or no symptom survives
    /// normalization.
    pub fn new<I, S>(name: &str, raw_symptoms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let symptoms: BTreeSet<String> = raw_symptoms
            .into_iter()
            .filter_map(|s| normalize_token(s.as_ref()))
            .collect();
        if symptoms.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            symptoms,
        })
    }

    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }
}
