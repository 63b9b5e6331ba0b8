//! Structured catalog source: a JSON array of
//! `{"disease": "...", "symptoms": ["...", ...]}` records.
//!
//! Entries are parsed loosely. Anything that is not an object with a
//! non-empty `disease` and a `symptoms` list is skipped, as is any
//! record left without symptoms.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::CatalogError;
use crate::models::DiseaseRecord;

pub fn read_records(path: &Path) -> Result<Vec<DiseaseRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::corrupt(path, e.to_string()))?;
    parse_records(std::io::BufReader::new(file)).map_err(|reason| CatalogError::corrupt(path, reason))
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<DiseaseRecord>, String> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| format!("invalid JSON: {e}"))?;
    let Value::Array(entries) = value else {
        return Err("expected a JSON array of disease records".into());
    };

    let total = entries.len();
    let records: Vec<DiseaseRecord> = entries.iter().filter_map(parse_entry).collect();
    if records.len() < total {
        tracing::debug!(
            skipped = total - records.len(),
            kept = records.len(),
            "Skipped malformed structured catalog entries"
        );
    }
    Ok(records)
}

fn parse_entry(entry: &Value) -> Option<DiseaseRecord> {
    let name = scalar_text(entry.get("disease")?)?;
    let Value::Array(symptoms) = entry.get("symptoms")? else {
        return None;
    };
    DiseaseRecord::new(&name, symptoms.iter().filter_map(scalar_text))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
