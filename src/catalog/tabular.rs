//! Tabular catalog source: CSV with a `disease` column and any number of
//! columns whose header starts with `symptom` (case-insensitive).

use std::io::Read;
use std::path::Path;

use super::CatalogError;
use crate::config::{DISEASE_COLUMN, SYMPTOM_COLUMN_PREFIX};
use crate::models::DiseaseRecord;

/// Cell values treated as missing, mirroring common dataframe NA markers.
const MISSING_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none", "#n/a", "<na>"];

pub fn read_records(path: &Path) -> Result<Vec<DiseaseRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::corrupt(path, e.to_string()))?;
    parse_records(file).map_err(|reason| CatalogError::corrupt(path, reason))
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<DiseaseRecord>, String> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| format!("failed to read headers: {e}"))?
        .clone();

    let idx_disease = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(DISEASE_COLUMN))
        .ok_or_else(|| format!("missing '{DISEASE_COLUMN}' column"))?;
    let symptom_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.trim().to_lowercase().starts_with(SYMPTOM_COLUMN_PREFIX))
        .map(|(i, _)| i)
        .collect();
    if symptom_cols.is_empty() {
        return Err(format!("no '{SYMPTOM_COLUMN_PREFIX}*' columns"));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line, result) in rdr.records().enumerate() {
        let row = result.map_err(|e| format!("failed to read row {}: {e}", line + 1))?;
        let Some(name) = row.get(idx_disease).filter(|v| !is_missing(v)) else {
            skipped += 1;
            continue;
        };
        let symptoms = symptom_cols
            .iter()
            .filter_map(|&i| row.get(i))
            .filter(|v| !is_missing(v));

        match DiseaseRecord::new(name, symptoms) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = records.len(), "Skipped tabular catalog rows");
    }
    Ok(records)
}

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Result<Vec<DiseaseRecord>, String> {
        parse_records(csv.as_bytes())
    }

    #[test]
    fn collects_every_symptom_column() {
        let records = parse(
            "disease,Symptom_1,symptom_2,SYMPTOM 3,notes\n\
             Flu,Fever, Cough ,chills,ignored\n\
             Cold,sneeze,,cough,ignored\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symptoms.len(), 3);
        assert!(records[0].has_symptom("cough"));
        assert!(!records[0].has_symptom("ignored"));
        assert_eq!(records[1].symptoms.len(), 2);
    }

    #[test]
    fn missing_markers_are_dropped() {
        let records = parse("disease,symptom_1,symptom_2,symptom_3\nFlu,fever,NaN,N/A\n").unwrap();
        assert_eq!(records[0].symptoms.len(), 1);
    }

    #[test]
    fn short_rows_and_empty_rows_are_filtered() {
        let records = parse(
            "disease,symptom_1,symptom_2\n\
             Flu,fever\n\
             Nothing,,\n\
             ,fever,cough\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Flu");
    }

    #[test]
    fn missing_disease_column_is_an_error() {
        let err = parse("name,symptom_1\nFlu,fever\n").unwrap_err();
        assert!(err.contains("disease"));
    }

    #[test]
    fn missing_symptom_columns_is_an_error() {
        assert!(parse("disease,sign_1\nFlu,fever\n").is_err());
    }
}
