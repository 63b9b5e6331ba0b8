use std::collections::BTreeSet;

use rand::Rng;

use super::correction::suggest_all;
use super::normalize::{check_symptom_count, normalize};
use super::ranking::rank;
use super::types::CheckError;
use crate::catalog::{Catalog, CatalogProvider};
use crate::config::MIN_VALID_SYMPTOMS;
use crate::models::{PredictionRequest, PredictionResponse};

/// Parse a raw request body into a typed request.
///
/// Only a JSON object carrying a `symptoms` string array is accepted.
pub fn parse_request(body: &[u8]) -> Result<PredictionRequest, CheckError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| CheckError::InvalidPayload(e.to_string()))?;
    if !value.is_object() {
        return Err(CheckError::InvalidPayload("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| CheckError::InvalidPayload(e.to_string()))
}

/// Normalize the caller's symptoms and enforce the count window.
///
/// Needs no catalog, so malformed input is rejected before any load.
pub fn prepare(symptoms: &[String]) -> Result<Vec<String>, CheckError> {
    let normalized = normalize(symptoms);
    check_symptom_count(&normalized)?;
    Ok(normalized)
}

/// Full check against an in-memory catalog.
pub fn check_symptoms<R: Rng + ?Sized>(
    symptoms: &[String],
    catalog: &Catalog,
    rng: &mut R,
) -> Result<PredictionResponse, CheckError> {
    let normalized = prepare(symptoms)?;
    evaluate(normalized, catalog, rng)
}

/// Full check, fetching the catalog from `provider` only once the input
/// has passed the count gate.
pub fn check_request<R: Rng + ?Sized>(
    request: &PredictionRequest,
    provider: &dyn CatalogProvider,
    rng: &mut R,
) -> Result<PredictionResponse, CheckError> {
    let normalized = prepare(&request.symptoms)?;
    let catalog = provider.catalog()?;
    evaluate(normalized, catalog, rng)
}

fn evaluate<R: Rng + ?Sized>(
    normalized: Vec<String>,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<PredictionResponse, CheckError> {
    let (valid_symptoms, invalid_symptoms): (Vec<String>, Vec<String>) =
        normalized.into_iter().partition(|s| catalog.is_known(s));

    let suggestions = suggest_all(&invalid_symptoms, catalog.vocabulary());

    // Duplicates count toward the input window but not toward scoring.
    let distinct: BTreeSet<String> = valid_symptoms.iter().cloned().collect();
    if distinct.len() < MIN_VALID_SYMPTOMS {
        tracing::info!(
            valid = distinct.len(),
            invalid = invalid_symptoms.len(),
            suggestions = suggestions.len(),
            "Too few recognized symptoms"
        );
        return Err(CheckError::TooFewValidSymptoms {
            invalid: invalid_symptoms,
            suggestions,
        });
    }

    let diseases = rank(&distinct, catalog, rng);
    if diseases.is_empty() {
        tracing::info!(
            valid = distinct.len(),
            invalid = invalid_symptoms.len(),
            "No disease matched"
        );
        return Err(CheckError::NoMatch {
            invalid: invalid_symptoms,
            suggestions,
        });
    }

    tracing::info!(
        valid = distinct.len(),
        invalid = invalid_symptoms.len(),
        candidates = diseases.len(),
        "Symptom check complete"
    );

    Ok(PredictionResponse {
        diseases,
        valid_symptoms,
        invalid_symptoms,
        suggestions,
    })
}
