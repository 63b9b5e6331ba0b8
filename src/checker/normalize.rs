//! Canonical form for symptom tokens: lower-cased, trimmed, non-empty.

use super::types::CheckError;
use crate::config::{MAX_SYMPTOMS, MIN_SYMPTOMS};

/// Canonicalize one token. Blank input yields `None`.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Canonicalize a caller's symptom list.
///
/// Order is preserved and duplicates pass through untouched.
pub fn normalize<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| normalize_token(s.as_ref()))
        .collect()
}

/// Enforce the accepted symptom count on a normalized list.
pub fn check_symptom_count(symptoms: &[String]) -> Result<(), CheckError> {
    let count = symptoms.len();
    if (MIN_SYMPTOMS..=MAX_SYMPTOMS).contains(&count) {
        Ok(())
    } else {
        Err(CheckError::InvalidSymptomCount { count })
    }
}
