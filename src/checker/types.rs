use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::{MAX_SYMPTOMS, MIN_SYMPTOMS};
use crate::models::Suggestions;

/// Every way a symptom check can fail.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Payload is not `{"symptoms": [string, ...]}`.
    #[error("Invalid payload. Expected {{\"symptoms\": [..]}}: {0}")]
    InvalidPayload(String),

    #[error("You must provide {} to {} symptoms (got {count})", MIN_SYMPTOMS, MAX_SYMPTOMS)]
    InvalidSymptomCount { count: usize },

    #[error("{}", detail_message("Too few valid symptoms", .invalid, .suggestions))]
    TooFewValidSymptoms {
        invalid: Vec<String>,
        suggestions: Suggestions,
    },

    #[error("{}", detail_message("No diseases matched your symptoms", .invalid, .suggestions))]
    NoMatch {
        invalid: Vec<String>,
        suggestions: Suggestions,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CheckError {
    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::InvalidPayload(_) => "INVALID_PAYLOAD",
            CheckError::InvalidSymptomCount { .. } => "INVALID_SYMPTOM_COUNT",
            CheckError::TooFewValidSymptoms { .. } => "TOO_FEW_VALID_SYMPTOMS",
            CheckError::NoMatch { .. } => "NO_MATCH",
            CheckError::Catalog(e) => e.kind(),
        }
    }
}

/// `"<headline>. Invalid symptoms: a, b[. Did you mean: a → x; b → y?]"`
fn detail_message(headline: &str, invalid: &[String], suggestions: &Suggestions) -> String {
    let mut msg = format!("{headline}. Invalid symptoms: {}", invalid.join(", "));
    if !suggestions.is_empty() {
        msg.push_str(&format!(". Did you mean: {suggestions}?"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_message_lists_invalid_and_suggestions() {
        let mut suggestions = Suggestions::new();
        suggestions.insert("feverr".into(), "fever".into());
        let err = CheckError::TooFewValidSymptoms {
            invalid: vec!["feverr".into(), "xyz".into()],
            suggestions,
        };
        assert_eq!(
            err.to_string(),
            "Too few valid symptoms. Invalid symptoms: feverr, xyz. Did you mean: feverr → fever?"
        );
        assert_eq!(err.kind(), "TOO_FEW_VALID_SYMPTOMS");
    }

    #[test]
    fn no_match_message_omits_empty_suggestions() {
        let err = CheckError::NoMatch {
            invalid: vec!["xyz".into()],
            suggestions: Suggestions::new(),
        };
        assert_eq!(
            err.to_string(),
            "No diseases matched your symptoms. Invalid symptoms: xyz"
        );
    }

    #[test]
    fn symptom_count_message() {
        let err = CheckError::InvalidSymptomCount { count: 3 };
        assert!(err.to_string().contains("must provide 4 to 6 symptoms"));
        assert_eq!(err.kind(), "INVALID_SYMPTOM_COUNT");
    }

    #[test]
    fn catalog_errors_keep_their_kind() {
        let err: CheckError = CatalogError::Empty {
            source_path: "x".into(),
        }
        .into();
        assert_eq!(err.kind(), "DATA_CORRUPT");
    }
}
