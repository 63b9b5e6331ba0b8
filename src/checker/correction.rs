//! Spelling correction for unrecognized symptoms.
//!
//! Similarity is a 0-100 edit-distance ratio (Damerau-Levenshtein, so a
//! swapped pair of letters costs one edit). Multi-word tokens are also
//! compared with their words sorted, which lets "throat sore" find
//! "sore throat".

use std::collections::BTreeSet;

use strsim::normalized_damerau_levenshtein;

use crate::config::SUGGESTION_CUTOFF;
use crate::models::Suggestions;

/// Similarity of two normalized tokens on a 0-100 scale.
pub fn similarity(a: &str, b: &str) -> f64 {
    let direct = normalized_damerau_levenshtein(a, b);
    let sorted = normalized_damerau_levenshtein(&sort_words(a), &sort_words(b));
    direct.max(sorted) * 100.0
}

fn sort_words(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

/// Closest vocabulary entry and its score, regardless of cutoff.
///
/// Ties keep the first entry in vocabulary order.
pub fn best_match(token: &str, vocabulary: &BTreeSet<String>) -> Option<(String, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in vocabulary {
        let score = similarity(token, candidate);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, score)| (candidate.to_string(), score))
}

/// Suggested correction, only when it clears [`SUGGESTION_CUTOFF`].
pub fn correct(token: &str, vocabulary: &BTreeSet<String>) -> Option<String> {
    best_match(token, vocabulary)
        .filter(|(_, score)| *score >= SUGGESTION_CUTOFF)
        .map(|(candidate, _)| candidate)
}

/// Best-effort suggestions for every unrecognized token.
pub fn suggest_all(invalid: &[String], vocabulary: &BTreeSet<String>) -> Suggestions {
    let mut suggestions = Suggestions::new();
    for token in invalid {
        if suggestions.contains(token) {
            continue;
        }
        match correct(token, vocabulary) {
            Some(suggestion) => {
                tracing::debug!(token = %token, suggestion = %suggestion, "Symptom correction found");
                suggestions.insert(token.clone(), suggestion);
            }
            None => tracing::debug!(token = %token, "No symptom correction above cutoff"),
        }
    }
    suggestions
}
