use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Incoming symptom-check payload: `{"symptoms": [..]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub symptoms: Vec<String>,
}

/// A ranked candidate disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: String,
    /// Confidence in `[0, 100]`.
    pub match_percent: u8,
}

/// Successful symptom-check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// At most `TOP_K` entries, descending by `match_percent`.
    pub diseases: Vec<MatchResult>,
    pub valid_symptoms: Vec<String>,
    pub invalid_symptoms: Vec<String>,
    pub suggestions: Suggestions,
}

/// Spelling corrections keyed by unrecognized token.
///
/// Serialized as a JSON object; keeps first-seen order and holds at most
/// one suggestion per token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions(Vec<(String, String)>);

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a suggestion. A token already present keeps its first value.
    pub fn insert(&mut self, token: String, suggestion: String) {
        if self.get(&token).is_none() {
            self.0.push((token, suggestion));
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Suggestions {
    /// `a → x; b → y`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, suggestion)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{token} → {suggestion}")?;
        }
        Ok(())
    }
}

impl Serialize for Suggestions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (token, suggestion) in &self.0 {
            map.serialize_entry(token, suggestion)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Suggestions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SuggestionsVisitor;

        impl<'de> Visitor<'de> for SuggestionsVisitor {
            type Value = Suggestions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token to suggestion")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = Suggestions::new();
                while let Some((token, suggestion)) = access.next_entry::<String, String>()? {
                    out.insert(token, suggestion);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(SuggestionsVisitor)
    }
}
