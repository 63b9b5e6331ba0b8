//! Symptom check pipeline.
//!
//! raw payload → normalize → count gate → split known/unknown against the
//! catalog vocabulary → fuzzy suggestions → valid-count gate → score/rank.

pub mod correction;
pub mod normalize;
pub mod orchestrator;
pub mod ranking;
pub mod types;

pub use orchestrator::{check_request, check_symptoms, parse_request, prepare};
pub use types::CheckError;
