pub mod disease;
pub mod prediction;

pub use disease::DiseaseRecord;
pub use prediction::{MatchResult, PredictionRequest, PredictionResponse, Suggestions};
