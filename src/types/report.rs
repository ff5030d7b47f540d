use crate::matcher::{Prediction, ScoredProfile, ScoringPolicy, Selection};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub version: String,
    pub generated_at: String,
    pub policy: String,
    pub selection: Selection,
    pub prediction: Prediction,
    pub matched: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranking: Vec<ScoredProfile>,
}

impl PredictionReport {
    pub fn new(
        policy: &ScoringPolicy,
        selection: Selection,
        prediction: Prediction,
        ranking: Vec<ScoredProfile>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            policy: policy.to_string(),
            selection,
            matched: prediction.is_match(),
            prediction,
            ranking,
        }
    }
}
