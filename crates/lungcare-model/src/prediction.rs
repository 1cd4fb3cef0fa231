//! Questionnaire assessment result.

use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// Output of the questionnaire risk scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Risk tier derived from `probability`.
    pub risk_level: RiskLevel,
    /// Integer percentage in 0-100.
    pub probability: u8,
    /// One human-readable note per triggered factor, in evaluation order.
    pub risk_factors: Vec<String>,
    /// Deduplicated advice strings, first-insertion order preserved.
    pub recommendations: Vec<String>,
    /// Integer percentage in 0-95, derived from questionnaire coverage.
    pub confidence: u8,
}
