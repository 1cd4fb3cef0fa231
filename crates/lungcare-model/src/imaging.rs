//! Simulated image-analysis result types.
//!
//! Nothing here is computed from pixel data. The result is a canned
//! outcome template plus size-derived metadata; it must never be
//! presented as a real classifier's output.

use serde::{Deserialize, Serialize};

use crate::enums::{Diagnosis, ImageQuality};

/// Output of the simulated chest X-ray analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePredictionResult {
    /// Outcome label. The wire token is `riskLevel`: the original
    /// report consumers bind to that name even though the value is a
    /// diagnostic label, not a probability tier.
    #[serde(rename = "riskLevel")]
    pub diagnosis: Diagnosis,
    /// True only for the lung-cancer outcome template.
    pub cancer_detected: bool,
    /// Fixed per template; not a measured quantity.
    pub confidence: u8,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    /// Present where the template narrates discrete suspicious regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspicious_areas: Option<u8>,
    pub technical_details: TechnicalDetails,
}

/// Presentation-only metadata attached to every simulated analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    /// Derived from upload byte size, not from the image contents.
    pub image_quality: ImageQuality,
    /// Milliseconds, randomized; carries no semantic meaning. Wire
    /// token `processingTime` per the original report contract.
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u32,
    pub model_version: String,
}
