//! Timestamped JSON reports written by the `--output` flag.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use lungcare_model::{ImagePredictionResult, PatientData, PredictionResult};

/// Report wrapping one questionnaire assessment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub patient: &'a PatientData,
    pub result: &'a PredictionResult,
}

/// Report wrapping one simulated image analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub file_name: &'a str,
    pub byte_size: u64,
    pub result: &'a ImagePredictionResult,
}

/// Builds an assessment report stamped with the current time.
pub fn assessment_report<'a>(
    patient: &'a PatientData,
    result: &'a PredictionResult,
) -> AssessmentReport<'a> {
    AssessmentReport {
        generated_at: Utc::now(),
        patient,
        result,
    }
}

/// Builds an analysis report stamped with the current time.
pub fn analysis_report<'a>(
    file_name: &'a str,
    byte_size: u64,
    result: &'a ImagePredictionResult,
) -> AnalysisReport<'a> {
    AnalysisReport {
        generated_at: Utc::now(),
        file_name,
        byte_size,
        result,
    }
}

/// Writes a report as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report).context("serializing report")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lungcare_model::{Gender, RiskLevel};

    #[test]
    fn test_assessment_report_uses_wire_names() {
        let patient = PatientData::baseline(30, Gender::Female);
        let result = PredictionResult {
            risk_level: RiskLevel::Low,
            probability: 0,
            risk_factors: vec![],
            recommendations: vec![],
            confidence: 17,
        };
        let report = assessment_report(&patient, &result);
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"patient\""));
        assert!(json.contains("\"riskLevel\":\"low\""));
    }
}
