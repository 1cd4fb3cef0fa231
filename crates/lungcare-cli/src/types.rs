use std::path::PathBuf;

use lungcare_model::{ImagePredictionResult, PatientData, PredictionResult};

#[derive(Debug)]
pub struct AssessOutcome {
    pub patient: PatientData,
    pub result: PredictionResult,
    pub report_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub file_name: String,
    pub byte_size: u64,
    pub result: ImagePredictionResult,
    pub report_path: Option<PathBuf>,
}
