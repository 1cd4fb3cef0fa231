pub mod enums;
pub mod error;
pub mod imaging;
pub mod patient;
pub mod prediction;

pub use enums::{Diagnosis, Gender, ImageQuality, RiskLevel, SmokingHistory};
pub use error::{ModelError, Result};
pub use imaging::{ImagePredictionResult, TechnicalDetails};
pub use patient::{PatientData, SCORED_FIELD_COUNT};
pub use prediction::PredictionResult;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_json_contract() {
        let json = r#"{
            "age": 55,
            "gender": "female",
            "smokingHistory": "former",
            "packYears": 12,
            "familyHistory": true,
            "occupationalExposure": false,
            "chronicCough": true,
            "shortnessOfBreath": false,
            "chestPain": false,
            "weightLoss": false,
            "fatigue": false,
            "bloodInSputum": false
        }"#;
        let patient: PatientData = serde_json::from_str(json).expect("deserialize patient");
        assert_eq!(patient.age, 55);
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.smoking_history, SmokingHistory::Former);
        assert!(patient.family_history);
        assert!(patient.validate().is_ok());
    }
}
