//! Type-safe enumerations for the screening questionnaire and the
//! simulated imaging pipeline.
//!
//! These enums carry the exact wire tokens the original questionnaire
//! and report consumers bind to (`"very-high"`, `"covid-19"`, ...), so
//! serde renames are part of the contract, not presentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender as collected by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Smoking status tiers used by the scorer.
///
/// `Never` is the questionnaire default; the confidence heuristic treats
/// it as an unanswered field (see `PatientData::non_default_field_count`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingHistory {
    Never,
    Former,
    Current,
}

impl SmokingHistory {
    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingHistory::Never => "never",
            SmokingHistory::Former => "former",
            SmokingHistory::Current => "current",
        }
    }
}

impl fmt::Display for SmokingHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SmokingHistory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" => Ok(SmokingHistory::Never),
            "former" => Ok(SmokingHistory::Former),
            "current" => Ok(SmokingHistory::Current),
            _ => Err(format!("Unknown smoking history: {s}")),
        }
    }
}

/// Risk tier derived from the scored probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Returns the wire token (`"very-high"` for [`RiskLevel::VeryHigh`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very-high",
        }
    }

    /// Maps a probability percentage onto its risk tier.
    ///
    /// Boundaries are half-open: 25 is moderate, not low; 75 is
    /// very-high, not high.
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            0..=24 => RiskLevel::Low,
            25..=49 => RiskLevel::Moderate,
            50..=74 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    /// Returns true for moderate and above.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, RiskLevel::Low)
    }

    /// Returns true for high and very-high.
    pub fn is_urgent(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::VeryHigh)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "very-high" => Ok(RiskLevel::VeryHigh),
            _ => Err(format!("Unknown risk level: {s}")),
        }
    }
}

/// Diagnostic label attached to a canned imaging outcome template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnosis {
    Normal,
    Pneumonia,
    #[serde(rename = "covid-19")]
    Covid19,
    Tuberculosis,
    LungCancer,
    OtherAbnormality,
}

impl Diagnosis {
    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::Normal => "normal",
            Diagnosis::Pneumonia => "pneumonia",
            Diagnosis::Covid19 => "covid-19",
            Diagnosis::Tuberculosis => "tuberculosis",
            Diagnosis::LungCancer => "lung-cancer",
            Diagnosis::OtherAbnormality => "other-abnormality",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Diagnosis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Diagnosis::Normal),
            "pneumonia" => Ok(Diagnosis::Pneumonia),
            "covid-19" => Ok(Diagnosis::Covid19),
            "tuberculosis" => Ok(Diagnosis::Tuberculosis),
            "lung-cancer" => Ok(Diagnosis::LungCancer),
            "other-abnormality" => Ok(Diagnosis::OtherAbnormality),
            _ => Err(format!("Unknown diagnosis: {s}")),
        }
    }
}

/// Image quality label derived from upload byte size.
///
/// A size label, not an assessment of the pixels. The thresholds are
/// strict: a file of exactly 1 MiB is still "fair".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

impl ImageQuality {
    /// Step function on byte size: >2 MiB excellent, >1 MiB good,
    /// >500 KiB fair, else poor.
    pub fn from_byte_size(byte_size: u64) -> Self {
        if byte_size > 2 * MIB {
            ImageQuality::Excellent
        } else if byte_size > MIB {
            ImageQuality::Good
        } else if byte_size > 500 * KIB {
            ImageQuality::Fair
        } else {
            ImageQuality::Poor
        }
    }

    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Excellent => "excellent",
            ImageQuality::Good => "good",
            ImageQuality::Fair => "fair",
            ImageQuality::Poor => "poor",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_boundaries_are_half_open() {
        assert_eq!(RiskLevel::from_probability(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(25), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(49), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(75), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::from_probability(100), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_risk_level_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::VeryHigh).unwrap(),
            "\"very-high\""
        );
        assert_eq!(
            "very-high".parse::<RiskLevel>().unwrap(),
            RiskLevel::VeryHigh
        );
    }

    #[test]
    fn test_diagnosis_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&Diagnosis::Covid19).unwrap(),
            "\"covid-19\""
        );
        assert_eq!(
            serde_json::to_string(&Diagnosis::LungCancer).unwrap(),
            "\"lung-cancer\""
        );
        assert_eq!(
            "other-abnormality".parse::<Diagnosis>().unwrap(),
            Diagnosis::OtherAbnormality
        );
    }

    #[test]
    fn test_smoking_history_from_str() {
        assert_eq!(
            "CURRENT".parse::<SmokingHistory>().unwrap(),
            SmokingHistory::Current
        );
        assert_eq!(
            " former ".parse::<SmokingHistory>().unwrap(),
            SmokingHistory::Former
        );
        assert!("quit".parse::<SmokingHistory>().is_err());
    }

    #[test]
    fn test_image_quality_exact_boundaries_fall_low() {
        assert_eq!(ImageQuality::from_byte_size(0), ImageQuality::Poor);
        assert_eq!(ImageQuality::from_byte_size(500 * KIB), ImageQuality::Poor);
        assert_eq!(
            ImageQuality::from_byte_size(500 * KIB + 1),
            ImageQuality::Fair
        );
        assert_eq!(ImageQuality::from_byte_size(MIB), ImageQuality::Fair);
        assert_eq!(ImageQuality::from_byte_size(MIB + 1), ImageQuality::Good);
        assert_eq!(ImageQuality::from_byte_size(2 * MIB), ImageQuality::Good);
        assert_eq!(
            ImageQuality::from_byte_size(2 * MIB + 1),
            ImageQuality::Excellent
        );
    }
}
