//! Additive risk scoring for the lung screening questionnaire.
//!
//! The scorer is a pure function: points accumulate per answered factor,
//! the total maps onto a probability percentile, and the percentile maps
//! onto a risk tier. Notes and recommendations are emitted in evaluation
//! order so the caller can display them verbatim.

use lungcare_model::{
    Gender, PatientData, PredictionResult, RiskLevel, SCORED_FIELD_COUNT, SmokingHistory,
};
use tracing::debug;

/// Denominator of the percentile mapping. A score at or above this maps
/// to 100%.
const MAX_SCORE: u32 = 200;

/// Confidence is capped below certainty; this is a demo heuristic, not a
/// statistical measure.
const MAX_CONFIDENCE: u8 = 95;

/// Symptom flags in their fixed evaluation order, with per-symptom
/// points and the label used in the emitted note.
const SYMPTOMS: [(fn(&PatientData) -> bool, u32, &str); 6] = [
    (|p| p.chronic_cough, 10, "Chronic cough"),
    (|p| p.shortness_of_breath, 15, "Shortness of breath"),
    (|p| p.chest_pain, 12, "Chest pain"),
    (|p| p.weight_loss, 18, "Unexplained weight loss"),
    (|p| p.fatigue, 8, "Persistent fatigue"),
    (|p| p.blood_in_sputum, 25, "Blood in sputum"),
];

const GENERAL_RECOMMENDATIONS: [&str; 3] = [
    "Maintain regular exercise and healthy diet",
    "Avoid exposure to air pollution and secondhand smoke",
    "Get regular health check-ups and lung function tests",
];

const ELEVATED_RECOMMENDATIONS: [&str; 2] = [
    "Schedule an appointment with a pulmonologist",
    "Consider lung cancer screening if eligible",
];

const URGENT_RECOMMENDATIONS: [&str; 2] = [
    "Seek immediate medical evaluation",
    "Discuss symptoms with healthcare provider urgently",
];

/// Scores one questionnaire record.
///
/// Total over its input domain: no error path, no validation. Callers
/// validate ranges first via [`PatientData::validate`].
pub fn predict_lung_disease(patient: &PatientData) -> PredictionResult {
    let mut score: u32 = 0;
    let mut risk_factors: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    // Age (0-30 points). The 40-49 bracket contributes silently.
    if patient.age >= 65 {
        score += 30;
        risk_factors.push("Advanced age (65+ years) increases lung disease risk".to_string());
    } else if patient.age >= 50 {
        score += 20;
        risk_factors.push("Age over 50 is a moderate risk factor".to_string());
    } else if patient.age >= 40 {
        score += 10;
    }

    // Smoking status (0-40 points).
    match patient.smoking_history {
        SmokingHistory::Current => {
            score += 40;
            risk_factors
                .push("Current smoking significantly increases lung disease risk".to_string());
            recommendations
                .push("Quit smoking immediately - seek professional help if needed".to_string());
        }
        SmokingHistory::Former => {
            score += 20;
            risk_factors.push("Former smoking history contributes to elevated risk".to_string());
            recommendations.push(
                "Continue to avoid smoking and maintain smoke-free environment".to_string(),
            );
        }
        SmokingHistory::Never => {}
    }

    // Pack-years (0-25 points). The 1-10 tier contributes silently; the
    // three higher tiers each note the literal count.
    let pack_years = patient.pack_years;
    if pack_years > 30 {
        score += 25;
        risk_factors.push(format!("Heavy smoking history ({pack_years} pack-years)"));
    } else if pack_years > 20 {
        score += 20;
        risk_factors.push(format!(
            "Significant smoking history ({pack_years} pack-years)"
        ));
    } else if pack_years > 10 {
        score += 15;
        risk_factors.push(format!(
            "Moderate smoking history ({pack_years} pack-years)"
        ));
    } else if pack_years > 0 {
        score += 10;
    }

    if patient.family_history {
        score += 15;
        risk_factors
            .push("Family history of lung disease increases genetic predisposition".to_string());
        recommendations
            .push("Discuss family history with your doctor for personalized screening".to_string());
    }

    if patient.occupational_exposure {
        score += 15;
        risk_factors.push("Occupational exposure to harmful substances".to_string());
        recommendations
            .push("Use proper protective equipment and follow safety protocols at work".to_string());
    }

    for (flag, points, label) in SYMPTOMS {
        if flag(patient) {
            score += points;
            risk_factors.push(format!("Presence of {label}"));
        }
    }

    // Flat male adjustment, no note. Kept for behavioral parity with the
    // original questionnaire; flagged in DESIGN.md as unreviewed.
    if patient.gender == Gender::Male {
        score += 5;
    }

    let probability = probability_from_score(score);
    let risk_level = RiskLevel::from_probability(probability);

    for text in GENERAL_RECOMMENDATIONS {
        recommendations.push(text.to_string());
    }
    if risk_level.is_elevated() {
        for text in ELEVATED_RECOMMENDATIONS {
            recommendations.push(text.to_string());
        }
    }
    if risk_level.is_urgent() {
        for text in URGENT_RECOMMENDATIONS {
            recommendations.push(text.to_string());
        }
    }

    let confidence = confidence_from_coverage(patient.non_default_field_count());

    debug!(score, probability, %risk_level, confidence, "scored questionnaire");

    PredictionResult {
        risk_level,
        probability,
        risk_factors,
        recommendations: dedup_preserving_order(recommendations),
        confidence,
    }
}

/// `round(min(score / 200 * 100, 100))` as an integer percentage.
fn probability_from_score(score: u32) -> u8 {
    let raw = (f64::from(score) / f64::from(MAX_SCORE)) * 100.0;
    raw.round().min(100.0) as u8
}

/// `round(min(count / 12 * 100, 95))` as an integer percentage.
fn confidence_from_coverage(non_default_fields: u32) -> u8 {
    let raw = (f64::from(non_default_fields) / f64::from(SCORED_FIELD_COUNT)) * 100.0;
    raw.round().min(f64::from(MAX_CONFIDENCE)) as u8
}

/// Removes duplicate strings, keeping the first occurrence of each.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_rounds_half_up() {
        // 45 / 200 * 100 = 22.5 -> 23, matching the original rounding.
        assert_eq!(probability_from_score(45), 23);
        assert_eq!(probability_from_score(0), 0);
        assert_eq!(probability_from_score(200), 100);
        assert_eq!(probability_from_score(218), 100);
    }

    #[test]
    fn test_confidence_caps_at_95() {
        assert_eq!(confidence_from_coverage(12), 95);
        assert_eq!(confidence_from_coverage(2), 17);
        // 4 / 12 * 100 = 33.33 -> 33
        assert_eq!(confidence_from_coverage(4), 33);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let items = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
            "b".to_string(),
        ];
        assert_eq!(dedup_preserving_order(items), vec!["a", "b", "c"]);
    }
}
