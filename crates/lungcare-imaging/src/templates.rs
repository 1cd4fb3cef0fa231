//! Canned outcome templates for the simulated analysis.
//!
//! Each template is a fixed, hand-authored diagnostic narrative. The
//! selection logic never inspects pixel data; it matches keywords in the
//! uploaded file's name and falls back to a random pick.

use lungcare_model::Diagnosis;

/// Version label stamped into every simulated result.
pub const MODEL_VERSION: &str = "ChestXNet-v2.1.0";

/// One fixed diagnostic narrative.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeTemplate {
    pub diagnosis: Diagnosis,
    pub cancer_detected: bool,
    /// Fixed per template; not a measured quantity.
    pub confidence: u8,
    pub findings: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    /// Set where the narrative describes discrete suspicious regions.
    pub suspicious_areas: Option<u8>,
}

/// All templates, in the order the random fallback indexes them.
pub static TEMPLATES: [OutcomeTemplate; 6] = [
    OutcomeTemplate {
        diagnosis: Diagnosis::Normal,
        cancer_detected: false,
        confidence: 92,
        findings: &[
            "Clear lung fields with no acute abnormalities",
            "Normal heart size and mediastinal contours",
            "No pleural effusion or pneumothorax detected",
        ],
        recommendations: &[
            "Continue regular health maintenance",
            "Annual chest X-ray screening as recommended by physician",
            "Maintain healthy lifestyle habits",
        ],
        suspicious_areas: None,
    },
    OutcomeTemplate {
        diagnosis: Diagnosis::Pneumonia,
        cancer_detected: false,
        confidence: 87,
        findings: &[
            "Consolidation in right lower lobe consistent with pneumonia",
            "Increased opacity in affected area",
            "No signs of pleural effusion",
        ],
        recommendations: &[
            "Immediate medical consultation required",
            "Antibiotic treatment may be necessary",
            "Follow-up chest X-ray in 2-3 weeks",
            "Monitor symptoms closely",
        ],
        suspicious_areas: None,
    },
    OutcomeTemplate {
        diagnosis: Diagnosis::Covid19,
        cancer_detected: false,
        confidence: 78,
        findings: &[
            "Bilateral ground-glass opacities",
            "Peripheral distribution pattern",
            "Findings consistent with viral pneumonia",
        ],
        recommendations: &[
            "COVID-19 testing recommended",
            "Isolation precautions advised",
            "Monitor oxygen saturation",
            "Seek medical attention if symptoms worsen",
        ],
        suspicious_areas: None,
    },
    OutcomeTemplate {
        diagnosis: Diagnosis::Tuberculosis,
        cancer_detected: false,
        confidence: 85,
        findings: &[
            "Upper lobe infiltrates with cavitation",
            "Hilar lymphadenopathy present",
            "Pattern suggestive of pulmonary tuberculosis",
        ],
        recommendations: &[
            "Urgent referral to infectious disease specialist",
            "Sputum culture and TB testing required",
            "Contact tracing may be necessary",
            "Isolation precautions until ruled out",
        ],
        suspicious_areas: None,
    },
    OutcomeTemplate {
        diagnosis: Diagnosis::LungCancer,
        cancer_detected: true,
        confidence: 81,
        findings: &[
            "Spiculated mass in right upper lobe measuring approximately 3.2cm",
            "Satellite nodule adjacent to primary lesion",
            "Pattern highly suspicious for primary lung malignancy",
        ],
        recommendations: &[
            "Urgent referral to oncology",
            "CT scan with contrast for staging",
            "Tissue biopsy required for definitive diagnosis",
            "Do not delay specialist follow-up",
        ],
        suspicious_areas: Some(2),
    },
    OutcomeTemplate {
        diagnosis: Diagnosis::OtherAbnormality,
        cancer_detected: false,
        confidence: 73,
        findings: &[
            "Nodular opacity in left upper lobe",
            "Size approximately 2.5cm",
            "Further evaluation needed to characterize",
        ],
        recommendations: &[
            "CT scan of chest recommended",
            "Pulmonology consultation advised",
            "Compare with previous imaging if available",
            "Follow-up in 3-6 months if benign",
        ],
        suspicious_areas: Some(1),
    },
];

/// Ordered keyword groups; the first group with a substring match wins.
///
/// Matching is plain substring search on the lowercased file name, so a
/// name like "stable.png" matches the "tb" keyword. Earlier groups take
/// precedence.
const KEYWORD_GROUPS: [(&[&str], Diagnosis); 5] = [
    (&["normal", "healthy", "clear"], Diagnosis::Normal),
    (&["pneumonia"], Diagnosis::Pneumonia),
    (&["covid", "corona"], Diagnosis::Covid19),
    (&["tb", "tuberculosis"], Diagnosis::Tuberculosis),
    (&["cancer", "malignant", "tumor"], Diagnosis::LungCancer),
];

/// Returns the template keyed by the file name, or `None` when no
/// keyword group matches and the caller should fall back to a random
/// pick.
pub fn match_file_name(file_name: &str) -> Option<&'static OutcomeTemplate> {
    let lowered = file_name.to_lowercase();
    for (keywords, diagnosis) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some(template_for(diagnosis));
        }
    }
    None
}

/// Looks up the template for a diagnosis. Every diagnosis has one.
pub fn template_for(diagnosis: Diagnosis) -> &'static OutcomeTemplate {
    TEMPLATES
        .iter()
        .find(|template| template.diagnosis == diagnosis)
        .unwrap_or(&TEMPLATES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_diagnosis_has_a_template() {
        for diagnosis in [
            Diagnosis::Normal,
            Diagnosis::Pneumonia,
            Diagnosis::Covid19,
            Diagnosis::Tuberculosis,
            Diagnosis::LungCancer,
            Diagnosis::OtherAbnormality,
        ] {
            assert_eq!(template_for(diagnosis).diagnosis, diagnosis);
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(
            match_file_name("Chest_NORMAL_01.png").unwrap().diagnosis,
            Diagnosis::Normal
        );
        assert_eq!(
            match_file_name("suspected-Pneumonia.jpg").unwrap().diagnosis,
            Diagnosis::Pneumonia
        );
    }

    #[test]
    fn test_first_matching_group_wins() {
        // "clear" precedes "cancer" in group order.
        assert_eq!(
            match_file_name("clear-of-cancer.png").unwrap().diagnosis,
            Diagnosis::Normal
        );
    }

    #[test]
    fn test_tb_keyword_matches_as_substring() {
        // Known quirk of plain substring matching.
        assert_eq!(
            match_file_name("stable.png").unwrap().diagnosis,
            Diagnosis::Tuberculosis
        );
    }

    #[test]
    fn test_unmatched_name_yields_none() {
        assert!(match_file_name("IMG_20250823_1200.jpg").is_none());
    }

    #[test]
    fn test_only_cancer_template_sets_the_flag() {
        for template in &TEMPLATES {
            assert_eq!(
                template.cancer_detected,
                template.diagnosis == Diagnosis::LungCancer
            );
        }
    }
}
