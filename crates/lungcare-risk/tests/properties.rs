//! Property tests for scorer invariants.

use lungcare_model::{Gender, PatientData, RiskLevel, SmokingHistory};
use lungcare_risk::predict_lung_disease;
use proptest::prelude::{Just, Strategy, prop_oneof, proptest};

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_smoking() -> impl Strategy<Value = SmokingHistory> {
    prop_oneof![
        Just(SmokingHistory::Never),
        Just(SmokingHistory::Former),
        Just(SmokingHistory::Current),
    ]
}

fn arb_patient() -> impl Strategy<Value = PatientData> {
    (
        (18u32..=100, arb_gender(), arb_smoking(), 0u32..=150),
        proptest::array::uniform8(proptest::bool::ANY),
    )
        .prop_map(|((age, gender, smoking_history, pack_years), flags)| {
            let [
                family_history,
                occupational_exposure,
                chronic_cough,
                shortness_of_breath,
                chest_pain,
                weight_loss,
                fatigue,
                blood_in_sputum,
            ] = flags;
            PatientData {
                age,
                gender,
                smoking_history,
                pack_years,
                family_history,
                occupational_exposure,
                chronic_cough,
                shortness_of_breath,
                chest_pain,
                weight_loss,
                fatigue,
                blood_in_sputum,
            }
        })
}

proptest! {
    #[test]
    fn probability_stays_in_range(patient in arb_patient()) {
        let result = predict_lung_disease(&patient);
        assert!(result.probability <= 100);
    }

    #[test]
    fn confidence_stays_in_range(patient in arb_patient()) {
        let result = predict_lung_disease(&patient);
        assert!(result.confidence <= 95);
    }

    #[test]
    fn risk_level_matches_probability(patient in arb_patient()) {
        let result = predict_lung_disease(&patient);
        assert_eq!(
            result.risk_level,
            RiskLevel::from_probability(result.probability)
        );
    }

    #[test]
    fn recommendations_never_repeat(patient in arb_patient()) {
        let result = predict_lung_disease(&patient);
        for (index, text) in result.recommendations.iter().enumerate() {
            assert!(
                !result.recommendations[index + 1..].contains(text),
                "duplicate recommendation: {text}"
            );
        }
    }

    #[test]
    fn scoring_is_deterministic(patient in arb_patient()) {
        assert_eq!(predict_lung_disease(&patient), predict_lung_disease(&patient));
    }

    #[test]
    fn adding_a_symptom_never_lowers_probability(patient in arb_patient()) {
        let without = PatientData { blood_in_sputum: false, ..patient.clone() };
        let with = PatientData { blood_in_sputum: true, ..patient };
        assert!(
            predict_lung_disease(&with).probability
                >= predict_lung_disease(&without).probability
        );
    }

    #[test]
    fn general_advice_is_always_present(patient in arb_patient()) {
        let result = predict_lung_disease(&patient);
        assert!(
            result
                .recommendations
                .contains(&"Maintain regular exercise and healthy diet".to_string())
        );
    }
}
