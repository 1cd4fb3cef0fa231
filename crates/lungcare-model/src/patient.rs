//! Patient questionnaire record.

use serde::{Deserialize, Serialize};

use crate::enums::{Gender, SmokingHistory};
use crate::error::{ModelError, Result};

/// Number of scored questionnaire fields. Used as the denominator of the
/// confidence heuristic.
pub const SCORED_FIELD_COUNT: u32 = 12;

/// One questionnaire submission. Field names on the wire are the
/// camelCase names the original form binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientData {
    pub age: u32,
    pub gender: Gender,
    pub smoking_history: SmokingHistory,
    /// Packs-per-day times years smoked.
    pub pack_years: u32,
    pub family_history: bool,
    pub occupational_exposure: bool,
    pub chronic_cough: bool,
    pub shortness_of_breath: bool,
    pub chest_pain: bool,
    pub weight_loss: bool,
    pub fatigue: bool,
    pub blood_in_sputum: bool,
}

impl PatientData {
    /// Checks the plausible input ranges before scoring. The scorer
    /// itself is total over its input domain and does not validate.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] for an age outside 18-100 or
    /// an implausible pack-year count.
    pub fn validate(&self) -> Result<()> {
        if !(18..=100).contains(&self.age) {
            return Err(ModelError::InvalidField {
                field: "age",
                reason: format!("expected 18-100, got {}", self.age),
            });
        }
        if self.pack_years > 150 {
            return Err(ModelError::InvalidField {
                field: "packYears",
                reason: format!("expected 0-150, got {}", self.pack_years),
            });
        }
        Ok(())
    }

    /// Counts fields carrying a non-default value, mirroring the
    /// original demo's generic filter: a boolean counts when true, a
    /// number when nonzero, a string token when it is not "never".
    ///
    /// Age and gender therefore always count on any valid record. That
    /// skews confidence upward; kept for behavioral parity (see
    /// DESIGN.md).
    pub fn non_default_field_count(&self) -> u32 {
        let mut count = 0;
        if self.age != 0 {
            count += 1;
        }
        // Gender tokens are never "never", so the generic filter always
        // counts this field.
        count += 1;
        if self.smoking_history != SmokingHistory::Never {
            count += 1;
        }
        if self.pack_years != 0 {
            count += 1;
        }
        let flags = [
            self.family_history,
            self.occupational_exposure,
            self.chronic_cough,
            self.shortness_of_breath,
            self.chest_pain,
            self.weight_loss,
            self.fatigue,
            self.blood_in_sputum,
        ];
        count += flags.iter().filter(|flag| **flag).count() as u32;
        count
    }

    /// A blank record for a patient of the given age and gender, with
    /// every risk flag at its default.
    pub fn baseline(age: u32, gender: Gender) -> Self {
        Self {
            age,
            gender,
            smoking_history: SmokingHistory::Never,
            pack_years: 0,
            family_history: false,
            occupational_exposure: false,
            chronic_cough: false,
            shortness_of_breath: false,
            chest_pain: false,
            weight_loss: false,
            fatigue: false,
            blood_in_sputum: false,
        }
    }
}
