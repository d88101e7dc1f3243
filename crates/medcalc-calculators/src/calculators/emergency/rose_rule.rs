use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// ROSE (Risk stratification Of Syncope in the Emergency department) rule.
/// Any single positive criterion classifies the patient as high risk.
pub struct RoseRule;

#[derive(Debug, Clone, Deserialize)]
pub struct RoseRuleInput {
    pub bnp_level: YesNo,
    pub bradycardia: YesNo,
    pub fecal_occult_blood: YesNo,
    pub anemia: YesNo,
    pub chest_pain: YesNo,
    pub q_wave_ecg: YesNo,
    pub oxygen_saturation: YesNo,
}

impl RoseRuleInput {
    fn criteria(&self) -> [(YesNo, &'static str); 7] {
        [
            (self.bnp_level, "BNP ≥300 pg/ml"),
            (self.bradycardia, "bradycardia ≤50 bpm"),
            (self.fecal_occult_blood, "fecal occult blood"),
            (self.anemia, "hemoglobin ≤90 g/l"),
            (self.chest_pain, "chest pain with syncope"),
            (self.q_wave_ecg, "Q waves on ECG"),
            (self.oxygen_saturation, "SpO2 ≤94% on room air"),
        ]
    }
}

impl Calculator for RoseRule {
    type Input = RoseRuleInput;
    type Output = CalculationResult<String>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "rose_rule",
                "ROSE (Risk Stratification of Syncope in the Emergency Department) Rule",
                Specialty::Emergency,
            )
            .description(
                "Predicts 1-month serious outcome or death in emergency department patients \
                 presenting with syncope.",
            )
            .parameters(vec![
                Parameter::yes_no("bnp_level", "BNP ≥300 pg/ml"),
                Parameter::yes_no("bradycardia", "Heart rate ≤50 bpm in ED or prehospital"),
                Parameter::yes_no("fecal_occult_blood", "Fecal occult blood on rectal exam"),
                Parameter::yes_no("anemia", "Hemoglobin ≤90 g/l"),
                Parameter::yes_no("chest_pain", "Chest pain associated with syncope"),
                Parameter::yes_no("q_wave_ecg", "Q waves on ECG (not in lead III)"),
                Parameter::yes_no("oxygen_saturation", "Oxygen saturation ≤94% on room air"),
            ])
            .result("risk level", "risk level")
        });
        &METADATA
    }

    fn calculate(&self, input: RoseRuleInput) -> Result<Self::Output, CalculatorError> {
        let positive: Vec<&str> = input
            .criteria()
            .into_iter()
            .filter(|(answer, _)| answer.is_yes())
            .map(|(_, label)| label)
            .collect();

        let (stage, description, interpretation) = if positive.is_empty() {
            (
                "Low Risk",
                "No ROSE criteria present",
                "Low risk for 1-month serious outcome or death. Patient may be considered for \
                 discharge with appropriate follow-up. The ROSE rule has a negative predictive \
                 value of 98.5% when no criteria are present. Arrange primary care follow-up within \
                 24-48 hours and give return precautions."
                    .to_string(),
            )
        } else {
            (
                "High Risk",
                "One or more ROSE criteria present",
                format!(
                    "High risk for 1-month serious outcome or death ({} criteria present: {}). \
                     Strong consideration for hospital admission with cardiac monitoring and \
                     further workup directed at the positive criteria.",
                    positive.len(),
                    positive.join(", "),
                ),
            )
        };

        Ok(CalculationResult::new(
            stage.to_string(),
            "risk level",
            interpretation,
            stage,
            description,
        ))
    }
}
