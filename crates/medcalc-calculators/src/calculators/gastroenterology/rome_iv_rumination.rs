use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::{YesNo, count_yes};

/// Rome IV diagnostic criteria for rumination syndrome.
///
/// Both positive criteria must be present and every exclusion (alarm
/// feature absent) must be confirmed.
pub struct RomeIvRuminationSyndrome;

#[derive(Debug, Clone, Deserialize)]
pub struct RuminationInput {
    pub persistent_recurrent_regurgitation: YesNo,
    pub regurgitation_not_preceded_by_retching: YesNo,
    pub exclusion_gi_bleeding: YesNo,
    pub exclusion_iron_deficiency_anemia: YesNo,
    pub exclusion_heartburn_reflux: YesNo,
    pub exclusion_weight_loss: YesNo,
    pub exclusion_abdominal_mass_lymphadenopathy: YesNo,
    pub exclusion_dysphagia: YesNo,
    pub exclusion_persistent_vomiting: YesNo,
}

const POSITIVE_CRITERIA: [(&str, &str); 2] = [
    (
        "persistent_recurrent_regurgitation",
        "Persistent or recurrent regurgitation of recently ingested food with remastication \
         or expulsion",
    ),
    (
        "regurgitation_not_preceded_by_retching",
        "Regurgitation is not preceded by retching",
    ),
];

const EXCLUSIONS: [(&str, &str); 7] = [
    ("exclusion_gi_bleeding", "No gastrointestinal bleeding"),
    ("exclusion_iron_deficiency_anemia", "No iron deficiency anemia"),
    ("exclusion_heartburn_reflux", "No predominant heartburn or reflux"),
    ("exclusion_weight_loss", "No unintentional weight loss"),
    (
        "exclusion_abdominal_mass_lymphadenopathy",
        "No palpable abdominal mass or lymphadenopathy",
    ),
    ("exclusion_dysphagia", "No progressive dysphagia"),
    ("exclusion_persistent_vomiting", "No persistent vomiting"),
];

impl Calculator for RomeIvRuminationSyndrome {
    type Input = RuminationInput;
    type Output = CalculationResult<&'static str>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "rome_iv_rumination_syndrome",
                "Rome IV Diagnostic Criteria for Rumination Syndrome",
                Specialty::Gastroenterology,
            )
            .description(
                "Diagnostic criteria for rumination syndrome, fulfilled for the last 3 months \
                 with onset at least 6 months before diagnosis.",
            )
            .parameters(
                POSITIVE_CRITERIA
                    .iter()
                    .chain(EXCLUSIONS.iter())
                    .map(|(name, description)| Parameter::yes_no(name, description))
                    .collect(),
            )
            .result("diagnosis", "diagnosis")
        });
        &METADATA
    }

    fn calculate(&self, input: RuminationInput) -> Result<Self::Output, CalculatorError> {
        let positive = count_yes(&[
            input.persistent_recurrent_regurgitation,
            input.regurgitation_not_preceded_by_retching,
        ]);
        let exclusions = count_yes(&[
            input.exclusion_gi_bleeding,
            input.exclusion_iron_deficiency_anemia,
            input.exclusion_heartburn_reflux,
            input.exclusion_weight_loss,
            input.exclusion_abdominal_mass_lymphadenopathy,
            input.exclusion_dysphagia,
            input.exclusion_persistent_vomiting,
        ]);

        if positive == POSITIVE_CRITERIA.len() && exclusions == EXCLUSIONS.len() {
            return Ok(CalculationResult::new(
                "Positive",
                "diagnosis",
                "Patient fulfills Rome IV diagnostic criteria for rumination syndrome. Treatment \
                 focuses on behavioral interventions including diaphragmatic breathing training, \
                 habit reversal therapy and biofeedback.",
                "Criteria Met",
                "Meets Rome IV criteria",
            ));
        }

        let detail = if positive < POSITIVE_CRITERIA.len() {
            format!(
                "{} essential positive criteria not met.",
                POSITIVE_CRITERIA.len() - positive
            )
        } else {
            format!(
                "{} exclusion criteria not satisfied (alarm symptoms present).",
                EXCLUSIONS.len() - exclusions
            )
        };
        let interpretation = format!(
            "Patient does not fulfill Rome IV diagnostic criteria for rumination syndrome. \
             {detail} Consider alternative diagnoses including GERD with regurgitation, \
             gastroparesis, eating disorders or organic gastrointestinal pathology."
        );

        Ok(CalculationResult::new(
            "Negative",
            "diagnosis",
            interpretation,
            "Criteria Not Met",
            "Does not meet Rome IV criteria",
        ))
    }
}
