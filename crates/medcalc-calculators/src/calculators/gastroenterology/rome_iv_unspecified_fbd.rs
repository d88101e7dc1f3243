use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::{YesNo, count_yes};

/// Rome IV criteria for unspecified functional bowel disorder: functional
/// bowel symptoms that fit none of the more specific Rome IV disorders.
pub struct RomeIvUnspecifiedFbd;

#[derive(Debug, Clone, Deserialize)]
pub struct UnspecifiedFbdInput {
    pub bowel_symptoms_duration: YesNo,
    pub symptoms_not_organic: YesNo,
    pub exclusion_ibs_criteria: YesNo,
    pub exclusion_functional_constipation: YesNo,
    pub exclusion_functional_diarrhea: YesNo,
    pub exclusion_functional_bloating: YesNo,
    pub exclusion_gi_bleeding: YesNo,
    pub exclusion_iron_deficiency_anemia: YesNo,
    pub exclusion_weight_loss: YesNo,
    pub exclusion_abdominal_mass_lymphadenopathy: YesNo,
    pub exclusion_family_history_colon_cancer: YesNo,
    pub exclusion_age_over_50_without_screening: YesNo,
    pub exclusion_sudden_bowel_habit_change: YesNo,
}

const INCLUSION: [(&str, &str); 2] = [
    (
        "bowel_symptoms_duration",
        "Symptoms present for the last 3 months with onset at least 6 months ago",
    ),
    (
        "symptoms_not_organic",
        "Bowel symptoms not attributable to an organic etiology",
    ),
];

const FUNCTIONAL_EXCLUSIONS: [(&str, &str); 4] = [
    ("exclusion_ibs_criteria", "Does not meet criteria for IBS"),
    (
        "exclusion_functional_constipation",
        "Does not meet criteria for functional constipation",
    ),
    (
        "exclusion_functional_diarrhea",
        "Does not meet criteria for functional diarrhea",
    ),
    (
        "exclusion_functional_bloating",
        "Does not meet criteria for functional abdominal bloating/distension",
    ),
];

const ALARM_EXCLUSIONS: [(&str, &str); 7] = [
    ("exclusion_gi_bleeding", "No gastrointestinal bleeding"),
    ("exclusion_iron_deficiency_anemia", "No iron deficiency anemia"),
    ("exclusion_weight_loss", "No unintentional weight loss"),
    (
        "exclusion_abdominal_mass_lymphadenopathy",
        "No palpable abdominal mass or lymphadenopathy",
    ),
    (
        "exclusion_family_history_colon_cancer",
        "No family history of colon cancer",
    ),
    (
        "exclusion_age_over_50_without_screening",
        "Not over 50 without prior colorectal cancer screening",
    ),
    (
        "exclusion_sudden_bowel_habit_change",
        "No sudden or acute change in bowel habit",
    ),
];

impl Calculator for RomeIvUnspecifiedFbd {
    type Input = UnspecifiedFbdInput;
    type Output = CalculationResult<&'static str>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "rome_iv_unspecified_functional_bowel_disorder",
                "Rome IV Diagnostic Criteria for Unspecified Functional Bowel Disorder",
                Specialty::Gastroenterology,
            )
            .description(
                "Diagnostic criteria for bowel symptoms not attributable to organic disease \
                 that do not meet criteria for IBS, functional constipation, functional \
                 diarrhea or functional bloating.",
            )
            .parameters(
                INCLUSION
                    .iter()
                    .chain(FUNCTIONAL_EXCLUSIONS.iter())
                    .chain(ALARM_EXCLUSIONS.iter())
                    .map(|(name, description)| Parameter::yes_no(name, description))
                    .collect(),
            )
            .result("diagnosis", "diagnosis")
        });
        &METADATA
    }

    fn calculate(&self, input: UnspecifiedFbdInput) -> Result<Self::Output, CalculatorError> {
        let inclusion = count_yes(&[input.bowel_symptoms_duration, input.symptoms_not_organic]);
        let functional = count_yes(&[
            input.exclusion_ibs_criteria,
            input.exclusion_functional_constipation,
            input.exclusion_functional_diarrhea,
            input.exclusion_functional_bloating,
        ]);
        let alarm = count_yes(&[
            input.exclusion_gi_bleeding,
            input.exclusion_iron_deficiency_anemia,
            input.exclusion_weight_loss,
            input.exclusion_abdominal_mass_lymphadenopathy,
            input.exclusion_family_history_colon_cancer,
            input.exclusion_age_over_50_without_screening,
            input.exclusion_sudden_bowel_habit_change,
        ]);

        if inclusion == INCLUSION.len()
            && functional == FUNCTIONAL_EXCLUSIONS.len()
            && alarm == ALARM_EXCLUSIONS.len()
        {
            return Ok(CalculationResult::new(
                "Positive",
                "diagnosis",
                "Patient fulfills Rome IV diagnostic criteria for unspecified functional bowel \
                 disorder. No standardized treatment exists; symptom-directed therapy may include \
                 dietary modification, probiotics or antispasmodics as clinically indicated.",
                "Criteria Met",
                "Meets Rome IV criteria",
            ));
        }

        let detail = if inclusion == 0 {
            "Neither temporal criteria nor functional etiology established.".to_string()
        } else if inclusion < INCLUSION.len() {
            "One inclusion criterion not met (either temporal requirements or functional \
             etiology)."
                .to_string()
        } else if functional < FUNCTIONAL_EXCLUSIONS.len() {
            "Patient meets criteria for a more specific functional bowel disorder.".to_string()
        } else {
            format!(
                "{} alarm symptoms present requiring evaluation.",
                ALARM_EXCLUSIONS.len() - alarm
            )
        };
        let interpretation = format!(
            "Patient does not fulfill Rome IV diagnostic criteria for unspecified functional \
             bowel disorder. {detail} If alarm symptoms are present, further investigation \
             including imaging, endoscopy and laboratory studies may be indicated."
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
