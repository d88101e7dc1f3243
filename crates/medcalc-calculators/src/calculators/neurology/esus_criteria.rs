use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Embolic Stroke of Undetermined Source (ESUS) criteria.
///
/// An incomplete workup takes precedence over the clinical criteria: the
/// verdict is "Inadequate Evaluation" whenever any evaluation item is
/// missing.
pub struct EsusCriteria;

/// Answers are capitalized on the wire for this calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsusInput {
    pub stroke_type_non_lacunar: Answer,
    pub no_significant_atherosclerosis: Answer,
    pub no_major_cardioembolic_source: Answer,
    pub no_other_specific_cause: Answer,
    pub adequate_cardiac_monitoring: Answer,
    pub adequate_vascular_imaging: Answer,
    pub adequate_cardiac_imaging: Answer,
}

#[derive(Debug, Clone, Serialize)]
pub struct EsusDetails {
    pub clinical_criteria_failed: Vec<&'static str>,
    pub diagnostic_evaluation_incomplete: Vec<&'static str>,
}

const CLINICAL: [(&str, &str); 4] = [
    ("stroke_type_non_lacunar", "Non-lacunar stroke detected by CT or MRI"),
    (
        "no_significant_atherosclerosis",
        "Absence of ≥50% luminal stenosis in arteries supplying the ischemic area",
    ),
    ("no_major_cardioembolic_source", "No major cardioembolic source identified"),
    ("no_other_specific_cause", "No other specific cause of stroke identified"),
];

const EVALUATION: [(&str, &str); 3] = [
    (
        "adequate_cardiac_monitoring",
        "Cardiac rhythm monitoring ≥24 hours with automated rhythm detection",
    ),
    ("adequate_vascular_imaging", "Adequate vascular imaging completed"),
    ("adequate_cardiac_imaging", "Adequate cardiac imaging completed"),
];

fn unmet(criteria: &[(&'static str, &'static str)], answers: &[Answer]) -> Vec<&'static str> {
    criteria
        .iter()
        .zip(answers)
        .filter(|(_, answer)| **answer == Answer::No)
        .map(|((_, description), _)| *description)
        .collect()
}

impl Calculator for EsusCriteria {
    type Input = EsusInput;
    type Output = CalculationResult<&'static str, EsusDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "embolic_stroke_undetermined_source_esus_criteria",
                "Embolic Stroke of Undetermined Source (ESUS) Criteria",
                Specialty::Neurology,
            )
            .description(
                "Identifies non-lacunar ischemic strokes without an identified embolic source \
                 after a minimum standard diagnostic evaluation.",
            )
            .parameters(
                CLINICAL
                    .iter()
                    .chain(EVALUATION.iter())
                    .map(|(name, description)| Parameter::choice(name, description, &["Yes", "No"]))
                    .collect(),
            )
            .result("diagnosis", "diagnosis")
        });
        &METADATA
    }

    fn calculate(&self, input: EsusInput) -> Result<Self::Output, CalculatorError> {
        let clinical_failed = unmet(
            &CLINICAL,
            &[
                input.stroke_type_non_lacunar,
                input.no_significant_atherosclerosis,
                input.no_major_cardioembolic_source,
                input.no_other_specific_cause,
            ],
        );
        let evaluation_missing = unmet(
            &EVALUATION,
            &[
                input.adequate_cardiac_monitoring,
                input.adequate_vascular_imaging,
                input.adequate_cardiac_imaging,
            ],
        );

        let (verdict, description, base, next_steps) = if !evaluation_missing.is_empty() {
            (
                "Inadequate Evaluation",
                "Insufficient diagnostic workup",
                "Diagnostic evaluation is inadequate to determine ESUS status. Complete the \
                 minimum workup of ≥24-hour cardiac monitoring, vascular imaging of the \
                 extracranial and intracranial arteries, and cardiac imaging (TTE and/or TEE).",
                "Reassess ESUS criteria after completing the missing evaluations.",
            )
        } else if clinical_failed.is_empty() {
            (
                "ESUS Diagnosis Confirmed",
                "Meets all ESUS criteria",
                "Patient meets all diagnostic criteria for Embolic Stroke of Undetermined Source \
                 (ESUS).",
                "Consider extended cardiac monitoring, evaluation for patent foramen ovale, \
                 assessment for hypercoagulable states, and discussion of anticoagulation versus \
                 antiplatelet therapy.",
            )
        } else {
            (
                "ESUS Diagnosis Not Met",
                "Does not meet ESUS criteria",
                "Patient does not meet diagnostic criteria for Embolic Stroke of Undetermined \
                 Source (ESUS).",
                "Identify the specific stroke etiology, apply TOAST classification and start \
                 etiology-specific secondary prevention.",
            )
        };

        let mut interpretation = base.to_string();
        if !clinical_failed.is_empty() {
            let listed: Vec<String> = clinical_failed.iter().map(|c| c.to_lowercase()).collect();
            interpretation.push_str(&format!(" Clinical criteria not met: {}.", listed.join("; ")));
        }
        if !evaluation_missing.is_empty() {
            let listed: Vec<String> = evaluation_missing.iter().map(|c| c.to_lowercase()).collect();
            interpretation.push_str(&format!(
                " Incomplete diagnostic evaluations: {}.",
                listed.join("; ")
            ));
        }
        interpretation.push(' ');
        interpretation.push_str(next_steps);

        Ok(
            CalculationResult::new(verdict, "diagnosis", interpretation, verdict, description)
                .with_details(EsusDetails {
                    clinical_criteria_failed: clinical_failed,
                    diagnostic_evaluation_incomplete: evaluation_missing,
                }),
        )
    }
}
