use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// CT in Head Injury Patients (CHIP) rule for minor head injury, age 16+.
/// Any major criterion, or two or more minor criteria, warrants CT.
pub struct ChipPredictionRule;

#[derive(Debug, Clone, Deserialize)]
pub struct ChipInput {
    pub pedestrian_cyclist_vehicle: YesNo,
    pub ejected_from_vehicle: YesNo,
    pub vomiting: YesNo,
    pub amnesia_4_hours_or_more: YesNo,
    pub clinical_skull_fracture: YesNo,
    pub gcs_less_than_15: YesNo,
    pub gcs_deterioration_2_points: YesNo,
    pub anticoagulant_use: YesNo,
    pub post_traumatic_seizure: YesNo,
    pub age_60_or_older: YesNo,
    pub fall_from_elevation: YesNo,
    pub anterograde_amnesia: YesNo,
    pub amnesia_2_to_4_hours: YesNo,
    pub skull_contusion: YesNo,
    pub neurologic_deficit: YesNo,
    pub loss_of_consciousness: YesNo,
    pub gcs_deterioration_1_point: YesNo,
    pub age_40_to_60: YesNo,
}

impl ChipInput {
    fn major(&self) -> [(YesNo, &'static str); 10] {
        [
            (self.pedestrian_cyclist_vehicle, "Pedestrian or cyclist struck by vehicle"),
            (self.ejected_from_vehicle, "Patient ejected from vehicle during accident"),
            (self.vomiting, "Post-traumatic vomiting"),
            (self.amnesia_4_hours_or_more, "Post-traumatic amnesia ≥4 hours"),
            (self.clinical_skull_fracture, "Clinical signs of skull fracture"),
            (self.gcs_less_than_15, "Glasgow Coma Scale <15"),
            (self.gcs_deterioration_2_points, "GCS deterioration ≥2 points"),
            (self.anticoagulant_use, "Current anticoagulant medication use"),
            (self.post_traumatic_seizure, "Post-traumatic seizure"),
            (self.age_60_or_older, "Age ≥60 years"),
        ]
    }

    fn minor(&self) -> [(YesNo, &'static str); 8] {
        [
            (self.fall_from_elevation, "Fall from any elevation"),
            (self.anterograde_amnesia, "Persistent anterograde amnesia"),
            (self.amnesia_2_to_4_hours, "Post-traumatic amnesia 2 to <4 hours"),
            (self.skull_contusion, "Skull contusion present"),
            (self.neurologic_deficit, "Neurologic deficit present"),
            (self.loss_of_consciousness, "Loss of consciousness"),
            (self.gcs_deterioration_1_point, "GCS deterioration of 1 point"),
            (self.age_40_to_60, "Age 40-60 years"),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipAssessment {
    pub recommendation: String,
    pub risk_level: String,
    pub major_criteria_count: usize,
    pub minor_criteria_count: usize,
    pub major_criteria_present: Vec<String>,
    pub minor_criteria_present: Vec<String>,
    pub clinical_rationale: String,
}

fn present<const N: usize>(criteria: [(YesNo, &'static str); N]) -> Vec<String> {
    criteria
        .into_iter()
        .filter(|(answer, _)| answer.is_yes())
        .map(|(_, label)| label.to_string())
        .collect()
}

impl Calculator for ChipPredictionRule {
    type Input = ChipInput;
    type Output = CalculationResult<ChipAssessment>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "chip_prediction_rule",
                "CHIP (CT in Head Injury Patients) Prediction Rule",
                Specialty::Emergency,
            )
            .description(
                "Identifies patients 16 years or older with minor head injury who need CT \
                 imaging, using 10 major and 8 minor criteria.",
            )
            .parameters(vec![
                Parameter::yes_no("pedestrian_cyclist_vehicle", "Pedestrian or cyclist struck by vehicle"),
                Parameter::yes_no("ejected_from_vehicle", "Ejected from vehicle"),
                Parameter::yes_no("vomiting", "Post-traumatic vomiting"),
                Parameter::yes_no("amnesia_4_hours_or_more", "Post-traumatic amnesia of 4 hours or more"),
                Parameter::yes_no("clinical_skull_fracture", "Clinical signs of skull fracture"),
                Parameter::yes_no("gcs_less_than_15", "GCS below 15"),
                Parameter::yes_no("gcs_deterioration_2_points", "GCS deterioration of 2 or more points"),
                Parameter::yes_no("anticoagulant_use", "Current anticoagulant use"),
                Parameter::yes_no("post_traumatic_seizure", "Post-traumatic seizure"),
                Parameter::yes_no("age_60_or_older", "Age 60 years or older"),
                Parameter::yes_no("fall_from_elevation", "Fall from any elevation"),
                Parameter::yes_no("anterograde_amnesia", "Persistent anterograde amnesia"),
                Parameter::yes_no("amnesia_2_to_4_hours", "Post-traumatic amnesia of 2 to 4 hours"),
                Parameter::yes_no("skull_contusion", "Skull contusion"),
                Parameter::yes_no("neurologic_deficit", "Neurologic deficit"),
                Parameter::yes_no("loss_of_consciousness", "Loss of consciousness"),
                Parameter::yes_no("gcs_deterioration_1_point", "GCS deterioration of 1 point"),
                Parameter::yes_no("age_40_to_60", "Age 40 to 60 years"),
            ])
            .result("CT recommendation", "")
        });
        &METADATA
    }

    fn calculate(&self, input: ChipInput) -> Result<Self::Output, CalculatorError> {
        let major = present(input.major());
        let minor = present(input.minor());
        let (major_count, minor_count) = (major.len(), minor.len());

        let (recommendation, risk_level, description, rationale, interpretation) = if major_count > 0
        {
            (
                "CT Recommended",
                "High Risk",
                "High risk for intracranial injury",
                format!("One or more major criteria present ({major_count} major criteria met)"),
                format!(
                    "CHIP Rule: CT RECOMMENDED. {major_count} major criterion(s) present \
                     indicating high risk for intracranial traumatic findings. Proceed with CT \
                     imaging to evaluate for potential neurosurgical lesions."
                ),
            )
        } else if minor_count >= 2 {
            (
                "CT Recommended",
                "Moderate to High Risk",
                "Moderate to high risk for intracranial injury",
                format!("Two or more minor criteria present ({minor_count} minor criteria met)"),
                format!(
                    "CHIP Rule: CT RECOMMENDED. {minor_count} minor criteria present indicating \
                     moderate to high risk for intracranial traumatic findings. Proceed with CT \
                     imaging for evaluation."
                ),
            )
        } else if minor_count == 1 {
            (
                "Clinical Judgment",
                "Low to Moderate Risk",
                "Low to moderate risk for intracranial injury",
                "One minor criterion present (1 minor criteria met)".to_string(),
                "CHIP Rule: CLINICAL JUDGMENT REQUIRED. 1 minor criterion present. Consider CT \
                 imaging based on clinical assessment, patient factors, and physician judgment."
                    .to_string(),
            )
        } else {
            (
                "CT Not Indicated",
                "Low Risk",
                "Low risk for intracranial injury",
                "No major or minor criteria present".to_string(),
                "CHIP Rule: CT NOT INDICATED. No major or minor criteria met indicating low risk \
                 for intracranial traumatic findings. Continue clinical observation and provide \
                 appropriate discharge instructions."
                    .to_string(),
            )
        };

        let assessment = ChipAssessment {
            recommendation: recommendation.to_string(),
            risk_level: risk_level.to_string(),
            major_criteria_count: major_count,
            minor_criteria_count: minor_count,
            major_criteria_present: major,
            minor_criteria_present: minor,
            clinical_rationale: rationale,
        };

        Ok(CalculationResult::new(
            assessment,
            "",
            interpretation,
            recommendation,
            description,
        ))
    }
}
