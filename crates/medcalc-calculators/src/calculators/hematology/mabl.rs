use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Maximum allowable blood loss (MABL) before transfusion, Gross formula:
/// `EBV × (Hb_i − Hb_f) / Hb_avg`.
pub struct MaximumAllowableBloodLoss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    AdultMan,
    AdultWoman,
    Infant,
    Neonate,
    PrematureNeonate,
}

impl AgeGroup {
    const OPTIONS: [&'static str; 5] =
        ["adult_man", "adult_woman", "infant", "neonate", "premature_neonate"];

    /// Estimated blood volume in mL/kg.
    fn blood_volume_coefficient(self) -> u32 {
        match self {
            AgeGroup::AdultMan => 75,
            AgeGroup::AdultWoman => 65,
            AgeGroup::Infant => 80,
            AgeGroup::Neonate => 85,
            AgeGroup::PrematureNeonate => 96,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MablInput {
    pub age_group: AgeGroup,
    pub body_weight: f64,
    pub initial_hemoglobin: f64,
    pub final_hemoglobin: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MablOutcome {
    pub maximum_allowable_blood_loss_ml: f64,
    pub estimated_blood_volume_ml: f64,
    pub blood_volume_coefficient_ml_kg: u32,
    pub average_hemoglobin_g_dl: f64,
    pub hemoglobin_difference_g_dl: f64,
    pub percentage_of_blood_volume: f64,
    /// Estimates beyond 20% of blood volume lose accuracy.
    pub accuracy_reliable: bool,
    pub transfusion_threshold_assessment: &'static str,
    pub risk_stratification: &'static str,
}

const ACCURACY_LIMIT_PERCENT: f64 = 20.0;

impl Calculator for MaximumAllowableBloodLoss {
    type Input = MablInput;
    type Output = CalculationResult<MablOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "maximum_allowable_blood_loss_without_transfusion",
                "Maximum Allowable Blood Loss (ABL) Without Transfusion",
                Specialty::Hematology,
            )
            .description(
                "Estimates the blood volume that can be lost before a target hemoglobin is \
                 reached, from estimated blood volume and hemoglobin values.",
            )
            .parameters(vec![
                Parameter::choice("age_group", "Age group and sex", &AgeGroup::OPTIONS),
                Parameter::number("body_weight", "Body weight", 0.5, 200.0).unit("kg"),
                Parameter::number("initial_hemoglobin", "Starting hemoglobin", 3.0, 25.0)
                    .unit("g/dL"),
                Parameter::number(
                    "final_hemoglobin",
                    "Lowest acceptable hemoglobin (transfusion threshold)",
                    3.0,
                    15.0,
                )
                .unit("g/dL"),
            ])
            .result("maximum allowable blood loss", "mL")
        });
        &METADATA
    }

    fn calculate(&self, input: MablInput) -> Result<Self::Output, CalculatorError> {
        if input.final_hemoglobin >= input.initial_hemoglobin {
            return Err(CalculatorError::invalid(
                "final_hemoglobin must be lower than initial_hemoglobin",
            ));
        }

        let coefficient = input.age_group.blood_volume_coefficient();
        let ebv = input.body_weight * f64::from(coefficient);
        let difference = input.initial_hemoglobin - input.final_hemoglobin;
        let average = (input.initial_hemoglobin + input.final_hemoglobin) / 2.0;
        let abl = (ebv * difference / average).max(0.0);
        let percentage = abl / ebv * 100.0;

        let threshold_assessment = if input.final_hemoglobin < 6.0 {
            "Very low - transfusion almost always required"
        } else if input.final_hemoglobin < 7.0 {
            "Below typical transfusion threshold range"
        } else if input.final_hemoglobin <= 10.0 {
            "Within typical transfusion threshold range"
        } else {
            "Above typical transfusion threshold"
        };
        let risk = if abl < 300.0 {
            "High risk - minimal blood loss tolerance"
        } else if abl < 800.0 {
            "Moderate risk - limited blood loss tolerance"
        } else if abl < 2000.0 {
            "Standard risk - typical blood loss tolerance"
        } else {
            "Low risk - good blood loss tolerance"
        };

        let (stage, description, guidance) = if abl <= 500.0 {
            (
                "Low Volume Loss",
                "Small allowable blood loss",
                "indicates limited tolerance for intraoperative bleeding. Requires meticulous \
                 hemostasis, frequent hemoglobin monitoring and blood conservation strategies; \
                 prepare for early transfusion.",
            )
        } else if abl <= 1500.0 {
            (
                "Moderate Volume Loss",
                "Moderate allowable blood loss",
                "represents moderate tolerance for surgical bleeding, suitable for most routine \
                 procedures. Standard monitoring with periodic hemoglobin checks; ensure type and \
                 screen is current.",
            )
        } else if abl <= 3000.0 {
            (
                "High Volume Loss",
                "Large allowable blood loss",
                "indicates good tolerance for significant surgical bleeding, appropriate for \
                 major procedures. Maintain close hemodynamic monitoring and serial hemoglobin \
                 assessment.",
            )
        } else {
            (
                "Very High Volume Loss",
                "Very large allowable blood loss",
                "indicates excellent tolerance for major surgical bleeding. Consider cell \
                 salvage and acute normovolemic hemodilution, and prepare massive transfusion \
                 resources for prolonged high-volume procedures.",
            )
        };
        let accuracy_reliable = percentage <= ACCURACY_LIMIT_PERCENT;
        let accuracy_note = if accuracy_reliable {
            ""
        } else {
            " The estimate may be inaccurate above 20% of estimated blood volume."
        };
        let interpretation = format!(
            "Maximum allowable blood loss of {abl:.1} mL {guidance}{accuracy_note}"
        );

        let outcome = MablOutcome {
            maximum_allowable_blood_loss_ml: round_to(abl, 1),
            estimated_blood_volume_ml: round_to(ebv, 1),
            blood_volume_coefficient_ml_kg: coefficient,
            average_hemoglobin_g_dl: round_to(average, 2),
            hemoglobin_difference_g_dl: round_to(difference, 2),
            percentage_of_blood_volume: round_to(percentage, 1),
            accuracy_reliable,
            transfusion_threshold_assessment: threshold_assessment,
            risk_stratification: risk,
        };

        Ok(CalculationResult::new(
            outcome,
            "mL",
            interpretation,
            stage,
            description,
        ))
    }
}
