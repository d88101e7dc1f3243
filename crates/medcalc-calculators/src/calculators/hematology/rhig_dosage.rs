use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Rh(D) immune globulin (RhIG) vials needed after maternal-fetal
/// hemorrhage, from a Kleihauer-Betke fetal cell percentage.
pub struct RhigDosage;

#[derive(Debug, Clone, Deserialize)]
pub struct RhigInput {
    pub maternal_blood_volume: f64,
    pub fetal_cell_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalAssessment {
    pub fetal_cell_significance: &'static str,
    pub alloimmunization_risk: &'static str,
    pub hemorrhage_severity: &'static str,
    pub total_protection_ml: u32,
    pub coverage_ratio: f64,
    pub baseline_comparison: String,
    pub time_sensitivity: &'static str,
    pub follow_up_needed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RhigOutcome {
    pub total_vials: u32,
    pub fetal_blood_volume_ml: f64,
    pub calculated_vials_raw: f64,
    pub safety_margin_applied: u32,
    pub vial_strength_mcg: u32,
    pub total_dose_mcg: u32,
    pub protection_per_vial_ml: u32,
    pub clinical_assessment: ClinicalAssessment,
}

const VIAL_DOSE_MCG: u32 = 300;
/// Fetal whole blood covered by one 300 mcg vial.
const PROTECTION_VOLUME_ML: f64 = 30.0;
const SAFETY_MARGIN_VIALS: u32 = 1;
/// Fetal cell percentages below this are normal background.
const NORMAL_BASELINE_PERCENTAGE: f64 = 0.1;
const CLINICAL_SIGNIFICANCE_PERCENTAGE: f64 = 0.3;

/// Round the raw vial count and add a safety margin.
///
/// A whole number gets one extra vial; a fraction below .5 rounds up; a
/// fraction of .5 or more rounds up and adds one. Never less than one vial.
pub fn vials_for(fetal_blood_volume_ml: f64) -> u32 {
    // Strip float noise so 30 mL reads as exactly one vial.
    let raw = round_to(fetal_blood_volume_ml / PROTECTION_VOLUME_ML, 6);
    let whole = raw.floor();
    let fraction = raw - whole;
    let vials = if fraction == 0.0 {
        whole + f64::from(SAFETY_MARGIN_VIALS)
    } else if fraction < 0.5 {
        raw.ceil()
    } else {
        raw.ceil() + 1.0
    };
    (vials as u32).max(1)
}

impl Calculator for RhigDosage {
    type Input = RhigInput;
    type Output = CalculationResult<RhigOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "maternal_fetal_hemorrhage_rhd_immune_globulin_dosage",
                "Maternal-Fetal Hemorrhage Rh(D) Immune Globulin Dosage",
                Specialty::Hematology,
            )
            .description(
                "Number of 300 μg RhIG vials required to prevent alloimmunization after \
                 fetal-maternal hemorrhage in an Rh-negative mother.",
            )
            .parameters(vec![
                Parameter::number(
                    "maternal_blood_volume",
                    "Maternal blood volume (typically 5000 mL)",
                    2000.0,
                    6000.0,
                )
                .unit("mL"),
                Parameter::number(
                    "fetal_cell_percentage",
                    "Fetal cells from the Kleihauer-Betke test",
                    0.0,
                    10.0,
                )
                .unit("%"),
            ])
            .result("RhIG vials", "vials")
        });
        &METADATA
    }

    fn calculate(&self, input: RhigInput) -> Result<Self::Output, CalculatorError> {
        let fetal_blood_volume = input.maternal_blood_volume * input.fetal_cell_percentage / 100.0;
        let vials = vials_for(fetal_blood_volume);
        let total_dose = vials * VIAL_DOSE_MCG;
        let total_protection = vials * PROTECTION_VOLUME_ML as u32;

        let severity = match vials {
            1 => "Minimal hemorrhage",
            2 | 3 => "Moderate hemorrhage",
            4..=10 => "Large hemorrhage",
            _ => "Massive hemorrhage",
        };
        let (stage, description, interpretation) = match vials {
            1 => (
                "Standard Dose",
                "Minimal maternal-fetal hemorrhage",
                format!(
                    "Standard single dose of {VIAL_DOSE_MCG} μg RhIG (1 vial) is sufficient to \
                     prevent alloimmunization. Administer within 72 hours of delivery or the \
                     hemorrhage event."
                ),
            ),
            2 | 3 => (
                "Moderate Hemorrhage",
                "Moderate maternal-fetal hemorrhage",
                format!(
                    "Moderate hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG \
                     (total dose: {total_dose} μg), covering {total_protection} mL of fetal \
                     blood. Administer within 72 hours and consider follow-up Kleihauer-Betke \
                     testing."
                ),
            ),
            4..=10 => (
                "Large Hemorrhage",
                "Large maternal-fetal hemorrhage",
                format!(
                    "Significant hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG \
                     (total dose: {total_dose} μg), covering {total_protection} mL of fetal \
                     blood. Recommend obstetric consultation and follow-up Kleihauer-Betke \
                     testing to confirm adequate coverage."
                ),
            ),
            _ => (
                "Massive Hemorrhage",
                "Massive maternal-fetal hemorrhage",
                format!(
                    "Massive hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG \
                     (total dose: {total_dose} μg). Requires immediate obstetric and hematology \
                     consultation; consider intravenous RhIG."
                ),
            ),
        };

        let percentage = input.fetal_cell_percentage;
        let (significance, risk) = if percentage < NORMAL_BASELINE_PERCENTAGE {
            ("Normal baseline", "Minimal")
        } else if percentage < CLINICAL_SIGNIFICANCE_PERCENTAGE {
            ("Below clinical significance threshold", "Low")
        } else {
            ("Clinically significant", "Significant")
        };
        let coverage_ratio = if fetal_blood_volume > 0.0 {
            round_to(f64::from(total_protection) / fetal_blood_volume, 2)
        } else {
            0.0
        };
        let baseline_comparison = if percentage > 0.0 {
            format!("{:.1}x normal baseline", percentage / NORMAL_BASELINE_PERCENTAGE)
        } else {
            "At baseline".to_string()
        };

        let outcome = RhigOutcome {
            total_vials: vials,
            fetal_blood_volume_ml: round_to(fetal_blood_volume, 2),
            calculated_vials_raw: round_to(fetal_blood_volume / PROTECTION_VOLUME_ML, 2),
            safety_margin_applied: SAFETY_MARGIN_VIALS,
            vial_strength_mcg: VIAL_DOSE_MCG,
            total_dose_mcg: total_dose,
            protection_per_vial_ml: PROTECTION_VOLUME_ML as u32,
            clinical_assessment: ClinicalAssessment {
                fetal_cell_significance: significance,
                alloimmunization_risk: risk,
                hemorrhage_severity: severity,
                total_protection_ml: total_protection,
                coverage_ratio,
                baseline_comparison,
                time_sensitivity: "Administer within 72 hours for optimal efficacy",
                follow_up_needed: vials > 3,
            },
        };

        Ok(CalculationResult::new(
            outcome,
            "vials",
            interpretation,
            stage,
            description,
        ))
    }
}
