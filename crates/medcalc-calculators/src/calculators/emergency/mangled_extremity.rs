use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Mangled Extremity Severity Score (MESS).
///
/// Ischemia points are doubled once warm ischemia exceeds six hours. A total
/// of 7 is the traditional amputation threshold.
pub struct MangledExtremitySeverityScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimbIschemia {
    ReducedPulseNormalPerfusion,
    PulselessParesthesiasSlowCapillaryRefill,
    CoolParalyzedNumbInsensate,
}

impl LimbIschemia {
    const OPTIONS: [&'static str; 3] = [
        "reduced_pulse_normal_perfusion",
        "pulseless_paresthesias_slow_capillary_refill",
        "cool_paralyzed_numb_insensate",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockStatus {
    NoShockSbpGreaterThan90,
    TransientHypotension,
    PersistentHypotension,
}

impl ShockStatus {
    const OPTIONS: [&'static str; 3] = [
        "no_shock_sbp_greater_than_90",
        "transient_hypotension",
        "persistent_hypotension",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryMechanism {
    LowEnergy,
    MediumEnergy,
    HighEnergy,
    VeryHighEnergy,
}

impl InjuryMechanism {
    const OPTIONS: [&'static str; 4] =
        ["low_energy", "medium_energy", "high_energy", "very_high_energy"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessInput {
    pub limb_ischemia: LimbIschemia,
    pub ischemia_duration_hours: f64,
    pub patient_age: i32,
    pub shock_status: ShockStatus,
    pub injury_mechanism: InjuryMechanism,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessBreakdown {
    pub total_score: i32,
    pub ischemia_base_score: i32,
    pub ischemia_multiplier: i32,
    pub final_ischemia_score: i32,
    pub age_score: i32,
    pub shock_score: i32,
    pub mechanism_score: i32,
    pub recommendation: &'static str,
    pub ischemia_concerns: &'static str,
}

const ISCHEMIA_DURATION_THRESHOLD: f64 = 6.0;

impl Calculator for MangledExtremitySeverityScore {
    type Input = MessInput;
    type Output = CalculationResult<MessBreakdown>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "mangled_extremity_severity_score",
                "Mangled Extremity Severity Score (MESS)",
                Specialty::Emergency,
            )
            .description(
                "Predicts the need for amputation after lower extremity trauma from limb \
                 ischemia, age, shock and injury mechanism.",
            )
            .parameters(vec![
                Parameter::choice("limb_ischemia", "Degree of limb ischemia", &LimbIschemia::OPTIONS),
                Parameter::number("ischemia_duration_hours", "Duration of warm ischemia", 0.0, 24.0)
                    .unit("hours"),
                Parameter::integer("patient_age", "Patient age", 0, 120).unit("years"),
                Parameter::choice("shock_status", "Hemodynamic status", &ShockStatus::OPTIONS),
                Parameter::choice(
                    "injury_mechanism",
                    "Energy of the injury mechanism",
                    &InjuryMechanism::OPTIONS,
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: MessInput) -> Result<Self::Output, CalculatorError> {
        let ischemia_base_score = match input.limb_ischemia {
            LimbIschemia::ReducedPulseNormalPerfusion => 1,
            LimbIschemia::PulselessParesthesiasSlowCapillaryRefill => 2,
            LimbIschemia::CoolParalyzedNumbInsensate => 3,
        };
        let prolonged = input.ischemia_duration_hours > ISCHEMIA_DURATION_THRESHOLD;
        let ischemia_multiplier = if prolonged { 2 } else { 1 };
        let final_ischemia_score = ischemia_base_score * ischemia_multiplier;
        let age_score = if input.patient_age < 30 {
            0
        } else if input.patient_age < 50 {
            1
        } else {
            2
        };
        let shock_score = match input.shock_status {
            ShockStatus::NoShockSbpGreaterThan90 => 0,
            ShockStatus::TransientHypotension => 1,
            ShockStatus::PersistentHypotension => 2,
        };
        let mechanism_score = match input.injury_mechanism {
            InjuryMechanism::LowEnergy => 1,
            InjuryMechanism::MediumEnergy => 2,
            InjuryMechanism::HighEnergy => 3,
            InjuryMechanism::VeryHighEnergy => 4,
        };
        let total_score = final_ischemia_score + age_score + shock_score + mechanism_score;

        let (stage, description, recommendation, interpretation) = if total_score <= 6 {
            (
                "Limb Salvage Likely",
                "Low risk for amputation with good salvage potential",
                "Limb salvage recommended",
                "MESS score suggests limb salvage is likely to be successful. Proceed with \
                 aggressive limb preservation including vascular repair, fracture stabilization \
                 and soft tissue reconstruction, with orthopedic, vascular and plastic surgery \
                 input and early rehabilitation planning.",
            )
        } else if total_score == 7 {
            (
                "Borderline Decision",
                "Traditional threshold for amputation consideration",
                "Borderline case requiring clinical judgment",
                "MESS score of 7 is the traditional threshold for amputation consideration, \
                 although modern practice often uses 8-9 points. Weigh age, comorbidities, \
                 functional expectations and available expertise; multidisciplinary discussion \
                 is strongly recommended.",
            )
        } else {
            (
                "Amputation Likely",
                "High probability of amputation requirement",
                "Primary amputation may be appropriate",
                "High MESS score suggests primary amputation may be the most appropriate option. \
                 Salvage may still be possible in selected cases with experienced teams; discuss \
                 the risks and benefits of salvage versus amputation with the patient and family.",
            )
        };

        let breakdown = MessBreakdown {
            total_score,
            ischemia_base_score,
            ischemia_multiplier,
            final_ischemia_score,
            age_score,
            shock_score,
            mechanism_score,
            recommendation,
            ischemia_concerns: if prolonged { "Critical factor" } else { "Manageable" },
        };

        Ok(CalculationResult::new(
            breakdown,
            "points",
            interpretation,
            stage,
            description,
        ))
    }
}
