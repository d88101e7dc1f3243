use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// HACOR score: Heart rate, Acidosis, Consciousness, Oxygenation and
/// Respiratory rate, predicting non-invasive ventilation failure in
/// hypoxemic patients. Best assessed 1 hour after starting NIV.
pub struct HacorScore;

#[derive(Debug, Clone, Deserialize)]
pub struct HacorScoreInput {
    pub heart_rate: i32,
    pub ph: f64,
    pub gcs: i32,
    pub pao2_fio2_ratio: i32,
    pub respiratory_rate: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HacorComponents {
    pub heart_rate_points: i32,
    pub acidosis_points: i32,
    pub consciousness_points: i32,
    pub oxygenation_points: i32,
    pub respiratory_rate_points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HacorDetails {
    pub component_scores: HacorComponents,
}

/// Scores above this are high risk for NIV failure.
const HIGH_RISK_ABOVE: i32 = 5;

fn heart_rate_points(bpm: i32) -> i32 {
    if bpm >= 121 { 1 } else { 0 }
}

fn acidosis_points(ph: f64) -> i32 {
    if ph >= 7.35 {
        0
    } else if ph >= 7.30 {
        2
    } else if ph >= 7.25 {
        3
    } else {
        4
    }
}

fn consciousness_points(gcs: i32) -> i32 {
    match gcs {
        15 => 0,
        13..=14 => 2,
        11..=12 => 5,
        _ => 10,
    }
}

fn oxygenation_points(ratio: i32) -> i32 {
    match ratio {
        r if r >= 201 => 0,
        176..=200 => 2,
        151..=175 => 3,
        126..=150 => 4,
        101..=125 => 5,
        _ => 6,
    }
}

fn respiratory_rate_points(rate: i32) -> i32 {
    match rate {
        r if r <= 30 => 0,
        31..=35 => 1,
        36..=40 => 2,
        41..=45 => 3,
        _ => 4,
    }
}

impl Calculator for HacorScore {
    type Input = HacorScoreInput;
    type Output = CalculationResult<i32, HacorDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("hacor_score", "HACOR Score", Specialty::Emergency)
                .description(
                    "Predicts non-invasive ventilation failure in hypoxemic patients from \
                     heart rate, acidosis, consciousness, oxygenation and respiratory rate.",
                )
                .parameters(vec![
                    Parameter::integer("heart_rate", "Heart rate", 30, 250).unit("beats/min"),
                    Parameter::number("ph", "Arterial blood gas pH", 6.8, 7.8),
                    Parameter::integer("gcs", "Glasgow Coma Scale score", 3, 15),
                    Parameter::integer("pao2_fio2_ratio", "PaO2/FiO2 ratio", 50, 600)
                        .unit("mmHg"),
                    Parameter::integer("respiratory_rate", "Respiratory rate", 8, 80)
                        .unit("breaths/min"),
                ])
                .result("HACOR score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: HacorScoreInput) -> Result<Self::Output, CalculatorError> {
        let components = HacorComponents {
            heart_rate_points: heart_rate_points(input.heart_rate),
            acidosis_points: acidosis_points(input.ph),
            consciousness_points: consciousness_points(input.gcs),
            oxygenation_points: oxygenation_points(input.pao2_fio2_ratio),
            respiratory_rate_points: respiratory_rate_points(input.respiratory_rate),
        };
        let score = components.heart_rate_points
            + components.acidosis_points
            + components.consciousness_points
            + components.oxygenation_points
            + components.respiratory_rate_points;

        let result = if score > HIGH_RISK_ABOVE {
            CalculationResult::new(
                score,
                "points",
                format!(
                    "HACOR score of {score} indicates high risk of NIV failure (>50%). \
                     Consider early intubation within 12 hours, ensure intubation readiness \
                     and ICU-level monitoring while optimizing NIV settings."
                ),
                "High Risk",
                "High risk of NIV failure",
            )
        } else {
            CalculationResult::new(
                score,
                "points",
                format!(
                    "HACOR score of {score} indicates low risk of NIV failure (<20%). \
                     Continue NIV with standard monitoring and reassess the score at \
                     12, 24 and 48 hours."
                ),
                "Low Risk",
                "Low risk of NIV failure",
            )
        };

        Ok(result.with_details(HacorDetails {
            component_scores: components,
        }))
    }
}
