use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Four-variable formula separating subtle anterior STEMI from benign early
/// repolarization (Driver et al.).
pub struct SubtleAnteriorStemi;

#[derive(Debug, Clone, Deserialize)]
pub struct SubtleStemiInput {
    pub qtc_interval: f64,
    pub qrs_amplitude_v2: f64,
    pub r_wave_amplitude_v4: f64,
    pub st_elevation_v3: f64,
}

const THRESHOLD: f64 = 18.2;

impl Calculator for SubtleAnteriorStemi {
    type Input = SubtleStemiInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "subtle_anterior_stemi_4_variable",
                "Subtle Anterior STEMI Calculator (4-Variable)",
                Specialty::Cardiology,
            )
            .description(
                "Differentiates subtle anterior STEMI due to LAD occlusion from benign early \
                 repolarization in patients with ST elevation in V2-V4.",
            )
            .parameters(vec![
                Parameter::number("qtc_interval", "Bazett-corrected QT interval", 300.0, 700.0)
                    .unit("ms"),
                Parameter::number("qrs_amplitude_v2", "QRS amplitude in lead V2", 0.0, 50.0)
                    .unit("mm"),
                Parameter::number("r_wave_amplitude_v4", "R wave amplitude in lead V4", 0.0, 50.0)
                    .unit("mm"),
                Parameter::number(
                    "st_elevation_v3",
                    "ST elevation 60 ms after the J point in lead V3",
                    0.0,
                    10.0,
                )
                .unit("mm"),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: SubtleStemiInput) -> Result<Self::Output, CalculatorError> {
        let score = round_to(
            0.052 * input.qtc_interval - 0.151 * input.qrs_amplitude_v2
                - 0.268 * input.r_wave_amplitude_v4
                + 1.062 * input.st_elevation_v3,
            2,
        );

        let (stage, description, interpretation) = if score < THRESHOLD {
            (
                "Benign Early Repolarization",
                "Low probability of anterior STEMI",
                format!(
                    "Score {score:.2} is below the diagnostic threshold of 18.2, suggesting benign \
                     early repolarization rather than acute coronary occlusion. Clinical \
                     correlation is essential; obtain serial ECGs if chest pain persists. The \
                     4-variable formula has 83.3% sensitivity and 87.7% specificity."
                ),
            )
        } else {
            (
                "Subtle Anterior STEMI",
                "High probability of anterior STEMI",
                format!(
                    "Score {score:.2} meets or exceeds the diagnostic threshold of 18.2, \
                     suggesting subtle anterior STEMI from LAD occlusion. Consider emergent \
                     cardiology consultation and catheterization laboratory activation."
                ),
            )
        };

        Ok(CalculationResult::new(score, "points", interpretation, stage, description))
    }
}
