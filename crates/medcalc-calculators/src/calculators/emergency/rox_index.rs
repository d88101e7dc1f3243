use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// ROX index, `(SpO2 / FiO2) / respiratory rate`, predicting high-flow nasal
/// cannula success in acute hypoxemic respiratory failure.
pub struct RoxIndex;

#[derive(Debug, Clone, Deserialize)]
pub struct RoxIndexInput {
    pub spo2: i32,
    pub fio2: f64,
    pub respiratory_rate: i32,
}

const HIGH_RISK_CUTOFF: f64 = 3.85;
const LOW_RISK_CUTOFF: f64 = 4.88;

impl Calculator for RoxIndex {
    type Input = RoxIndexInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "rox_index",
                "ROX Index for Intubation after HFNC",
                Specialty::Emergency,
            )
            .description(
                "Predicts high-flow nasal cannula failure and need for intubation in acute \
                 hypoxemic respiratory failure.",
            )
            .parameters(vec![
                Parameter::integer("spo2", "Oxygen saturation by pulse oximetry", 70, 100)
                    .unit("%"),
                Parameter::number("fio2", "Fraction of inspired oxygen", 0.21, 1.0),
                Parameter::integer("respiratory_rate", "Respiratory rate", 10, 50)
                    .unit("breaths/min"),
            ])
            .result("ROX index", "index")
        });
        &METADATA
    }

    fn calculate(&self, input: RoxIndexInput) -> Result<Self::Output, CalculatorError> {
        let rox = round_to(
            f64::from(input.spo2) / input.fio2 / f64::from(input.respiratory_rate),
            2,
        );

        let (stage, description, interpretation) = if rox < HIGH_RISK_CUTOFF {
            (
                "High Risk for HFNC Failure",
                "Prepare for intubation",
                format!(
                    "High risk for HFNC failure and need for intubation. This ROX index value \
                     ({rox:.2}) is below 3.85, indicating poor response to high-flow nasal cannula. \
                     Prepare for early intubation, optimize HFNC settings and treat the underlying \
                     pathology while monitoring closely for decompensation."
                ),
            )
        } else if rox < LOW_RISK_CUTOFF {
            (
                "Indeterminate Risk",
                "Close monitoring and reassessment",
                format!(
                    "Indeterminate risk for HFNC failure. This ROX index value ({rox:.2}) requires \
                     close monitoring; reassess within 1-2 hours to establish a trend and be \
                     prepared to escalate to invasive ventilation if it falls."
                ),
            )
        } else {
            (
                "Lower Risk for Intubation",
                "Continue HFNC and wean FiO2",
                format!(
                    "Lower risk for intubation with good response to HFNC therapy. This ROX index \
                     value ({rox:.2}) suggests successful treatment with high-flow nasal cannula. \
                     Continue current therapy and consider weaning FiO2 as tolerated."
                ),
            )
        };

        Ok(CalculationResult::new(rox, "index", interpretation, stage, description))
    }
}
