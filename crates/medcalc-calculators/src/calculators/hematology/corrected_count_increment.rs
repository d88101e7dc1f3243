use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Corrected count increment (CCI) after platelet transfusion.
///
/// `CCI = (post − pre) × BSA / dose`, with BSA from the Mosteller formula on
/// height in inches and weight in pounds, and the dose in 10¹¹ platelets.
pub struct CorrectedCountIncrement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePoint {
    #[serde(rename = "1_hour")]
    OneHour,
    #[serde(rename = "20_hour")]
    TwentyHour,
}

impl TimePoint {
    fn threshold(self) -> i64 {
        match self {
            TimePoint::OneHour => 7500,
            TimePoint::TwentyHour => 4800,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TimePoint::OneHour => "1 hour",
            TimePoint::TwentyHour => "20 hours",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CciInput {
    pub pre_transfusion_count: i64,
    pub post_transfusion_count: i64,
    pub time_after_transfusion: TimePoint,
    pub patient_height: f64,
    pub patient_weight: f64,
    pub platelet_unit_content: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CciDetails {
    pub count_increment: i64,
    pub body_surface_area: f64,
    pub platelet_dose: f64,
    pub time_point: TimePoint,
    pub threshold: i64,
    pub response_adequate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CciExtras {
    pub calculation_details: CciDetails,
}

const CM_PER_INCH: f64 = 2.54;
const KG_PER_POUND: f64 = 0.453_592;
const UNIT: &str = "platelets/μL/m²/(×10¹¹ platelets)";

/// Mosteller body surface area in m² from inches and pounds.
fn body_surface_area(height_in: f64, weight_lb: f64) -> f64 {
    ((height_in * CM_PER_INCH) * (weight_lb * KG_PER_POUND) / 3600.0).sqrt()
}

impl Calculator for CorrectedCountIncrement {
    type Input = CciInput;
    type Output = CalculationResult<f64, CciExtras>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "corrected_count_increment",
                "Corrected Count Increment (CCI) for Platelet Transfusion",
                Specialty::Hematology,
            )
            .description(
                "Assesses the adequacy of response to platelet transfusion, adjusted for body \
                 surface area and platelet dose.",
            )
            .parameters(vec![
                Parameter::integer(
                    "pre_transfusion_count",
                    "Platelet count before transfusion",
                    0,
                    500_000,
                )
                .unit("platelets/μL"),
                Parameter::integer(
                    "post_transfusion_count",
                    "Platelet count after transfusion",
                    0,
                    500_000,
                )
                .unit("platelets/μL"),
                Parameter::choice(
                    "time_after_transfusion",
                    "Time of the post-transfusion count",
                    &["1_hour", "20_hour"],
                ),
                Parameter::number("patient_height", "Patient height", 48.0, 90.0).unit("inches"),
                Parameter::number("patient_weight", "Patient weight", 0.5, 620.0).unit("lbs"),
                Parameter::number(
                    "platelet_unit_content",
                    "Total platelets transfused",
                    0.5,
                    500.0,
                )
                .unit("×10¹¹ platelets"),
            ])
            .result("CCI", UNIT)
        });
        &METADATA
    }

    fn calculate(&self, input: CciInput) -> Result<Self::Output, CalculatorError> {
        let count_increment = input.post_transfusion_count - input.pre_transfusion_count;
        let bsa = body_surface_area(input.patient_height, input.patient_weight);
        let cci = round_to(count_increment as f64 * bsa / input.platelet_unit_content, 1);

        let time_point = input.time_after_transfusion;
        let threshold = time_point.threshold();
        let response_adequate = cci > threshold as f64;

        let (stage, description, interpretation) = if response_adequate {
            (
                "Successful Transfusion",
                match time_point {
                    TimePoint::OneHour => "Good platelet response at 1 hour",
                    TimePoint::TwentyHour => "Good platelet response at 20 hours",
                },
                format!(
                    "CCI of {cci} at {} post-transfusion is above the threshold of {threshold}, \
                     indicating successful platelet transfusion with adequate platelet response.",
                    time_point.label()
                ),
            )
        } else {
            (
                "Poor Response",
                match time_point {
                    TimePoint::OneHour => "Poor platelet response at 1 hour",
                    TimePoint::TwentyHour => "Poor platelet response at 20 hours",
                },
                format!(
                    "CCI of {cci} at {} post-transfusion is at or below the threshold of \
                     {threshold}, suggesting poor platelet response. Evaluate for immune causes \
                     such as HLA alloimmunization and non-immune causes such as fever, sepsis, \
                     DIC, bleeding or splenomegaly. Two consecutive poor responses define \
                     platelet refractoriness; consider HLA-matched or crossmatched platelets.",
                    time_point.label()
                ),
            )
        };

        let details = CciDetails {
            count_increment,
            body_surface_area: round_to(bsa, 2),
            platelet_dose: input.platelet_unit_content,
            time_point,
            threshold,
            response_adequate,
        };

        Ok(
            CalculationResult::new(cci, UNIT, interpretation, stage, description).with_details(
                CciExtras {
                    calculation_details: details,
                },
            ),
        )
    }
}
