use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// Diabetic Ketoacidosis Mortality Prediction Model (DKA MPM), 0–25 points,
/// collected at presentation, 12 hours and 24 hours.
pub struct DkaMpmScore;

/// Item name, points when present and description.
const ITEMS: [(&str, i32, &str); 6] = [
    (
        "severe_comorbidities",
        6,
        "Severe comorbidities (immunosuppression, MI, COPD, cirrhosis, CHF, stroke)",
    ),
    ("ph_less_than_7", 4, "Severe acidosis (pH < 7.0) at presentation"),
    ("insulin_over_50_units", 4, "More than 50 units of insulin required in the first 12 hours"),
    ("glucose_over_300_at_12h", 4, "Serum glucose above 300 mg/dL after 12 hours"),
    ("depressed_mental_state_24h", 4, "Depressed mental state at 24 hours"),
    ("fever_24h", 3, "Fever (≥38°C) at 24 hours"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct DkaMpmInput {
    pub severe_comorbidities: YesNo,
    pub ph_less_than_7: YesNo,
    pub insulin_over_50_units: YesNo,
    pub glucose_over_300_at_12h: YesNo,
    pub depressed_mental_state_24h: YesNo,
    pub fever_24h: YesNo,
}

impl DkaMpmInput {
    fn answers(&self) -> [YesNo; 6] {
        [
            self.severe_comorbidities,
            self.ph_less_than_7,
            self.insulin_over_50_units,
            self.glucose_over_300_at_12h,
            self.depressed_mental_state_24h,
            self.fever_24h,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub points: i32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DkaMpmDetails {
    pub risk_level: &'static str,
    pub mortality_rate: &'static str,
    pub risk_factors_present: Vec<RiskFactor>,
}

impl Calculator for DkaMpmScore {
    type Input = DkaMpmInput;
    type Output = CalculationResult<i32, DkaMpmDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "dka_mpm_score",
                "Diabetic Ketoacidosis Mortality Prediction Model (DKA MPM)",
                Specialty::Endocrinology,
            )
            .description("Predicts in-hospital mortality in patients with diabetic ketoacidosis.")
            .parameters(
                ITEMS
                    .iter()
                    .map(|(name, _, description)| Parameter::yes_no(name, description))
                    .collect(),
            )
        });
        &METADATA
    }

    fn calculate(&self, input: DkaMpmInput) -> Result<Self::Output, CalculatorError> {
        let risk_factors_present: Vec<RiskFactor> = ITEMS
            .iter()
            .zip(input.answers())
            .filter(|(_, answer)| answer.is_yes())
            .map(|((factor, points, description), _)| RiskFactor {
                factor: *factor,
                points: *points,
                description: *description,
            })
            .collect();
        let score: i32 = risk_factors_present.iter().map(|f| f.points).sum();

        let (risk_level, stage, description, mortality_rate, advice) = match score {
            ..=14 => (
                "low_risk",
                "Low Risk",
                "Low risk of in-hospital mortality",
                "0.86%",
                "Standard DKA management protocols are appropriate. Routine monitoring and care \
                 expected to be sufficient.",
            ),
            15..=18 => (
                "high_risk",
                "High Risk",
                "High risk of in-hospital mortality",
                "20.8%",
                "Enhanced monitoring and consideration for ICU admission recommended. Close \
                 observation for complications is essential.",
            ),
            _ => (
                "very_high_risk",
                "Very High Risk",
                "Very high risk of in-hospital mortality",
                "93.3%",
                "Immediate ICU admission and aggressive management required. Early family \
                 discussions about prognosis are recommended.",
            ),
        };

        let interpretation = format!(
            "DKA MPM Score of {score} points indicates {stage} with {mortality_rate} in-hospital \
             mortality risk. {description}. {advice}"
        );

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description).with_details(
                DkaMpmDetails {
                    risk_level,
                    mortality_rate,
                    risk_factors_present,
                },
            ),
        )
    }
}
