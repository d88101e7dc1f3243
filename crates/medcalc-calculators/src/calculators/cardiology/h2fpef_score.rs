use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::{logistic_percent, round_to};
use crate::params::YesNo;

/// Continuous H2FPEF model: probability of heart failure with preserved
/// ejection fraction in patients with unexplained dyspnea.
pub struct H2fpefScore;

#[derive(Debug, Clone, Deserialize)]
pub struct H2fpefInput {
    pub age: i32,
    pub bmi: f64,
    pub e_e_prime_ratio: f64,
    pub pasp: i32,
    pub atrial_fibrillation: YesNo,
}

const INTERCEPT: f64 = -9.1917;

impl Calculator for H2fpefScore {
    type Input = H2fpefInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("h2fpef_score", "H2FPEF Score", Specialty::Cardiology)
                .description(
                    "Estimates the probability of heart failure with preserved ejection \
                     fraction from age, BMI, E/e', PASP and atrial fibrillation.",
                )
                .parameters(vec![
                    Parameter::integer("age", "Patient age", 18, 120).unit("years"),
                    Parameter::number("bmi", "Body mass index", 10.0, 80.0).unit("kg/m²"),
                    Parameter::number("e_e_prime_ratio", "Echocardiographic E/e' ratio", 1.0, 50.0),
                    Parameter::integer("pasp", "Pulmonary artery systolic pressure", 15, 120)
                        .unit("mmHg"),
                    Parameter::yes_no("atrial_fibrillation", "Paroxysmal or persistent AF"),
                ])
                .result("HFpEF probability", "percentage")
        });
        &METADATA
    }

    fn calculate(&self, input: H2fpefInput) -> Result<Self::Output, CalculatorError> {
        let af = if input.atrial_fibrillation.is_yes() { 1.6997 } else { 0.0 };
        let y = INTERCEPT
            + 0.0451 * f64::from(input.age)
            + 0.1307 * input.bmi
            + 0.0859 * input.e_e_prime_ratio
            + 0.0520 * f64::from(input.pasp)
            + af;
        let probability = round_to(logistic_percent(y), 1);

        let (stage, description, recommendations) = if probability < 25.0 {
            (
                "Low Probability",
                "Low probability of HFpEF",
                "HFpEF is unlikely. Consider alternative causes of dyspnea such as pulmonary \
                 disease, anemia, thyroid disorders, deconditioning or coronary disease.",
            )
        } else if probability <= 75.0 {
            (
                "Intermediate Probability",
                "Intermediate probability of HFpEF",
                "Additional testing is recommended: invasive hemodynamic exercise testing, \
                 natriuretic peptides, stress echocardiography or cardiac MRI.",
            )
        } else {
            (
                "High Probability",
                "High probability of HFpEF",
                "HFpEF is likely and empiric treatment should be considered, including SGLT2 \
                 inhibitors, aldosterone antagonists and management of hypertension, obesity \
                 and sleep apnea.",
            )
        };

        let interpretation = format!(
            "Patient characteristics: {} years old, BMI {:.1} kg/m², E/e' ratio {:.1}, PASP {} \
             mmHg, atrial fibrillation {}. H2FPEF probability: {probability:.1}%. Risk Category: \
             {stage} ({description}). Clinical recommendations: {recommendations}",
            input.age,
            input.bmi,
            input.e_e_prime_ratio,
            input.pasp,
            if input.atrial_fibrillation.is_yes() { "present" } else { "absent" },
        );

        Ok(CalculationResult::new(
            probability,
            "percentage",
            interpretation,
            stage,
            description,
        ))
    }
}
