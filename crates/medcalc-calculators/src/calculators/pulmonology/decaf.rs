use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::{YesNo, count_yes};

/// DECAF score: in-hospital mortality in acute exacerbation of COPD.
pub struct DecafScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dyspnea {
    NotTooDyspneic,
    TooDyspneicIndependent,
    TooDyspneicDependent,
}

impl Dyspnea {
    const OPTIONS: [&'static str; 3] = [
        "not_too_dyspneic",
        "too_dyspneic_independent",
        "too_dyspneic_dependent",
    ];

    fn points(self) -> u8 {
        match self {
            Dyspnea::NotTooDyspneic => 0,
            Dyspnea::TooDyspneicIndependent => 1,
            Dyspnea::TooDyspneicDependent => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoking {
    Yes,
    No,
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecafInput {
    pub emrcd_dyspnea: Dyspnea,
    pub eosinopenia: YesNo,
    pub consolidation: YesNo,
    pub acidemia: YesNo,
    pub atrial_fibrillation: YesNo,
    #[serde(default)]
    pub patient_age: Option<u8>,
    #[serde(default)]
    pub smoking_history: Option<Smoking>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecafDetails {
    pub mortality_risk: &'static str,
    pub mortality_range: &'static str,
    pub recommendation: &'static str,
    pub disposition: &'static str,
    pub monitoring_level: &'static str,
    pub specific_considerations: Vec<&'static str>,
}

/// In-hospital mortality by score from the derivation cohort.
pub fn mortality(score: u8) -> &'static str {
    match score {
        0 => "0%",
        1 => "1.5%",
        2 => "5.4%",
        3 => "15.3%",
        4 => "31%",
        5 => "40%",
        _ => "50%",
    }
}

impl Calculator for DecafScore {
    type Input = DecafInput;
    type Output = CalculationResult<u8, DecafDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("decaf_score", "DECAF Score", Specialty::Pulmonology)
                .description(
                    "Predicts in-hospital mortality in patients admitted with an acute \
                     exacerbation of COPD.",
                )
                .parameters(vec![
                    Parameter::choice(
                        "emrcd_dyspnea",
                        "Extended MRC dyspnea score",
                        &Dyspnea::OPTIONS,
                    ),
                    Parameter::yes_no("eosinopenia", "Eosinophils <0.05×10⁹/L"),
                    Parameter::yes_no("consolidation", "Consolidation on chest X-ray"),
                    Parameter::yes_no("acidemia", "Arterial pH <7.30"),
                    Parameter::yes_no("atrial_fibrillation", "Atrial fibrillation"),
                    Parameter::integer("patient_age", "Patient age", 35, 120)
                        .unit("years")
                        .optional(),
                    Parameter::choice(
                        "smoking_history",
                        "Smoking history",
                        &["yes", "no", "unknown"],
                    )
                    .optional(),
                ])
                .result("DECAF score", "DECAF score")
        });
        &METADATA
    }

    fn calculate(&self, input: DecafInput) -> Result<Self::Output, CalculatorError> {
        let findings = count_yes(&[
            input.eosinopenia,
            input.consolidation,
            input.acidemia,
            input.atrial_fibrillation,
        ]);
        let score = input.emrcd_dyspnea.points() + findings as u8;

        let (label, description, range, recommendation, disposition, monitoring, outlook) =
            match score {
                0..=1 => (
                    "Low Risk",
                    "Low mortality risk",
                    "0-1.5%",
                    "Routine management",
                    "Standard ward care",
                    "Routine monitoring",
                    "Routine ward-based management is appropriate with standard COPD \
                     exacerbation care.",
                ),
                2 => (
                    "Intermediate Risk",
                    "Intermediate mortality risk",
                    "5.4%",
                    "Use clinician judgment re: disposition",
                    "Consider higher level care",
                    "Close monitoring",
                    "Use clinical judgment regarding disposition and consider closer monitoring \
                     with frequent reassessment.",
                ),
                _ => (
                    "High Risk",
                    "High mortality risk",
                    "15.3-50%",
                    "Consider escalation of care vs. palliative care",
                    "HDU/ICU consideration",
                    "Intensive monitoring",
                    "Strong consideration for escalation of care (HDU/ICU) or palliative care \
                     discussions depending on goals of care.",
                ),
            };

        let mut considerations = Vec::new();
        if let Some(age) = input.patient_age {
            if age >= 75 {
                considerations.push(
                    "Advanced age requires careful assessment of goals of care and functional \
                     status",
                );
            }
            if age >= 80 && score >= 3 {
                considerations.push(
                    "Consider early palliative care consultation for comprehensive care planning",
                );
            }
        }
        if input.smoking_history == Some(Smoking::Yes) {
            considerations.push("Smoking cessation counseling and support");
        }
        if score >= 4 {
            considerations.push(
                "DECAF score ≥4 indicates very high mortality risk - consider immediate \
                 escalation",
            );
        }
        if score == 6 {
            considerations.push(
                "Maximum DECAF score - urgent consideration for intensive care or comfort \
                 measures",
            );
        }

        let interpretation = format!(
            "DECAF score of {score} indicates {label} with {range} in-hospital mortality risk. \
             {outlook}"
        );

        Ok(
            CalculationResult::new(score, "DECAF score", interpretation, label, description)
                .with_details(DecafDetails {
                    mortality_risk: mortality(score),
                    mortality_range: range,
                    recommendation,
                    disposition,
                    monitoring_level: monitoring,
                    specific_considerations: considerations,
                }),
        )
    }
}
