use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// MALT Lymphoma Prognostic Index (MALT-IPI): one point each for age ≥70,
/// Ann Arbor stage III/IV and elevated LDH.
pub struct MaltLymphomaPrognosticIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnArborStage {
    StageI,
    StageIi,
    StageIii,
    StageIv,
}

impl AnnArborStage {
    fn is_advanced(self) -> bool {
        matches!(self, AnnArborStage::StageIii | AnnArborStage::StageIv)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaltIpiInput {
    pub age: i32,
    pub ann_arbor_stage: AnnArborStage,
    pub ldh_elevated: YesNo,
}

/// Five-year outcomes for the risk group, in percent.
#[derive(Debug, Clone, Serialize)]
pub struct SurvivalOutcomes {
    pub overall_survival_5yr: f64,
    pub event_free_survival_5yr: f64,
    pub cause_specific_survival_5yr: f64,
    pub progression_free_survival_5yr: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaltIpiDetails {
    pub risk_factors: Vec<&'static str>,
    pub survival_outcomes: SurvivalOutcomes,
}

impl Calculator for MaltLymphomaPrognosticIndex {
    type Input = MaltIpiInput;
    type Output = CalculationResult<usize, MaltIpiDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "malt_lymphoma_prognostic_index",
                "MALT Lymphoma Prognostic Index (MALT-IPI)",
                Specialty::Hematology,
            )
            .description(
                "Identifies MALT lymphoma patients at risk of poor event-free and overall \
                 survival from age, stage and LDH.",
            )
            .parameters(vec![
                Parameter::integer("age", "Patient age", 18, 120).unit("years"),
                Parameter::choice(
                    "ann_arbor_stage",
                    "Ann Arbor stage",
                    &["stage_i", "stage_ii", "stage_iii", "stage_iv"],
                ),
                Parameter::yes_no("ldh_elevated", "LDH above the upper limit of normal"),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: MaltIpiInput) -> Result<Self::Output, CalculatorError> {
        let mut risk_factors = Vec::new();
        if input.age >= 70 {
            risk_factors.push("Age ≥70 years");
        }
        if input.ann_arbor_stage.is_advanced() {
            risk_factors.push("Ann Arbor stage III/IV");
        }
        if input.ldh_elevated.is_yes() {
            risk_factors.push("Elevated LDH");
        }
        let score = risk_factors.len();

        let (stage, description, outcomes, management) = match score {
            0 => (
                "Low Risk",
                "Excellent prognosis",
                SurvivalOutcomes {
                    overall_survival_5yr: 96.7,
                    event_free_survival_5yr: 76.0,
                    cause_specific_survival_5yr: 98.2,
                    progression_free_survival_5yr: 56.8,
                },
                "Conservative management may be appropriate, including watchful waiting for \
                 asymptomatic localized disease with regular surveillance.",
            ),
            1 => (
                "Intermediate Risk",
                "Moderate prognosis",
                SurvivalOutcomes {
                    overall_survival_5yr: 81.7,
                    event_free_survival_5yr: 48.4,
                    cause_specific_survival_5yr: 94.7,
                    progression_free_survival_5yr: 48.0,
                },
                "More intensive monitoring and treatment planning required; consider early \
                 intervention based on clinical presentation.",
            ),
            _ => (
                "High Risk",
                "Poor prognosis",
                SurvivalOutcomes {
                    overall_survival_5yr: 64.9,
                    event_free_survival_5yr: 15.7,
                    cause_specific_survival_5yr: 74.3,
                    progression_free_survival_5yr: 22.7,
                },
                "Prompt oncology referral and active treatment recommended; rituximab-based \
                 regimens are often beneficial and clinical trial enrollment should be \
                 considered.",
            ),
        };

        let interpretation = format!(
            "MALT-IPI score {score}: {stage} ({description}). 5-year overall survival {:.1}%, \
             event-free survival {:.1}%. {management}",
            outcomes.overall_survival_5yr, outcomes.event_free_survival_5yr,
        );

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description)
                .with_details(MaltIpiDetails {
                    risk_factors,
                    survival_outcomes: outcomes,
                }),
        )
    }
}
