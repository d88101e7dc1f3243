use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Duval/CIBMTR score: 3-year overall survival for AML patients with active
/// disease undergoing allogeneic HSCT.
pub struct DuvalCibmtrScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DiseaseGroup {
    #[serde(rename = "Primary induction failure or first CR >6 months")]
    InductionFailureOrLongCr,
    #[serde(rename = "First CR <6 months")]
    ShortFirstCr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Cytogenetics {
    #[serde(rename = "Good or intermediate")]
    GoodOrIntermediate,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HlaMatch {
    #[serde(rename = "HLA identical sibling or well/partially matched unrelated")]
    Matched,
    #[serde(rename = "Mismatched unrelated")]
    MismatchedUnrelated,
    #[serde(rename = "Related other than HLA identical sibling")]
    RelatedNonIdentical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CirculatingBlasts {
    Absent,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PerformanceStatus {
    #[serde(rename = "90-100")]
    High,
    #[serde(rename = "<90")]
    Low,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DuvalInput {
    pub disease_group: DiseaseGroup,
    pub cytogenetics: Cytogenetics,
    pub hla_match_group: HlaMatch,
    pub circulating_blasts: CirculatingBlasts,
    pub karnofsky_lansky_scale: PerformanceStatus,
}

impl Calculator for DuvalCibmtrScore {
    type Input = DuvalInput;
    type Output = CalculationResult<i32>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "duval_cibmtr_score_aml_survival",
                "Duval/CIBMTR Score for AML Survival",
                Specialty::Hematology,
            )
            .description(
                "Predicts 3-year overall survival after allogeneic hematopoietic stem cell \
                 transplantation for acute myeloid leukemia not in remission.",
            )
            .parameters(vec![
                Parameter::choice(
                    "disease_group",
                    "Disease status at transplantation",
                    &["Primary induction failure or first CR >6 months", "First CR <6 months"],
                ),
                Parameter::choice(
                    "cytogenetics",
                    "Cytogenetic risk before HSCT",
                    &["Good or intermediate", "Poor"],
                ),
                Parameter::choice(
                    "hla_match_group",
                    "Donor HLA matching",
                    &[
                        "HLA identical sibling or well/partially matched unrelated",
                        "Mismatched unrelated",
                        "Related other than HLA identical sibling",
                    ],
                ),
                Parameter::choice(
                    "circulating_blasts",
                    "Circulating blasts at transplantation",
                    &["Absent", "Present"],
                ),
                Parameter::choice(
                    "karnofsky_lansky_scale",
                    "Karnofsky (adult) or Lansky (pediatric) performance status",
                    &["90-100", "<90"],
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: DuvalInput) -> Result<Self::Output, CalculatorError> {
        let mut factors = Vec::new();
        if input.disease_group == DiseaseGroup::ShortFirstCr {
            factors.push(("First CR <6 months", 1));
        }
        if input.cytogenetics == Cytogenetics::Poor {
            factors.push(("Poor cytogenetics", 1));
        }
        match input.hla_match_group {
            HlaMatch::Matched => {}
            HlaMatch::MismatchedUnrelated => factors.push(("Mismatched unrelated donor", 1)),
            HlaMatch::RelatedNonIdentical => {
                factors.push(("Related donor other than HLA identical sibling", 2))
            }
        }
        if input.circulating_blasts == CirculatingBlasts::Present {
            factors.push(("Circulating blasts present", 1));
        }
        if input.karnofsky_lansky_scale == PerformanceStatus::Low {
            factors.push(("Karnofsky/Lansky <90", 1));
        }
        let score: i32 = factors.iter().map(|(_, points)| points).sum();

        let (stage, description, summary) = match score {
            0 => (
                "Score 0",
                "Excellent prognosis",
                "42% 3-year overall survival. Excellent prognosis for AML patients undergoing \
                 allogeneic HSCT. Standard myeloablative conditioning and routine transplant \
                 protocols are appropriate.",
            ),
            1 => (
                "Score 1",
                "Good prognosis",
                "28% 3-year overall survival. Good prognosis for AML patients undergoing \
                 allogeneic HSCT. Consider enhanced supportive care measures and close \
                 monitoring post-transplant.",
            ),
            2 => (
                "Score 2",
                "Intermediate prognosis",
                "15% 3-year overall survival. Intermediate prognosis; careful risk-benefit \
                 analysis with enhanced supportive care and early intervention strategies.",
            ),
            _ => (
                "Score ≥3",
                "Poor prognosis",
                "6% 3-year overall survival. Poor prognosis; multidisciplinary consultation, \
                 consideration of alternative approaches or clinical trial enrollment, and \
                 goals-of-care discussion are recommended.",
            ),
        };

        let contributing = if factors.is_empty() {
            "No adverse risk factors present.".to_string()
        } else {
            let listed: Vec<String> = factors
                .iter()
                .map(|(factor, points)| format!("{factor} (+{points})"))
                .collect();
            format!("Contributing risk factors: {}.", listed.join(", "))
        };
        let interpretation = format!(
            "{summary} {contributing} Validated for myeloablative conditioning and may not apply \
             to reduced-intensity regimens."
        );

        Ok(CalculationResult::new(
            score,
            "points",
            interpretation,
            stage,
            description,
        ))
    }
}
