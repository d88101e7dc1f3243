use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Manchester score for prognosis in small cell lung cancer: one point per
/// adverse factor, six factors.
pub struct ManchesterScoreSclc;

const SODIUM_CUTOFF: f64 = 132.0;
const BICARBONATE_CUTOFF: f64 = 24.0;
const KPS_CUTOFF: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ldh {
    Normal,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AlkalinePhosphatase {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "1.1_to_1.5_times_normal")]
    Mild,
    #[serde(rename = "greater_than_1.5_times_normal")]
    Marked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseStage {
    Limited,
    Extensive,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManchesterInput {
    pub serum_ldh: Ldh,
    pub serum_sodium: f64,
    pub serum_alkaline_phosphatase: AlkalinePhosphatase,
    pub serum_bicarbonate: f64,
    pub disease_stage: DiseaseStage,
    pub karnofsky_performance_status: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManchesterFactors {
    pub ldh_score: u8,
    pub sodium_score: u8,
    pub alp_score: u8,
    pub bicarbonate_score: u8,
    pub stage_score: u8,
    pub kps_score: u8,
}

impl ManchesterFactors {
    fn new(input: &ManchesterInput) -> Self {
        Self {
            ldh_score: u8::from(input.serum_ldh == Ldh::Elevated),
            sodium_score: u8::from(input.serum_sodium < SODIUM_CUTOFF),
            alp_score: u8::from(input.serum_alkaline_phosphatase == AlkalinePhosphatase::Marked),
            bicarbonate_score: u8::from(input.serum_bicarbonate < BICARBONATE_CUTOFF),
            stage_score: u8::from(input.disease_stage == DiseaseStage::Extensive),
            kps_score: u8::from(input.karnofsky_performance_status <= KPS_CUTOFF),
        }
    }

    fn total(&self) -> u8 {
        self.ldh_score
            + self.sodium_score
            + self.alp_score
            + self.bicarbonate_score
            + self.stage_score
            + self.kps_score
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManchesterDetails {
    pub factor_scores: ManchesterFactors,
    pub two_year_survival: &'static str,
    pub long_term_survivors: &'static str,
    pub treatment_approach: &'static str,
}

impl Calculator for ManchesterScoreSclc {
    type Input = ManchesterInput;
    type Output = CalculationResult<u8, ManchesterDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "manchester_score_prognosis_sclc",
                "Manchester Score for Prognosis in Small Cell Lung Cancer",
                Specialty::Pulmonology,
            )
            .description(
                "Stratifies small cell lung cancer into good, medium or poor prognosis from \
                 routine biochemistry, stage and performance status.",
            )
            .parameters(vec![
                Parameter::choice("serum_ldh", "Serum LDH", &["normal", "elevated"]),
                Parameter::number("serum_sodium", "Serum sodium", 110.0, 160.0).unit("mmol/L"),
                Parameter::choice(
                    "serum_alkaline_phosphatase",
                    "Serum alkaline phosphatase relative to upper limit of normal",
                    &[
                        "normal",
                        "1.1_to_1.5_times_normal",
                        "greater_than_1.5_times_normal",
                    ],
                ),
                Parameter::number("serum_bicarbonate", "Serum bicarbonate", 10.0, 40.0)
                    .unit("mmol/L"),
                Parameter::choice("disease_stage", "Disease stage", &["limited", "extensive"]),
                Parameter::integer(
                    "karnofsky_performance_status",
                    "Karnofsky performance status",
                    0,
                    100,
                )
                .unit("%"),
            ])
            .result("Manchester score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: ManchesterInput) -> Result<Self::Output, CalculatorError> {
        let factors = ManchesterFactors::new(&input);
        let score = factors.total();

        let (stage, description, survival, survivors, approach, interpretation) = match score {
            0..=1 => (
                "Good Prognosis",
                "Good prognostic group with best survival outcomes",
                "16.2%",
                "Yes",
                "Curative intent",
                "Good prognosis with 16.2% two-year survival rate. This group contains all \
                 long-term survivors of the derivation cohort. Consider standard chemotherapy \
                 with curative intent, including concurrent chemoradiotherapy for limited stage \
                 disease.",
            ),
            2..=3 => (
                "Medium Prognosis",
                "Intermediate prognostic group with moderate survival outcomes",
                "2.5%",
                "Rare",
                "Standard with monitoring",
                "Medium prognosis with 2.5% two-year survival rate. Consider standard treatment \
                 with careful monitoring of tolerance and response, balancing intensity against \
                 quality of life. Consider early palliative care consultation.",
            ),
            _ => (
                "Poor Prognosis",
                "Poor prognostic group with worst survival outcomes",
                "0%",
                "No",
                "Palliative focus",
                "Poor prognosis with 0% two-year survival rate; no patient in this group of the \
                 derivation cohort survived beyond one year. Focus on symptom management and \
                 quality of life with early palliative care referral; any chemotherapy should \
                 have palliative intent.",
            ),
        };

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description)
                .with_details(ManchesterDetails {
                    factor_scores: factors,
                    two_year_survival: survival,
                    long_term_survivors: survivors,
                    treatment_approach: approach,
                }),
        )
    }
}
