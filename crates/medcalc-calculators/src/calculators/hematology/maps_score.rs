use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Mayo Alliance Prognostic System (MAPS) for systemic mastocytosis, 0–6.
pub struct MayoAlliancePrognosticSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmType {
    IndolentSmolderingSm,
    AdvancedSm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerumAlp {
    Normal,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdverseMutations {
    Absent,
    Present,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapsInput {
    pub sm_type: SmType,
    pub patient_age: i32,
    pub platelet_count: f64,
    pub serum_alp: SerumAlp,
    pub adverse_mutations: AdverseMutations,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapsComponents {
    pub sm_type: i32,
    pub age: i32,
    pub platelets: i32,
    pub serum_alp: i32,
    pub adverse_mutations: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapsDetails {
    pub component_scores: MapsComponents,
    pub median_survival: &'static str,
    pub five_year_survival_rate: &'static str,
    pub clinical_approach: &'static str,
}

const AGE_THRESHOLD: i32 = 60;
const PLATELET_THRESHOLD: f64 = 150.0;

impl Calculator for MayoAlliancePrognosticSystem {
    type Input = MapsInput;
    type Output = CalculationResult<i32, MapsDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "mayo_alliance_prognostic_system_maps_score",
                "Mayo Alliance Prognostic System (MAPS) Score for Systemic Mastocytosis",
                Specialty::Hematology,
            )
            .description(
                "Risk stratifies systemic mastocytosis using disease type, age, platelet count, \
                 serum alkaline phosphatase and adverse mutations.",
            )
            .parameters(vec![
                Parameter::choice(
                    "sm_type",
                    "Systemic mastocytosis type",
                    &["indolent_smoldering_sm", "advanced_sm"],
                ),
                Parameter::integer("patient_age", "Patient age", 18, 100).unit("years"),
                Parameter::number("platelet_count", "Platelet count", 10.0, 1000.0)
                    .unit("×10⁹/L"),
                Parameter::choice("serum_alp", "Serum alkaline phosphatase", &["normal", "elevated"]),
                Parameter::choice(
                    "adverse_mutations",
                    "Adverse mutations (ASXL1, RUNX1, NRAS)",
                    &["absent", "present"],
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: MapsInput) -> Result<Self::Output, CalculatorError> {
        let components = MapsComponents {
            sm_type: match input.sm_type {
                SmType::IndolentSmolderingSm => 0,
                SmType::AdvancedSm => 2,
            },
            age: i32::from(input.patient_age > AGE_THRESHOLD),
            platelets: i32::from(input.platelet_count < PLATELET_THRESHOLD),
            serum_alp: i32::from(input.serum_alp == SerumAlp::Elevated),
            adverse_mutations: i32::from(input.adverse_mutations == AdverseMutations::Present),
        };
        let score = components.sm_type
            + components.age
            + components.platelets
            + components.serum_alp
            + components.adverse_mutations;

        let (stage, description, median, five_year, approach, summary) = match score {
            ..=2 => (
                "Low Risk",
                "Excellent prognosis",
                "198 months (16.5 years)",
                "99%",
                "Standard monitoring and supportive care",
                "low risk systemic mastocytosis with excellent prognosis. Treatment is usually \
                 reserved for symptomatic disease or progression, with regular blood counts and \
                 symptom assessment.",
            ),
            3 | 4 => (
                "Intermediate Risk",
                "Intermediate prognosis",
                "36-85 months (3-7 years)",
                "50-91%",
                "Closer monitoring with earlier intervention consideration",
                "intermediate risk systemic mastocytosis with variable prognosis. Closer \
                 monitoring for progression is required and referral to a specialized center \
                 should be considered.",
            ),
            _ => (
                "High Risk",
                "Poor prognosis",
                "12 months (1 year)",
                "4-24%",
                "Aggressive treatment and clinical trial consideration",
                "high risk systemic mastocytosis with poor prognosis. Consider KIT inhibitors, \
                 cytoreductive therapy or clinical trial enrollment, with multidisciplinary and \
                 palliative care input.",
            ),
        };
        let interpretation = format!(
            "MAPS score of {score} indicates {summary} Median survival {median}; 5-year \
             survival {five_year}."
        );

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description)
                .with_details(MapsDetails {
                    component_scores: components,
                    median_survival: median,
                    five_year_survival_rate: five_year,
                    clinical_approach: approach,
                }),
        )
    }
}
