use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// WHO classification-based Prognostic Scoring System (WPSS) for
/// myelodysplastic syndromes, 0–6.
pub struct WpssMds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhoCategory {
    RaRarsDel5q,
    RcmdRcmdRs,
    #[serde(rename = "raeb_1")]
    Raeb1,
    #[serde(rename = "raeb_2")]
    Raeb2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Karyotype {
    Good,
    Intermediate,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransfusionRequirement {
    None,
    Regular,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpssInput {
    pub who_category: WhoCategory,
    pub karyotype: Karyotype,
    pub transfusion_requirement: TransfusionRequirement,
}

#[derive(Debug, Clone, Serialize)]
pub struct WpssComponents {
    pub who_category_score: i32,
    pub karyotype_score: i32,
    pub transfusion_score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WpssDetails {
    pub median_survival_months: u32,
    pub median_survival_years: f64,
    pub component_scores: WpssComponents,
    pub leukemic_transformation_risk: &'static str,
    pub recommendations: Vec<&'static str>,
}

struct RiskGroup {
    level: &'static str,
    description: &'static str,
    months: u32,
    years: f64,
    transformation: &'static str,
}

fn risk_group(score: i32) -> RiskGroup {
    match score {
        0 => RiskGroup {
            level: "Very Low Risk",
            description: "Excellent prognosis",
            months: 141,
            years: 11.8,
            transformation: "Very low probability of leukemic transformation",
        },
        1 => RiskGroup {
            level: "Low Risk",
            description: "Good prognosis",
            months: 66,
            years: 5.5,
            transformation: "Low probability of leukemic transformation",
        },
        2 => RiskGroup {
            level: "Intermediate Risk",
            description: "Moderate prognosis",
            months: 48,
            years: 4.0,
            transformation: "Moderate probability of leukemic transformation",
        },
        3 | 4 => RiskGroup {
            level: "High Risk",
            description: "Poor prognosis",
            months: 26,
            years: 2.2,
            transformation: "High probability of leukemic transformation",
        },
        _ => RiskGroup {
            level: "Very High Risk",
            description: "Very poor prognosis",
            months: 9,
            years: 0.8,
            transformation: "Very high probability of leukemic transformation",
        },
    }
}

impl Calculator for WpssMds {
    type Input = WpssInput;
    type Output = CalculationResult<i32, WpssDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "wpss_mds",
                "WHO Classification-Based Prognostic Scoring System (WPSS) for MDS",
                Specialty::Hematology,
            )
            .description(
                "Predicts overall survival and leukemic transformation in myelodysplastic \
                 syndromes from WHO subtype, karyotype and transfusion need.",
            )
            .parameters(vec![
                Parameter::choice(
                    "who_category",
                    "WHO MDS subtype",
                    &["ra_rars_del5q", "rcmd_rcmd_rs", "raeb_1", "raeb_2"],
                ),
                Parameter::choice(
                    "karyotype",
                    "Cytogenetic risk group",
                    &["good", "intermediate", "poor"],
                ),
                Parameter::choice(
                    "transfusion_requirement",
                    "Red cell transfusion requirement",
                    &["none", "regular"],
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: WpssInput) -> Result<Self::Output, CalculatorError> {
        let components = WpssComponents {
            who_category_score: match input.who_category {
                WhoCategory::RaRarsDel5q => 0,
                WhoCategory::RcmdRcmdRs => 1,
                WhoCategory::Raeb1 => 2,
                WhoCategory::Raeb2 => 3,
            },
            karyotype_score: match input.karyotype {
                Karyotype::Good => 0,
                Karyotype::Intermediate => 1,
                Karyotype::Poor => 2,
            },
            transfusion_score: match input.transfusion_requirement {
                TransfusionRequirement::None => 0,
                TransfusionRequirement::Regular => 1,
            },
        };
        let score =
            components.who_category_score + components.karyotype_score + components.transfusion_score;
        let group = risk_group(score);

        let mut recommendations = match score {
            ..=1 => vec![
                "Watch and wait approach with regular monitoring",
                "Supportive care for symptomatic anemia",
                "Complete blood count every 3-6 months",
            ],
            2 => vec![
                "Regular monitoring with consideration for early intervention",
                "Evaluate for hypomethylating agents",
                "Complete blood count every 2-3 months",
            ],
            _ => vec![
                "Urgent hematology-oncology consultation",
                "Evaluate for allogeneic stem cell transplantation",
                "Complete blood count monthly or more frequently",
            ],
        };
        if input.transfusion_requirement == TransfusionRequirement::Regular {
            recommendations.push("Iron overload assessment and chelation therapy consideration");
        }
        if input.karyotype == Karyotype::Poor {
            recommendations.push("Consider more aggressive treatment due to poor cytogenetics");
        }
        if input.who_category == WhoCategory::Raeb2 {
            recommendations.push("Close monitoring for AML transformation given high blast count");
        }

        let interpretation = format!(
            "WPSS score {score} points indicates {} myelodysplastic syndrome with median overall \
             survival of {} months ({} years). {}.",
            group.level, group.months, group.years, group.description,
        );

        Ok(
            CalculationResult::new(score, "points", interpretation, group.level, group.description)
                .with_details(WpssDetails {
                    median_survival_months: group.months,
                    median_survival_years: group.years,
                    component_scores: components,
                    leukemic_transformation_risk: group.transformation,
                    recommendations,
                }),
        )
    }
}
