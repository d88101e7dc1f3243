use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// Denver HIV Risk Score: likelihood of undiagnosed HIV infection to target
/// screening.
pub struct DenverHivRiskScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "under_22")]
    Under22,
    #[serde(rename = "22_25")]
    From22To25,
    #[serde(rename = "26_32")]
    From26To32,
    #[serde(rename = "33_46")]
    From33To46,
    #[serde(rename = "47_54")]
    From47To54,
    #[serde(rename = "55_60")]
    From55To60,
    #[serde(rename = "over_60")]
    Over60,
}

impl AgeGroup {
    const OPTIONS: [&'static str; 7] =
        ["under_22", "22_25", "26_32", "33_46", "47_54", "55_60", "over_60"];

    fn points(self) -> i32 {
        match self {
            AgeGroup::Under22 => 2,
            AgeGroup::From22To25 => 4,
            AgeGroup::From26To32 => 6,
            AgeGroup::From33To46 => 12,
            AgeGroup::From47To54 => 8,
            AgeGroup::From55To60 => 3,
            AgeGroup::Over60 => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SexualPractices {
    SexWithMale,
    ReceptiveAnalIntercourse,
    VaginalIntercourse,
    None,
}

impl SexualPractices {
    const OPTIONS: [&'static str; 4] = [
        "sex_with_male",
        "receptive_anal_intercourse",
        "vaginal_intercourse",
        "none",
    ];

    fn points(self) -> i32 {
        match self {
            SexualPractices::SexWithMale => 22,
            SexualPractices::ReceptiveAnalIntercourse => 8,
            SexualPractices::VaginalIntercourse => -10,
            SexualPractices::None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceEthnicity {
    Black,
    Hispanic,
    White,
    Asian,
    Other,
}

impl RaceEthnicity {
    const OPTIONS: [&'static str; 5] = ["black", "hispanic", "white", "asian", "other"];

    fn points(self) -> i32 {
        match self {
            RaceEthnicity::Black => 9,
            RaceEthnicity::Hispanic => 3,
            RaceEthnicity::White | RaceEthnicity::Asian => 0,
            RaceEthnicity::Other => 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenverHivInput {
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub sexual_practices: SexualPractices,
    pub injection_drug_use: YesNo,
    pub past_hiv_testing: YesNo,
    #[serde(default)]
    pub race_ethnicity: Option<RaceEthnicity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DenverHivDetails {
    pub hiv_prevalence: &'static str,
    pub recommendation: &'static str,
    pub screening_recommendations: &'static [&'static str],
}

struct RiskCategory {
    label: &'static str,
    description: &'static str,
    prevalence: &'static str,
    recommendation: &'static str,
    screening: &'static [&'static str],
}

fn risk_category(score: i32) -> RiskCategory {
    match score {
        ..=19 => RiskCategory {
            label: "Very Low Risk",
            description: "Very low probability of undiagnosed HIV infection",
            prevalence: "0.31%",
            recommendation: "Consider routine screening per guidelines",
            screening: &[
                "Consider routine screening per CDC guidelines",
                "Provide general HIV prevention education",
            ],
        },
        20..=29 => RiskCategory {
            label: "Low Risk",
            description: "Low probability of undiagnosed HIV infection",
            prevalence: "0.41%",
            recommendation: "Offer HIV testing and prevention counseling",
            screening: &[
                "Offer HIV testing with informed consent",
                "Provide risk reduction counseling",
                "Consider annual screening if ongoing low-level risk",
            ],
        },
        30..=39 => RiskCategory {
            label: "Moderate Risk",
            description: "Moderate probability of undiagnosed HIV infection",
            prevalence: "0.99%",
            recommendation: "Strongly recommend HIV testing",
            screening: &[
                "Strongly recommend HIV testing",
                "Consider more frequent screening (every 3-6 months)",
                "Consider PrEP evaluation if appropriate",
            ],
        },
        40..=49 => RiskCategory {
            label: "High Risk",
            description: "High probability of undiagnosed HIV infection",
            prevalence: "1.59%",
            recommendation: "Urgent HIV testing recommended",
            screening: &[
                "Urgent HIV testing with expedited results",
                "Screening every 3 months while risk persists",
                "Strongly consider PrEP",
            ],
        },
        _ => RiskCategory {
            label: "Very High Risk",
            description: "Very high probability of undiagnosed HIV infection",
            prevalence: "3.59%",
            recommendation: "Immediate HIV testing essential",
            screening: &[
                "Immediate HIV testing, including acute infection testing if indicated",
                "Screening every 3 months while risk persists",
                "Immediate PrEP evaluation and linkage to prevention services",
            ],
        },
    }
}

impl Calculator for DenverHivRiskScore {
    type Input = DenverHivInput;
    type Output = CalculationResult<i32, DenverHivDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "denver_hiv_risk_score",
                "Denver HIV Risk Score",
                Specialty::InfectiousDisease,
            )
            .description(
                "Estimates the probability of undiagnosed HIV infection to guide targeted \
                 screening.",
            )
            .parameters(vec![
                Parameter::choice("age_group", "Age group in years", &AgeGroup::OPTIONS),
                Parameter::choice("gender", "Gender", &["male", "female"]),
                Parameter::choice(
                    "sexual_practices",
                    "Highest-risk sexual practice",
                    &SexualPractices::OPTIONS,
                ),
                Parameter::yes_no("injection_drug_use", "History of injection drug use"),
                Parameter::yes_no("past_hiv_testing", "Previous HIV test"),
                Parameter::choice("race_ethnicity", "Race or ethnicity", &RaceEthnicity::OPTIONS)
                    .optional(),
            ])
            .result("Denver HIV Risk Score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: DenverHivInput) -> Result<Self::Output, CalculatorError> {
        let score = input.age_group.points()
            + if input.gender == Gender::Male { 21 } else { 0 }
            + input.sexual_practices.points()
            + input.injection_drug_use.points(9)
            + input.past_hiv_testing.points(-4)
            + input.race_ethnicity.map_or(0, RaceEthnicity::points);
        let category = risk_category(score);

        let interpretation = format!(
            "Denver HIV Risk Score of {score} points indicates {} ({}). Estimated prevalence of \
             undiagnosed HIV infection: {}. {}.",
            category.label, category.description, category.prevalence, category.recommendation,
        );

        Ok(CalculationResult::new(
            score,
            "points",
            interpretation,
            category.label,
            category.description,
        )
        .with_details(DenverHivDetails {
            hiv_prevalence: category.prevalence,
            recommendation: category.recommendation,
            screening_recommendations: category.screening,
        }))
    }
}
