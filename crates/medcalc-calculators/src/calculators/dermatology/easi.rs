use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Eczema Area and Severity Index (EASI), 0–72.
///
/// Each of four body regions contributes
/// `(erythema + edema + excoriation + lichenification) × area × multiplier`,
/// where the head/neck multiplier is doubled for children aged 0–7.
pub struct EczemaAreaSeverityIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    #[serde(rename = "child_0_7")]
    Child,
    #[serde(rename = "adult_8_plus")]
    Adult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EasiInput {
    pub age_category: AgeCategory,
    pub head_neck_area: u8,
    pub head_neck_erythema: u8,
    pub head_neck_edema: u8,
    pub head_neck_excoriation: u8,
    pub head_neck_lichenification: u8,
    pub upper_extremities_area: u8,
    pub upper_extremities_erythema: u8,
    pub upper_extremities_edema: u8,
    pub upper_extremities_excoriation: u8,
    pub upper_extremities_lichenification: u8,
    pub trunk_area: u8,
    pub trunk_erythema: u8,
    pub trunk_edema: u8,
    pub trunk_excoriation: u8,
    pub trunk_lichenification: u8,
    pub lower_extremities_area: u8,
    pub lower_extremities_erythema: u8,
    pub lower_extremities_edema: u8,
    pub lower_extremities_excoriation: u8,
    pub lower_extremities_lichenification: u8,
}

/// Per-region breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct RegionScore {
    pub region: &'static str,
    pub area_score: u8,
    pub severity_sum: u8,
    pub multiplier: f64,
    pub regional_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EasiDetails {
    pub regional_scores: Vec<RegionScore>,
}

const REGIONS: [&str; 4] = ["head_neck", "upper_extremities", "trunk", "lower_extremities"];
const SIGNS: [&str; 4] = ["erythema", "edema", "excoriation", "lichenification"];

impl EasiInput {
    /// `(area, [erythema, edema, excoriation, lichenification])` in [`REGIONS`] order.
    fn regions(&self) -> [(u8, [u8; 4]); 4] {
        [
            (
                self.head_neck_area,
                [
                    self.head_neck_erythema,
                    self.head_neck_edema,
                    self.head_neck_excoriation,
                    self.head_neck_lichenification,
                ],
            ),
            (
                self.upper_extremities_area,
                [
                    self.upper_extremities_erythema,
                    self.upper_extremities_edema,
                    self.upper_extremities_excoriation,
                    self.upper_extremities_lichenification,
                ],
            ),
            (
                self.trunk_area,
                [
                    self.trunk_erythema,
                    self.trunk_edema,
                    self.trunk_excoriation,
                    self.trunk_lichenification,
                ],
            ),
            (
                self.lower_extremities_area,
                [
                    self.lower_extremities_erythema,
                    self.lower_extremities_edema,
                    self.lower_extremities_excoriation,
                    self.lower_extremities_lichenification,
                ],
            ),
        ]
    }
}

fn multipliers(age: AgeCategory) -> [f64; 4] {
    match age {
        AgeCategory::Child => [0.2, 0.2, 0.3, 0.4],
        AgeCategory::Adult => [0.1, 0.2, 0.3, 0.4],
    }
}

fn parameters() -> Vec<Parameter> {
    let mut params = vec![Parameter::choice(
        "age_category",
        "Age category; children 0-7 use a larger head/neck multiplier",
        &["child_0_7", "adult_8_plus"],
    )];
    for region in REGIONS {
        let label = region.replace('_', "/");
        params.push(Parameter::integer(
            &format!("{region}_area"),
            &format!("{label} area score (0 = none, 6 = 90-100%)"),
            0,
            6,
        ));
        for sign in SIGNS {
            params.push(Parameter::integer(
                &format!("{region}_{sign}"),
                &format!("{label} {sign} severity (0 = absent, 3 = severe)"),
                0,
                3,
            ));
        }
    }
    params
}

impl Calculator for EczemaAreaSeverityIndex {
    type Input = EasiInput;
    type Output = CalculationResult<f64, EasiDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "eczema_area_severity_index",
                "Eczema Area and Severity Index (EASI)",
                Specialty::Dermatology,
            )
            .description(
                "Grades the extent and severity of atopic dermatitis across four body regions.",
            )
            .parameters(parameters())
            .result("EASI score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: EasiInput) -> Result<Self::Output, CalculatorError> {
        let multipliers = multipliers(input.age_category);
        let regional_scores: Vec<RegionScore> = input
            .regions()
            .into_iter()
            .zip(REGIONS)
            .zip(multipliers)
            .map(|(((area, signs), region), multiplier)| {
                let severity_sum: u8 = signs.iter().sum();
                RegionScore {
                    region,
                    area_score: area,
                    severity_sum,
                    multiplier,
                    regional_score: f64::from(severity_sum) * f64::from(area) * multiplier,
                }
            })
            .collect();

        let score = round_to(regional_scores.iter().map(|r| r.regional_score).sum(), 1);
        let (stage, description, interpretation) = interpret(score);

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description)
                .with_details(EasiDetails { regional_scores }),
        )
    }
}

fn interpret(score: f64) -> (&'static str, &'static str, &'static str) {
    if score == 0.0 {
        (
            "Clear",
            "No eczema",
            "Clear skin with no signs of atopic dermatitis. Continue maintenance skincare with \
             regular moisturizing and environmental management to prevent flares.",
        )
    } else if score <= 1.0 {
        (
            "Almost Clear",
            "Almost clear eczema",
            "Almost clear atopic dermatitis with minimal residual signs. Continue the current \
             regimen and monitor for relapse.",
        )
    } else if score <= 7.0 {
        (
            "Mild",
            "Mild eczema",
            "Mild atopic dermatitis. First-line treatment with regular moisturizers, low-potency \
             topical corticosteroids and trigger avoidance.",
        )
    } else if score <= 21.0 {
        (
            "Moderate",
            "Moderate eczema",
            "Moderate atopic dermatitis. Consider medium-potency topical corticosteroids, topical \
             calcineurin inhibitors, or systemic therapy if topical treatment is inadequate.",
        )
    } else if score <= 50.0 {
        (
            "Severe",
            "Severe eczema",
            "Severe atopic dermatitis requiring intensive treatment. High-potency topical \
             corticosteroids, systemic immunosuppressants or biologic therapy may be indicated. \
             Dermatology consultation recommended.",
        )
    } else {
        (
            "Very Severe",
            "Very severe eczema",
            "Very severe atopic dermatitis requiring aggressive multimodal treatment with systemic \
             immunosuppressants or biologic therapy and specialist referral.",
        )
    }
}
