use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;
use crate::params::YesNo;

/// Age-adjusted Charlson Comorbidity Index with estimated 10-year survival.
///
/// Survival is `0.983^(0.9 × CCI)`, bounded to 0–100%.
pub struct CharlsonComorbidityIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiverDisease {
    None,
    Mild,
    ModerateSevere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diabetes {
    None,
    Uncomplicated,
    WithEndOrganDamage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharlsonInput {
    pub age: i32,
    pub myocardial_infarction: YesNo,
    pub congestive_heart_failure: YesNo,
    pub peripheral_vascular_disease: YesNo,
    pub cerebrovascular_disease: YesNo,
    pub dementia: YesNo,
    pub chronic_pulmonary_disease: YesNo,
    pub connective_tissue_disease: YesNo,
    pub peptic_ulcer_disease: YesNo,
    pub liver_disease: LiverDisease,
    pub diabetes: Diabetes,
    pub hemiplegia: YesNo,
    pub moderate_severe_ckd: YesNo,
    pub localized_solid_tumor: YesNo,
    pub leukemia: YesNo,
    pub lymphoma: YesNo,
    pub metastatic_solid_tumor: YesNo,
    pub aids: YesNo,
}

/// `(parameter, description, points)` for the yes/no comorbidities.
const YES_NO_CONDITIONS: [(&str, &str, i32); 15] = [
    ("myocardial_infarction", "History of myocardial infarction", 1),
    ("congestive_heart_failure", "Congestive heart failure", 1),
    ("peripheral_vascular_disease", "Peripheral vascular disease", 1),
    ("cerebrovascular_disease", "Cerebrovascular accident or TIA", 1),
    ("dementia", "Dementia", 1),
    ("chronic_pulmonary_disease", "Chronic obstructive pulmonary disease", 1),
    ("connective_tissue_disease", "Connective tissue disease", 1),
    ("peptic_ulcer_disease", "Peptic ulcer disease", 1),
    ("hemiplegia", "Hemiplegia", 2),
    ("moderate_severe_ckd", "Moderate to severe chronic kidney disease", 2),
    ("localized_solid_tumor", "Solid tumor, localized", 2),
    ("leukemia", "Leukemia", 2),
    ("lymphoma", "Lymphoma", 2),
    ("metastatic_solid_tumor", "Metastatic solid tumor", 6),
    ("aids", "AIDS", 6),
];

impl CharlsonInput {
    /// Answers in [`YES_NO_CONDITIONS`] order.
    fn answers(&self) -> [YesNo; 15] {
        [
            self.myocardial_infarction,
            self.congestive_heart_failure,
            self.peripheral_vascular_disease,
            self.cerebrovascular_disease,
            self.dementia,
            self.chronic_pulmonary_disease,
            self.connective_tissue_disease,
            self.peptic_ulcer_disease,
            self.hemiplegia,
            self.moderate_severe_ckd,
            self.localized_solid_tumor,
            self.leukemia,
            self.lymphoma,
            self.metastatic_solid_tumor,
            self.aids,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComorbidityPoints {
    pub condition: &'static str,
    pub points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharlsonOutcome {
    pub total_score: i32,
    pub age_points: i32,
    pub comorbidity_points: i32,
    pub ten_year_survival_probability: f64,
    pub risk_category: &'static str,
    pub comorbidities_present: Vec<ComorbidityPoints>,
}

fn age_points(age: i32) -> i32 {
    match age {
        ..50 => 0,
        50..60 => 1,
        60..70 => 2,
        70..80 => 3,
        _ => 4,
    }
}

/// Estimated 10-year survival as a percentage.
pub fn ten_year_survival(score: i32) -> f64 {
    (0.983f64.powf(f64::from(score) * 0.9) * 100.0).clamp(0.0, 100.0)
}

impl Calculator for CharlsonComorbidityIndex {
    type Input = CharlsonInput;
    type Output = CalculationResult<CharlsonOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            let mut parameters = vec![Parameter::integer("age", "Patient age", 0, 120).unit("years")];
            parameters.extend(
                YES_NO_CONDITIONS
                    .iter()
                    .map(|(name, description, _)| Parameter::yes_no(name, description)),
            );
            parameters.push(Parameter::choice(
                "liver_disease",
                "Liver disease severity",
                &["none", "mild", "moderate_severe"],
            ));
            parameters.push(Parameter::choice(
                "diabetes",
                "Diabetes mellitus",
                &["none", "uncomplicated", "with_end_organ_damage"],
            ));

            ScoreMetadata::new(
                "charlson_comorbidity_index",
                "Charlson Comorbidity Index (CCI)",
                Specialty::Geriatrics,
            )
            .description(
                "Predicts 10-year survival in patients with multiple comorbidities from age and \
                 17 weighted conditions.",
            )
            .parameters(parameters)
        });
        &METADATA
    }

    fn calculate(&self, input: CharlsonInput) -> Result<Self::Output, CalculatorError> {
        let mut comorbidities_present: Vec<ComorbidityPoints> = YES_NO_CONDITIONS
            .iter()
            .zip(input.answers())
            .filter(|(_, answer)| answer.is_yes())
            .map(|((_, condition, points), _)| ComorbidityPoints {
                condition,
                points: *points,
            })
            .collect();
        match input.liver_disease {
            LiverDisease::None => {}
            LiverDisease::Mild => comorbidities_present.push(ComorbidityPoints {
                condition: "Mild liver disease",
                points: 1,
            }),
            LiverDisease::ModerateSevere => comorbidities_present.push(ComorbidityPoints {
                condition: "Moderate to severe liver disease",
                points: 3,
            }),
        }
        match input.diabetes {
            Diabetes::None => {}
            Diabetes::Uncomplicated => comorbidities_present.push(ComorbidityPoints {
                condition: "Uncomplicated diabetes mellitus",
                points: 1,
            }),
            Diabetes::WithEndOrganDamage => comorbidities_present.push(ComorbidityPoints {
                condition: "Diabetes with end-organ damage",
                points: 2,
            }),
        }

        let age_points = age_points(input.age);
        let comorbidity_points: i32 = comorbidities_present.iter().map(|c| c.points).sum();
        let total_score = age_points + comorbidity_points;
        let survival = ten_year_survival(total_score);

        let (category, stage, description, summary) = if survival >= 90.0 {
            (
                "Low Risk",
                "Minimal Comorbidity",
                "Minimal comorbidity burden with excellent prognosis",
                "Excellent 10-year survival (≥90%). Minimal impact from comorbidities.",
            )
        } else if survival >= 70.0 {
            (
                "Moderate Risk",
                "Moderate Comorbidity",
                "Moderate comorbidity burden with good prognosis",
                "Good 10-year survival (70-89%). Moderate impact from comorbidities.",
            )
        } else if survival >= 30.0 {
            (
                "High Risk",
                "Significant Comorbidity",
                "Significant comorbidity burden with reduced survival",
                "Reduced 10-year survival (30-69%). Significant impact from comorbidities.",
            )
        } else {
            (
                "Very High Risk",
                "Severe Comorbidity",
                "Severe comorbidity burden with poor prognosis",
                "Poor 10-year survival (<30%). Severe impact from comorbidities.",
            )
        };
        let interpretation = format!(
            "Charlson Comorbidity Index Score: {total_score} points. Predicted 10-year survival: \
             {survival:.1}%. {summary} Consider individual patient factors and treatment goals \
             when making clinical decisions based on this assessment."
        );

        let outcome = CharlsonOutcome {
            total_score,
            age_points,
            comorbidity_points,
            ten_year_survival_probability: round_to(survival, 2),
            risk_category: category,
            comorbidities_present,
        };

        Ok(CalculationResult::new(
            outcome,
            "points",
            interpretation,
            stage,
            description,
        ))
    }
}
