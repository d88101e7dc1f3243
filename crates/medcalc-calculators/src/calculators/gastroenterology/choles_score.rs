use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;
use crate::params::YesNo;

/// CholeS score: risk of a laparoscopic cholecystectomy running past 90
/// minutes, for theatre list planning.
pub struct CholesScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indication {
    Pancreatitis,
    ColicDyskinesiaPolyp,
    CbdStone,
    AcalculousCholecystitis,
}

impl Indication {
    const OPTIONS: [&'static str; 4] = [
        "pancreatitis",
        "colic_dyskinesia_polyp",
        "cbd_stone",
        "acalculous_cholecystitis",
    ];

    fn points(self) -> f64 {
        match self {
            Indication::Pancreatitis => 0.0,
            Indication::ColicDyskinesiaPolyp => 0.5,
            Indication::CbdStone => 2.0,
            Indication::AcalculousCholecystitis => 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CbdDiameter {
    Normal,
    Dilated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GallbladderWall {
    Normal,
    Thick,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CholesInput {
    pub age: i32,
    pub gender: Gender,
    pub indication: Indication,
    pub bmi: f64,
    pub cbd_diameter: CbdDiameter,
    pub gallbladder_wall: GallbladderWall,
    pub preoperative_ct: YesNo,
    pub planned_cholangiogram: YesNo,
    pub previous_admissions: i32,
    pub asa_grade: i32,
}

/// Points contributed by each factor.
#[derive(Debug, Clone, Serialize)]
pub struct CholesBreakdown {
    pub age: f64,
    pub gender: f64,
    pub indication: f64,
    pub bmi: f64,
    pub cbd_diameter: f64,
    pub gallbladder_wall: f64,
    pub preoperative_ct: f64,
    pub planned_cholangiogram: f64,
    pub previous_admissions: f64,
    pub asa_grade: f64,
}

impl CholesBreakdown {
    fn total(&self) -> f64 {
        self.age
            + self.gender
            + self.indication
            + self.bmi
            + self.cbd_diameter
            + self.gallbladder_wall
            + self.preoperative_ct
            + self.planned_cholangiogram
            + self.previous_admissions
            + self.asa_grade
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CholesOutcome {
    pub total_score: f64,
    pub risk_category: &'static str,
    pub prolonged_surgery_probability: &'static str,
    pub operative_planning: &'static str,
    pub scheduling_recommendation: &'static str,
    pub scoring_breakdown: CholesBreakdown,
}

fn yes_points(answer: YesNo, points: f64) -> f64 {
    if answer.is_yes() { points } else { 0.0 }
}

impl Calculator for CholesScore {
    type Input = CholesInput;
    type Output = CalculationResult<CholesOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("choles_score", "CholeS Score", Specialty::Gastroenterology)
                .description(
                    "Predicts laparoscopic cholecystectomy duration over 90 minutes from \
                     preoperative patient and imaging factors.",
                )
                .parameters(vec![
                    Parameter::integer("age", "Patient age", 18, 120).unit("years"),
                    Parameter::choice("gender", "Patient gender", &["male", "female"]),
                    Parameter::choice("indication", "Indication for surgery", &Indication::OPTIONS),
                    Parameter::number("bmi", "Body mass index", 15.0, 60.0).unit("kg/m²"),
                    Parameter::choice(
                        "cbd_diameter",
                        "Common bile duct diameter on imaging",
                        &["normal", "dilated"],
                    ),
                    Parameter::choice(
                        "gallbladder_wall",
                        "Gallbladder wall on imaging",
                        &["normal", "thick"],
                    ),
                    Parameter::yes_no("preoperative_ct", "Preoperative CT performed"),
                    Parameter::yes_no(
                        "planned_cholangiogram",
                        "Intraoperative cholangiogram planned",
                    ),
                    Parameter::integer(
                        "previous_admissions",
                        "Previous biliary-related emergency admissions",
                        0,
                        20,
                    ),
                    Parameter::integer("asa_grade", "ASA physical status grade", 1, 5),
                ])
        });
        &METADATA
    }

    fn calculate(&self, input: CholesInput) -> Result<Self::Output, CalculatorError> {
        let breakdown = CholesBreakdown {
            age: if input.age >= 40 { 1.5 } else { 0.0 },
            gender: if input.gender == Gender::Male { 1.0 } else { 0.0 },
            indication: input.indication.points(),
            bmi: if input.bmi < 25.0 {
                0.0
            } else if input.bmi <= 35.0 {
                1.0
            } else {
                2.0
            },
            cbd_diameter: if input.cbd_diameter == CbdDiameter::Dilated { 2.0 } else { 0.0 },
            gallbladder_wall: if input.gallbladder_wall == GallbladderWall::Thick {
                1.5
            } else {
                0.0
            },
            preoperative_ct: yes_points(input.preoperative_ct, 1.5),
            planned_cholangiogram: yes_points(input.planned_cholangiogram, 3.0),
            previous_admissions: match input.previous_admissions {
                0 => 0.0,
                1 | 2 => 1.0,
                _ => 2.5,
            },
            asa_grade: match input.asa_grade {
                1 => 0.0,
                2 => 1.0,
                _ => 2.5,
            },
        };
        let total_score = round_to(breakdown.total(), 1);

        let (category, probability, description, planning, scheduling, interpretation) =
            if total_score <= 3.5 {
                (
                    "Low Risk",
                    "≤5.1% chance of >90-minute surgery",
                    "Low likelihood of prolonged surgery",
                    "Standard operative planning appropriate",
                    "3 cases per half-day list recommended",
                    format!(
                        "CholeS Score {total_score}: Low risk for prolonged surgery (≤5.1% chance \
                         >90 minutes). Standard scheduling with 3 cases per half-day list."
                    ),
                )
            } else if total_score <= 8.0 {
                (
                    "Intermediate Risk",
                    "5.1-41.8% chance of >90-minute surgery",
                    "Moderate likelihood of prolonged surgery",
                    "Consider operative complexity in scheduling",
                    "2-3 cases per half-day list based on total risk profile",
                    format!(
                        "CholeS Score {total_score}: Intermediate risk for prolonged surgery \
                         (5.1-41.8% chance >90 minutes). Consider scheduling 2-3 cases per \
                         half-day list based on case complexity."
                    ),
                )
            } else {
                (
                    "High Risk",
                    ">41.8% chance of >90-minute surgery",
                    "High likelihood of prolonged surgery",
                    "Anticipate complex surgery with potential complications",
                    "Maximum 2 cases per half-day list to avoid overruns",
                    format!(
                        "CholeS Score {total_score}: High risk for prolonged surgery (>41.8% \
                         chance >90 minutes). Schedule maximum 2 cases per half-day list to \
                         prevent theatre overruns."
                    ),
                )
            };

        let outcome = CholesOutcome {
            total_score,
            risk_category: category,
            prolonged_surgery_probability: probability,
            operative_planning: planning,
            scheduling_recommendation: scheduling,
            scoring_breakdown: breakdown,
        };

        Ok(CalculationResult::new(
            outcome,
            "points",
            interpretation,
            category,
            description,
        ))
    }
}
