use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;
use crate::params::YesNo;

/// Ishihara 14-plate color vision screening, interpreted per eye and then
/// overall from the worse eye.
pub struct ColorVisionScreening;

pub const TOTAL_PLATES: u8 = 14;
const MAX_NORMAL_ERRORS: u8 = 2;
const MIN_RELIABLE_AGE: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct ColorVisionInput {
    pub correct_plates_right_eye: u8,
    pub correct_plates_left_eye: u8,
    pub visual_acuity_adequate: YesNo,
    pub patient_age: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EyeStatus {
    Normal,
    #[serde(rename = "Borderline Normal")]
    BorderlineNormal,
    #[serde(rename = "Possible Deficiency")]
    PossibleDeficiency,
    #[serde(rename = "Likely Deficiency")]
    LikelyDeficiency,
}

impl EyeStatus {
    pub fn from_correct_plates(correct: u8) -> Self {
        let incorrect = TOTAL_PLATES.saturating_sub(correct);
        if incorrect <= MAX_NORMAL_ERRORS {
            if correct >= 12 {
                EyeStatus::Normal
            } else {
                EyeStatus::BorderlineNormal
            }
        } else if incorrect <= 6 {
            EyeStatus::PossibleDeficiency
        } else {
            EyeStatus::LikelyDeficiency
        }
    }

    fn label(self) -> &'static str {
        match self {
            EyeStatus::Normal => "Normal",
            EyeStatus::BorderlineNormal => "Borderline Normal",
            EyeStatus::PossibleDeficiency => "Possible Deficiency",
            EyeStatus::LikelyDeficiency => "Likely Deficiency",
        }
    }

    fn risk_level(self) -> &'static str {
        match self {
            EyeStatus::Normal => "Low",
            EyeStatus::BorderlineNormal => "Low-Moderate",
            EyeStatus::PossibleDeficiency => "Moderate",
            EyeStatus::LikelyDeficiency => "High",
        }
    }

    fn clinical_significance(self) -> &'static str {
        match self {
            EyeStatus::Normal => "No color vision deficiency detected",
            EyeStatus::BorderlineNormal => {
                "Minimal errors may indicate mild deficiency or attention issues"
            }
            EyeStatus::PossibleDeficiency => {
                "Moderate number of errors suggests possible color vision defect"
            }
            EyeStatus::LikelyDeficiency => {
                "Multiple errors strongly suggest red-green color vision deficiency"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EyeAssessment {
    pub eye: &'static str,
    pub correct_plates: u8,
    pub incorrect_plates: u8,
    pub total_plates: u8,
    pub accuracy_percentage: f64,
    pub status: EyeStatus,
    pub risk_level: &'static str,
    pub clinical_significance: &'static str,
}

impl EyeAssessment {
    fn new(eye: &'static str, correct: u8) -> Self {
        let status = EyeStatus::from_correct_plates(correct);
        Self {
            eye,
            correct_plates: correct,
            incorrect_plates: TOTAL_PLATES.saturating_sub(correct),
            total_plates: TOTAL_PLATES,
            accuracy_percentage: round_to(
                f64::from(correct) / f64::from(TOTAL_PLATES) * 100.0,
                1,
            ),
            status,
            risk_level: status.risk_level(),
            clinical_significance: status.clinical_significance(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub primary_recommendation: &'static str,
    pub follow_up_actions: Vec<&'static str>,
    pub patient_counseling: Vec<&'static str>,
    pub occupational_considerations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestLimitations {
    pub patient_specific_warnings: Vec<&'static str>,
    pub test_reliability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorVisionOutcome {
    pub right_eye: EyeAssessment,
    pub left_eye: EyeAssessment,
    pub bilateral_status: String,
    pub clinical_recommendations: Recommendations,
    pub test_limitations: TestLimitations,
}

impl Calculator for ColorVisionScreening {
    type Input = ColorVisionInput;
    type Output = CalculationResult<ColorVisionOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "color_vision_screening",
                "Color Vision Screening (Ishihara Plates)",
                Specialty::Ophthalmology,
            )
            .description(
                "Interprets a 14-plate Ishihara screen per eye to detect red-green color vision \
                 deficiency.",
            )
            .parameters(vec![
                Parameter::integer(
                    "correct_plates_right_eye",
                    "Plates read correctly with the right eye",
                    0,
                    i64::from(TOTAL_PLATES),
                ),
                Parameter::integer(
                    "correct_plates_left_eye",
                    "Plates read correctly with the left eye",
                    0,
                    i64::from(TOTAL_PLATES),
                ),
                Parameter::yes_no(
                    "visual_acuity_adequate",
                    "Visual acuity 20/100 or better in both eyes",
                ),
                Parameter::integer("patient_age", "Patient age", 1, 120).unit("years"),
            ])
            .result("assessment", "assessment")
        });
        &METADATA
    }

    fn calculate(&self, input: ColorVisionInput) -> Result<Self::Output, CalculatorError> {
        let right = EyeAssessment::new("Right", input.correct_plates_right_eye);
        let left = EyeAssessment::new("Left", input.correct_plates_left_eye);
        let worst = right.status.max(left.status);

        let mut recommendations = match worst {
            EyeStatus::Normal | EyeStatus::BorderlineNormal => Recommendations {
                primary_recommendation: if worst == EyeStatus::Normal {
                    "No additional color vision testing needed"
                } else {
                    "Consider repeat testing if clinical concerns persist"
                },
                follow_up_actions: vec!["Routine eye care as appropriate for age"],
                patient_counseling: vec!["Normal color vision confirmed"],
                occupational_considerations: Vec::new(),
            },
            EyeStatus::PossibleDeficiency => Recommendations {
                primary_recommendation: "Consider ophthalmology referral for comprehensive color \
                                         vision evaluation",
                follow_up_actions: vec![
                    "Consider repeat Ishihara testing in 6-12 months",
                    "Ophthalmology consultation if concerns persist",
                ],
                patient_counseling: vec![
                    "Possible mild color vision difficulties detected",
                    "Most daily activities should not be significantly affected",
                ],
                occupational_considerations: vec![
                    "May have limitations in color-critical occupations",
                ],
            },
            EyeStatus::LikelyDeficiency => Recommendations {
                primary_recommendation: "Ophthalmology referral recommended for definitive \
                                         diagnosis and management",
                follow_up_actions: vec![
                    "Ophthalmology referral for comprehensive color vision assessment",
                    "Formal color vision testing (Farnsworth-Munsell 100 Hue test)",
                    "Genetic counseling if family planning considerations",
                ],
                patient_counseling: vec![
                    "Color vision deficiency likely present",
                    "Condition is typically congenital and stable",
                    "Does not affect overall eye health or visual acuity",
                ],
                occupational_considerations: vec![
                    "Limitations in color-critical occupations (pilots, electricians, some \
                     medical fields)",
                    "Reasonable accommodations often available",
                ],
            },
        };

        let mut limitations = TestLimitations {
            patient_specific_warnings: Vec::new(),
            test_reliability: "High",
        };
        if input.patient_age < MIN_RELIABLE_AGE {
            recommendations
                .follow_up_actions
                .push("Repeat testing when child reaches 5-6 years of age");
            limitations.patient_specific_warnings.extend([
                "Test less reliable in children under 5 years",
                "Attention span and comprehension may affect results",
            ]);
            limitations.test_reliability = "Reduced";
        }
        if !input.visual_acuity_adequate.is_yes() {
            recommendations
                .follow_up_actions
                .push("Address visual acuity issues before repeat color vision testing");
            limitations.patient_specific_warnings.extend([
                "Test accuracy reduced with visual acuity below 20/100",
                "Refractive errors should be corrected before testing",
            ]);
            limitations.test_reliability = "Reduced";
        }

        let (stage, description, interpretation) = match worst {
            EyeStatus::Normal => (
                "Normal",
                "Normal color vision both eyes",
                "Both eyes demonstrate normal color vision (≥12/14 plates correct with ≤2 \
                 errors). No further color vision testing indicated unless clinical suspicion \
                 remains high.",
            ),
            EyeStatus::BorderlineNormal => (
                "Normal",
                "Normal color vision",
                "Overall normal color vision with minimal errors. Results suggest intact \
                 red-green color discrimination ability.",
            ),
            EyeStatus::PossibleDeficiency => (
                "Possible Deficiency",
                "Possible color vision deficiency",
                "Moderate number of errors suggests possible color vision deficiency. May \
                 indicate mild red-green color discrimination difficulties.",
            ),
            EyeStatus::LikelyDeficiency => (
                "Color Vision Deficiency",
                "Color vision deficiency likely",
                "Multiple errors strongly suggest red-green color vision deficiency (protanomaly \
                 or deuteranomaly). Formal ophthalmologic evaluation recommended.",
            ),
        };

        let outcome = ColorVisionOutcome {
            bilateral_status: format!(
                "Right: {}, Left: {}",
                right.status.label(),
                left.status.label()
            ),
            right_eye: right,
            left_eye: left,
            clinical_recommendations: recommendations,
            test_limitations: limitations,
        };

        Ok(CalculationResult::new(
            outcome,
            "assessment",
            interpretation,
            stage,
            description,
        ))
    }
}
