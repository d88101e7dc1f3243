use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Children's Hospital of Eastern Ontario Pain Scale (CHEOPS).
///
/// Six behaviors give a total between 4 and 13.
pub struct CheopsPainScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cry {
    NoCrying,
    MoaningCrying,
    Screaming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facial {
    Smiling,
    Composed,
    Grimace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbal {
    Positive,
    NotTalkingOther,
    PainComplaints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Torso {
    Neutral,
    ShiftingTense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Touch {
    NotTouching,
    ReachingTouching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legs {
    Neutral,
    SquirmingTensed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheopsInput {
    pub cry: Cry,
    pub facial: Facial,
    pub verbal: Verbal,
    pub torso: Torso,
    pub touch: Touch,
    pub legs: Legs,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentScore {
    pub behavior: &'static str,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheopsBreakdown {
    pub cry: ComponentScore,
    pub facial: ComponentScore,
    pub verbal: ComponentScore,
    pub torso: ComponentScore,
    pub touch: ComponentScore,
    pub legs: ComponentScore,
}

impl CheopsBreakdown {
    fn new(input: &CheopsInput) -> Self {
        let component = |behavior, points| ComponentScore { behavior, points };
        Self {
            cry: match input.cry {
                Cry::NoCrying => component("No crying", 1),
                Cry::MoaningCrying => component("Moaning or crying", 2),
                Cry::Screaming => component("Screaming", 3),
            },
            facial: match input.facial {
                Facial::Smiling => component("Smiling", 0),
                Facial::Composed => component("Composed/neutral expression", 1),
                Facial::Grimace => component("Grimace or frowning", 2),
            },
            verbal: match input.verbal {
                Verbal::Positive => component("Positive statements or compliant", 0),
                Verbal::NotTalkingOther => component("Not talking or other complaints", 1),
                Verbal::PainComplaints => component("Pain complaints", 2),
            },
            torso: match input.torso {
                Torso::Neutral => component("Neutral position, resting comfortably", 1),
                Torso::ShiftingTense => {
                    component("Shifting, tense, shivering, upright, or restrained", 2)
                }
            },
            touch: match input.touch {
                Touch::NotTouching => component("Not touching or reaching toward wound", 1),
                Touch::ReachingTouching => {
                    component("Reaching toward, touching, or grabbing wound", 2)
                }
            },
            legs: match input.legs {
                Legs::Neutral => component("Neutral position, relaxed", 1),
                Legs::SquirmingTensed => {
                    component("Squirming, tensed, standing, or restrained", 2)
                }
            },
        }
    }

    fn total(&self) -> u8 {
        [
            &self.cry,
            &self.facial,
            &self.verbal,
            &self.torso,
            &self.touch,
            &self.legs,
        ]
        .iter()
        .map(|c| c.points)
        .sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheopsDetails {
    pub intervention_required: bool,
    pub clinical_recommendation: &'static str,
    pub monitoring_guidance: &'static str,
    pub reassessment_timing: &'static str,
    pub scoring_breakdown: CheopsBreakdown,
}

impl Calculator for CheopsPainScale {
    type Input = CheopsInput;
    type Output = CalculationResult<u8, CheopsDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "cheops_pain_scale",
                "CHEOPS Pain Scale",
                Specialty::Pediatrics,
            )
            .description(
                "Behavioral post-operative pain scale for children aged 1 to 7 years.",
            )
            .parameters(vec![
                Parameter::choice("cry", "Crying", &["no_crying", "moaning_crying", "screaming"]),
                Parameter::choice("facial", "Facial expression", &["smiling", "composed", "grimace"]),
                Parameter::choice(
                    "verbal",
                    "Verbal response",
                    &["positive", "not_talking_other", "pain_complaints"],
                ),
                Parameter::choice("torso", "Torso position", &["neutral", "shifting_tense"]),
                Parameter::choice(
                    "touch",
                    "Touching the wound",
                    &["not_touching", "reaching_touching"],
                ),
                Parameter::choice("legs", "Leg position", &["neutral", "squirming_tensed"]),
            ])
            .result("CHEOPS score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: CheopsInput) -> Result<Self::Output, CalculatorError> {
        let breakdown = CheopsBreakdown::new(&input);
        let score = breakdown.total();

        let (level, description, required, recommendation, monitoring, reassessment, summary) =
            match score {
                ..=4 => (
                    "No Pain",
                    "Minimal discomfort",
                    false,
                    "No analgesic intervention required",
                    "Continue routine monitoring and comfort measures",
                    "Every 3 hours or as clinically indicated",
                    "No significant pain. Continue routine post-operative care with standard \
                     monitoring. No analgesic intervention required at this time.",
                ),
                5..=7 => (
                    "Mild to Moderate Pain",
                    "Consider analgesic intervention",
                    true,
                    "Consider administering analgesic medication",
                    "Reassess pain level after intervention and provide comfort measures",
                    "15-20 minutes after IV analgesics or 30-45 minutes after oral/rectal \
                     analgesics",
                    "Mild to moderate pain detected. Consider administering appropriate analgesic \
                     medication and reassess effectiveness.",
                ),
                _ => (
                    "Severe Pain",
                    "Analgesic intervention required",
                    true,
                    "Analgesic medication required immediately",
                    "Implement comprehensive pain management strategies and frequent monitoring",
                    "Frequent reassessment until adequate pain control achieved",
                    "Severe pain requiring immediate intervention. Administer appropriate \
                     analgesic medication and implement comprehensive pain management \
                     strategies.",
                ),
            };

        Ok(CalculationResult::new(
            score,
            "points",
            format!("CHEOPS Score {score}: {summary}"),
            level,
            description,
        )
        .with_details(CheopsDetails {
            intervention_required: required,
            clinical_recommendation: recommendation,
            monitoring_guidance: monitoring,
            reassessment_timing: reassessment,
            scoring_breakdown: breakdown,
        }))
    }
}
