use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// DHAKA (Dehydration: Assessing Kids Accurately) score for children under
/// five with acute diarrhea.
pub struct DhakaScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralAppearance {
    Normal,
    RestlessIrritable,
    LethargicUnconscious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Respirations {
    Normal,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinPinch {
    Normal,
    Slow,
    VerySlow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tears {
    Normal,
    Decreased,
    Absent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DhakaInput {
    pub general_appearance: GeneralAppearance,
    pub respirations: Respirations,
    pub skin_pinch: SkinPinch,
    pub tears: Tears,
    #[serde(default)]
    pub child_age_months: Option<u8>,
    #[serde(default)]
    pub diarrhea_duration: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dehydration {
    None,
    Some,
    Severe,
}

impl Dehydration {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => Dehydration::None,
            2..=3 => Dehydration::Some,
            _ => Dehydration::Severe,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Rehydration {
    pub urgency: &'static str,
    pub setting: &'static str,
    pub expected_duration: &'static str,
    pub failure_indicators: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct DhakaDetails {
    pub dehydration_category: Dehydration,
    pub fluid_loss: &'static str,
    pub management: &'static str,
    pub disposition: &'static str,
    pub risk_factors: Vec<&'static str>,
    pub validity_criteria: Vec<String>,
    pub rehydration_details: Rehydration,
}

impl Calculator for DhakaScore {
    type Input = DhakaInput;
    type Output = CalculationResult<u8, DhakaDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("dhaka_score", "DHAKA Score", Specialty::Pediatrics)
                .description(
                    "Classifies dehydration in children under 5 with acute diarrhea as none, \
                     some or severe from four clinical signs.",
                )
                .parameters(vec![
                    Parameter::choice(
                        "general_appearance",
                        "General appearance",
                        &["normal", "restless_irritable", "lethargic_unconscious"],
                    ),
                    Parameter::choice("respirations", "Respirations", &["normal", "deep"]),
                    Parameter::choice(
                        "skin_pinch",
                        "Skin pinch recoil",
                        &["normal", "slow", "very_slow"],
                    ),
                    Parameter::choice("tears", "Tears", &["normal", "decreased", "absent"]),
                    Parameter::integer("child_age_months", "Child age", 1, 59)
                        .unit("months")
                        .optional(),
                    Parameter::integer("diarrhea_duration", "Duration of diarrhea", 1, 13)
                        .unit("days")
                        .optional(),
                ])
                .result("DHAKA score", "DHAKA score")
        });
        &METADATA
    }

    fn calculate(&self, input: DhakaInput) -> Result<Self::Output, CalculatorError> {
        let mut risk_factors = Vec::new();
        let appearance = match input.general_appearance {
            GeneralAppearance::Normal => 0,
            GeneralAppearance::RestlessIrritable => 2,
            GeneralAppearance::LethargicUnconscious => 4,
        };
        if appearance > 0 {
            risk_factors.push("Altered mental status indicates significant dehydration");
        }
        let respirations = match input.respirations {
            Respirations::Normal => 0,
            Respirations::Deep => 2,
        };
        if respirations > 0 {
            risk_factors.push("Deep respirations suggest metabolic acidosis");
        }
        let skin = match input.skin_pinch {
            SkinPinch::Normal => 0,
            SkinPinch::Slow => 2,
            SkinPinch::VerySlow => 4,
        };
        if skin > 0 {
            risk_factors.push("Poor skin elasticity indicates volume depletion");
        }
        let tears = match input.tears {
            Tears::Normal => 0,
            Tears::Decreased => 1,
            Tears::Absent => 2,
        };
        if tears > 0 {
            risk_factors.push("Reduced tear production indicates dehydration");
        }
        let score = appearance + respirations + skin + tears;
        let category = Dehydration::from_score(score);

        let (label, description, fluid_loss, management, disposition, outlook) = match category {
            Dehydration::None => (
                "No Dehydration",
                "Minimal or no fluid loss",
                "<3%",
                "Encourage fluid intake, continue normal diet",
                "Outpatient management",
                "Child has minimal dehydration and can be managed with continued fluid intake \
                 and normal diet. Monitor for any worsening.",
            ),
            Dehydration::Some => (
                "Some Dehydration",
                "Mild to moderate fluid loss",
                "3-9%",
                "Supervised oral rehydration therapy",
                "Outpatient with close follow-up",
                "Child requires supervised oral rehydration therapy with close monitoring for \
                 response to treatment and possible deterioration.",
            ),
            Dehydration::Severe => (
                "Severe Dehydration",
                "Significant fluid loss requiring immediate intervention",
                "≥10%",
                "Immediate IV rehydration, potential hospitalization",
                "Hospitalization required",
                "Child has severe dehydration requiring immediate intravenous rehydration and \
                 hospitalization for intensive monitoring.",
            ),
        };

        let rehydration = match category {
            Dehydration::None => Rehydration {
                urgency: "Non-urgent",
                setting: "Home or outpatient",
                expected_duration: "24-48 hours",
                failure_indicators: &[
                    "Decreased fluid intake",
                    "Worsening lethargy",
                    "Decreased urination",
                ],
            },
            Dehydration::Some => Rehydration {
                urgency: "Moderate urgency",
                setting: "Outpatient with close supervision",
                expected_duration: "4-6 hours",
                failure_indicators: &[
                    "Poor tolerance of ORS",
                    "Persistent lethargy",
                    "Worsening dehydration signs",
                    "Inability to keep fluids down",
                ],
            },
            Dehydration::Severe => Rehydration {
                urgency: "Emergency",
                setting: "Emergency department or hospital",
                expected_duration: "6-24 hours",
                failure_indicators: &[
                    "Persistent shock",
                    "Worsening mental status",
                    "Electrolyte abnormalities",
                    "Complications of rapid rehydration",
                ],
            },
        };

        let mut validity = Vec::new();
        if let Some(age) = input.child_age_months {
            validity.push(format!("Age {age} months (<60 months) - score validity met"));
        }
        if let Some(days) = input.diarrhea_duration {
            validity.push(format!(
                "Diarrhea duration {days} days (<14 days) - acute diarrhea criteria met"
            ));
        }

        let interpretation = format!(
            "DHAKA score of {score} indicates {label} with {fluid_loss} estimated fluid loss. \
             {outlook}"
        );

        Ok(
            CalculationResult::new(score, "DHAKA score", interpretation, label, description)
                .with_details(DhakaDetails {
                    dehydration_category: category,
                    fluid_loss,
                    management,
                    disposition,
                    risk_factors,
                    validity_criteria: validity,
                    rehydration_details: rehydration,
                }),
        )
    }
}
