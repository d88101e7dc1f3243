use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// El-Ganzouri Risk Index (EGRI) for difficult airway, 0–12 points.
pub struct ElGanzouriRiskIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MouthOpening {
    #[serde(rename = "4_cm_or_more")]
    Normal,
    #[serde(rename = "less_than_4_cm")]
    Limited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ThyromentalDistance {
    #[serde(rename = "more_than_6_5_cm")]
    Adequate,
    #[serde(rename = "6_0_to_6_5_cm")]
    Borderline,
    #[serde(rename = "less_than_6_0_cm")]
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Mallampati {
    #[serde(rename = "class_1")]
    I,
    #[serde(rename = "class_2")]
    II,
    #[serde(rename = "class_3")]
    III,
    #[serde(rename = "class_4")]
    IV,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NeckMovement {
    #[serde(rename = "more_than_90_degrees")]
    Normal,
    #[serde(rename = "80_to_90_degrees")]
    Limited,
    #[serde(rename = "less_than_80_degrees")]
    SeverelyLimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BodyWeight {
    #[serde(rename = "less_than_90_kg")]
    Normal,
    #[serde(rename = "90_to_110_kg")]
    Elevated,
    #[serde(rename = "more_than_110_kg")]
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntubationHistory {
    None,
    Questionable,
    Definite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prognathism {
    Present,
    Absent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElGanzouriInput {
    pub mouth_opening: MouthOpening,
    pub thyromental_distance: ThyromentalDistance,
    pub mallampati_class: Mallampati,
    pub neck_movement: NeckMovement,
    pub ability_to_prognath: Prognathism,
    pub body_weight: BodyWeight,
    pub history_difficult_intubation: IntubationHistory,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentScores {
    pub mouth_opening: u8,
    pub thyromental_distance: u8,
    pub mallampati_class: u8,
    pub neck_movement: u8,
    pub ability_to_prognath: u8,
    pub body_weight: u8,
    pub history_difficult_intubation: u8,
}

impl ComponentScores {
    fn total(&self) -> u8 {
        self.mouth_opening
            + self.thyromental_distance
            + self.mallampati_class
            + self.neck_movement
            + self.ability_to_prognath
            + self.body_weight
            + self.history_difficult_intubation
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ElGanzouriDetails {
    pub component_scores: ComponentScores,
}

impl Calculator for ElGanzouriRiskIndex {
    type Input = ElGanzouriInput;
    type Output = CalculationResult<u8, ElGanzouriDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "el_ganzouri_risk_index_difficult_airway",
                "El-Ganzouri Risk Index (EGRI) for Difficult Airway",
                Specialty::Anesthesiology,
            )
            .description(
                "Predicts difficult laryngoscopy and intubation from seven bedside airway \
                 assessments; 4 or more points indicates high risk.",
            )
            .parameters(vec![
                Parameter::choice(
                    "mouth_opening",
                    "Inter-incisor distance",
                    &["4_cm_or_more", "less_than_4_cm"],
                ),
                Parameter::choice(
                    "thyromental_distance",
                    "Thyromental distance",
                    &["more_than_6_5_cm", "6_0_to_6_5_cm", "less_than_6_0_cm"],
                ),
                Parameter::choice(
                    "mallampati_class",
                    "Modified Mallampati class",
                    &["class_1", "class_2", "class_3", "class_4"],
                ),
                Parameter::choice(
                    "neck_movement",
                    "Range of head and neck movement",
                    &["more_than_90_degrees", "80_to_90_degrees", "less_than_80_degrees"],
                ),
                Parameter::choice(
                    "ability_to_prognath",
                    "Ability to advance the lower incisors beyond the upper",
                    &["present", "absent"],
                ),
                Parameter::choice(
                    "body_weight",
                    "Body weight",
                    &["less_than_90_kg", "90_to_110_kg", "more_than_110_kg"],
                ),
                Parameter::choice(
                    "history_difficult_intubation",
                    "History of difficult intubation",
                    &["none", "questionable", "definite"],
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: ElGanzouriInput) -> Result<Self::Output, CalculatorError> {
        let components = ComponentScores {
            mouth_opening: match input.mouth_opening {
                MouthOpening::Normal => 0,
                MouthOpening::Limited => 1,
            },
            thyromental_distance: match input.thyromental_distance {
                ThyromentalDistance::Adequate => 0,
                ThyromentalDistance::Borderline => 1,
                ThyromentalDistance::Short => 2,
            },
            mallampati_class: match input.mallampati_class {
                Mallampati::I => 0,
                Mallampati::II => 1,
                Mallampati::III | Mallampati::IV => 2,
            },
            neck_movement: match input.neck_movement {
                NeckMovement::Normal => 0,
                NeckMovement::Limited => 1,
                NeckMovement::SeverelyLimited => 2,
            },
            ability_to_prognath: match input.ability_to_prognath {
                Prognathism::Present => 0,
                Prognathism::Absent => 1,
            },
            body_weight: match input.body_weight {
                BodyWeight::Normal => 0,
                BodyWeight::Elevated => 1,
                BodyWeight::High => 2,
            },
            history_difficult_intubation: match input.history_difficult_intubation {
                IntubationHistory::None => 0,
                IntubationHistory::Questionable => 1,
                IntubationHistory::Definite => 2,
            },
        };
        let score = components.total();

        let (stage, description, interpretation) = match score {
            0..=3 => (
                "Low Risk",
                "Low risk of difficult intubation",
                format!(
                    "EGRI score of {score} indicates low risk of difficult airway. Conventional \
                     laryngoscopy is appropriate with standard difficult airway equipment \
                     available."
                ),
            ),
            4..=6 => (
                "High Risk",
                "High risk of difficult intubation",
                format!(
                    "EGRI score of {score} indicates high risk of difficult airway. Video \
                     laryngoscopy is recommended as first-line approach with an experienced \
                     anesthesiologist and backup techniques prepared."
                ),
            ),
            _ => (
                "Very High Risk",
                "Very high risk of difficult intubation",
                format!(
                    "EGRI score of {score} indicates very high risk of difficult airway. Strongly \
                     consider awake fiberoptic intubation with senior anesthesiologist involvement \
                     and a full difficult airway setup."
                ),
            ),
        };

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description).with_details(
                ElGanzouriDetails {
                    component_scores: components,
                },
            ),
        )
    }
}
