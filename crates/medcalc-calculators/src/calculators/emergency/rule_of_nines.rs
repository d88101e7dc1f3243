use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Wallace rule of nines for total body surface area burned.
///
/// Each region is entered as the percentage of that region burned and
/// weighted by the region's share of body surface.
pub struct RuleOfNines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Adult,
    Child,
    Infant,
}

impl AgeGroup {
    fn is_pediatric(self) -> bool {
        !matches!(self, AgeGroup::Adult)
    }

    /// Region weights in [`REGIONS`] order.
    fn weights(self) -> [f64; 8] {
        match self {
            AgeGroup::Adult => [9.0, 18.0, 18.0, 9.0, 9.0, 18.0, 18.0, 1.0],
            AgeGroup::Child | AgeGroup::Infant => [18.0, 18.0, 18.0, 9.0, 9.0, 13.5, 13.5, 1.0],
        }
    }
}

const REGIONS: [(&str, &str); 8] = [
    ("head_neck_percentage", "Percentage of head and neck burned"),
    ("anterior_torso_percentage", "Percentage of anterior torso burned"),
    ("posterior_torso_percentage", "Percentage of posterior torso burned"),
    ("right_arm_percentage", "Percentage of right arm burned"),
    ("left_arm_percentage", "Percentage of left arm burned"),
    ("right_leg_percentage", "Percentage of right leg burned"),
    ("left_leg_percentage", "Percentage of left leg burned"),
    ("genitalia_percentage", "Percentage of genitalia burned"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct RuleOfNinesInput {
    pub patient_age_group: AgeGroup,
    pub head_neck_percentage: f64,
    pub anterior_torso_percentage: f64,
    pub posterior_torso_percentage: f64,
    pub right_arm_percentage: f64,
    pub left_arm_percentage: f64,
    pub right_leg_percentage: f64,
    pub left_leg_percentage: f64,
    pub genitalia_percentage: f64,
}

impl RuleOfNinesInput {
    fn burned(&self) -> [f64; 8] {
        [
            self.head_neck_percentage,
            self.anterior_torso_percentage,
            self.posterior_torso_percentage,
            self.right_arm_percentage,
            self.left_arm_percentage,
            self.right_leg_percentage,
            self.left_leg_percentage,
            self.genitalia_percentage,
        ]
    }
}

impl Calculator for RuleOfNines {
    type Input = RuleOfNinesInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            let mut parameters = vec![Parameter::choice(
                "patient_age_group",
                "Age group; children and infants have a larger head and smaller legs",
                &["adult", "child", "infant"],
            )];
            parameters.extend(
                REGIONS
                    .iter()
                    .map(|(name, description)| {
                        Parameter::number(name, description, 0.0, 100.0).unit("%")
                    }),
            );
            ScoreMetadata::new("rule_of_nines", "Rule of Nines", Specialty::Emergency)
                .description(
                    "Estimates total body surface area (TBSA) burned to guide fluid \
                     resuscitation and burn center referral.",
                )
                .parameters(parameters)
                .result("TBSA burned", "%")
        });
        &METADATA
    }

    fn calculate(&self, input: RuleOfNinesInput) -> Result<Self::Output, CalculatorError> {
        let tbsa: f64 = input
            .burned()
            .iter()
            .zip(input.patient_age_group.weights())
            .map(|(burned, weight)| burned / 100.0 * weight)
            .sum();

        let fluid_note = if input.patient_age_group.is_pediatric() {
            " Pediatric patients require fluid resuscitation at ≥5% TBSA. Consider early burn \
             center transfer for specialized pediatric burn care."
        } else {
            " Adult patients require fluid resuscitation at ≥10% TBSA. Parkland formula: \
             4 mL/kg/% TBSA over 24 hours."
        };

        let (stage, description, summary) = if tbsa < 10.0 {
            (
                "Minor Burn",
                "Outpatient management usually appropriate",
                format!(
                    "Minor burn ({tbsa:.1}% TBSA) typically manageable as an outpatient with wound \
                     care, analgesia, tetanus prophylaxis and clear return precautions."
                ),
            )
        } else if tbsa < 20.0 {
            (
                "Moderate Burn",
                "Consider hospital admission and burn center consultation",
                format!(
                    "Moderate burn ({tbsa:.1}% TBSA) requires assessment for admission and burn \
                     center consultation. Establish IV access and monitor urine output."
                ),
            )
        } else if tbsa < 30.0 {
            (
                "Major Burn",
                "Hospital admission and burn center transfer required",
                format!(
                    "Major burn ({tbsa:.1}% TBSA) requires immediate admission and burn center \
                     transfer with Parkland-guided fluid resuscitation. Monitor for compartment \
                     syndrome, respiratory compromise and burn shock."
                ),
            )
        } else {
            (
                "Severe Burn",
                "Life-threatening injury requiring immediate intensive care",
                format!(
                    "Severe burn ({tbsa:.1}% TBSA) is a life-threatening injury requiring intensive \
                     care and burn center management, with airway protection and massive fluid \
                     resuscitation."
                ),
            )
        };

        Ok(CalculationResult::new(
            round_to(tbsa, 1),
            "%",
            format!("{summary}{fluid_note}"),
            stage,
            description,
        ))
    }
}
