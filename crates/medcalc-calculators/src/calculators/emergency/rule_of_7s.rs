use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Rule of 7s for pediatric Lyme meningitis: one point each for headache of
/// 7+ days, CSF mononuclear cells of 70%+ and cranial nerve palsy.
pub struct RuleOf7sLymeMeningitis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Present,
    Absent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleOf7sInput {
    pub headache_days: i32,
    pub csf_mononuclear_percentage: f64,
    pub cranial_nerve_palsy: Presence,
}

impl Calculator for RuleOf7sLymeMeningitis {
    type Input = RuleOf7sInput;
    type Output = CalculationResult<i32>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "rule_of_7s_lyme_meningitis",
                "Rule of 7s for Lyme Meningitis",
                Specialty::Emergency,
            )
            .description(
                "Identifies children with CSF pleocytosis at low risk for Lyme meningitis who \
                 may be managed as outpatients.",
            )
            .parameters(vec![
                Parameter::integer("headache_days", "Duration of headache", 1, 30).unit("days"),
                Parameter::number(
                    "csf_mononuclear_percentage",
                    "Percentage of CSF white cells that are mononuclear",
                    0.0,
                    100.0,
                )
                .unit("%"),
                Parameter::choice(
                    "cranial_nerve_palsy",
                    "Cranial nerve palsy on examination",
                    &["present", "absent"],
                ),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: RuleOf7sInput) -> Result<Self::Output, CalculatorError> {
        let palsy = input.cranial_nerve_palsy == Presence::Present;
        let score = i32::from(input.headache_days >= 7)
            + i32::from(input.csf_mononuclear_percentage >= 70.0)
            + i32::from(palsy);

        let findings = format!(
            "Clinical parameters: {} days of headache, {:.1}% CSF mononuclear cells, cranial \
             nerve palsy {}.",
            input.headache_days,
            input.csf_mononuclear_percentage,
            if palsy { "present" } else { "absent" },
        );

        let (stage, description, interpretation) = if score == 0 {
            (
                "Low Risk for Lyme Meningitis",
                "Outpatient management appropriate",
                format!(
                    "Low risk for Lyme meningitis (<10% probability). Patient meets all three \
                     'Rule of 7s' criteria for low risk: <7 days of headache, <70% CSF mononuclear \
                     cells, and no cranial nerve palsy. {findings} These children can be safely \
                     managed as outpatients while awaiting Lyme serology."
                ),
            )
        } else {
            (
                "Not Low Risk for Lyme Meningitis",
                "Consider admission and empirical therapy",
                format!(
                    "Not low risk for Lyme meningitis ({score} of 3 criteria present). {findings} \
                     Consider hospital admission and empirical antibiotic therapy such as \
                     ceftriaxone pending Lyme serology."
                ),
            )
        };

        Ok(CalculationResult::new(score, "points", interpretation, stage, description))
    }
}
