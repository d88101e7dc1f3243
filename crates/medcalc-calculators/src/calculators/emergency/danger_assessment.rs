use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Campbell Danger Assessment for intimate partner homicide risk, scored as
/// a weighted sum of the items answered yes.
pub struct DangerAssessmentTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    NotApplicable,
}

/// Item name, weight and question text.
const ITEMS: [(&str, f64, &str); 20] = [
    ("physical_violence_increased", 1.2, "Physical violence increased in severity or frequency over the past year"),
    ("owns_gun", 2.1, "Partner owns a gun"),
    ("threatened_weapon", 1.8, "Partner used or threatened you with a weapon"),
    ("threatened_kill_you", 1.7, "Partner threatened to kill you"),
    ("avoided_killing", 1.5, "Partner avoided being arrested for domestic violence"),
    ("beaten_pregnant", 1.4, "You were beaten while pregnant"),
    ("jealous_controlling", 1.3, "Partner is violently and constantly jealous"),
    ("controls_activities", 1.1, "Partner controls most or all of your daily activities"),
    ("controls_daily_activities", 1.2, "Partner controls who you see and where you go"),
    ("violent_others", 1.3, "Partner is violent outside the home"),
    ("violent_toward_others", 1.0, "Partner has been violent toward others"),
    ("threatened_suicide", 1.1, "Partner threatened or tried to commit suicide"),
    ("threatened_kill_children", 1.6, "Partner threatened to harm your children"),
    ("child_not_his", 1.0, "You have a child that is not your partner's"),
    ("employment_problems", 0.8, "Partner is unemployed"),
    ("follows_spies", 1.1, "Partner follows or spies on you"),
    ("forced_sex", 1.0, "Partner forced you to have sex"),
    ("tried_to_strangle", 1.9, "Partner tried to choke or strangle you"),
    ("drugs_alcohol_problems", 0.9, "Partner uses illegal drugs or is an alcoholic"),
    ("stepchild_present", 0.8, "A stepchild of your partner lives in the home"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct DangerAssessmentInput {
    pub physical_violence_increased: Answer,
    pub owns_gun: Answer,
    pub threatened_weapon: Answer,
    pub threatened_kill_you: Answer,
    pub avoided_killing: Answer,
    pub beaten_pregnant: Answer,
    pub jealous_controlling: Answer,
    pub controls_activities: Answer,
    pub controls_daily_activities: Answer,
    pub violent_others: Answer,
    pub violent_toward_others: Answer,
    pub threatened_suicide: Answer,
    pub threatened_kill_children: Answer,
    pub child_not_his: Answer,
    pub employment_problems: Answer,
    pub follows_spies: Answer,
    pub forced_sex: Answer,
    pub tried_to_strangle: Answer,
    pub drugs_alcohol_problems: Answer,
    pub stepchild_present: Answer,
}

impl DangerAssessmentInput {
    /// Answers in [`ITEMS`] order.
    fn answers(&self) -> [Answer; 20] {
        [
            self.physical_violence_increased,
            self.owns_gun,
            self.threatened_weapon,
            self.threatened_kill_you,
            self.avoided_killing,
            self.beaten_pregnant,
            self.jealous_controlling,
            self.controls_activities,
            self.controls_daily_activities,
            self.violent_others,
            self.violent_toward_others,
            self.threatened_suicide,
            self.threatened_kill_children,
            self.child_not_his,
            self.employment_problems,
            self.follows_spies,
            self.forced_sex,
            self.tried_to_strangle,
            self.drugs_alcohol_problems,
            self.stepchild_present,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyRiskFactor {
    pub factor: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DangerDetails {
    pub risk_level: &'static str,
    pub weighted_score: f64,
    pub simple_score: usize,
    pub key_risk_factors: Vec<KeyRiskFactor>,
    pub high_risk_factors: Vec<&'static str>,
    pub protective_factors: Vec<&'static str>,
    pub immediate_actions: &'static [&'static str],
    pub specific_recommendations: Vec<&'static str>,
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Calculator for DangerAssessmentTool {
    type Input = DangerAssessmentInput;
    type Output = CalculationResult<f64, DangerDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "danger_assessment_tool",
                "Danger Assessment Tool",
                Specialty::Emergency,
            )
            .description(
                "Assesses the risk of intimate partner homicide from 20 weighted risk factors.",
            )
            .parameters(
                ITEMS
                    .iter()
                    .map(|(name, _, question)| {
                        Parameter::choice(name, question, &["yes", "no", "not_applicable"])
                    })
                    .collect(),
            )
            .result("danger score", "danger score")
        });
        &METADATA
    }

    fn calculate(&self, input: DangerAssessmentInput) -> Result<Self::Output, CalculatorError> {
        let answers = input.answers();
        let positive: Vec<(&str, f64)> = ITEMS
            .iter()
            .zip(answers)
            .filter(|(_, answer)| *answer == Answer::Yes)
            .map(|((name, weight, _), _)| (*name, *weight))
            .collect();
        let is_yes = |item: &str| positive.iter().any(|(name, _)| *name == item);
        let is_no = |item: &str| {
            ITEMS
                .iter()
                .zip(answers)
                .any(|((name, _, _), answer)| *name == item && answer == Answer::No)
        };

        let weighted_score = round_to(positive.iter().map(|(_, w)| w).sum(), 1);

        let mut key_risk_factors: Vec<KeyRiskFactor> = positive
            .iter()
            .filter(|(_, weight)| *weight >= 1.5)
            .map(|(name, weight)| KeyRiskFactor {
                factor: title_case(name),
                weight: *weight,
            })
            .collect();
        key_risk_factors.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        let high_risk_factors = [
            ("owns_gun", "Gun ownership"),
            ("tried_to_strangle", "History of strangulation"),
            ("threatened_weapon", "Weapon threats"),
            ("threatened_kill_you", "Death threats"),
            ("threatened_kill_children", "Threats against children"),
        ]
        .into_iter()
        .filter(|(item, _)| is_yes(item))
        .map(|(_, label)| label)
        .collect();

        let protective_factors = [
            ("owns_gun", "No gun in home"),
            ("drugs_alcohol_problems", "No substance abuse issues"),
            ("violent_toward_others", "No history of violence toward others"),
        ]
        .into_iter()
        .filter(|(item, _)| is_no(item))
        .map(|(_, label)| label)
        .collect();

        let specific_recommendations = [
            ("owns_gun", "Gun in home - consider immediate relocation for safety"),
            (
                "tried_to_strangle",
                "History of strangulation - seek immediate medical evaluation and safety planning",
            ),
            (
                "threatened_kill_children",
                "Threats against children - consider child protective services notification",
            ),
            (
                "follows_spies",
                "Stalking behavior - document incidents and consider technology safety measures",
            ),
        ]
        .into_iter()
        .filter(|(item, _)| is_yes(item))
        .map(|(_, label)| label)
        .collect();

        let (risk_level, stage, description, interpretation, immediate_actions): (
            _,
            _,
            _,
            _,
            &'static [&'static str],
        ) = if weighted_score <= 7.0 {
            (
                "variable",
                "Variable Danger",
                "Low to moderate risk",
                format!(
                    "Danger Assessment score of {weighted_score} indicates variable danger level. \
                     While the immediate risk may not be extreme, safety planning is still \
                     important. Monitor for changes and connect with domestic violence resources."
                ),
                &[
                    "Create basic safety plan",
                    "Connect with domestic violence resources",
                    "Document any future incidents",
                    "Monitor for changes in behavior or risk factors",
                ],
            )
        } else if weighted_score <= 13.0 {
            (
                "increased",
                "Increased Danger",
                "Moderate to high risk",
                format!(
                    "Danger Assessment score of {weighted_score} indicates increased danger level. \
                     There is elevated risk of intimate partner homicide. Enhanced safety planning \
                     and professional intervention are strongly recommended."
                ),
                &[
                    "Develop comprehensive safety plan immediately",
                    "Contact domestic violence advocate",
                    "Prepare emergency bag",
                    "Consider legal protection options",
                    "Inform trusted contacts about situation",
                ],
            )
        } else {
            (
                "extreme",
                "Extreme Danger",
                "High to extreme risk",
                format!(
                    "Danger Assessment score of {weighted_score} indicates extreme danger level. \
                     There is severe and immediate risk of intimate partner homicide. Emergency \
                     safety planning, law enforcement notification and a coordinated high-risk \
                     response may be necessary."
                ),
                &[
                    "Consider immediate safety measures (shelter, relocation)",
                    "Contact law enforcement if in immediate danger",
                    "Activate emergency safety plan",
                    "Obtain emergency protection order if possible",
                    "Coordinate with high-risk domestic violence team",
                ],
            )
        };

        let details = DangerDetails {
            risk_level,
            weighted_score,
            simple_score: positive.len(),
            key_risk_factors,
            high_risk_factors,
            protective_factors,
            immediate_actions,
            specific_recommendations,
        };

        Ok(
            CalculationResult::new(weighted_score, "danger score", interpretation, stage, description)
                .with_details(details),
        )
    }
}
