use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Diabetes Distress Scale (DDS17). Each item is rated 1–6; the total and
/// the four subscales are item means.
pub struct DiabetesDistressScale;

/// Item names in questionnaire order (item 1 first).
const ITEMS: [(&str, &str); 17] = [
    ("overwhelming_demands", "Feeling overwhelmed by the demands of living with diabetes"),
    ("feeling_discouraged", "Feeling discouraged with my diabetes routine"),
    ("failure_regimen", "Feeling that I am often failing with my diabetes regimen"),
    ("clear_concrete_goals", "Not having clear and concrete goals for my diabetes care"),
    ("not_motivated", "Not feeling motivated to keep up my diabetes self-management"),
    ("angry_frustrated", "Feeling angry, scared or depressed about living with diabetes"),
    ("unsatisfied_care", "Feeling unsatisfied with my diabetes care"),
    ("physician_communication", "Feeling that my doctor doesn't communicate clearly about diabetes"),
    ("physician_doesnt_give_direction", "Feeling that my doctor doesn't give clear enough directions"),
    ("physician_doesnt_take_seriously", "Feeling that my doctor doesn't take my concerns seriously"),
    ("regimen_overwhelming", "Feeling that my diabetes regimen is overwhelming"),
    ("constant_thoughts", "Feeling that diabetes controls my life"),
    ("blood_sugar_checking", "Feeling that I am not testing my blood sugars frequently enough"),
    ("regimen_burden", "Feeling burdened by my diabetes regimen"),
    ("friends_family_nagging", "Feeling that friends or family nag me about my diabetes"),
    ("friends_family_interference", "Feeling that friends or family interfere with my diabetes care"),
    ("friends_family_dont_understand", "Feeling that friends or family don't appreciate how difficult diabetes can be"),
];

/// Subscale key, label and 1-based item numbers.
const SUBSCALES: [(&str, &str, &[usize]); 4] = [
    ("emotional_burden", "Emotional Burden", &[1, 2, 3, 6, 12]),
    ("physician_distress", "Physician Distress", &[7, 8, 9, 10]),
    ("regimen_distress", "Regimen Distress", &[4, 11, 13, 14]),
    ("interpersonal_distress", "Interpersonal Distress", &[5, 15, 16, 17]),
];

#[derive(Debug, Clone, Deserialize)]
pub struct DdsInput {
    pub overwhelming_demands: u8,
    pub feeling_discouraged: u8,
    pub failure_regimen: u8,
    pub clear_concrete_goals: u8,
    pub not_motivated: u8,
    pub angry_frustrated: u8,
    pub unsatisfied_care: u8,
    pub physician_communication: u8,
    pub physician_doesnt_give_direction: u8,
    pub physician_doesnt_take_seriously: u8,
    pub regimen_overwhelming: u8,
    pub constant_thoughts: u8,
    pub blood_sugar_checking: u8,
    pub regimen_burden: u8,
    pub friends_family_nagging: u8,
    pub friends_family_interference: u8,
    pub friends_family_dont_understand: u8,
}

impl DdsInput {
    fn responses(&self) -> [u8; 17] {
        [
            self.overwhelming_demands,
            self.feeling_discouraged,
            self.failure_regimen,
            self.clear_concrete_goals,
            self.not_motivated,
            self.angry_frustrated,
            self.unsatisfied_care,
            self.physician_communication,
            self.physician_doesnt_give_direction,
            self.physician_doesnt_take_seriously,
            self.regimen_overwhelming,
            self.constant_thoughts,
            self.blood_sugar_checking,
            self.regimen_burden,
            self.friends_family_nagging,
            self.friends_family_interference,
            self.friends_family_dont_understand,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscaleScores {
    pub emotional_burden: f64,
    pub physician_distress: f64,
    pub regimen_distress: f64,
    pub interpersonal_distress: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DdsDetails {
    pub total_score: f64,
    pub distress_level: &'static str,
    pub subscale_scores: SubscaleScores,
    pub items_needing_attention: Vec<&'static str>,
    pub recommendations: &'static [&'static str],
}

fn mean(values: impl Iterator<Item = u8>) -> f64 {
    let (sum, count) = values.fold((0u32, 0u32), |(s, c), v| (s + u32::from(v), c + 1));
    f64::from(sum) / f64::from(count.max(1))
}

impl Calculator for DiabetesDistressScale {
    type Input = DdsInput;
    type Output = CalculationResult<f64, DdsDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "diabetes_distress_scale",
                "Diabetes Distress Scale (DDS17)",
                Specialty::Endocrinology,
            )
            .description(
                "Measures diabetes-related emotional distress across emotional burden, \
                 physician, regimen and interpersonal domains.",
            )
            .parameters(
                ITEMS
                    .iter()
                    .map(|(name, text)| Parameter::integer(name, text, 1, 6))
                    .collect(),
            )
            .result("mean item score", "DDS17 Score (1-6 scale)")
        });
        &METADATA
    }

    fn calculate(&self, input: DdsInput) -> Result<Self::Output, CalculatorError> {
        let responses = input.responses();
        let total = mean(responses.iter().copied());
        let subscale = |index: usize| {
            let (_, _, items) = SUBSCALES[index];
            mean(items.iter().map(|item| responses[item - 1]))
        };
        let subscales = [subscale(0), subscale(1), subscale(2), subscale(3)];

        let (distress_level, stage, description, advice, recommendations): (
            _,
            _,
            _,
            _,
            &'static [&'static str],
        ) = if total < 2.0 {
            (
                "little_no_distress",
                "Little or No Distress",
                "Minimal diabetes-related distress",
                "Continue current diabetes management approach with routine monitoring.",
                &[
                    "Continue current diabetes management approach",
                    "Maintain regular follow-up appointments",
                    "Monitor for changes in distress levels over time",
                ],
            )
        } else if total < 3.0 {
            (
                "moderate_distress",
                "Moderate Distress",
                "Moderate diabetes-related distress",
                "Monitor for progression and consider targeted support for identified areas of \
                 concern.",
                &[
                    "Discuss specific sources of diabetes distress with patient",
                    "Develop targeted coping strategies for identified stressors",
                    "Consider diabetes education or support group referral",
                    "Monitor distress levels every 3-6 months",
                ],
            )
        } else {
            (
                "high_distress",
                "High Distress",
                "High diabetes-related distress requiring intervention",
                "This level of distress is clinically significant and warrants targeted \
                 intervention and follow-up.",
                &[
                    "Refer to diabetes educator or certified diabetes care specialist",
                    "Consider mental health referral or diabetes psychologist",
                    "Develop comprehensive diabetes distress intervention plan",
                    "Consider medication review and regimen simplification",
                    "Follow up monthly to quarterly",
                ],
            )
        };

        let high_areas: Vec<&str> = SUBSCALES
            .iter()
            .zip(subscales)
            .filter(|(_, score)| *score >= 3.0)
            .map(|((_, label, _), _)| *label)
            .collect();
        let mut interpretation =
            format!("DDS17 total score of {total:.2} indicates {stage}. {description}.");
        if !high_areas.is_empty() {
            interpretation.push_str(&format!(" Highest distress areas: {}.", high_areas.join(", ")));
        }
        interpretation.push(' ');
        interpretation.push_str(advice);

        let total_score = round_to(total, 2);
        let details = DdsDetails {
            total_score,
            distress_level,
            subscale_scores: SubscaleScores {
                emotional_burden: round_to(subscales[0], 2),
                physician_distress: round_to(subscales[1], 2),
                regimen_distress: round_to(subscales[2], 2),
                interpersonal_distress: round_to(subscales[3], 2),
            },
            items_needing_attention: ITEMS
                .iter()
                .zip(responses)
                .filter(|(_, score)| *score >= 4)
                .map(|((name, _), _)| *name)
                .collect(),
            recommendations,
        };

        Ok(CalculationResult::new(
            total_score,
            "DDS17 Score (1-6 scale)",
            interpretation,
            stage,
            description,
        )
        .with_details(details))
    }
}
