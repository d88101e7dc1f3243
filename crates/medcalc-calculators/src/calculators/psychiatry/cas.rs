use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Coronavirus Anxiety Scale (CAS): five somatic anxiety items scored 0–4
/// over the last two weeks.
pub struct CasScore;

pub const DYSFUNCTIONAL_THRESHOLD: u8 = 9;
const MAX_SCORE: u8 = 20;

const ITEMS: [(&str, &str); 5] = [
    (
        "dizzy_news",
        "Dizzy, lightheaded, or faint when reading or listening to coronavirus news",
    ),
    (
        "sleep_problems",
        "Trouble falling or staying asleep because of thinking about the coronavirus",
    ),
    (
        "paralyzed_frozen",
        "Paralyzed or frozen when exposed to information about the coronavirus",
    ),
    (
        "appetite_loss",
        "Lost interest in eating when exposed to information about the coronavirus",
    ),
    (
        "nausea_stomach",
        "Nauseous or stomach problems when exposed to information about the coronavirus",
    ),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CasInput {
    pub dizzy_news: u8,
    pub sleep_problems: u8,
    pub paralyzed_frozen: u8,
    pub appetite_loss: u8,
    pub nausea_stomach: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemScore {
    pub item: &'static str,
    pub score: u8,
    pub response: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CasRecommendations {
    pub immediate_actions: Vec<&'static str>,
    pub therapeutic_interventions: &'static [&'static str],
    pub follow_up: &'static [&'static str],
    pub self_care_strategies: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CasDetails {
    pub dysfunctional_anxiety: bool,
    pub severity_level: &'static str,
    pub item_scores: Vec<ItemScore>,
    pub clinical_recommendations: CasRecommendations,
}

fn response(score: u8) -> &'static str {
    match score {
        0 => "Not at all",
        1 => "Rare, less than a day or two",
        2 => "Several days",
        3 => "More than 7 days",
        _ => "Nearly every day over the last 2 weeks",
    }
}

impl Calculator for CasScore {
    type Input = CasInput;
    type Output = CalculationResult<u8, CasDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("cas", "Coronavirus Anxiety Scale (CAS)", Specialty::Psychiatry)
                .description(
                    "Screens for dysfunctional anxiety associated with the coronavirus crisis \
                     from five physiological symptoms.",
                )
                .parameters(
                    ITEMS
                        .iter()
                        .map(|(name, description)| Parameter::integer(name, description, 0, 4))
                        .collect(),
                )
                .result("CAS score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: CasInput) -> Result<Self::Output, CalculatorError> {
        let scores = [
            input.dizzy_news,
            input.sleep_problems,
            input.paralyzed_frozen,
            input.appetite_loss,
            input.nausea_stomach,
        ];
        let total: u8 = scores.iter().sum();
        let dysfunctional = total >= DYSFUNCTIONAL_THRESHOLD;

        let (stage, description, severity, summary) = if !dysfunctional {
            (
                "No Dysfunctional Anxiety",
                "Normal coronavirus-related concerns",
                "none",
                "is below the threshold of 9 for dysfunctional anxiety. Individual may experience \
                 normal concerns about COVID-19 but these do not significantly impair \
                 functioning.",
            )
        } else if total >= 16 {
            (
                "Dysfunctional Anxiety",
                "Clinically significant coronavirus-related anxiety",
                "severe",
                "indicates severe dysfunctional coronavirus-related anxiety. Comprehensive mental \
                 health evaluation and immediate intervention recommended.",
            )
        } else if total >= 12 {
            (
                "Dysfunctional Anxiety",
                "Clinically significant coronavirus-related anxiety",
                "moderate",
                "indicates moderate dysfunctional coronavirus-related anxiety. Mental health \
                 evaluation and therapeutic intervention recommended.",
            )
        } else {
            (
                "Dysfunctional Anxiety",
                "Clinically significant coronavirus-related anxiety",
                "mild",
                "indicates mild dysfunctional coronavirus-related anxiety. Monitoring and \
                 supportive interventions recommended.",
            )
        };

        let (immediate, therapeutic, follow_up): (
            &[&'static str],
            &'static [&'static str],
            &'static [&'static str],
        ) = match severity {
            "severe" => (
                &[
                    "Comprehensive mental health evaluation recommended",
                    "Assess for risk of self-harm or suicide",
                    "Evaluate need for crisis intervention services",
                ],
                &[
                    "Cognitive-behavioral therapy (CBT) for anxiety management",
                    "Exposure therapy for coronavirus-related avoidance",
                    "Consider pharmacological intervention consultation",
                ],
                &[
                    "Weekly clinical monitoring initially",
                    "Reassess CAS score in 2-4 weeks",
                ],
            ),
            "moderate" => (
                &[
                    "Mental health evaluation recommended",
                    "Screen for comorbid mental health conditions",
                ],
                &[
                    "Cognitive-behavioral therapy for anxiety",
                    "Mindfulness-based interventions",
                    "Stress management techniques",
                ],
                &["Bi-weekly monitoring recommended", "Reassess in 4-6 weeks"],
            ),
            "mild" => (
                &[
                    "Supportive counseling recommended",
                    "Assess coping mechanisms and support systems",
                ],
                &[
                    "Brief supportive therapy",
                    "Psychoeducation about anxiety management",
                ],
                &[],
            ),
            _ => (
                &[
                    "Continue current coping strategies",
                    "Maintain healthy lifestyle habits",
                ],
                &["Preventive psychoeducation if desired"],
                &["Routine monitoring as needed", "Re-screen if circumstances change"],
            ),
        };

        let mut recommendations = CasRecommendations {
            immediate_actions: immediate.to_vec(),
            therapeutic_interventions: therapeutic,
            follow_up,
            self_care_strategies: vec![
                "Limit excessive coronavirus news consumption",
                "Maintain regular sleep and exercise routines",
                "Stay connected with social support networks",
            ],
        };
        if input.sleep_problems >= 3 {
            recommendations
                .self_care_strategies
                .push("Implement sleep hygiene practices");
        }
        if input.nausea_stomach >= 3 {
            recommendations
                .immediate_actions
                .push("Consider medical evaluation for physical symptoms");
        }

        let details = CasDetails {
            dysfunctional_anxiety: dysfunctional,
            severity_level: severity,
            item_scores: ITEMS
                .iter()
                .zip(scores)
                .map(|((item, _), score)| ItemScore {
                    item: *item,
                    score,
                    response: response(score),
                })
                .collect(),
            clinical_recommendations: recommendations,
        };

        Ok(CalculationResult::new(
            total,
            "points",
            format!("CAS score of {total}/{MAX_SCORE} {summary}"),
            stage,
            description,
        )
        .with_details(details))
    }
}
