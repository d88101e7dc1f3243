use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Current Opioid Misuse Measure (COMM), 17 items answered 0 (never) to 4
/// (very often) about the past 30 days.
pub struct Comm;

pub const MISUSE_THRESHOLD: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Behavioral,
    Psychological,
    Functional,
    HealthcareSeeking,
    SubstanceConcerns,
}

struct Question {
    name: &'static str,
    description: &'static str,
    category: Category,
}

const fn question(name: &'static str, description: &'static str, category: Category) -> Question {
    Question {
        name,
        description,
        category,
    }
}

const QUESTIONS: [Question; 17] = [
    question(
        "thinking_clearly",
        "Trouble thinking clearly or memory problems",
        Category::Psychological,
    ),
    question(
        "not_completing_tasks",
        "People complain you are not completing necessary tasks",
        Category::Functional,
    ),
    question(
        "relief_other_sources",
        "Had to go to someone other than your prescriber for pain relief",
        Category::Behavioral,
    ),
    question(
        "taking_differently",
        "Taken medications differently from how they are prescribed",
        Category::Behavioral,
    ),
    question(
        "thinking_hurting_self",
        "Seriously thought about hurting yourself",
        Category::Psychological,
    ),
    question(
        "time_thinking_medications",
        "Time spent thinking about opioid medications",
        Category::Psychological,
    ),
    question(
        "being_in_arguments",
        "Been in an argument",
        Category::Psychological,
    ),
    question(
        "trouble_controlling_anger",
        "Trouble controlling anger",
        Category::Psychological,
    ),
    question(
        "need_medications_from_others",
        "Needed to take pain medications belonging to someone else",
        Category::Behavioral,
    ),
    question(
        "worried_handling_medications",
        "Been worried about how you are handling your medications",
        Category::SubstanceConcerns,
    ),
    question(
        "others_worried_handling",
        "Others worried about how you are handling your medications",
        Category::SubstanceConcerns,
    ),
    question(
        "emergency_clinic_visits",
        "Had to make an emergency phone call or show up at the clinic without an appointment",
        Category::HealthcareSeeking,
    ),
    question(
        "getting_angry_with_people",
        "Gotten angry with people",
        Category::Psychological,
    ),
    question(
        "taking_more_than_prescribed",
        "Had to take more of your medication than prescribed",
        Category::Behavioral,
    ),
    question(
        "borrowing_pain_medication",
        "Borrowed pain medication from someone else",
        Category::Behavioral,
    ),
    question(
        "using_for_non_pain_symptoms",
        "Used pain medicine for symptoms other than pain",
        Category::SubstanceConcerns,
    ),
    question(
        "visiting_emergency_room",
        "Had to visit the emergency room",
        Category::HealthcareSeeking,
    ),
];

const HIGH_RISK_QUESTIONS: [&str; 6] = [
    "taking_more_than_prescribed",
    "borrowing_pain_medication",
    "need_medications_from_others",
    "relief_other_sources",
    "using_for_non_pain_symptoms",
    "thinking_hurting_self",
];

#[derive(Debug, Clone, Deserialize)]
pub struct CommInput {
    pub thinking_clearly: u8,
    pub not_completing_tasks: u8,
    pub relief_other_sources: u8,
    pub taking_differently: u8,
    pub thinking_hurting_self: u8,
    pub time_thinking_medications: u8,
    pub being_in_arguments: u8,
    pub trouble_controlling_anger: u8,
    pub need_medications_from_others: u8,
    pub worried_handling_medications: u8,
    pub others_worried_handling: u8,
    pub emergency_clinic_visits: u8,
    pub getting_angry_with_people: u8,
    pub taking_more_than_prescribed: u8,
    pub borrowing_pain_medication: u8,
    pub using_for_non_pain_symptoms: u8,
    pub visiting_emergency_room: u8,
}

impl CommInput {
    /// Responses in `QUESTIONS` order.
    fn responses(&self) -> [u8; 17] {
        [
            self.thinking_clearly,
            self.not_completing_tasks,
            self.relief_other_sources,
            self.taking_differently,
            self.thinking_hurting_self,
            self.time_thinking_medications,
            self.being_in_arguments,
            self.trouble_controlling_anger,
            self.need_medications_from_others,
            self.worried_handling_medications,
            self.others_worried_handling,
            self.emergency_clinic_visits,
            self.getting_angry_with_people,
            self.taking_more_than_prescribed,
            self.borrowing_pain_medication,
            self.using_for_non_pain_symptoms,
            self.visiting_emergency_room,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub score: u32,
    pub max_possible: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScores {
    pub behavioral: CategoryScore,
    pub psychological: CategoryScore,
    pub functional: CategoryScore,
    pub healthcare_seeking: CategoryScore,
    pub substance_concerns: CategoryScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommDetails {
    pub misuse_risk: &'static str,
    pub severity_pattern: &'static str,
    pub concerning_responses: usize,
    pub category_scores: CategoryScores,
    pub risk_factors: Vec<String>,
    pub red_flags: Vec<&'static str>,
    pub clinical_recommendations: Vec<&'static str>,
    pub monitoring_frequency: &'static str,
}

fn response_label(score: u8) -> &'static str {
    match score {
        0 => "never",
        1 => "seldom",
        2 => "sometimes",
        3 => "often",
        _ => "very often",
    }
}

fn severity_pattern(responses: &[u8]) -> &'static str {
    let high = responses.iter().filter(|r| **r >= 3).count();
    let moderate = responses.iter().filter(|r| **r == 2).count();
    if high >= 5 {
        "Severe pattern - Multiple frequent concerning behaviors"
    } else if high >= 3 {
        "Moderate-severe pattern - Several frequent concerning behaviors"
    } else if high >= 1 || moderate >= 5 {
        "Moderate pattern - Some concerning behaviors"
    } else if moderate >= 2 {
        "Mild pattern - Occasional concerning behaviors"
    } else {
        "Minimal pattern - Few concerning behaviors"
    }
}

fn category_score(responses: &[u8], category: Category) -> CategoryScore {
    let (score, count) = QUESTIONS
        .iter()
        .zip(responses)
        .filter(|(q, _)| q.category == category)
        .fold((0u32, 0u32), |(sum, n), (_, r)| (sum + u32::from(*r), n + 1));
    let max_possible = count * 4;
    CategoryScore {
        score,
        max_possible,
        percentage: round_to(f64::from(score) / f64::from(max_possible) * 100.0, 1),
    }
}

impl Calculator for Comm {
    type Input = CommInput;
    type Output = CalculationResult<u32, CommDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "comm",
                "Current Opioid Misuse Measure (COMM)",
                Specialty::Psychiatry,
            )
            .description(
                "Identifies chronic pain patients on opioid therapy who may be misusing their \
                 medications.",
            )
            .parameters(
                QUESTIONS
                    .iter()
                    .map(|q| Parameter::integer(q.name, q.description, 0, 4))
                    .collect(),
            )
            .result("COMM score", "points")
        });
        &METADATA
    }

    fn calculate(&self, input: CommInput) -> Result<Self::Output, CalculatorError> {
        let responses = input.responses();
        let total: u32 = responses.iter().map(|r| u32::from(*r)).sum();
        let response_for = |name: &str| -> u8 {
            QUESTIONS
                .iter()
                .position(|q| q.name == name)
                .map_or(0, |i| responses[i])
        };

        let pattern = severity_pattern(&responses);
        let concerning = responses.iter().filter(|r| **r >= 3).count();

        let mut risk_factors: Vec<String> = HIGH_RISK_QUESTIONS
            .iter()
            .filter(|name| response_for(**name) >= 2)
            .map(|name| {
                format!(
                    "Reports {} {}",
                    response_label(response_for(*name)),
                    name.replace('_', " ")
                )
            })
            .collect();
        if response_for("thinking_hurting_self") >= 1 {
            risk_factors.push("Endorses thoughts of self-harm".to_string());
        }
        if response_for("emergency_clinic_visits") >= 2 || response_for("visiting_emergency_room") >= 2 {
            risk_factors.push("Frequent emergency healthcare utilization".to_string());
        }
        if response_for("not_completing_tasks") >= 2 {
            risk_factors.push("Functional impairment affecting task completion".to_string());
        }

        let mut red_flags = Vec::new();
        for (name, cutoff, flag) in [
            ("thinking_hurting_self", 2, "Significant self-harm ideation"),
            ("taking_more_than_prescribed", 3, "Frequent dose escalation beyond prescription"),
            ("borrowing_pain_medication", 2, "Obtaining medication from unauthorized sources"),
            ("using_for_non_pain_symptoms", 2, "Using opioids for non-pain indications"),
            ("time_thinking_medications", 3, "Preoccupation with opioid medications"),
        ] {
            if response_for(name) >= cutoff {
                red_flags.push(flag);
            }
        }

        let high_risk = total >= MISUSE_THRESHOLD;
        let (stage, description, misuse_risk, interpretation) = if high_risk {
            (
                "High Risk",
                "Possible misuse or abuse of medications",
                "Elevated risk for opioid misuse",
                format!(
                    "COMM total score of {total} meets or exceeds the threshold (≥9) indicating \
                     elevated risk for opioid misuse. Patient demonstrates {} with {concerning} \
                     concerning responses. Further evaluation and enhanced monitoring are \
                     recommended.",
                    pattern.to_lowercase()
                ),
            )
        } else {
            (
                "Low Risk",
                "Not misusing or abusing medications",
                "Low risk for opioid misuse",
                format!(
                    "COMM total score of {total} is below the threshold (≥9) for opioid misuse \
                     risk. Patient demonstrates {}. Continue standard monitoring and pain \
                     management protocols with routine reassessment.",
                    pattern.to_lowercase()
                ),
            )
        };

        let mut recommendations: Vec<&'static str> = if high_risk {
            vec![
                "Enhanced monitoring and more frequent visits",
                "Consider urine drug testing and pill counts",
                "Evaluate for substance use disorder",
                "Review and potentially modify opioid regimen",
            ]
        } else {
            vec![
                "Continue current pain management approach",
                "Routine monitoring with periodic COMM reassessment",
                "Standard opioid safety education and counseling",
            ]
        };
        if concerning >= 5 {
            recommendations
                .push("Consider intensive intervention due to multiple concerning behaviors");
        }

        let monitoring_frequency = match total {
            t if t >= 15 => "Monthly",
            t if t >= MISUSE_THRESHOLD => "Every 1-2 months",
            _ => "Every 3-6 months or as clinically indicated",
        };

        let details = CommDetails {
            misuse_risk,
            severity_pattern: pattern,
            concerning_responses: concerning,
            category_scores: CategoryScores {
                behavioral: category_score(&responses, Category::Behavioral),
                psychological: category_score(&responses, Category::Psychological),
                functional: category_score(&responses, Category::Functional),
                healthcare_seeking: category_score(&responses, Category::HealthcareSeeking),
                substance_concerns: category_score(&responses, Category::SubstanceConcerns),
            },
            risk_factors,
            red_flags,
            clinical_recommendations: recommendations,
            monitoring_frequency,
        };

        Ok(
            CalculationResult::new(total, "points", interpretation, stage, description)
                .with_details(details),
        )
    }
}
