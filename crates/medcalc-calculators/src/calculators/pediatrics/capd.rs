use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// Cornell Assessment of Pediatric Delirium (CAPD).
///
/// Eight observed behaviors scored 0–4 each; a total of 9 or more screens
/// positive for delirium.
pub struct Capd;

pub const DELIRIUM_THRESHOLD: u8 = 9;
const MAX_SCORE: u8 = 32;

const DOMAINS: [(&str, &str); 8] = [
    ("eye_contact", "Makes eye contact with caregiver"),
    ("purposeful_actions", "Actions are purposeful"),
    ("aware_surroundings", "Aware of surroundings"),
    ("communicates_needs", "Communicates needs and wants"),
    ("restless", "Restless"),
    ("inconsolable", "Inconsolable"),
    ("underactive", "Underactive (very little movement while awake)"),
    ("slow_response", "Takes long time to respond to interactions"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CapdInput {
    pub eye_contact: u8,
    pub purposeful_actions: u8,
    pub aware_surroundings: u8,
    pub communicates_needs: u8,
    pub restless: u8,
    pub inconsolable: u8,
    pub underactive: u8,
    pub slow_response: u8,
    pub patient_age: u8,
}

impl CapdInput {
    fn scores(&self) -> [u8; 8] {
        [
            self.eye_contact,
            self.purposeful_actions,
            self.aware_surroundings,
            self.communicates_needs,
            self.restless,
            self.inconsolable,
            self.underactive,
            self.slow_response,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainScore {
    pub domain: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub severity: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeGroup {
    pub group: &'static str,
    pub age_range: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Management {
    pub immediate_actions: &'static [&'static str],
    pub ongoing_monitoring: &'static [&'static str],
    pub family_involvement: &'static [&'static str],
    pub reassessment_timing: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapdOutcome {
    pub capd_positive: bool,
    pub total_score: u8,
    pub max_possible_score: u8,
    pub delirium_threshold: u8,
    pub severity: &'static str,
    pub domain_scores: Vec<DomainScore>,
    pub age_group: AgeGroup,
    pub management_recommendations: Management,
    pub screening_sensitivity: &'static str,
}

fn severity(score: u8) -> &'static str {
    match score {
        0 => "Normal",
        1 => "Mild",
        2 => "Moderate",
        3 => "Severe",
        _ => "Very Severe",
    }
}

fn age_group(age: u8) -> AgeGroup {
    let (group, age_range) = match age {
        0 => ("Infant", "0-12 months"),
        1..=2 => ("Toddler", "1-3 years"),
        3..=5 => ("Preschool", "3-6 years"),
        6..=12 => ("School Age", "6-13 years"),
        _ => ("Adolescent", "13-21 years"),
    };
    AgeGroup { group, age_range }
}

impl Calculator for Capd {
    type Input = CapdInput;
    type Output = CalculationResult<CapdOutcome>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            let mut parameters: Vec<Parameter> = DOMAINS
                .iter()
                .map(|(name, description)| Parameter::integer(name, description, 0, 4))
                .collect();
            parameters.push(Parameter::integer("patient_age", "Patient age", 0, 21).unit("years"));

            ScoreMetadata::new(
                "capd",
                "Cornell Assessment of Pediatric Delirium (CAPD)",
                Specialty::Pediatrics,
            )
            .description(
                "Screens for delirium in critically ill children from eight nurse-observed \
                 behaviors.",
            )
            .parameters(parameters)
            .result("assessment", "assessment")
        });
        &METADATA
    }

    fn calculate(&self, input: CapdInput) -> Result<Self::Output, CalculatorError> {
        let scores = input.scores();
        let total: u8 = scores.iter().sum();
        let positive = total >= DELIRIUM_THRESHOLD;

        let (stage, description, severity_label, interpretation) = if !positive {
            (
                "CAPD Negative",
                "No delirium detected",
                "none",
                format!(
                    "Patient does not meet CAPD criteria for delirium with a score of \
                     {total}/{MAX_SCORE} (below threshold of {DELIRIUM_THRESHOLD}). Continue \
                     routine monitoring as delirium can fluctuate or develop suddenly."
                ),
            )
        } else if total >= 20 {
            (
                "CAPD Positive",
                "Delirium present",
                "severe",
                format!(
                    "Patient meets CAPD criteria for delirium with a high score of \
                     {total}/{MAX_SCORE}, suggesting severe delirium symptoms. Immediate \
                     comprehensive evaluation and intervention are required."
                ),
            )
        } else if total >= 15 {
            (
                "CAPD Positive",
                "Delirium present",
                "moderate",
                format!(
                    "Patient meets CAPD criteria for delirium with a score of {total}/{MAX_SCORE}, \
                     indicating moderate delirium symptoms. Prompt evaluation and management are \
                     recommended."
                ),
            )
        } else {
            (
                "CAPD Positive",
                "Delirium present",
                "mild",
                format!(
                    "Patient meets CAPD criteria for delirium with a score of {total}/{MAX_SCORE}, \
                     suggesting mild delirium symptoms. Early intervention may prevent \
                     progression."
                ),
            )
        };

        let management = if positive {
            Management {
                immediate_actions: &[
                    "Implement pediatric delirium management protocol",
                    "Evaluate for underlying causes (infection, metabolic disturbances, \
                     medications)",
                    "Review and optimize all medications for deliriogenic effects",
                    "Ensure adequate pain control without oversedation",
                ],
                ongoing_monitoring: &[
                    "Continue CAPD assessments every nursing shift",
                    "Assess response to interventions and adjust treatment plan",
                ],
                family_involvement: &[
                    "Educate family about pediatric delirium and management strategies",
                    "Encourage family presence and participation in care",
                ],
                reassessment_timing: "Every nursing shift and with any significant clinical \
                                      changes",
            }
        } else {
            Management {
                immediate_actions: &[
                    "Continue current care plan with delirium prevention focus",
                    "Maintain optimal environmental conditions",
                ],
                ongoing_monitoring: &[
                    "Continue routine CAPD screening every shift",
                    "Monitor for risk factors that could precipitate delirium",
                ],
                family_involvement: &[
                    "Continue family-centered care practices",
                    "Educate about delirium risk factors and prevention",
                ],
                reassessment_timing: "Every nursing shift as per pediatric protocol",
            }
        };

        let age_group = age_group(input.patient_age);
        let outcome = CapdOutcome {
            capd_positive: positive,
            total_score: total,
            max_possible_score: MAX_SCORE,
            delirium_threshold: DELIRIUM_THRESHOLD,
            severity: severity_label,
            domain_scores: DOMAINS
                .iter()
                .zip(scores)
                .map(|((domain, description), score)| DomainScore {
                    domain: *domain,
                    description: *description,
                    score,
                    severity: severity(score),
                })
                .collect(),
            screening_sensitivity: if age_group.group == "Adolescent" {
                "50% (consider additional assessment tools in adolescents)"
            } else {
                "94.1%"
            },
            age_group,
            management_recommendations: management,
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
