use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// Cytokine release syndrome (CRS) grade after immune effector cell
/// therapy.
///
/// The grade is the worst of the hypotension, oxygen and organ toxicity
/// components, never below 1.
pub struct CrsGrading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hypotension {
    None,
    ResponsiveToFluids,
    LowDoseSinglePressor,
    HighDoseMultiplePressors,
}

impl Hypotension {
    const OPTIONS: [&'static str; 4] = [
        "none",
        "responsive_to_fluids",
        "low_dose_single_pressor",
        "high_dose_multiple_pressors",
    ];

    fn grade(self) -> u8 {
        match self {
            Hypotension::None => 0,
            Hypotension::ResponsiveToFluids | Hypotension::LowDoseSinglePressor => 2,
            Hypotension::HighDoseMultiplePressors => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OxygenRequirement {
    None,
    LowFlowOxygen,
    #[serde(rename = "high_flow_oxygen_40_plus")]
    HighFlowOxygen40Plus,
    VentilatorRequired,
}

impl OxygenRequirement {
    const OPTIONS: [&'static str; 4] = [
        "none",
        "low_flow_oxygen",
        "high_flow_oxygen_40_plus",
        "ventilator_required",
    ];

    fn grade(self) -> u8 {
        match self {
            OxygenRequirement::None => 0,
            OxygenRequirement::LowFlowOxygen => 2,
            OxygenRequirement::HighFlowOxygen40Plus => 3,
            OxygenRequirement::VentilatorRequired => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comorbidities {
    Yes,
    No,
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrsInput {
    pub fever_present: YesNo,
    pub hypotension_status: Hypotension,
    pub oxygen_requirement: OxygenRequirement,
    pub organ_toxicity_grade: u8,
    #[serde(default)]
    pub patient_age: Option<u8>,
    #[serde(default)]
    pub comorbidities_present: Option<Comorbidities>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrsDetails {
    pub treatment_urgency: &'static str,
    pub care_setting: &'static str,
    pub monitoring_frequency: &'static str,
    pub primary_interventions: &'static [&'static str],
    pub additional_considerations: Vec<&'static str>,
}

fn organ_grade(toxicity: u8) -> u8 {
    match toxicity {
        3 | 4 => 3,
        2 => 2,
        _ => 0,
    }
}

/// Worst component grade, floored at 1.
pub fn crs_grade(hypotension: Hypotension, oxygen: OxygenRequirement, organ_toxicity: u8) -> u8 {
    hypotension
        .grade()
        .max(oxygen.grade())
        .max(organ_grade(organ_toxicity))
        .max(1)
}

impl Calculator for CrsGrading {
    type Input = CrsInput;
    type Output = CalculationResult<u8, CrsDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new("crs_grading", "Cytokine Release Syndrome (CRS) Grading", Specialty::Oncology)
                .description(
                    "Grades cytokine release syndrome severity after CAR-T or other immune \
                     effector cell therapy to guide tocilizumab and corticosteroid use.",
                )
                .parameters(vec![
                    Parameter::yes_no("fever_present", "Temperature ≥38°C"),
                    Parameter::choice(
                        "hypotension_status",
                        "Hypotension and vasopressor requirement",
                        &Hypotension::OPTIONS,
                    ),
                    Parameter::choice(
                        "oxygen_requirement",
                        "Oxygen support required",
                        &OxygenRequirement::OPTIONS,
                    ),
                    Parameter::integer(
                        "organ_toxicity_grade",
                        "Highest CTCAE grade of organ toxicity",
                        0,
                        4,
                    ),
                    Parameter::integer("patient_age", "Patient age", 0, 120)
                        .unit("years")
                        .optional(),
                    Parameter::choice(
                        "comorbidities_present",
                        "Significant comorbidities",
                        &["yes", "no", "unknown"],
                    )
                    .optional(),
                ])
                .result("CRS grade", "CRS grade")
        });
        &METADATA
    }

    fn calculate(&self, input: CrsInput) -> Result<Self::Output, CalculatorError> {
        let grade = crs_grade(
            input.hypotension_status,
            input.oxygen_requirement,
            input.organ_toxicity_grade,
        );

        let (label, description, urgency, setting, frequency, interventions): (
            _,
            _,
            _,
            _,
            _,
            &'static [&'static str],
        ) = match grade {
            1 => (
                "Grade 1 - Mild",
                "Mild symptoms",
                "Routine - symptomatic care",
                "Inpatient ward with oncology monitoring",
                "Every 4-8 hours",
                &[
                    "Supportive care with symptomatic treatment",
                    "Adequate hydration and fever management",
                    "No specific anti-cytokine therapy required",
                ],
            ),
            2 => (
                "Grade 2 - Moderate",
                "Moderate intervention required",
                "Urgent - close monitoring required",
                "Inpatient ward with enhanced monitoring or step-down unit",
                "Every 2-4 hours",
                &[
                    "Vigilant supportive care with close monitoring",
                    "Fluid management and low-dose vasopressors if needed",
                    "Monitor for progression to higher grades",
                ],
            ),
            3 => (
                "Grade 3 - Severe",
                "Aggressive intervention required",
                "Emergent - immediate intervention needed",
                "Intensive care unit (ICU)",
                "Continuous monitoring in ICU setting",
                &[
                    "Aggressive supportive care, often requiring ICU",
                    "Tocilizumab ± corticosteroids recommended",
                    "High-dose or multiple vasopressors as needed",
                ],
            ),
            _ => (
                "Grade 4 - Life-threatening",
                "Life-threatening symptoms",
                "Critical - life-threatening, immediate ICU care",
                "Intensive care unit (ICU) with advanced life support",
                "Continuous monitoring in ICU setting",
                &[
                    "Intensive care management mandatory",
                    "Immediate tocilizumab and corticosteroids",
                    "Mechanical ventilation and advanced organ support",
                ],
            ),
        };

        let mut additional = Vec::new();
        match input.patient_age {
            Some(age) if age < 18 => additional.push("Pediatric oncology consultation recommended"),
            Some(age) if age > 65 => {
                additional.push("Consider increased monitoring due to advanced age")
            }
            _ => {}
        }
        if input.comorbidities_present == Some(Comorbidities::Yes) {
            if grade >= 2 {
                additional.push("Lower threshold for tocilizumab due to comorbidities");
            }
            additional.push("Coordinate care with relevant specialists");
        }
        if grade >= 2 {
            additional.push("Consider tocilizumab 8 mg/kg IV (max 800 mg)");
        }
        if grade >= 3 {
            additional.push("Consider corticosteroids (methylprednisolone 1-2 mg/kg/day)");
        }

        let mut indicators = Vec::new();
        if input.fever_present.is_yes() {
            indicators.push("fever".to_string());
        }
        if input.hypotension_status != Hypotension::None {
            indicators.push("hypotension".to_string());
        }
        if input.oxygen_requirement != OxygenRequirement::None {
            indicators.push("hypoxia requiring oxygen".to_string());
        }
        if input.organ_toxicity_grade > 0 {
            indicators.push(format!("grade {} organ toxicity", input.organ_toxicity_grade));
        }
        let findings = if indicators.is_empty() {
            "No fever, hypotension, hypoxia or organ toxicity reported.".to_string()
        } else {
            format!("Findings: {}.", indicators.join(", "))
        };
        let interpretation = format!(
            "CRS Grade {grade} ({label}) indicates {}. {findings} Recommended care setting: \
             {setting}; monitoring {}.",
            description.to_lowercase(),
            frequency.to_lowercase(),
        );

        Ok(
            CalculationResult::new(grade, "CRS grade", interpretation, label, description)
                .with_details(CrsDetails {
                    treatment_urgency: urgency,
                    care_setting: setting,
                    monitoring_frequency: frequency,
                    primary_interventions: interventions,
                    additional_considerations: additional,
                }),
        )
    }
}
