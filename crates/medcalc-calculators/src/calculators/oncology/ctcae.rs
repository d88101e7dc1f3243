use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// Common Terminology Criteria for Adverse Events (CTCAE v5.0) grading of
/// hematologic adverse events.
///
/// Only the lab value for the selected event type is required; the rest
/// are ignored.
pub struct Ctcae;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdverseEvent {
    Anemia,
    Neutropenia,
    Thrombocytopenia,
    FebrileNeutropenia,
    Leukocytosis,
    Lymphopenia,
}

impl AdverseEvent {
    const OPTIONS: [&'static str; 6] = [
        "anemia",
        "neutropenia",
        "thrombocytopenia",
        "febrile_neutropenia",
        "leukocytosis",
        "lymphopenia",
    ];

    fn name(self) -> &'static str {
        match self {
            AdverseEvent::Anemia => "anemia",
            AdverseEvent::Neutropenia => "neutropenia",
            AdverseEvent::Thrombocytopenia => "thrombocytopenia",
            AdverseEvent::FebrileNeutropenia => "febrile neutropenia",
            AdverseEvent::Leukocytosis => "leukocytosis",
            AdverseEvent::Lymphopenia => "lymphopenia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtcaeInput {
    pub adverse_event_type: AdverseEvent,
    pub patient_sex: Sex,
    #[serde(default)]
    pub hemoglobin: Option<f64>,
    #[serde(default)]
    pub neutrophil_count: Option<f64>,
    #[serde(default)]
    pub platelet_count: Option<f64>,
    #[serde(default)]
    pub wbc_count: Option<f64>,
    #[serde(default)]
    pub lymphocyte_count: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub transfusion_indicated: Option<YesNo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CtcaeClinicalDetails {
    pub adverse_event_type: &'static str,
    pub value_unit: &'static str,
    pub clinical_significance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CtcaeDetails {
    pub clinical_details: CtcaeClinicalDetails,
}

fn require(value: Option<f64>, name: &str, event: AdverseEvent) -> Result<f64, CalculatorError> {
    value.ok_or_else(|| {
        CalculatorError::invalid(format!("{name} is required for {} grading", event.name()))
    })
}

/// Grade for a count where lower is worse; `cutoffs` are the lower bounds
/// of grades 0, 1, 2 and 3.
fn grade_low_count(value: f64, cutoffs: [f64; 4]) -> u8 {
    match cutoffs.iter().position(|cutoff| value >= *cutoff) {
        Some(index) => index as u8,
        None => 4,
    }
}

fn grade_anemia(hemoglobin: f64, sex: Sex, transfusion: Option<YesNo>) -> u8 {
    let lower_normal = match sex {
        Sex::Male => 14.0,
        Sex::Female => 12.0,
    };
    if hemoglobin >= lower_normal {
        0
    } else if hemoglobin >= 10.0 {
        1
    } else if hemoglobin >= 8.0 {
        2
    } else if hemoglobin >= 6.5 {
        // Grade 3 needs transfusion to be indicated.
        if transfusion == Some(YesNo::Yes) { 3 } else { 2 }
    } else {
        4
    }
}

fn grade_leukocytosis(wbc: f64) -> u8 {
    if wbc <= 11_000.0 {
        0
    } else if wbc <= 20_000.0 {
        1
    } else if wbc <= 50_000.0 {
        2
    } else if wbc <= 100_000.0 {
        3
    } else {
        4
    }
}

fn grade_febrile_neutropenia(neutrophils: f64, temperature: f64) -> u8 {
    if neutrophils < 1000.0 && temperature >= 38.0 { 3 } else { 0 }
}

impl Calculator for Ctcae {
    type Input = CtcaeInput;
    type Output = CalculationResult<u8, CtcaeDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "ctcae",
                "Common Terminology Criteria for Adverse Events (CTCAE)",
                Specialty::Oncology,
            )
            .version("5.0")
            .description(
                "Grades hematologic adverse events from laboratory values using CTCAE v5.0 \
                 criteria.",
            )
            .parameters(vec![
                Parameter::choice(
                    "adverse_event_type",
                    "Adverse event to grade",
                    &AdverseEvent::OPTIONS,
                ),
                Parameter::choice("patient_sex", "Patient sex", &["male", "female"]),
                Parameter::number("hemoglobin", "Hemoglobin (anemia)", 0.0, 25.0)
                    .unit("g/dL")
                    .optional(),
                Parameter::number(
                    "neutrophil_count",
                    "Absolute neutrophil count (neutropenia, febrile neutropenia)",
                    0.0,
                    50_000.0,
                )
                .unit("cells/mm³")
                .optional(),
                Parameter::number(
                    "platelet_count",
                    "Platelet count (thrombocytopenia)",
                    0.0,
                    2_000_000.0,
                )
                .unit("cells/mm³")
                .optional(),
                Parameter::number("wbc_count", "White blood cell count (leukocytosis)", 0.0, 500_000.0)
                    .unit("cells/mm³")
                    .optional(),
                Parameter::number(
                    "lymphocyte_count",
                    "Absolute lymphocyte count (lymphopenia)",
                    0.0,
                    50_000.0,
                )
                .unit("cells/mm³")
                .optional(),
                Parameter::number("temperature", "Temperature (febrile neutropenia)", 30.0, 45.0)
                    .unit("°C")
                    .optional(),
                Parameter::yes_no(
                    "transfusion_indicated",
                    "Transfusion indicated (anemia grade 3)",
                )
                .optional(),
            ])
            .result("CTCAE grade", "grade")
        });
        &METADATA
    }

    fn calculate(&self, input: CtcaeInput) -> Result<Self::Output, CalculatorError> {
        let event = input.adverse_event_type;
        let (grade, value, unit) = match event {
            AdverseEvent::Anemia => {
                let hb = require(input.hemoglobin, "hemoglobin", event)?;
                (
                    grade_anemia(hb, input.patient_sex, input.transfusion_indicated),
                    Some(hb),
                    "g/dL",
                )
            }
            AdverseEvent::Neutropenia => {
                let anc = require(input.neutrophil_count, "neutrophil_count", event)?;
                (
                    grade_low_count(anc, [1500.0, 1000.0, 500.0, 200.0]),
                    Some(anc),
                    "cells/mm³",
                )
            }
            AdverseEvent::Thrombocytopenia => {
                let plt = require(input.platelet_count, "platelet_count", event)?;
                (
                    grade_low_count(plt, [150_000.0, 75_000.0, 50_000.0, 25_000.0]),
                    Some(plt),
                    "cells/mm³",
                )
            }
            AdverseEvent::Lymphopenia => {
                let alc = require(input.lymphocyte_count, "lymphocyte_count", event)?;
                (
                    grade_low_count(alc, [1000.0, 800.0, 500.0, 200.0]),
                    Some(alc),
                    "cells/mm³",
                )
            }
            AdverseEvent::Leukocytosis => {
                let wbc = require(input.wbc_count, "wbc_count", event)?;
                (grade_leukocytosis(wbc), Some(wbc), "cells/mm³")
            }
            AdverseEvent::FebrileNeutropenia => {
                let anc = require(input.neutrophil_count, "neutrophil_count", event)?;
                let temperature = require(input.temperature, "temperature", event)?;
                (grade_febrile_neutropenia(anc, temperature), None, "composite")
            }
        };

        let (description, significance) = match grade {
            0 => (
                "Within normal limits",
                "No intervention required; continue routine monitoring",
            ),
            1 => (
                "Mild adverse event",
                "Asymptomatic or mild symptoms; clinical observation only; intervention not \
                 indicated",
            ),
            2 => (
                "Moderate adverse event",
                "Minimal intervention indicated; may limit age-appropriate activities of daily \
                 living",
            ),
            3 => (
                "Severe adverse event",
                "Medically significant; hospitalization or prolongation may be indicated; \
                 disabling",
            ),
            _ => (
                "Life-threatening adverse event",
                "Life-threatening consequences; urgent intervention indicated",
            ),
        };

        let interpretation = match (grade, value) {
            (0, _) => format!(
                "No {} detected. Laboratory values within normal limits.",
                event.name()
            ),
            (_, Some(value)) => format!(
                "Grade {grade} {} detected with {value} {unit}. {significance}.",
                event.name()
            ),
            (_, None) => format!("Grade {grade} {} detected. {significance}.", event.name()),
        };

        Ok(CalculationResult::new(
            grade,
            "grade",
            interpretation,
            format!("Grade {grade}"),
            description,
        )
        .with_details(CtcaeDetails {
            clinical_details: CtcaeClinicalDetails {
                adverse_event_type: event.name(),
                value_unit: unit,
                clinical_significance: significance,
            },
        }))
    }
}
