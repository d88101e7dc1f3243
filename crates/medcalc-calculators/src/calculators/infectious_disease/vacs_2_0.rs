use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;
use crate::params::YesNo;

/// Veterans Aging Cohort Study (VACS) 2.0 Index for people with HIV.
///
/// Each biomarker contributes `max(0, value × coefficient + base)`; FIB-4
/// and CKD-EPI eGFR are derived from the raw labs first. The total is
/// clamped to 0–164.
pub struct Vacs20Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Black,
    NonBlack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VacsInput {
    pub age: i32,
    pub sex: Sex,
    pub race: Race,
    pub cd4_count: i32,
    pub hiv_rna_log: f64,
    pub hemoglobin: f64,
    pub platelets: i32,
    pub ast: i32,
    pub alt: i32,
    pub creatinine: f64,
    pub albumin: f64,
    pub wbc_count: f64,
    pub bmi: f64,
    pub hepatitis_c: YesNo,
}

#[derive(Debug, Clone, Serialize)]
pub struct VacsComponents {
    pub age_score: f64,
    pub cd4_score: f64,
    pub hiv_rna_score: f64,
    pub hemoglobin_score: f64,
    pub fib4_score: f64,
    pub egfr_score: f64,
    pub albumin_score: f64,
    pub wbc_score: f64,
    pub bmi_score: f64,
    pub hcv_score: f64,
}

impl VacsComponents {
    fn total(&self) -> f64 {
        self.age_score
            + self.cd4_score
            + self.hiv_rna_score
            + self.hemoglobin_score
            + self.fib4_score
            + self.egfr_score
            + self.albumin_score
            + self.wbc_score
            + self.bmi_score
            + self.hcv_score
    }

    fn rounded(&self) -> Self {
        Self {
            age_score: round_to(self.age_score, 1),
            cd4_score: round_to(self.cd4_score, 1),
            hiv_rna_score: round_to(self.hiv_rna_score, 1),
            hemoglobin_score: round_to(self.hemoglobin_score, 1),
            fib4_score: round_to(self.fib4_score, 1),
            egfr_score: round_to(self.egfr_score, 1),
            albumin_score: round_to(self.albumin_score, 1),
            wbc_score: round_to(self.wbc_score, 1),
            bmi_score: round_to(self.bmi_score, 1),
            hcv_score: self.hcv_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeBiomarkers {
    pub fib4: f64,
    pub egfr: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VacsDetails {
    pub component_scores: VacsComponents,
    pub composite_biomarkers: CompositeBiomarkers,
    pub mortality_risk_5year: String,
}

const MAX_SCORE: f64 = 164.0;
const HCV_POINTS: f64 = 6.0;

fn linear(value: f64, coefficient: f64, base: f64) -> f64 {
    (value * coefficient + base).max(0.0)
}

/// FIB-4 index: `age × AST / (platelets × √ALT)`.
fn fib4(age: i32, ast: i32, alt: i32, platelets: i32) -> f64 {
    f64::from(age) * f64::from(ast) / (f64::from(platelets) * f64::from(alt).sqrt())
}

/// CKD-EPI 2009 eGFR in mL/min/1.73 m².
fn egfr(creatinine: f64, age: i32, sex: Sex, race: Race) -> f64 {
    let (base, kappa, low_exponent) = match sex {
        Sex::Female => (144.0, 0.7, -0.329),
        Sex::Male => (141.0, 0.9, -0.411),
    };
    let ratio = creatinine / kappa;
    let exponent = if creatinine <= kappa { low_exponent } else { -1.209 };
    let value = base * ratio.powf(exponent) * 0.993f64.powi(age);
    match race {
        Race::Black => value * 1.159,
        Race::NonBlack => value,
    }
}

/// Rough 5-year mortality anchored at 1% for a score of 38, doubling every
/// 10 points above it, capped at 95%.
fn mortality_estimate(score: f64) -> f64 {
    const ANCHOR: f64 = 38.0;
    let risk = if score <= ANCHOR {
        score / ANCHOR
    } else {
        2f64.powf((score - ANCHOR) / 10.0)
    };
    risk.min(95.0)
}

impl Calculator for Vacs20Index {
    type Input = VacsInput;
    type Output = CalculationResult<f64, VacsDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "vacs_2_0_index",
                "Veterans Aging Cohort Study (VACS) 2.0 Index",
                Specialty::InfectiousDisease,
            )
            .description(
                "Estimates 5-year all-cause mortality in people with HIV from age, HIV-specific \
                 markers and general organ-system biomarkers.",
            )
            .parameters(vec![
                Parameter::integer("age", "Patient age", 18, 100).unit("years"),
                Parameter::choice("sex", "Sex", &["male", "female"]),
                Parameter::choice("race", "Race, used in the eGFR equation", &["black", "non_black"]),
                Parameter::integer("cd4_count", "CD4 count", 0, 2000).unit("cells/μL"),
                Parameter::number("hiv_rna_log", "HIV-1 RNA viral load", 0.0, 7.0)
                    .unit("log10 copies/mL"),
                Parameter::number("hemoglobin", "Hemoglobin", 5.0, 20.0).unit("g/dL"),
                Parameter::integer("platelets", "Platelet count", 10, 1000).unit("×10³/μL"),
                Parameter::integer("ast", "Aspartate aminotransferase", 10, 500).unit("U/L"),
                Parameter::integer("alt", "Alanine aminotransferase", 10, 500).unit("U/L"),
                Parameter::number("creatinine", "Serum creatinine", 0.5, 10.0).unit("mg/dL"),
                Parameter::number("albumin", "Serum albumin", 1.0, 6.0).unit("g/dL"),
                Parameter::number("wbc_count", "White blood cell count", 1.0, 50.0)
                    .unit("×10³/μL"),
                Parameter::number("bmi", "Body mass index", 10.0, 50.0).unit("kg/m²"),
                Parameter::yes_no("hepatitis_c", "Hepatitis C co-infection"),
            ])
        });
        &METADATA
    }

    fn calculate(&self, input: VacsInput) -> Result<Self::Output, CalculatorError> {
        let fib4 = fib4(input.age, input.ast, input.alt, input.platelets);
        let egfr = egfr(input.creatinine, input.age, input.sex, input.race);

        let components = VacsComponents {
            age_score: linear(f64::from(input.age), 0.6, 14.0),
            cd4_score: linear(f64::from(input.cd4_count), -0.026, 23.0),
            hiv_rna_score: linear(input.hiv_rna_log, 4.86, -6.32),
            hemoglobin_score: linear(input.hemoglobin, -2.29, 32.64),
            fib4_score: linear(fib4, 2.86, -1.43),
            egfr_score: linear(egfr, -0.089, 16.0),
            albumin_score: linear(input.albumin, -8.67, 82.34),
            wbc_score: linear(input.wbc_count, 0.5, 0.0),
            bmi_score: linear(input.bmi, -0.5, 12.5),
            hcv_score: if input.hepatitis_c.is_yes() { HCV_POINTS } else { 0.0 },
        };
        let score = round_to(components.total().clamp(0.0, MAX_SCORE), 1);

        let (stage, description, guidance) = if score <= 25.0 {
            (
                "Low Risk",
                "Low 5-year mortality risk",
                "Low disease burden and mortality risk. Continue routine HIV care and monitoring.",
            )
        } else if score <= 50.0 {
            (
                "Moderate Risk",
                "Moderate 5-year mortality risk",
                "Moderate disease burden. Consider enhanced monitoring and preventive \
                 interventions; optimize HIV therapy and address modifiable risk factors.",
            )
        } else if score <= 75.0 {
            (
                "High Risk",
                "High 5-year mortality risk",
                "High disease burden. Intensify monitoring, optimize HIV therapy and address \
                 comorbidities with a multidisciplinary approach.",
            )
        } else {
            (
                "Very High Risk",
                "Very high 5-year mortality risk",
                "Very high disease burden. Consider aggressive intervention strategies and \
                 goals-of-care discussions.",
            )
        };
        let interpretation = format!("VACS 2.0 Index score: {score:.1} points. {guidance}");

        let details = VacsDetails {
            component_scores: components.rounded(),
            composite_biomarkers: CompositeBiomarkers {
                fib4: round_to(fib4, 2),
                egfr: round_to(egfr, 1),
            },
            mortality_risk_5year: format!(
                "Approximately {:.1}% 5-year mortality risk",
                mortality_estimate(score)
            ),
        };

        Ok(
            CalculationResult::new(score, "points", interpretation, stage, description)
                .with_details(details),
        )
    }
}
