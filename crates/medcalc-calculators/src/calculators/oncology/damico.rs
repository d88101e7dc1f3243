use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;

/// D'Amico risk classification for clinically localized prostate cancer.
pub struct DamicoRiskClassification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskGroup {
    Low,
    Intermediate,
    High,
}

impl RiskGroup {
    fn key(self) -> &'static str {
        match self {
            RiskGroup::Low => "low",
            RiskGroup::Intermediate => "intermediate",
            RiskGroup::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ClinicalStage {
    T1a,
    T1b,
    T1c,
    T2a,
    T2b,
    T2c,
    T3a,
    T3b,
    T4,
}

impl ClinicalStage {
    const OPTIONS: [&'static str; 9] =
        ["T1a", "T1b", "T1c", "T2a", "T2b", "T2c", "T3a", "T3b", "T4"];

    fn risk(self) -> RiskGroup {
        match self {
            ClinicalStage::T1a | ClinicalStage::T1b | ClinicalStage::T1c | ClinicalStage::T2a => {
                RiskGroup::Low
            }
            ClinicalStage::T2b => RiskGroup::Intermediate,
            ClinicalStage::T2c | ClinicalStage::T3a | ClinicalStage::T3b | ClinicalStage::T4 => {
                RiskGroup::High
            }
        }
    }

    fn label(self) -> &'static str {
        Self::OPTIONS[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedTreatment {
    RadicalProstatectomy,
    ExternalBeamRadiation,
    Brachytherapy,
    ActiveSurveillance,
    NotSpecified,
}

impl PlannedTreatment {
    const OPTIONS: [&'static str; 5] = [
        "radical_prostatectomy",
        "external_beam_radiation",
        "brachytherapy",
        "active_surveillance",
        "not_specified",
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamicoInput {
    pub psa_level: f64,
    pub gleason_score: u8,
    pub clinical_stage: ClinicalStage,
    #[serde(default)]
    pub patient_age: Option<u8>,
    #[serde(default)]
    pub treatment_planned: Option<PlannedTreatment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskFactors {
    pub psa_risk: RiskGroup,
    pub gleason_risk: RiskGroup,
    pub stage_risk: RiskGroup,
    pub highest_risk_factor: RiskGroup,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prognosis {
    pub prognosis: &'static str,
    pub disease_specific_survival: &'static str,
    pub biochemical_control: &'static str,
    pub metastasis_risk: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreatmentRecommendations {
    pub primary_recommendations: &'static [&'static str],
    pub additional_considerations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DamicoDetails {
    pub risk_group: RiskGroup,
    pub criteria_met: &'static str,
    pub biochemical_recurrence_risk: &'static str,
    pub five_year_recurrence_rate: &'static str,
    pub primary_risk_factors: Vec<String>,
    pub risk_factors: RiskFactors,
    pub prognosis: Prognosis,
    pub treatment_recommendations: TreatmentRecommendations,
}

fn psa_risk(psa: f64) -> RiskGroup {
    if psa > 20.0 {
        RiskGroup::High
    } else if psa > 10.0 {
        RiskGroup::Intermediate
    } else {
        RiskGroup::Low
    }
}

fn gleason_risk(gleason: u8) -> RiskGroup {
    match gleason {
        8.. => RiskGroup::High,
        7 => RiskGroup::Intermediate,
        _ => RiskGroup::Low,
    }
}

/// The highest-risk of the three criteria decides the group.
pub fn risk_group(psa: f64, gleason: u8, stage: ClinicalStage) -> RiskGroup {
    psa_risk(psa).max(gleason_risk(gleason)).max(stage.risk())
}

fn primary_risk_factors(psa: f64, gleason: u8, stage: ClinicalStage) -> Vec<String> {
    let psa_factor = match psa_risk(psa) {
        RiskGroup::High => format!("Elevated PSA: {psa} ng/mL (>20)"),
        RiskGroup::Intermediate => format!("Intermediate PSA: {psa} ng/mL (10-20)"),
        RiskGroup::Low => format!("Low PSA: {psa} ng/mL (≤10)"),
    };
    let gleason_factor = match gleason_risk(gleason) {
        RiskGroup::High => format!("High-grade cancer: Gleason {gleason} (≥8)"),
        RiskGroup::Intermediate => format!("Intermediate-grade cancer: Gleason {gleason}"),
        RiskGroup::Low => format!("Low-grade cancer: Gleason {gleason} (≤6)"),
    };
    let stage_factor = match stage.risk() {
        RiskGroup::High => format!("Advanced local stage: {} (≥T2c)", stage.label()),
        RiskGroup::Intermediate => format!("Intermediate local stage: {}", stage.label()),
        RiskGroup::Low => format!("Early local stage: {} (T1-T2a)", stage.label()),
    };
    vec![psa_factor, gleason_factor, stage_factor]
}

fn additional_considerations(
    group: RiskGroup,
    age: Option<u8>,
    treatment: Option<PlannedTreatment>,
) -> Vec<&'static str> {
    let mut notes = Vec::new();
    match age {
        Some(age) if age < 55 => {
            notes.push("Young age favors aggressive treatment for cure");
            if group == RiskGroup::Low {
                notes.push("Consider active surveillance with strict monitoring");
            }
        }
        Some(age) if age > 75 => {
            notes.push("Advanced age may favor less aggressive approaches");
            notes.push("Consider life expectancy and comorbidities in treatment selection");
        }
        _ => {}
    }
    match treatment {
        Some(PlannedTreatment::ActiveSurveillance) if group == RiskGroup::Low => {
            notes.push("Excellent candidate for active surveillance protocol")
        }
        Some(PlannedTreatment::ActiveSurveillance) => {
            notes.push("Active surveillance typically reserved for low-risk disease")
        }
        Some(PlannedTreatment::RadicalProstatectomy) => {
            notes.push("Surgical approach offers excellent cancer control")
        }
        Some(PlannedTreatment::ExternalBeamRadiation) if group == RiskGroup::High => {
            notes.push("Combine radiation with long-term androgen deprivation therapy")
        }
        Some(PlannedTreatment::ExternalBeamRadiation) => {
            notes.push("Radiation therapy provides outcomes equivalent to surgery")
        }
        Some(PlannedTreatment::Brachytherapy) if group == RiskGroup::High => {
            notes.push("Brachytherapy alone is generally not sufficient for high-risk disease")
        }
        Some(PlannedTreatment::Brachytherapy) => {
            notes.push("Brachytherapy is appropriate for suitable candidates")
        }
        Some(PlannedTreatment::NotSpecified) | None => {}
    }
    notes
}

impl Calculator for DamicoRiskClassification {
    type Input = DamicoInput;
    type Output = CalculationResult<&'static str, DamicoDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "damico_risk_classification",
                "D'Amico Risk Classification for Prostate Cancer",
                Specialty::Oncology,
            )
            .description(
                "Stratifies localized prostate cancer into low, intermediate or high risk of \
                 biochemical recurrence after local therapy.",
            )
            .parameters(vec![
                Parameter::number("psa_level", "Pre-treatment PSA", 0.1, 500.0).unit("ng/mL"),
                Parameter::integer("gleason_score", "Biopsy Gleason score", 2, 10),
                Parameter::choice(
                    "clinical_stage",
                    "Clinical T stage",
                    &ClinicalStage::OPTIONS,
                ),
                Parameter::integer("patient_age", "Patient age", 40, 100)
                    .unit("years")
                    .optional(),
                Parameter::choice(
                    "treatment_planned",
                    "Planned treatment",
                    &PlannedTreatment::OPTIONS,
                )
                .optional(),
            ])
            .result("risk group", "risk group")
        });
        &METADATA
    }

    fn calculate(&self, input: DamicoInput) -> Result<Self::Output, CalculatorError> {
        let psa = input.psa_level;
        let gleason = input.gleason_score;
        let stage = input.clinical_stage;
        let group = risk_group(psa, gleason, stage);

        let (label, description, criteria, recurrence_risk, recurrence_rate, outlook) = match group
        {
            RiskGroup::Low => (
                "Low Risk",
                "Low risk of treatment failure",
                "PSA ≤10 ng/mL AND Gleason score ≤6 AND clinical stage T1-T2a",
                "Low (5-15%)",
                "5-15%",
                "Patient has excellent prognosis with 5-15% 5-year biochemical recurrence risk. \
                 Active surveillance may be appropriate for select patients, though definitive \
                 treatment offers excellent cure rates.",
            ),
            RiskGroup::Intermediate => (
                "Intermediate Risk",
                "Intermediate risk of treatment failure",
                "PSA 10-20 ng/mL OR Gleason score 7 OR clinical stage T2b",
                "Intermediate (15-45%)",
                "15-45%",
                "Patient has good prognosis with 15-45% 5-year biochemical recurrence risk. \
                 Definitive local therapy is typically recommended with consideration of \
                 adjuvant therapy based on specific risk factors.",
            ),
            RiskGroup::High => (
                "High Risk",
                "High risk of treatment failure",
                "PSA >20 ng/mL OR Gleason score ≥8 OR clinical stage ≥T2c",
                "High (45-65%)",
                "45-65%",
                "Patient has significant cancer with 45-65% 5-year biochemical recurrence risk. \
                 Multimodal therapy is often recommended, including radiation with androgen \
                 deprivation therapy or radical surgery with possible adjuvant treatment.",
            ),
        };

        let (prognosis, primary): (Prognosis, &'static [&'static str]) = match group {
            RiskGroup::Low => (
                Prognosis {
                    prognosis: "Excellent",
                    disease_specific_survival: ">95% at 10 years",
                    biochemical_control: "85-95% at 5 years",
                    metastasis_risk: "Very low (<5%)",
                },
                &[
                    "Active surveillance may be appropriate for select patients",
                    "Radical prostatectomy offers excellent cure rates",
                    "External beam radiation therapy provides equivalent outcomes",
                    "Brachytherapy is an effective option for suitable candidates",
                    "Regular PSA monitoring every 3-6 months if on active surveillance",
                ],
            ),
            RiskGroup::Intermediate => (
                Prognosis {
                    prognosis: "Good to Very Good",
                    disease_specific_survival: "85-95% at 10 years",
                    biochemical_control: "55-85% at 5 years",
                    metastasis_risk: "Low to moderate (5-15%)",
                },
                &[
                    "Definitive local therapy typically recommended",
                    "Radical prostatectomy with lymph node assessment",
                    "External beam radiation with or without short-term androgen deprivation",
                    "Consider brachytherapy boost in select cases",
                    "Discuss risks and benefits of adjuvant therapy",
                ],
            ),
            RiskGroup::High => (
                Prognosis {
                    prognosis: "Guarded to Good",
                    disease_specific_survival: "60-85% at 10 years",
                    biochemical_control: "35-55% at 5 years",
                    metastasis_risk: "Moderate to high (15-35%)",
                },
                &[
                    "Multimodal therapy often recommended",
                    "Radiation therapy with long-term androgen deprivation therapy (18-36 months)",
                    "Radical prostatectomy with extended lymph node dissection",
                    "Consider neoadjuvant or adjuvant systemic therapy",
                    "Close monitoring for local and distant recurrence",
                ],
            ),
        };

        let interpretation = format!(
            "D'Amico {label} classification based on PSA {psa} ng/mL, Gleason score {gleason}, \
             and clinical stage {}. {outlook}",
            stage.label(),
        );

        let details = DamicoDetails {
            risk_group: group,
            criteria_met: criteria,
            biochemical_recurrence_risk: recurrence_risk,
            five_year_recurrence_rate: recurrence_rate,
            primary_risk_factors: primary_risk_factors(psa, gleason, stage),
            risk_factors: RiskFactors {
                psa_risk: psa_risk(psa),
                gleason_risk: gleason_risk(gleason),
                stage_risk: stage.risk(),
                highest_risk_factor: group,
            },
            prognosis,
            treatment_recommendations: TreatmentRecommendations {
                primary_recommendations: primary,
                additional_considerations: additional_considerations(
                    group,
                    input.patient_age,
                    input.treatment_planned,
                ),
            },
        };

        Ok(
            CalculationResult::new(group.key(), "risk group", interpretation, label, description)
                .with_details(details),
        )
    }
}
