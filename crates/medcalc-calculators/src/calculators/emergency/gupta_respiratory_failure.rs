use std::sync::LazyLock;

use serde::Deserialize;

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use super::gupta::{AsaClass, FunctionalStatus, RiskBand, SepsisStatus, band_for};
use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::{logistic_percent, round_to};
use crate::params::YesNo;

/// Gupta postoperative respiratory failure risk: mechanical ventilation
/// beyond 48 hours or unplanned intubation within 30 days of surgery.
pub struct GuptaPostoperativeRespiratoryFailureRisk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespiratoryProcedure {
    Aortic,
    Brain,
    ThoracicNonCardiac,
    Cardiac,
    ForegutHepatobiliary,
    PeripheralVascular,
    Neck,
    GallbladderAppendixAdrenalsSpleen,
    Intestinal,
    Renal,
    Spine,
    OrthopedicNonSpine,
    OtherAbdomen,
    UrologyNonRenal,
    Hernia,
    GynecologicOncology,
    ObstetricGynecologic,
    OtherHematologic,
    Skin,
    ThyroidParathyroid,
    Vein,
    Breast,
}

impl RespiratoryProcedure {
    const OPTIONS: [&'static str; 22] = [
        "aortic",
        "brain",
        "thoracic_non_cardiac",
        "cardiac",
        "foregut_hepatobiliary",
        "peripheral_vascular",
        "neck",
        "gallbladder_appendix_adrenals_spleen",
        "intestinal",
        "renal",
        "spine",
        "orthopedic_non_spine",
        "other_abdomen",
        "urology_non_renal",
        "hernia",
        "gynecologic_oncology",
        "obstetric_gynecologic",
        "other_hematologic",
        "skin",
        "thyroid_parathyroid",
        "vein",
        "breast",
    ];

    fn coefficient(self) -> f64 {
        use RespiratoryProcedure::*;
        match self {
            Aortic => 1.0781,
            Brain => 0.8086,
            ThoracicNonCardiac => 0.7737,
            Cardiac => 0.6959,
            ForegutHepatobiliary => 0.4949,
            PeripheralVascular => 0.3646,
            Neck => 0.2701,
            GallbladderAppendixAdrenalsSpleen => 0.2135,
            Intestinal => 0.1964,
            Renal => 0.146,
            Spine => 0.1139,
            OrthopedicNonSpine => 0.0654,
            OtherAbdomen => 0.0481,
            UrologyNonRenal => 0.0089,
            Hernia => 0.0,
            GynecologicOncology => -0.0234,
            ObstetricGynecologic => -0.1456,
            OtherHematologic => -0.2341,
            Skin => -0.3678,
            ThyroidParathyroid => -0.4927,
            Vein => -0.8934,
            Breast => -2.6462,
        }
    }

    fn describe(self) -> String {
        Self::OPTIONS[self as usize].replace('_', " ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuptaRespiratoryFailureInput {
    pub functional_status: FunctionalStatus,
    pub asa_class: AsaClass,
    pub sepsis_status: SepsisStatus,
    pub emergency_case: YesNo,
    pub procedure_type: RespiratoryProcedure,
}

const BASE_CONSTANT: f64 = -1.7397;

static BANDS: [RiskBand; 5] = [
    RiskBand {
        max: 1.0,
        level: "Very Low Risk",
        description: "Minimal respiratory failure risk",
        recommendations: "Very low risk of postoperative respiratory failure. Standard \
            perioperative care with early mobilization and adequate pain management.",
    },
    RiskBand {
        max: 3.0,
        level: "Low Risk",
        description: "Low respiratory failure risk",
        recommendations: "Low risk of postoperative respiratory failure. Ensure adequate pain \
            control to facilitate deep breathing and coughing, and monitor for respiratory \
            complications.",
    },
    RiskBand {
        max: 8.0,
        level: "Moderate Risk",
        description: "Moderate respiratory failure risk",
        recommendations: "Moderate risk of postoperative respiratory failure. Consider enhanced \
            respiratory monitoring, aggressive pulmonary hygiene, incentive spirometry and \
            respiratory therapy consultation.",
    },
    RiskBand {
        max: 20.0,
        level: "High Risk",
        description: "High respiratory failure risk",
        recommendations: "High risk of postoperative respiratory failure. Implement intensive \
            respiratory monitoring and consider ICU-level care, pulmonology consultation and \
            preoperative optimization if elective.",
    },
    RiskBand {
        max: f64::INFINITY,
        level: "Very High Risk",
        description: "Very high respiratory failure risk",
        recommendations: "Very high risk of postoperative respiratory failure. Consider \
            postponing elective surgery for optimization; ICU-level care with mechanical \
            ventilation readily available and a multidisciplinary team approach.",
    },
];

impl Calculator for GuptaPostoperativeRespiratoryFailureRisk {
    type Input = GuptaRespiratoryFailureInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "gupta_postoperative_respiratory_failure_risk",
                "Gupta Postoperative Respiratory Failure Risk",
                Specialty::Emergency,
            )
            .description(
                "Predicts mechanical ventilation for more than 48 hours or unplanned \
                 intubation within 30 days of surgery.",
            )
            .parameters(vec![
                Parameter::choice(
                    "functional_status",
                    "Functional status before surgery",
                    &FunctionalStatus::OPTIONS,
                ),
                Parameter::choice("asa_class", "ASA physical status class", &AsaClass::OPTIONS),
                Parameter::choice(
                    "sepsis_status",
                    "Preoperative sepsis status",
                    &SepsisStatus::OPTIONS,
                ),
                Parameter::yes_no("emergency_case", "Emergency procedure"),
                Parameter::choice(
                    "procedure_type",
                    "Type of surgical procedure",
                    &RespiratoryProcedure::OPTIONS,
                ),
            ])
            .result("respiratory failure risk", "percentage")
        });
        &METADATA
    }

    fn calculate(
        &self,
        input: GuptaRespiratoryFailureInput,
    ) -> Result<Self::Output, CalculatorError> {
        let functional = match input.functional_status {
            FunctionalStatus::Independent => 0.0,
            FunctionalStatus::PartiallyDependent => 0.7678,
            FunctionalStatus::TotallyDependent => 1.4046,
        };
        let asa = match input.asa_class {
            AsaClass::I => -3.5265,
            AsaClass::II => -2.0008,
            AsaClass::III => -0.6201,
            AsaClass::IV => 0.2441,
            AsaClass::V => 0.0,
        };
        let sepsis = match input.sepsis_status {
            SepsisStatus::None => -0.784,
            SepsisStatus::Sirs => 0.0,
            SepsisStatus::Sepsis => 0.2752,
            SepsisStatus::SepticShock => 0.9035,
        };
        let emergency = if input.emergency_case.is_yes() { 0.0 } else { -0.5739 };
        let x = BASE_CONSTANT + functional + asa + sepsis + emergency
            + input.procedure_type.coefficient();

        let risk = logistic_percent(x);
        let band = band_for(&BANDS, risk);
        let case = if input.emergency_case.is_yes() { "emergency case" } else { "elective case" };
        let interpretation = format!(
            "Patient characteristics: {}, {}, {}, {case}, undergoing {}. Gupta Postoperative \
             Respiratory Failure Risk: {risk:.2}% risk of respiratory failure requiring mechanical \
             ventilation >48 hours or unplanned intubation within 30 days. Risk Category: {} ({}). \
             Clinical recommendations: {}",
            input.functional_status.describe(),
            input.asa_class.describe(),
            input.sepsis_status.describe(),
            input.procedure_type.describe(),
            band.level,
            band.description,
            band.recommendations,
        );

        Ok(CalculationResult::new(
            round_to(risk, 2),
            "percentage",
            interpretation,
            band.level,
            band.description,
        ))
    }
}
