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

/// Gupta postoperative pneumonia risk: logistic model derived from ACS
/// NSQIP predicting pneumonia within 30 days of surgery.
pub struct GuptaPostoperativePneumoniaRisk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PneumoniaProcedure {
    Aortic,
    Brain,
    Cardiac,
    ThoracicNonCardiac,
    Neck,
    PeripheralVascular,
    ForegutHepatobiliary,
    GallbladderAppendixAdrenalsSpleen,
    Intestinal,
    OrthopedicNonSpine,
    Renal,
    Spine,
    UrologyNonRenal,
    Hernia,
    ObstetricGynecologic,
    Skin,
    ThyroidParathyroid,
    Vein,
    Breast,
}

impl PneumoniaProcedure {
    const OPTIONS: [&'static str; 19] = [
        "aortic",
        "brain",
        "cardiac",
        "thoracic_non_cardiac",
        "neck",
        "peripheral_vascular",
        "foregut_hepatobiliary",
        "gallbladder_appendix_adrenals_spleen",
        "intestinal",
        "orthopedic_non_spine",
        "renal",
        "spine",
        "urology_non_renal",
        "hernia",
        "obstetric_gynecologic",
        "skin",
        "thyroid_parathyroid",
        "vein",
        "breast",
    ];

    fn coefficient(self) -> f64 {
        use PneumoniaProcedure::*;
        match self {
            Aortic => 0.7178,
            Brain => 0.6405,
            Cardiac => 0.4492,
            ThoracicNonCardiac => 0.2806,
            Neck => 0.1633,
            PeripheralVascular => 0.1382,
            ForegutHepatobiliary => 0.1239,
            GallbladderAppendixAdrenalsSpleen => 0.0823,
            Intestinal => 0.0645,
            OrthopedicNonSpine => 0.0189,
            Renal => -0.0234,
            Spine => -0.0689,
            UrologyNonRenal => -0.1347,
            Hernia => -0.1456,
            ObstetricGynecologic => -0.1789,
            Skin => -0.3254,
            ThyroidParathyroid => -0.5632,
            Vein => -0.8945,
            Breast => -2.3318,
        }
    }

    fn describe(self) -> String {
        Self::OPTIONS[self as usize].replace('_', " ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuptaPneumoniaInput {
    pub age: i32,
    pub copd: YesNo,
    pub functional_status: FunctionalStatus,
    pub asa_class: AsaClass,
    pub sepsis_status: SepsisStatus,
    pub smoking: YesNo,
    pub procedure_type: PneumoniaProcedure,
}

const BASE_CONSTANT: f64 = -2.8977;
const AGE_COEFFICIENT: f64 = 0.0144;

static BANDS: [RiskBand; 5] = [
    RiskBand {
        max: 1.0,
        level: "Very Low Risk",
        description: "Minimal pneumonia risk",
        recommendations: "Very low risk of postoperative pneumonia. Standard perioperative care \
            and monitoring are appropriate, with routine pulmonary hygiene and early mobilization.",
    },
    RiskBand {
        max: 3.0,
        level: "Low Risk",
        description: "Low pneumonia risk",
        recommendations: "Low risk of postoperative pneumonia. Standard care with attention to \
            pulmonary hygiene and early mobilization. Consider incentive spirometry and adequate \
            pain control to facilitate coughing and ambulation.",
    },
    RiskBand {
        max: 6.0,
        level: "Moderate Risk",
        description: "Moderate pneumonia risk",
        recommendations: "Moderate risk of postoperative pneumonia. Consider enhanced pulmonary \
            care including chest physiotherapy, aggressive incentive spirometry, early mobilization \
            and closer respiratory monitoring.",
    },
    RiskBand {
        max: 15.0,
        level: "High Risk",
        description: "High pneumonia risk",
        recommendations: "High risk of postoperative pneumonia. Implement aggressive prevention \
            strategies including preoperative pulmonary rehabilitation if feasible, postoperative \
            chest physiotherapy and respiratory therapy consultation.",
    },
    RiskBand {
        max: f64::INFINITY,
        level: "Very High Risk",
        description: "Very high pneumonia risk",
        recommendations: "Very high risk of postoperative pneumonia. Consider postponing elective \
            surgery for preoperative optimization, implement intensive prevention protocols and \
            consider ICU-level monitoring postoperatively.",
    },
];

impl GuptaPostoperativePneumoniaRisk {
    fn logit(input: &GuptaPneumoniaInput) -> f64 {
        let copd = if input.copd.is_yes() { 0.0 } else { -0.4553 };
        let functional = match input.functional_status {
            FunctionalStatus::Independent => 0.0,
            FunctionalStatus::PartiallyDependent => 0.7653,
            FunctionalStatus::TotallyDependent => 0.94,
        };
        let asa = match input.asa_class {
            AsaClass::I => -3.0225,
            AsaClass::II => -1.6057,
            AsaClass::III => -0.4915,
            AsaClass::IV => 0.0123,
            AsaClass::V => 0.0,
        };
        let sepsis = match input.sepsis_status {
            SepsisStatus::None => -0.7641,
            SepsisStatus::Sirs => 0.0,
            SepsisStatus::Sepsis => -0.0842,
            SepsisStatus::SepticShock => 0.1048,
        };
        let smoking = if input.smoking.is_yes() { 0.0 } else { -0.4306 };

        BASE_CONSTANT
            + f64::from(input.age) * AGE_COEFFICIENT
            + copd
            + functional
            + asa
            + sepsis
            + smoking
            + input.procedure_type.coefficient()
    }
}

impl Calculator for GuptaPostoperativePneumoniaRisk {
    type Input = GuptaPneumoniaInput;
    type Output = CalculationResult<f64>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "gupta_postoperative_pneumonia_risk",
                "Gupta Postoperative Pneumonia Risk",
                Specialty::Emergency,
            )
            .description(
                "Predicts the risk of pneumonia within 30 days after surgery using a logistic \
                 model derived from ACS NSQIP data.",
            )
            .parameters(vec![
                Parameter::integer("age", "Patient age", 18, 120).unit("years"),
                Parameter::yes_no("copd", "History of COPD"),
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
                Parameter::yes_no("smoking", "Current smoker within 1 year"),
                Parameter::choice(
                    "procedure_type",
                    "Type of surgical procedure",
                    &PneumoniaProcedure::OPTIONS,
                ),
            ])
            .result("pneumonia risk", "percentage")
        });
        &METADATA
    }

    fn calculate(&self, input: GuptaPneumoniaInput) -> Result<Self::Output, CalculatorError> {
        let risk = logistic_percent(Self::logit(&input));
        let band = band_for(&BANDS, risk);

        let copd = if input.copd.is_yes() { "COPD present" } else { "no COPD" };
        let smoking = if input.smoking.is_yes() { "current smoker" } else { "non-smoker" };
        let interpretation = format!(
            "Patient characteristics: {} years old, {copd}, {}, {}, {}, {smoking}, undergoing {}. \
             Gupta Postoperative Pneumonia Risk: {risk:.2}% risk of pneumonia within 30 days after \
             surgery. Risk Category: {} ({}). Clinical recommendations: {} Pneumonia is associated \
             with significantly increased 30-day mortality; use in conjunction with clinical judgment.",
            input.age,
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
