use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::params::YesNo;

/// Blast Lung Injury Severity (Pizov). Each finding places the patient in a
/// severity class and the worst class wins; component points are reported
/// alongside.
pub struct BlastLungInjurySeverity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestXray {
    LocalizedInfiltrates,
    BilateralOrUnilateralInfiltrates,
    MassiveBilateralInfiltrates,
}

impl ChestXray {
    const OPTIONS: [&'static str; 3] = [
        "localized_infiltrates",
        "bilateral_or_unilateral_infiltrates",
        "massive_bilateral_infiltrates",
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlastLungInput {
    pub pao2_fio2_ratio: f64,
    pub chest_xray: ChestXray,
    pub bronchial_pleural_fistula: YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlastLungDetails {
    pub pao2_fio2_points: u8,
    pub chest_xray_points: u8,
    pub fistula_points: u8,
    pub total_points: u8,
}

impl Calculator for BlastLungInjurySeverity {
    type Input = BlastLungInput;
    type Output = CalculationResult<String, BlastLungDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "blast_lung_injury_severity",
                "Blast Lung Injury Severity Score",
                Specialty::Emergency,
            )
            .description(
                "Stratifies primary blast lung injury into three severity categories to guide \
                 ventilatory treatment and predict ARDS and mortality.",
            )
            .parameters(vec![
                Parameter::number("pao2_fio2_ratio", "PaO2/FiO2 ratio", 0.0, 700.0).unit("mmHg"),
                Parameter::choice("chest_xray", "Chest X-ray findings", &ChestXray::OPTIONS),
                Parameter::yes_no("bronchial_pleural_fistula", "Bronchopleural fistula present"),
            ])
            .result("severity", "category")
        });
        &METADATA
    }

    fn calculate(&self, input: BlastLungInput) -> Result<Self::Output, CalculatorError> {
        let (pao2_fio2_points, oxygenation) = if input.pao2_fio2_ratio > 200.0 {
            (0, Severity::Mild)
        } else if input.pao2_fio2_ratio >= 60.0 {
            (1, Severity::Moderate)
        } else {
            (2, Severity::Severe)
        };
        let (chest_xray_points, radiograph) = match input.chest_xray {
            ChestXray::LocalizedInfiltrates => (0, Severity::Mild),
            ChestXray::BilateralOrUnilateralInfiltrates => (1, Severity::Moderate),
            ChestXray::MassiveBilateralInfiltrates => (2, Severity::Severe),
        };
        let (fistula_points, fistula) = if input.bronchial_pleural_fistula.is_yes() {
            (1, Severity::Severe)
        } else {
            (0, Severity::Mild)
        };

        let severity = oxygenation.max(radiograph).max(fistula);
        let (stage, description, interpretation) = match severity {
            Severity::Mild => (
                "Mild",
                "Mild blast lung injury",
                "Mild blast lung injury. Expected ARDS risk and mortality near 0%. If ventilation \
                 is needed use volume-controlled or pressure support modes with PEEP ≤5 cm H2O; \
                 ward-level care may be appropriate.",
            ),
            Severity::Moderate => (
                "Moderate",
                "Moderate blast lung injury",
                "Moderate blast lung injury. ARDS develops in about a third of patients; mortality \
                 is low. Use conventional lung-protective ventilation with PEEP 5-10 cm H2O under \
                 ICU monitoring and a high index of suspicion for pneumothorax.",
            ),
            Severity::Severe => (
                "Severe",
                "Severe blast lung injury",
                "Severe blast lung injury. ARDS is nearly universal and mortality is high. Use \
                 lung-protective ventilation with PEEP >10 cm H2O and anticipate rescue therapies \
                 such as inhaled nitric oxide, high-frequency ventilation, independent lung \
                 ventilation or ECMO.",
            ),
        };

        let details = BlastLungDetails {
            pao2_fio2_points,
            chest_xray_points,
            fistula_points,
            total_points: pao2_fio2_points + chest_xray_points + fistula_points,
        };

        Ok(
            CalculationResult::new(stage.to_string(), "category", interpretation, stage, description)
                .with_details(details),
        )
    }
}
