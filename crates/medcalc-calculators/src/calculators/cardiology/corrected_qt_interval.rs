use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Heart-rate corrected QT interval by one of five published formulas.
pub struct CorrectedQtInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QtFormula {
    Bazett,
    Fridericia,
    Framingham,
    Hodges,
    Rautaharju,
}

impl QtFormula {
    const OPTIONS: [&'static str; 5] = ["bazett", "fridericia", "framingham", "hodges", "rautaharju"];

    fn label(self) -> &'static str {
        match self {
            QtFormula::Bazett => "Bazett",
            QtFormula::Fridericia => "Fridericia",
            QtFormula::Framingham => "Framingham",
            QtFormula::Hodges => "Hodges",
            QtFormula::Rautaharju => "Rautaharju",
        }
    }

    /// QTc in ms and a rendering of the equation with the inputs substituted.
    fn apply(self, qt: f64, heart_rate: f64, rr: f64) -> (f64, String) {
        match self {
            QtFormula::Bazett => {
                let root = rr.sqrt();
                (qt / root, format!("QTc = {qt} / √{rr:.3} = {qt} / {root:.3}"))
            }
            QtFormula::Fridericia => {
                let root = rr.cbrt();
                (qt / root, format!("QTc = {qt} / ∛{rr:.3} = {qt} / {root:.3}"))
            }
            QtFormula::Framingham => (
                qt + 154.0 * (1.0 - rr),
                format!("QTc = {qt} + 154 × (1 - {rr:.3})"),
            ),
            QtFormula::Hodges => (
                qt + 1.75 * (heart_rate - 60.0),
                format!("QTc = {qt} + 1.75 × ({heart_rate} - 60)"),
            ),
            QtFormula::Rautaharju => (
                qt * (120.0 + heart_rate) / 180.0,
                format!("QTc = {qt} × (120 + {heart_rate}) / 180"),
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QtcInput {
    pub qt_interval: i32,
    pub heart_rate: i32,
    pub formula: QtFormula,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationDetails {
    pub formula_used: &'static str,
    pub rr_interval: f64,
    pub formula_equation: String,
    pub clinical_significance: &'static str,
    pub risk_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QtcDetails {
    pub calculation_details: CalculationDetails,
}

impl Calculator for CorrectedQtInterval {
    type Input = QtcInput;
    type Output = CalculationResult<f64, QtcDetails>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "corrected_qt_interval",
                "Corrected QT Interval (QTc)",
                Specialty::Cardiology,
            )
            .description(
                "Corrects the QT interval for heart rate using the Bazett, Fridericia, \
                 Framingham, Hodges or Rautaharju formula.",
            )
            .parameters(vec![
                Parameter::integer("qt_interval", "Measured QT interval", 200, 800).unit("ms"),
                Parameter::integer("heart_rate", "Heart rate", 30, 300).unit("bpm"),
                Parameter::choice("formula", "Correction formula", &QtFormula::OPTIONS),
            ])
            .result("QTc", "ms")
        });
        &METADATA
    }

    fn calculate(&self, input: QtcInput) -> Result<Self::Output, CalculatorError> {
        let qt = f64::from(input.qt_interval);
        let heart_rate = f64::from(input.heart_rate);
        let rr = 60.0 / heart_rate;
        let (qtc, formula_equation) = input.formula.apply(qt, heart_rate, rr);
        let qtc = round_to(qtc, 1);

        let (stage, description, significance, risk_level, advice) = if qtc <= 320.0 {
            (
                "Short",
                "Short QTc interval",
                "Possible short QT syndrome",
                "High",
                "is short (≤320 ms) and may indicate short QT syndrome. Refer for \
                 electrophysiology evaluation.",
            )
        } else if qtc <= 440.0 {
            (
                "Normal",
                "Normal QTc interval",
                "Normal cardiac repolarization",
                "Low",
                "is within normal limits. No QT-related intervention required.",
            )
        } else if qtc <= 460.0 {
            (
                "Borderline",
                "Borderline QTc interval",
                "Borderline repolarization delay",
                "Intermediate",
                "is borderline (440-460 ms; upper normal for women is 460 ms). Review \
                 QT-prolonging medications and electrolytes and repeat the ECG.",
            )
        } else if qtc <= 500.0 {
            (
                "Prolonged",
                "Prolonged QTc interval",
                "Prolonged repolarization with arrhythmia risk",
                "High",
                "is prolonged for both sexes. Increased risk of arrhythmias. Evaluate for \
                 reversible causes and consider medication review.",
            )
        } else {
            (
                "Severely Prolonged",
                "Severely prolonged QTc interval",
                "High risk of torsades de pointes",
                "Very High",
                "is severely prolonged (>500 ms) with high risk of torsades de pointes. Stop \
                 QT-prolonging drugs, correct potassium and magnesium, and start continuous \
                 cardiac monitoring.",
            )
        };

        let details = QtcDetails {
            calculation_details: CalculationDetails {
                formula_used: input.formula.label(),
                rr_interval: round_to(rr, 3),
                formula_equation,
                clinical_significance: significance,
                risk_level,
            },
        };

        Ok(CalculationResult::new(
            qtc,
            "ms",
            format!("QTc of {qtc:.1} ms ({} formula) {advice}", input.formula.label()),
            stage,
            description,
        )
        .with_details(details))
    }
}
