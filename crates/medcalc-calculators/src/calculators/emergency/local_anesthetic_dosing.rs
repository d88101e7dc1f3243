use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use medcalc_core::models::metadata::{Parameter, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::math::round_to;

/// Maximum safe dose and volume of a local anesthetic without epinephrine,
/// to avoid local anesthetic systemic toxicity (LAST).
pub struct LocalAnestheticDosing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drug {
    Bupivacaine,
    Lidocaine,
    Mepivacaine,
    Ropivacaine,
}

struct DrugProfile {
    name: &'static str,
    max_mg_per_kg: f64,
    onset: &'static str,
    duration: &'static str,
    cardiotoxicity: &'static str,
}

impl Drug {
    const OPTIONS: [&'static str; 4] = ["bupivacaine", "lidocaine", "mepivacaine", "ropivacaine"];

    fn profile(self) -> DrugProfile {
        match self {
            Drug::Bupivacaine => DrugProfile {
                name: "Bupivacaine",
                max_mg_per_kg: 2.0,
                onset: "Slow (15-30 min)",
                duration: "Long (4-8 hours)",
                cardiotoxicity: "High",
            },
            Drug::Lidocaine => DrugProfile {
                name: "Lidocaine",
                max_mg_per_kg: 4.5,
                onset: "Fast (2-5 min)",
                duration: "Intermediate (1-3 hours)",
                cardiotoxicity: "Low",
            },
            Drug::Mepivacaine => DrugProfile {
                name: "Mepivacaine",
                max_mg_per_kg: 4.4,
                onset: "Intermediate (5-15 min)",
                duration: "Intermediate (2-4 hours)",
                cardiotoxicity: "Low",
            },
            Drug::Ropivacaine => DrugProfile {
                name: "Ropivacaine",
                max_mg_per_kg: 3.0,
                onset: "Slow (15-30 min)",
                duration: "Long (4-6 hours)",
                cardiotoxicity: "Moderate",
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalAnestheticInput {
    pub drug_type: Drug,
    pub patient_weight: f64,
    pub concentration_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaximumDose {
    pub max_dose_mg: f64,
    pub max_volume_ml: f64,
    pub concentration_mg_ml: f64,
}

impl Calculator for LocalAnestheticDosing {
    type Input = LocalAnestheticInput;
    type Output = CalculationResult<MaximumDose>;

    fn metadata(&self) -> &ScoreMetadata {
        static METADATA: LazyLock<ScoreMetadata> = LazyLock::new(|| {
            ScoreMetadata::new(
                "local_anesthetic_dosing_calculator",
                "Local Anesthetic Dosing Calculator",
                Specialty::Emergency,
            )
            .description(
                "Maximum safe dose (mg) and volume (mL) of common local anesthetics by patient \
                 weight and solution concentration.",
            )
            .parameters(vec![
                Parameter::choice("drug_type", "Local anesthetic", &Drug::OPTIONS),
                Parameter::number("patient_weight", "Patient weight (ideal body weight)", 1.0, 200.0)
                    .unit("kg"),
                Parameter::number(
                    "concentration_percentage",
                    "Solution concentration; 1% = 10 mg/mL",
                    0.1,
                    5.0,
                )
                .unit("%"),
            ])
            .result("maximum dose", "mg and mL")
        });
        &METADATA
    }

    fn calculate(&self, input: LocalAnestheticInput) -> Result<Self::Output, CalculatorError> {
        let profile = input.drug_type.profile();
        let concentration_mg_ml = input.concentration_percentage * 10.0;
        let max_dose_mg = input.patient_weight * profile.max_mg_per_kg;
        let max_volume_ml = max_dose_mg / concentration_mg_ml;

        let dose = MaximumDose {
            max_dose_mg: round_to(max_dose_mg, 1),
            max_volume_ml: round_to(max_volume_ml, 1),
            concentration_mg_ml: round_to(concentration_mg_ml, 1),
        };

        let interpretation = format!(
            "Local Anesthetic Dosing Calculation for {name}:\n\n\
             Patient Parameters:\n\
             • Weight: {weight:.1} kg\n\
             • Drug: {name} {pct:.1}% solution\n\
             • Concentration: {conc:.1} mg/mL\n\n\
             Maximum Safe Doses:\n\
             • Maximum total dose: {dose_mg:.1} mg\n\
             • Maximum volume: {volume:.1} mL\n\
             • Dose limit: {limit} mg/kg\n\n\
             Drug Properties:\n\
             • Onset: {onset}\n\
             • Duration: {duration}\n\
             • Cardiotoxicity risk: {cardio}\n\n\
             Safety Considerations:\n\
             • These doses are for subcutaneous infiltration and nerve blocks\n\
             • Consider lower doses in elderly patients, cardiac disease, or hepatic impairment\n\
             • Monitor for signs of Local Anesthetic Systemic Toxicity (LAST)\n\
             • Have lipid emulsion (Intralipid) readily available for LAST treatment",
            name = profile.name,
            weight = input.patient_weight,
            pct = input.concentration_percentage,
            conc = dose.concentration_mg_ml,
            dose_mg = dose.max_dose_mg,
            volume = dose.max_volume_ml,
            limit = profile.max_mg_per_kg,
            onset = profile.onset,
            duration = profile.duration,
            cardio = profile.cardiotoxicity,
        );

        Ok(CalculationResult::new(
            dose,
            "mg and mL",
            interpretation,
            "Safe Dosing Range",
            "Maximum safe dose calculated to prevent LAST",
        ))
    }
}
