//! Inputs shared by the Gupta postoperative risk models (ACS NSQIP).

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalStatus {
    Independent,
    PartiallyDependent,
    TotallyDependent,
}

impl FunctionalStatus {
    pub const OPTIONS: [&'static str; 3] =
        ["independent", "partially_dependent", "totally_dependent"];

    pub fn describe(self) -> &'static str {
        match self {
            FunctionalStatus::Independent => "functionally independent",
            FunctionalStatus::PartiallyDependent => "partially dependent",
            FunctionalStatus::TotallyDependent => "totally dependent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AsaClass {
    #[serde(rename = "1")]
    I,
    #[serde(rename = "2")]
    II,
    #[serde(rename = "3")]
    III,
    #[serde(rename = "4")]
    IV,
    #[serde(rename = "5")]
    V,
}

impl AsaClass {
    pub const OPTIONS: [&'static str; 5] = ["1", "2", "3", "4", "5"];

    pub fn describe(self) -> &'static str {
        match self {
            AsaClass::I => "ASA Class I (normal healthy)",
            AsaClass::II => "ASA Class II (mild systemic disease)",
            AsaClass::III => "ASA Class III (severe systemic disease)",
            AsaClass::IV => "ASA Class IV (severe systemic disease threatening life)",
            AsaClass::V => "ASA Class V (moribund patient)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SepsisStatus {
    None,
    Sirs,
    Sepsis,
    SepticShock,
}

impl SepsisStatus {
    pub const OPTIONS: [&'static str; 4] = ["none", "sirs", "sepsis", "septic_shock"];

    pub fn describe(self) -> &'static str {
        match self {
            SepsisStatus::None => "no sepsis",
            SepsisStatus::Sirs => "preoperative SIRS",
            SepsisStatus::Sepsis => "preoperative sepsis",
            SepsisStatus::SepticShock => "preoperative septic shock",
        }
    }
}

/// A half-open `[min, max)` band of predicted risk, in percent.
pub struct RiskBand {
    pub max: f64,
    pub level: &'static str,
    pub description: &'static str,
    pub recommendations: &'static str,
}

/// First band whose upper bound exceeds `risk`; the last band otherwise.
pub fn band_for(bands: &'static [RiskBand], risk: f64) -> &'static RiskBand {
    bands
        .iter()
        .find(|b| risk < b.max)
        .unwrap_or(&bands[bands.len() - 1])
}
