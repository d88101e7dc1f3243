use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Medical specialty a calculator is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Specialty {
    Anesthesiology,
    Cardiology,
    Dermatology,
    Emergency,
    Endocrinology,
    Gastroenterology,
    Geriatrics,
    Hematology,
    InfectiousDisease,
    Neurology,
    Oncology,
    Ophthalmology,
    Pediatrics,
    Psychiatry,
    Pulmonology,
}

impl Specialty {
    pub const ALL: [Specialty; 15] = [
        Specialty::Anesthesiology,
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Emergency,
        Specialty::Endocrinology,
        Specialty::Gastroenterology,
        Specialty::Geriatrics,
        Specialty::Hematology,
        Specialty::InfectiousDisease,
        Specialty::Neurology,
        Specialty::Oncology,
        Specialty::Ophthalmology,
        Specialty::Pediatrics,
        Specialty::Psychiatry,
        Specialty::Pulmonology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Anesthesiology => "anesthesiology",
            Specialty::Cardiology => "cardiology",
            Specialty::Dermatology => "dermatology",
            Specialty::Emergency => "emergency",
            Specialty::Endocrinology => "endocrinology",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::Geriatrics => "geriatrics",
            Specialty::Hematology => "hematology",
            Specialty::InfectiousDisease => "infectious_disease",
            Specialty::Neurology => "neurology",
            Specialty::Oncology => "oncology",
            Specialty::Ophthalmology => "ophthalmology",
            Specialty::Pediatrics => "pediatrics",
            Specialty::Psychiatry => "psychiatry",
            Specialty::Pulmonology => "pulmonology",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = CoreError;

    /// Case-insensitive; accepts spaces or hyphens in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Specialty::ALL
            .into_iter()
            .find(|sp| sp.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownSpecialty(s.to_string()))
    }
}
