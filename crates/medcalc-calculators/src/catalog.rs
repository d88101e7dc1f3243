use std::collections::BTreeSet;

use medcalc_core::models::metadata::ScoreMetadata;
use medcalc_core::models::specialty::Specialty;

use crate::all_calculators;

/// Metadata of every registered calculator.
pub fn all_metadata() -> Vec<&'static ScoreMetadata> {
    all_calculators().iter().map(|c| c.score_metadata()).collect()
}

/// Calculators whose id, title, description or category contains `term`.
pub fn search(term: &str) -> Vec<&'static ScoreMetadata> {
    all_metadata().into_iter().filter(|m| m.matches(term)).collect()
}

pub fn by_category(category: Specialty) -> Vec<&'static ScoreMetadata> {
    all_metadata()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Distinct categories that have at least one calculator, sorted by name.
pub fn categories() -> Vec<Specialty> {
    // Variant order of `Specialty` is alphabetical.
    all_metadata()
        .iter()
        .map(|m| m.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
