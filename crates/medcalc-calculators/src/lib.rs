//! medcalc-calculators
//!
//! Clinical score and dosing calculators. Pure computation: no HTTP, no
//! I/O. Each calculator declares its parameters, validates a request
//! against them and maps a typed input to a [`CalculationResult`].
//!
//! [`CalculationResult`]: medcalc_core::models::result::CalculationResult

pub mod calculators;
pub mod catalog;
pub mod error;
pub mod math;
pub mod params;

use std::sync::LazyLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use medcalc_core::models::metadata::ScoreMetadata;

use calculators::{
    anesthesiology, cardiology, dermatology, emergency, endocrinology, gastroenterology,
    geriatrics, hematology, infectious_disease, neurology, oncology, ophthalmology, pediatrics,
    psychiatry, pulmonology,
};
use error::CalculatorError;
use params::ParameterError;

/// Trait implemented by each calculator.
pub trait Calculator: Send + Sync {
    /// Decoded request body. Only built after declared-parameter validation passes.
    type Input: DeserializeOwned;
    type Output: Serialize;

    /// Identity, declared parameters and result description.
    fn metadata(&self) -> &ScoreMetadata;

    /// Compute the score. Cross-field rules are checked here.
    fn calculate(&self, input: Self::Input) -> Result<Self::Output, CalculatorError>;
}

/// Object-safe view of a [`Calculator`], working on raw JSON.
pub trait DynCalculator: Send + Sync {
    fn score_metadata(&self) -> &ScoreMetadata;

    fn id(&self) -> &str {
        &self.score_metadata().id
    }

    /// Check a request body against the declared parameters.
    fn validate(&self, params: &Value) -> Vec<ParameterError> {
        params::validate_parameters(self.score_metadata(), params)
    }

    /// Validate, decode, compute and serialize.
    fn calculate_json(&self, params: Value) -> Result<Value, CalculatorError>;
}

impl<C: Calculator> DynCalculator for C {
    fn score_metadata(&self) -> &ScoreMetadata {
        self.metadata()
    }

    fn calculate_json(&self, params: Value) -> Result<Value, CalculatorError> {
        let errors = self.validate(&params);
        if !errors.is_empty() {
            return Err(CalculatorError::Validation(errors));
        }

        let input: C::Input = serde_json::from_value(params)
            .map_err(|e| CalculatorError::InvalidInput(e.to_string()))?;
        let output = self.calculate(input)?;

        serde_json::to_value(output).map_err(|e| CalculatorError::Calculation(e.to_string()))
    }
}

static REGISTRY: LazyLock<Vec<Box<dyn DynCalculator>>> = LazyLock::new(|| {
    vec![
        Box::new(anesthesiology::el_ganzouri::ElGanzouriRiskIndex),
        Box::new(cardiology::corrected_qt_interval::CorrectedQtInterval),
        Box::new(cardiology::h2fpef_score::H2fpefScore),
        Box::new(cardiology::subtle_anterior_stemi::SubtleAnteriorStemi),
        Box::new(dermatology::easi::EczemaAreaSeverityIndex),
        Box::new(emergency::blast_lung_injury::BlastLungInjurySeverity),
        Box::new(emergency::chip_prediction_rule::ChipPredictionRule),
        Box::new(emergency::danger_assessment::DangerAssessmentTool),
        Box::new(emergency::gupta_pneumonia::GuptaPostoperativePneumoniaRisk),
        Box::new(emergency::gupta_respiratory_failure::GuptaPostoperativeRespiratoryFailureRisk),
        Box::new(emergency::hacor_score::HacorScore),
        Box::new(emergency::local_anesthetic_dosing::LocalAnestheticDosing),
        Box::new(emergency::mangled_extremity::MangledExtremitySeverityScore),
        Box::new(emergency::rose_rule::RoseRule),
        Box::new(emergency::rox_index::RoxIndex),
        Box::new(emergency::rule_of_7s::RuleOf7sLymeMeningitis),
        Box::new(emergency::rule_of_nines::RuleOfNines),
        Box::new(endocrinology::diabetes_distress_scale::DiabetesDistressScale),
        Box::new(endocrinology::dka_mpm_score::DkaMpmScore),
        Box::new(gastroenterology::choles_score::CholesScore),
        Box::new(gastroenterology::rome_iv_rumination::RomeIvRuminationSyndrome),
        Box::new(gastroenterology::rome_iv_unspecified_fbd::RomeIvUnspecifiedFbd),
        Box::new(geriatrics::charlson::CharlsonComorbidityIndex),
        Box::new(hematology::corrected_count_increment::CorrectedCountIncrement),
        Box::new(hematology::duval_cibmtr::DuvalCibmtrScore),
        Box::new(hematology::malt_ipi::MaltLymphomaPrognosticIndex),
        Box::new(hematology::rhig_dosage::RhigDosage),
        Box::new(hematology::mabl::MaximumAllowableBloodLoss),
        Box::new(hematology::maps_score::MayoAlliancePrognosticSystem),
        Box::new(hematology::wpss::WpssMds),
        Box::new(infectious_disease::denver_hiv::DenverHivRiskScore),
        Box::new(infectious_disease::vacs_2_0::Vacs20Index),
        Box::new(neurology::esus_criteria::EsusCriteria),
        Box::new(oncology::crs_grading::CrsGrading),
        Box::new(oncology::ctcae::Ctcae),
        Box::new(oncology::damico::DamicoRiskClassification),
        Box::new(ophthalmology::color_vision::ColorVisionScreening),
        Box::new(pediatrics::capd::Capd),
        Box::new(pediatrics::cheops::CheopsPainScale),
        Box::new(pediatrics::dhaka::DhakaScore),
        Box::new(psychiatry::cas::CasScore),
        Box::new(psychiatry::comm::Comm),
        Box::new(pulmonology::decaf::DecafScore),
        Box::new(pulmonology::manchester_sclc::ManchesterScoreSclc),
    ]
});

/// Return all registered calculators, in registration order.
pub fn all_calculators() -> &'static [Box<dyn DynCalculator>] {
    &REGISTRY
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<&'static dyn DynCalculator> {
    REGISTRY.iter().find(|c| c.id() == id).map(|c| c.as_ref())
}

/// Route a calculator ID and raw parameters to the matching calculator.
pub fn calculate_score(id: &str, params: Value) -> Result<Value, CalculatorError> {
    let calculator =
        get_calculator(id).ok_or_else(|| CalculatorError::UnknownCalculator(id.to_string()))?;

    tracing::debug!(calculator = id, "dispatching calculation");
    calculator.calculate_json(params)
}
