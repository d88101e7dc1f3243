use serde::Serialize;

/// The envelope every calculator returns.
///
/// `result` is the headline value: a number for scores and doses, a
/// string for diagnostic verdicts, or a struct for multi-component
/// outputs. Calculator-specific extras go in `details`, which is
/// flattened next to the fixed fields on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult<R, D = NoDetails> {
    pub result: R,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    #[serde(flatten)]
    pub details: D,
}

/// Marker for calculators without extra top-level fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NoDetails {}

impl<R> CalculationResult<R> {
    pub fn new(
        result: R,
        unit: &str,
        interpretation: impl Into<String>,
        stage: impl Into<String>,
        stage_description: impl Into<String>,
    ) -> Self {
        Self {
            result,
            unit: unit.to_string(),
            interpretation: interpretation.into(),
            stage: stage.into(),
            stage_description: stage_description.into(),
            details: NoDetails {},
        }
    }
}

impl<R, D> CalculationResult<R, D> {
    /// Attach calculator-specific top-level fields.
    pub fn with_details<E>(self, details: E) -> CalculationResult<R, E> {
        CalculationResult {
            result: self.result,
            unit: self.unit,
            interpretation: self.interpretation,
            stage: self.stage,
            stage_description: self.stage_description,
            details,
        }
    }
}
