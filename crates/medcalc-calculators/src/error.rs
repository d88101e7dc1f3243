use thiserror::Error;

use crate::params::ParameterError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("invalid parameters: {}", join_messages(.0))]
    Validation(Vec<ParameterError>),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("calculation failed: {0}")]
    Calculation(String),
}

impl CalculatorError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalculatorError::InvalidInput(message.into())
    }

    /// Whether the caller supplied bad input (as opposed to an internal fault).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalculatorError::Validation(_) | CalculatorError::InvalidInput(_)
        )
    }
}

fn join_messages(errors: &[ParameterError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
