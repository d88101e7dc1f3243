use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;

use medcalc_core::models::metadata::{Parameter, ParameterKind, ScoreMetadata};

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ParameterError {
    pub parameter: String,
    pub message: String,
}

impl ParameterError {
    fn new(parameter: &str, message: String) -> Self {
        Self {
            parameter: parameter.to_string(),
            message,
        }
    }
}

/// Check a JSON request body against a calculator's declared parameters.
///
/// Every declared parameter is checked and all failures are returned.
/// Fields that are not declared are ignored.
pub fn validate_parameters(metadata: &ScoreMetadata, params: &Value) -> Vec<ParameterError> {
    let Some(object) = params.as_object() else {
        return vec![ParameterError::new(
            "",
            format!("{}: parameters must be a JSON object", metadata.title),
        )];
    };

    let mut errors = Vec::new();
    for parameter in &metadata.parameters {
        match object.get(&parameter.name) {
            None | Some(Value::Null) => {
                if parameter.required {
                    errors.push(ParameterError::new(
                        &parameter.name,
                        format!("Missing required parameter: {}", parameter.name),
                    ));
                }
            }
            Some(value) => {
                if let Some(message) = check_value(parameter, value) {
                    errors.push(ParameterError::new(&parameter.name, message));
                }
            }
        }
    }
    errors
}

fn check_value(parameter: &Parameter, value: &Value) -> Option<String> {
    let name = &parameter.name;
    match &parameter.kind {
        ParameterKind::Integer { min, max } => match value.as_i64() {
            None => Some(format!("{name} must be an integer")),
            Some(v) if v < *min || v > *max => {
                Some(format!("{name} must be between {min} and {max}, got {v}"))
            }
            Some(_) => None,
        },
        ParameterKind::Number { min, max } => match value.as_f64() {
            None => Some(format!("{name} must be a number")),
            Some(v) if v < *min || v > *max => {
                Some(format!("{name} must be between {min} and {max}, got {v}"))
            }
            Some(_) => None,
        },
        ParameterKind::Choice { options } => match value.as_str() {
            Some(v) if options.iter().any(|o| o == v) => None,
            Some(v) => Some(format!(
                "{name} must be one of: {}, got '{v}'",
                options.join(", ")
            )),
            None => Some(format!("{name} must be a string")),
        },
    }
}

/// A `"yes"` / `"no"` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    /// `weight` when answered yes, zero otherwise.
    pub fn points(self, weight: i32) -> i32 {
        if self.is_yes() { weight } else { 0 }
    }
}

/// Count the `yes` answers in a slice.
pub fn count_yes(answers: &[YesNo]) -> usize {
    answers.iter().filter(|a| a.is_yes()).count()
}
