use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::specialty::Specialty;

/// Accepted shape of a single input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ParameterKind {
    /// JSON integer within `[min, max]`.
    Integer { min: i64, max: i64 },
    /// Any JSON number within `[min, max]`.
    Number { min: f64, max: f64 },
    /// String literal drawn from a closed set.
    Choice { options: Vec<String> },
}

/// Declaration of one calculator input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub unit: Option<String>,
}

impl Parameter {
    fn new(name: &str, description: &str, kind: ParameterKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: true,
            unit: None,
        }
    }

    pub fn integer(name: &str, description: &str, min: i64, max: i64) -> Self {
        Self::new(name, description, ParameterKind::Integer { min, max })
    }

    pub fn number(name: &str, description: &str, min: f64, max: f64) -> Self {
        Self::new(name, description, ParameterKind::Number { min, max })
    }

    pub fn choice(name: &str, description: &str, options: &[&str]) -> Self {
        Self::new(
            name,
            description,
            ParameterKind::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    /// A `"yes"` / `"no"` answer.
    pub fn yes_no(name: &str, description: &str) -> Self {
        Self::choice(name, description, &["yes", "no"])
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// What a calculator produces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultSpec {
    pub name: String,
    pub unit: String,
}

/// Full description of a calculator, served by the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Specialty,
    pub version: String,
    pub parameters: Vec<Parameter>,
    pub result: ResultSpec,
}

impl ScoreMetadata {
    pub fn new(id: &str, title: &str, category: Specialty) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            version: "1.0".to_string(),
            parameters: Vec::new(),
            result: ResultSpec {
                name: "score".to_string(),
                unit: "points".to_string(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn result(mut self, name: &str, unit: &str) -> Self {
        self.result = ResultSpec {
            name: name.to_string(),
            unit: unit.to_string(),
        };
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            version: self.version.clone(),
        }
    }

    /// Case-insensitive substring match over id, title, description and category.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            self.id.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// List-view subset of [`ScoreMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Specialty,
    pub version: String,
}
