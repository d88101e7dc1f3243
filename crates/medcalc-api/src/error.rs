use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use medcalc_calculators::error::CalculatorError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound { score_id: String },
    RouteNotFound { path: String },
    Validation { message: String, details: Value },
    Internal { message: String, cause: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    details: Value,
}

impl ApiError {
    pub fn not_found(score_id: &str) -> Self {
        ApiError::NotFound {
            score_id: score_id.to_string(),
        }
    }

    /// Map a calculator failure for `score_id` onto an HTTP error.
    pub fn from_calculator(score_id: &str, err: CalculatorError) -> Self {
        match err {
            CalculatorError::UnknownCalculator(id) => ApiError::NotFound { score_id: id },
            CalculatorError::Validation(errors) => ApiError::Validation {
                message: format!("Invalid parameters for {score_id}"),
                details: json!({ "errors": errors }),
            },
            CalculatorError::InvalidInput(msg) => ApiError::Validation {
                message: format!("Invalid parameters for {score_id}"),
                details: json!({ "error": msg }),
            },
            CalculatorError::Calculation(msg) => ApiError::Internal {
                message: format!("Error calculating {score_id}"),
                cause: msg,
            },
        }
    }

    /// A request body that was not parseable JSON.
    pub fn from_rejection(score_id: &str, rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid parameters for {score_id}"),
            details: json!({ "error": rejection.body_text() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound { score_id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "ScoreNotFound",
                    message: format!("Score '{score_id}' not found"),
                    details: json!({ "score_id": score_id }),
                },
            ),
            ApiError::RouteNotFound { path } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "NotFound",
                    message: format!("No route for {path}"),
                    details: json!({ "path": path }),
                },
            ),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "ValidationError",
                    message,
                    details,
                },
            ),
            ApiError::Internal { message, cause } => {
                tracing::error!(%cause, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "CalculationError",
                        message,
                        details: json!({}),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
