use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use medcalc_calculators::calculate_score;

use crate::error::ApiError;

pub type Body = Result<Json<Value>, JsonRejection>;

/// `POST /api/{score_id}/calculate`
pub async fn calculate_generic(
    Path(score_id): Path<String>,
    body: Body,
) -> Result<Json<Value>, ApiError> {
    calculate(&score_id, body)
}

/// `POST /{score_id}`, registered once per calculator.
pub async fn calculate_named(score_id: &'static str, body: Body) -> Result<Json<Value>, ApiError> {
    calculate(score_id, body)
}

fn calculate(score_id: &str, body: Body) -> Result<Json<Value>, ApiError> {
    let Json(params) = body.map_err(|rejection| ApiError::from_rejection(score_id, rejection))?;

    let result =
        calculate_score(score_id, params).map_err(|e| ApiError::from_calculator(score_id, e))?;
    tracing::info!(score_id, "calculation completed");
    Ok(Json(result))
}
