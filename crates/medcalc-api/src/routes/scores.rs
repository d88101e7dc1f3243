use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use medcalc_calculators::{catalog, get_calculator};
use medcalc_core::models::metadata::{ScoreMetadata, ScoreSummary};
use medcalc_core::models::specialty::Specialty;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ScoreQuery {
    category: Option<String>,
    search: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreList {
    scores: Vec<ScoreSummary>,
    total: usize,
}

#[derive(Serialize)]
pub struct CategoryList {
    categories: Vec<Specialty>,
    total: usize,
}

#[derive(Serialize)]
pub struct ScoreValidation {
    score_id: String,
    score_exists: bool,
    calculator_available: bool,
    status: &'static str,
}

/// `search` wins over `category`; an unrecognised category lists nothing.
pub async fn list_scores(Query(query): Query<ScoreQuery>) -> Json<ScoreList> {
    let metadata = match (query.search, query.category) {
        (Some(term), _) => catalog::search(&term),
        (None, Some(category)) => match category.parse::<Specialty>() {
            Ok(specialty) => catalog::by_category(specialty),
            Err(_) => {
                tracing::debug!(%category, "unknown category filter");
                Vec::new()
            }
        },
        (None, None) => catalog::all_metadata(),
    };

    let scores: Vec<ScoreSummary> = metadata.iter().map(|m| m.summary()).collect();
    Json(ScoreList {
        total: scores.len(),
        scores,
    })
}

pub async fn get_score(
    Path(score_id): Path<String>,
) -> Result<Json<&'static ScoreMetadata>, ApiError> {
    let calculator = get_calculator(&score_id).ok_or_else(|| ApiError::not_found(&score_id))?;
    Ok(Json(calculator.score_metadata()))
}

pub async fn validate_score(
    Path(score_id): Path<String>,
) -> Result<Json<ScoreValidation>, ApiError> {
    if get_calculator(&score_id).is_none() {
        return Err(ApiError::not_found(&score_id));
    }

    Ok(Json(ScoreValidation {
        score_id,
        score_exists: true,
        calculator_available: true,
        status: "ready",
    }))
}

pub async fn list_categories() -> Json<CategoryList> {
    let categories = catalog::categories();
    Json(CategoryList {
        total: categories.len(),
        categories,
    })
}
