//! medcalc-api
//!
//! HTTP surface over the calculator registry. The same router is served
//! from a TCP listener or through the AWS Lambda runtime.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use medcalc_calculators::all_calculators;

use error::ApiError;

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/scores", get(routes::scores::list_scores))
        .route("/api/scores/{score_id}", get(routes::scores::get_score))
        .route(
            "/api/scores/{score_id}/validate",
            get(routes::scores::validate_score),
        )
        .route("/api/categories", get(routes::scores::list_categories))
        .route(
            "/api/{score_id}/calculate",
            post(routes::calculate::calculate_generic),
        );

    for calculator in all_calculators() {
        let score_id = calculator.id();
        router = router.route(
            &format!("/{score_id}"),
            post(move |body: routes::calculate::Body| routes::calculate::calculate_named(score_id, body)),
        );
    }

    router
        .fallback(not_found)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
