//! calc-web library - calculator web service
//!
//! HTTP surface for the WebCalc calculators: serves the form page and
//! answers JSON requests. Handlers are stateless, so the router carries no
//! application state.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

pub mod api;

/// Build application router
///
/// All error responses are JSON, including the unmatched-route fallback.
pub fn build_router() -> Router {
    Router::new()
        // Calculator page (HTML serving)
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        // JSON calculator endpoints
        .route("/calculate_bmi", post(api::calculate_bmi))
        .route("/calculate", post(api::calculate_basic))
        // Health and build identification
        .merge(api::health_routes())
        .route("/build_info", get(api::get_build_info))
        // JSON 404 for everything else
        .fallback(not_found)
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}

/// Fallback handler: unmatched routes answer JSON, never HTML
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
