//! Application setup and router construction.

use std::sync::Arc;

use analysis::RiskAnalyst;
use axum::extract::Extension;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{analyze_handler, health_handler, question_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyst: Arc<RiskAnalyst>,
}

/// Build the axum application router
pub fn build_app(analyst: Arc<RiskAnalyst>) -> Router {
    // CORS configuration - the upload form is served from a separate origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/question", post(question_handler))
        .route("/health", get(health_handler))
        .layer(Extension(AppState { analyst }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
