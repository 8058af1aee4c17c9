// Web server: Axum-based JSON API in front of the analysis pipeline.
//
// Routes:
//   GET  /health   liveness check
//   POST /analyze  { "url": "..." } → { "words": [{ "word", "weight" }] }
//
// CORS is wide open so a browser front end on any origin can call it.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AnalysisError, FetchError};
use crate::fetch::HtmlFetcher;
use crate::pipeline::Analyzer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub fetcher: Arc<dyn HtmlFetcher>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("wordcloud API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP status for each failure kind.
pub fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::Fetch(FetchError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
        AnalysisError::Fetch(FetchError::Network(_)) => StatusCode::BAD_GATEWAY,
        AnalysisError::Extraction(_) | AnalysisError::InputTooShort(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "detail": message }))).into_response()
}
