// POST /analyze: fetch a URL and return its ranked keywords.
//
// Returns 200 with { "words": [...] } on success. Failures map to
// 400 (invalid URL), 502 (fetch failed) or 422 (no article text / too short),
// with the message under "detail".

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::output::WordCloud;
use crate::web::{api_error, status_for, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match state
        .analyzer
        .analyze_url(state.fetcher.as_ref(), &request.url)
        .await
    {
        Ok(analysis) => Json(WordCloud {
            words: &analysis.keywords,
        })
        .into_response(),
        Err(e) => api_error(status_for(&e), &e.to_string()),
    }
}
