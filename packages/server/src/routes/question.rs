//! Follow-up questions against a previously generated narrative.

use analysis::narrative_or_failure;
use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(rename = "질문")]
    question: Option<String>,

    #[serde(rename = "분석내용")]
    analysis: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    #[serde(rename = "답변")]
    answer: String,
}

/// Answer a follow-up question about an earlier analysis.
///
/// Same degradation contract as the narrative field: the answer is always a
/// string, embedding the failure marker when the external call fails.
pub async fn question_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = request
        .question
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("질문을 입력해야 합니다."))?;
    let analysis = request
        .analysis
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("분석내용이 필요합니다."))?;

    debug!(question_len = question.len(), "answering follow-up question");

    let answer = narrative_or_failure(state.analyst.answer(&analysis, &question).await);

    Ok(Json(QuestionResponse { answer }))
}
