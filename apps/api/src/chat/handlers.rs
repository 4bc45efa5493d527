use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    /// Omitted on the first message; the response carries the id to reuse.
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub session_id: Uuid,
    /// Which path answered: "rules", "retrieval", "miss", or "degraded".
    pub source: &'static str,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question must not be empty".to_string()));
    }

    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    let mut session = state.sessions.get(session_id);

    let resolution = state.resolver.resolve(question, &mut session).await;
    state.sessions.put(session_id, session);

    Ok(Json(ChatResponse {
        answer: resolution.answer,
        session_id,
        source: resolution.source.as_str(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub helpful: bool,
    pub question: String,
}

/// POST /api/v1/feedback
///
/// Always 204: feedback is best-effort telemetry and a failed write must not
/// bubble up to the user.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> StatusCode {
    state.feedback.append(req.helpful, &req.question).await;
    StatusCode::NO_CONTENT
}
