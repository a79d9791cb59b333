use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use answerdoc_bedrock::chat;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AskForm {
    pub question: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Forward a question to the model and remember the answer for download.
///
/// The stored answer is only replaced when the model call succeeds.
pub async fn ask(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = form
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("No question provided".to_string()))?;

    let answer = chat::ask(&state.aws, &state.model_id, &state.system_prompt, &question)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "ask failed"))?;

    state.answer.set(answer.clone());

    Ok(Json(AskResponse { answer }))
}
