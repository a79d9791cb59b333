use axum::Json;
use axum::extract::State;
use serde::Serialize;

use answerdoc_bedrock::chat::{ModelSummary, list_models};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub count: usize,
    pub models: Vec<ModelSummary>,
}

/// Connectivity check: which models the configured credentials can see.
pub async fn list_available_models(
    State(state): State<AppState>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let models = list_models(&state.aws)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "model listing failed"))?;
    Ok(Json(ModelsResponse {
        count: models.len(),
        models,
    }))
}
