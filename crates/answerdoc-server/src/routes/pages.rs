use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::pages::render_page;
use crate::state::AppState;

fn page(state: &AppState, template: &str, title: &str) -> Result<Html<String>, ApiError> {
    let body = render_page(&state.pages, template, title, &state.model_id)?;
    Ok(Html(body))
}

pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page(&state, "landing.html", "answerdoc")
}

pub async fn chatbot(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page(&state, "chat.html", "Chat")
}

pub async fn docqa(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page(&state, "docqa.html", "Document Q&A")
}

pub async fn coming_soon(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page(&state, "comingsoon.html", "Coming soon")
}
