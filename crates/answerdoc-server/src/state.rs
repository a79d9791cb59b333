use std::sync::Arc;

use answerdoc_core::answer::AnswerSlot;
use answerdoc_export::styles::ExportStyles;
use tera::Tera;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub aws: aws_config::SdkConfig,
    pub model_id: String,
    pub system_prompt: String,
    /// Most recent answer. Overwritten by `/ask`, read by the downloads.
    pub answer: Arc<AnswerSlot>,
    pub pages: Arc<Tera>,
    pub styles: Arc<ExportStyles>,
}

impl AppState {
    pub fn new(config: &ServerConfig, aws: aws_config::SdkConfig, pages: Tera) -> Self {
        Self {
            aws,
            model_id: config.model_id.clone(),
            system_prompt: config.system_prompt.clone(),
            answer: Arc::new(AnswerSlot::new()),
            pages: Arc::new(pages),
            styles: Arc::new(ExportStyles::default()),
        }
    }
}
