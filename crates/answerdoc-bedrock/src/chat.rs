//! Question answering over the Bedrock Converse API, plus a model listing
//! used as a credentials/connectivity check.
//!
//! Required IAM actions: `bedrock:InvokeModel` for [`ask`] and
//! `bedrock:ListFoundationModels` for [`list_models`].

use aws_sdk_bedrock::types::FoundationModelLifecycleStatus;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use serde::Serialize;
use tracing::info;

use crate::error::BedrockError;

/// A foundation model the configured account can see.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub model_id: String,
    pub name: String,
}

/// Ask a single question and return the model's answer text.
///
/// `model_id` must be an inference profile id (e.g.
/// `us.anthropic.claude-sonnet-4-20250514-v1:0`); bare foundation model ids
/// are rejected for on-demand throughput.
pub async fn ask(
    config: &aws_config::SdkConfig,
    model_id: &str,
    system_prompt: &str,
    question: &str,
) -> Result<String, BedrockError> {
    require_region(config)?;
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(question.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let reply = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = response_text(reply.content());
    info!(model_id, chars = text.len(), "received model reply");

    Ok(text)
}

/// Active Anthropic foundation models, sorted by id.
pub async fn list_models(
    config: &aws_config::SdkConfig,
) -> Result<Vec<ModelSummary>, BedrockError> {
    require_region(config)?;
    let client = aws_sdk_bedrock::Client::new(config);

    let response = client
        .list_foundation_models()
        .by_provider("anthropic")
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let mut models: Vec<ModelSummary> = response
        .model_summaries()
        .iter()
        .filter(|m| {
            m.model_lifecycle()
                .is_some_and(|lc| *lc.status() == FoundationModelLifecycleStatus::Active)
        })
        .map(|m| ModelSummary {
            model_id: m.model_id().to_string(),
            name: m.model_name().unwrap_or(m.model_id()).to_string(),
        })
        .collect();
    models.sort_by(|a, b| a.model_id.cmp(&b.model_id));

    info!(count = models.len(), "listed models");

    Ok(models)
}

/// Concatenate the text blocks of a reply, ignoring non-text content.
pub fn response_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn require_region(config: &aws_config::SdkConfig) -> Result<(), BedrockError> {
    if config.region().is_none() {
        return Err(BedrockError::Config("no AWS region configured".to_string()));
    }
    Ok(())
}
