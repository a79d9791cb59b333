use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a helpful assistant. Format answers with `# ` for the title, \
`## ` for section headings, `- ` for bullet points and **double asterisks** \
for emphasis. Do not use tables, links or code blocks.";

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Local listen address. Ignored when running under AWS Lambda.
    pub bind: SocketAddr,
    pub region: String,
    pub profile: Option<String>,
    pub model_id: String,
    pub system_prompt: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,
    pub on_lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = var("ANSWERDOC_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid ANSWERDOC_BIND {bind_raw:?}: {e}"))?;

        let on_lambda = var("AWS_LAMBDA_RUNTIME_API").is_some();
        let log_json = match var("ANSWERDOC_LOG_JSON") {
            Some(v) => parse_flag(&v)
                .ok_or_else(|| eyre::eyre!("invalid ANSWERDOC_LOG_JSON {v:?}: expected true/false"))?,
            None => on_lambda,
        };

        Ok(Self {
            bind,
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            profile: var("AWS_PROFILE"),
            model_id: var("ANSWERDOC_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            system_prompt: var("ANSWERDOC_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            log_json,
            on_lambda,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
