//! answerdoc-bedrock
//!
//! Question answering and chat model discovery over the Bedrock Converse API.

pub mod chat;
pub mod client;
pub mod error;
