//! Anthropic Messages API completion adapter.
//!
//! Resolves host configuration, builds the request, performs one blocking
//! call and normalizes the reply into plain text or tool invocations.

mod anthropic;
mod client;
mod config;
mod error;
mod models;
mod translate;
mod types;

pub use anthropic::{
    ANTHROPIC_MESSAGES_URL, ANTHROPIC_VERSION, AnthropicContentBlock, AnthropicRequest,
    AnthropicResponse, AnthropicUsage, MAX_TOKENS,
};
pub use client::LlmClient;
pub use config::{
    ConfigSource, KEY_API_KEY, KEY_MODEL, KEY_ROLE, KEY_TEMPERATURE, ResolvedConfig,
};
pub use error::{LlmError, Result};
pub use models::{Model, default_model, models, resolve_model};
pub use translate::{extract_text, extract_tool_calls};
pub use types::{
    InputSchema, Message, Property, Role, ToolCompletionInput, ToolDeclaration, ToolInvocation,
};
