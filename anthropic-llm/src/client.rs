use crate::anthropic::{ANTHROPIC_MESSAGES_URL, AnthropicClient, AnthropicRequest};
use crate::config::{ConfigSource, ResolvedConfig};
use crate::error::{LlmError, Result};
use crate::models;
use crate::translate;
use crate::types::{Message, ToolCompletionInput, ToolInvocation};

/// Host-facing entry points: list models, text completion, tool completion.
#[derive(Clone)]
pub struct LlmClient {
    anthropic: AnthropicClient,
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmClient {
    pub fn new() -> Self {
        Self::with_endpoint(ANTHROPIC_MESSAGES_URL)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn with_endpoint(endpoint: &str) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("anthropic-llm/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(%e, "reqwest client build failed; falling back to default client");
                reqwest::blocking::Client::new()
            });
        Self {
            anthropic: AnthropicClient::new(http, endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.anthropic.endpoint()
    }

    pub fn models_json(&self) -> Result<String> {
        tracing::info!("returning models");
        serde_json::to_string(models::models()).map_err(|e| LlmError::Serialization(e.to_string()))
    }

    #[tracing::instrument(level = "info", skip_all)]
    pub fn completion(&self, source: &dyn ConfigSource, prompt: &str) -> Result<String> {
        let config = ResolvedConfig::resolve(source)?;
        tracing::debug!(prompt_len = prompt.len(), model = config.model(), "text completion");

        let req = AnthropicRequest::new(&config, vec![Message::user(prompt)], Vec::new());
        let resp = self.anthropic.send(&req, config.api_key())?;
        translate::extract_text(&resp)
    }

    #[tracing::instrument(level = "info", skip_all)]
    pub fn completion_with_tools(
        &self,
        source: &dyn ConfigSource,
        input: ToolCompletionInput,
    ) -> Result<Vec<ToolInvocation>> {
        let config = ResolvedConfig::resolve(source)?;
        tracing::debug!(
            tools = input.tools.len(),
            messages = input.messages.len(),
            model = config.model(),
            "tool completion"
        );

        let req = AnthropicRequest::new(&config, input.messages, input.tools);
        let resp = self.anthropic.send(&req, config.api_key())?;
        translate::extract_tool_calls(&resp)
    }
}
