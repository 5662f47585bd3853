use crate::config::ResolvedConfig;
use crate::error::{LlmError, Result};
use crate::types::{Message, ToolDeclaration};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Deserializer, Serialize};

pub const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub system: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDeclaration>,
}

impl AnthropicRequest {
    pub fn new(config: &ResolvedConfig, messages: Vec<Message>, tools: Vec<ToolDeclaration>) -> Self {
        Self {
            model: config.model().to_string(),
            system: config.role().to_string(),
            max_tokens: MAX_TOKENS,
            temperature: config.temperature(),
            messages,
            tools,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default, deserialize_with = "null_as_empty_map")]
        input: serde_json::Map<String, serde_json::Value>,
    },
    /// Block types this adapter does not consume.
    #[serde(other)]
    Other,
}

fn null_as_empty_map<'de, D>(
    deserializer: D,
) -> std::result::Result<serde_json::Map<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnthropicUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnthropicResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop_sequence: Option<String>,
    #[serde(default)]
    pub usage: AnthropicUsage,
}

#[derive(Clone)]
pub struct AnthropicClient {
    http: Client,
    endpoint: String,
}

impl AnthropicClient {
    pub fn new(http: Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retries. Anything but 200 is an upstream failure.
    #[tracing::instrument(level = "info", skip_all, fields(model = %req.model))]
    pub fn send(&self, req: &AnthropicRequest, api_key: &str) -> Result<AnthropicResponse> {
        let payload =
            serde_json::to_vec(req).map_err(|e| LlmError::Serialization(e.to_string()))?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .body(payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), %body, "anthropic request failed");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "anthropic response decode failed");
            LlmError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!(
            id = %parsed.id,
            stop_reason = ?parsed.stop_reason,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            blocks = parsed.content.len(),
            "anthropic response received"
        );
        Ok(parsed)
    }
}
