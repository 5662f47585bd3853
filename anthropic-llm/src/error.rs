use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("api_key is missing or empty")]
    MissingApiKey,

    #[error("invalid temperature {value:?}: {reason}")]
    InvalidTemperature { value: String, reason: String },

    #[error("invalid model: {0:?}")]
    InvalidModel(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request serialization failed: {0}")]
    Serialization(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("upstream returned status={status} body={body}")]
    Upstream { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response contained no text content")]
    EmptyResponse,

    #[error("no tool response")]
    NoToolResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
