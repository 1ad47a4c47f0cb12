use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagChatError {
    #[error("Query failed with code {status}, reason {reason}")]
    SearchFailed { status: u16, reason: String },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<reqwest::Error> for RagChatError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<config::ConfigError> for RagChatError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<url::ParseError> for RagChatError {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("invalid endpoint URL: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, RagChatError>;
