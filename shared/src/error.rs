//! Error types for the wishlist Lambda functions.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving wishlist requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Notion answered with an error body
    #[error("{message}")]
    Notion {
        status: u16,
        code: String,
        message: String,
    },

    /// Transport or decoding failure talking to Notion
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body failed to parse or validate
    #[error("Invalid request body: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error body returned by the Notion API.
#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl Error {
    /// Build an error from a non-success Notion response.
    pub fn from_notion_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<NotionErrorBody>(body) {
            Ok(parsed) if !parsed.message.is_empty() => Error::Notion {
                status,
                code: parsed.code,
                message: parsed.message,
            },
            _ => Error::Notion {
                status,
                code: String::new(),
                message: format!("Notion request failed with status {}", status),
            },
        }
    }

    /// Get HTTP status code for this error.
    ///
    /// Store failures are not distinguished by kind; only request
    /// validation maps to a client error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }
}
