//! Configuration management for Lambda functions.

use std::env;
use std::fmt;

use crate::{Error, Result};

const DEFAULT_TITLE_PROPERTY: &str = "이름";
const DEFAULT_MONTHS_PROPERTY: &str = "월";
const DEFAULT_API_URL: &str = "https://api.notion.com/v1";
const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Notion integration token, when supplied directly
    pub notion_api_key: Option<String>,
    /// ARN of the secret holding the Notion token
    pub notion_api_key_secret_arn: Option<String>,
    /// Database holding the wishes
    pub notion_database_id: String,
    /// Name of the title property
    pub title_property: String,
    /// Name of the multi-select property holding the months
    pub months_property: String,
    /// Notion API base URL
    pub notion_api_url: String,
    /// Value sent in the `Notion-Version` header
    pub notion_version: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let notion_api_key = non_empty("NOTION_API_KEY");
        let notion_api_key_secret_arn = non_empty("NOTION_API_KEY_SECRET_ARN");
        if notion_api_key.is_none() && notion_api_key_secret_arn.is_none() {
            return Err(Error::Config(
                "NOTION_API_KEY or NOTION_API_KEY_SECRET_ARN must be set".to_string(),
            ));
        }

        let notion_database_id = non_empty("NOTION_DATABASE_ID")
            .ok_or_else(|| Error::Config("NOTION_DATABASE_ID not set".to_string()))?;

        Ok(Self {
            notion_api_key,
            notion_api_key_secret_arn,
            notion_database_id,
            title_property: non_empty("NOTION_TITLE_PROPERTY")
                .unwrap_or_else(|| DEFAULT_TITLE_PROPERTY.to_string()),
            months_property: non_empty("NOTION_MONTHS_PROPERTY")
                .unwrap_or_else(|| DEFAULT_MONTHS_PROPERTY.to_string()),
            notion_api_url: non_empty("NOTION_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            notion_version: non_empty("NOTION_VERSION")
                .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("notion_api_key", &self.notion_api_key.as_ref().map(|_| "<redacted>"))
            .field("notion_api_key_secret_arn", &self.notion_api_key_secret_arn)
            .field("notion_database_id", &self.notion_database_id)
            .field("title_property", &self.title_property)
            .field("months_property", &self.months_property)
            .field("notion_api_url", &self.notion_api_url)
            .field("notion_version", &self.notion_version)
            .finish()
    }
}
