//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use tracing::info;

use crate::{Config, Error, Result};

/// Notion credentials stored as a JSON secret.
#[derive(Debug, Deserialize)]
pub struct NotionCredentials {
    pub api_key: String,
}

/// Get a secret value from Secrets Manager.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    Ok(secret_string)
}

/// Extract the Notion token from a secret string.
///
/// Accepts either a JSON object with an `api_key` field or the bare token.
pub fn parse_api_key(secret_string: &str) -> Result<String> {
    let trimmed = secret_string.trim();
    if trimmed.starts_with('{') {
        let creds: NotionCredentials = serde_json::from_str(trimmed)
            .map_err(|e| Error::Aws(format!("Failed to parse Notion credentials: {}", e)))?;
        return Ok(creds.api_key);
    }
    if trimmed.is_empty() {
        return Err(Error::Aws("Notion credentials secret is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Resolve the Notion token, reading Secrets Manager only when no key was
/// supplied directly.
pub async fn resolve_api_key(config: &Config) -> Result<String> {
    if let Some(key) = &config.notion_api_key {
        return Ok(key.clone());
    }

    let secret_arn = config
        .notion_api_key_secret_arn
        .as_deref()
        .ok_or_else(|| Error::Config("No Notion credentials configured".to_string()))?;

    info!(secret_arn, "Loading Notion API key from Secrets Manager");

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = SecretsClient::new(&aws_config);
    let secret_string = get_secret(&client, secret_arn).await?;

    parse_api_key(&secret_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_credentials() {
        let json = r#"{"api_key":"secret_123"}"#;
        assert_eq!(parse_api_key(json).unwrap(), "secret_123");
    }

    #[test]
    fn test_parse_bare_token() {
        assert_eq!(parse_api_key("  secret_123\n").unwrap(), "secret_123");
    }

    #[test]
    fn test_parse_rejects_empty_and_bad_json() {
        assert!(parse_api_key("").is_err());
        assert!(parse_api_key(r#"{"token":"x"}"#).is_err());
    }
}
