//! Minimal Notion REST client and wire types.

use std::collections::HashMap;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// A Notion page as returned by the pages and query endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// Property value on a page. Only the kinds the wishlist reads are modelled.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    #[serde(other)]
    Other,
}

/// One segment of rich text.
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub text: Option<TextContent>,
    #[serde(default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// A multi-select option. Only `name` is sent when writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

/// Result of a database query.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
}

/// Whether `id` looks like a Notion page id: 32 hex digits, hyphens optional.
pub fn is_page_id(id: &str) -> bool {
    let mut digits = 0;
    for c in id.chars() {
        match c {
            '-' => {}
            c if c.is_ascii_hexdigit() => digits += 1,
            _ => return false,
        }
    }
    digits == 32
}

/// Client for the Notion API.
pub struct NotionClient {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: String,
    notion_version: String,
}

impl NotionClient {
    /// Create a new Notion client.
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        api_key: impl Into<String>,
        notion_version: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid Notion API URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("Invalid Notion API URL {}", base_url)));
        }

        Ok(Self {
            http_client,
            base_url,
            api_key: api_key.into(),
            notion_version: notion_version.into(),
        })
    }

    /// `POST /databases/{id}/query`
    pub async fn query_database(&self, database_id: &str, body: &Value) -> Result<QueryResponse> {
        let url = self.endpoint(&["databases", database_id, "query"]);
        self.send(self.http_client.post(url).json(body)).await
    }

    /// `POST /pages`
    pub async fn create_page(&self, body: &Value) -> Result<Page> {
        let url = self.endpoint(&["pages"]);
        self.send(self.http_client.post(url).json(body)).await
    }

    /// `PATCH /pages/{id}`
    pub async fn update_page(&self, page_id: &str, body: &Value) -> Result<Page> {
        if !is_page_id(page_id) {
            return Err(Error::Validation(format!("{} is not a Notion page id", page_id)));
        }
        let url = self.endpoint(&["pages", page_id]);
        self.send(self.http_client.patch(url).json(body)).await
    }

    /// Append path segments to the base URL.
    ///
    /// Each segment is percent-encoded, so ids cannot add segments, a query
    /// or a fragment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.notion_version)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Notion responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_notion_response(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
