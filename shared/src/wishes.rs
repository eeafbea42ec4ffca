//! Wish record adapter: Notion pages in, `WishRecord`s out.

use std::future::Future;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::months::{months_to_options, options_to_months};
use crate::notion::{NotionClient, Page, PropertyValue};
use crate::{Config, Result, WishRecord};

/// Names of the database properties backing a wish.
#[derive(Debug, Clone)]
pub struct PropertySchema {
    pub title: String,
    pub months: String,
}

impl PropertySchema {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title_property.clone(),
            months: config.months_property.clone(),
        }
    }
}

/// Convert a Notion page into a wish.
///
/// Missing or mistyped properties yield an empty `text` or `months`.
pub fn page_to_wish(page: &Page, schema: &PropertySchema) -> WishRecord {
    let text = match page.properties.get(&schema.title) {
        Some(PropertyValue::Title { title }) => title
            .first()
            .and_then(|segment| {
                segment
                    .text
                    .as_ref()
                    .map(|t| t.content.clone())
                    .or_else(|| segment.plain_text.clone())
            })
            .unwrap_or_default(),
        _ => String::new(),
    };

    let months = match page.properties.get(&schema.months) {
        Some(PropertyValue::MultiSelect { multi_select }) => options_to_months(multi_select),
        _ => Vec::new(),
    };

    WishRecord {
        id: page.id.clone(),
        text,
        months,
    }
}

/// Backing store for wishes.
pub trait WishStore: Send + Sync {
    /// All non-archived wishes, oldest first.
    fn list(&self) -> impl Future<Output = Result<Vec<WishRecord>>> + Send;

    /// Create a wish with no months.
    fn create(&self, text: &str) -> impl Future<Output = Result<WishRecord>> + Send;

    /// Replace the month set of an existing wish.
    fn update_months(
        &self,
        id: &str,
        months: &[i64],
    ) -> impl Future<Output = Result<WishRecord>> + Send;

    /// Archive a wish.
    fn archive(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// `WishStore` backed by a Notion database.
pub struct NotionWishStore {
    client: NotionClient,
    database_id: String,
    schema: PropertySchema,
}

impl NotionWishStore {
    pub fn new(client: NotionClient, database_id: impl Into<String>, schema: PropertySchema) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            schema,
        }
    }

    /// Build the store from configuration and a resolved API key.
    pub fn from_config(config: &Config, api_key: impl Into<String>) -> Result<Self> {
        let client = NotionClient::new(
            reqwest::Client::new(),
            &config.notion_api_url,
            api_key,
            config.notion_version.clone(),
        )?;
        Ok(Self::new(
            client,
            config.notion_database_id.clone(),
            PropertySchema::from_config(config),
        ))
    }

    fn query_body() -> Value {
        json!({
            "sorts": [{ "timestamp": "created_time", "direction": "ascending" }]
        })
    }

    fn create_body(&self, text: &str) -> Value {
        json!({
            "parent": { "database_id": self.database_id },
            "properties": {
                self.schema.title.as_str(): { "title": [{ "text": { "content": text } }] },
                self.schema.months.as_str(): { "multi_select": [] }
            }
        })
    }

    fn update_months_body(&self, months: &[i64]) -> Value {
        json!({
            "properties": {
                self.schema.months.as_str(): { "multi_select": months_to_options(months) }
            }
        })
    }

    fn archive_body() -> Value {
        json!({ "archived": true })
    }
}

impl WishStore for NotionWishStore {
    async fn list(&self) -> Result<Vec<WishRecord>> {
        let response = self
            .client
            .query_database(&self.database_id, &Self::query_body())
            .await?;

        if response.has_more {
            warn!(
                returned = response.results.len(),
                "Database has more wishes than one query page; listing the first page only"
            );
        }

        Ok(response
            .results
            .iter()
            .map(|page| page_to_wish(page, &self.schema))
            .collect())
    }

    async fn create(&self, text: &str) -> Result<WishRecord> {
        let page = self.client.create_page(&self.create_body(text)).await?;
        info!(id = %page.id, "Created wish");
        Ok(page_to_wish(&page, &self.schema))
    }

    async fn update_months(&self, id: &str, months: &[i64]) -> Result<WishRecord> {
        let page = self
            .client
            .update_page(id, &self.update_months_body(months))
            .await?;
        info!(id = %page.id, months = ?months, "Updated wish months");
        Ok(page_to_wish(&page, &self.schema))
    }

    async fn archive(&self, id: &str) -> Result<()> {
        self.client.update_page(id, &Self::archive_body()).await?;
        info!(id, "Archived wish");
        Ok(())
    }
}
