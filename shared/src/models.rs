//! Shared data models.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::notion::is_page_id;

/// A wishlist goal as seen by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishRecord {
    pub id: String,
    pub text: String,
    pub months: Vec<i64>,
}

/// POST payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWishRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

/// PUT payload. The month set replaces the stored one entirely.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWishRequest {
    #[validate(custom(function = "validate_page_id"))]
    pub id: String,
    #[validate(custom(function = "validate_months"))]
    pub months: Vec<i64>,
}

/// DELETE payload.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteWishRequest {
    #[validate(custom(function = "validate_page_id"))]
    pub id: String,
}

/// Acknowledgement returned by DELETE.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

fn validate_page_id(id: &str) -> Result<(), ValidationError> {
    if is_page_id(id) {
        Ok(())
    } else {
        let mut err = ValidationError::new("page_id");
        err.message = Some("id must be a Notion page id".into());
        Err(err)
    }
}

fn validate_months(months: &[i64]) -> Result<(), ValidationError> {
    if months.iter().all(|m| (1..=12).contains(m)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("month_range");
        err.message = Some("months must be between 1 and 12".into());
        Err(err)
    }
}
