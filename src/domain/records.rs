use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{PayloadConfig, RecordConfig};

/// Start of the record range queried by the list scenario.
///
/// The single-digit day is intentional; the value is sent verbatim and
/// never parsed as a timestamp.
pub const DEFAULT_FROM: &str = "2021-12-1T01:59:36.764428Z";
/// End of the record range queried by the list scenario.
pub const DEFAULT_TO: &str = "2021-12-15T02:12:17.243489800Z";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Body of `POST /v1/dogfood/records`.
///
/// Field order matters for the wire format: `from`, `page_size`, `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListRecordsRequest {
    #[validate(length(min = 1, message = "from cannot be empty"))]
    pub from: String,
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    pub page_size: u32,
    #[validate(length(min = 1, message = "to cannot be empty"))]
    pub to: String,
}

impl ListRecordsRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, page_size: u32) -> Self {
        Self {
            from: from.into(),
            page_size,
            to: to.into(),
        }
    }
}

impl Default for ListRecordsRequest {
    fn default() -> Self {
        Self::new(DEFAULT_FROM, DEFAULT_TO, DEFAULT_PAGE_SIZE)
    }
}

impl From<&PayloadConfig> for ListRecordsRequest {
    fn from(cfg: &PayloadConfig) -> Self {
        Self::new(cfg.from.clone(), cfg.to.clone(), cfg.page_size)
    }
}

/// Body of `POST /v1/dogfood/record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateRecordRequest {
    #[validate(length(min = 1, message = "dogfood_name cannot be empty"))]
    pub dogfood_name: String,
    /// Grams eaten in one meal.
    #[validate(range(min = 1, message = "gram must be positive"))]
    pub gram: i32,
    #[validate(length(min = 1, message = "dog_name cannot be empty"))]
    pub dog_name: String,
}

impl From<&RecordConfig> for CreateRecordRequest {
    fn from(cfg: &RecordConfig) -> Self {
        Self {
            dogfood_name: cfg.dogfood_name.clone(),
            gram: cfg.gram,
            dog_name: cfg.dog_name.clone(),
        }
    }
}
