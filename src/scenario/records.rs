use async_trait::async_trait;
use reqwest::Response;
use tracing::debug;
use validator::Validate;

use super::{RequestIssuer, Scenario, ScenarioKind, CREATE_RECORD_PATH, LIST_RECORDS_PATH};
use crate::config::{PayloadConfig, RecordConfig, TargetConfig};
use crate::domain::{CreateRecordRequest, ListRecordsRequest};
use crate::error::Result;

/// `POST /v1/dogfood/records` with a `from`/`page_size`/`to` range query.
#[derive(Debug, Clone)]
pub struct ListRecordsScenario {
    issuer: RequestIssuer,
    payload: PayloadConfig,
}

impl ListRecordsScenario {
    pub fn new(issuer: RequestIssuer, payload: PayloadConfig) -> Self {
        Self { issuer, payload }
    }

    /// Default target and the built-in payload.
    pub fn with_defaults() -> Result<Self> {
        let issuer = RequestIssuer::new(&TargetConfig::default())?;
        Ok(Self::new(issuer, PayloadConfig::default()))
    }

    pub fn issuer(&self) -> &RequestIssuer {
        &self.issuer
    }

    pub fn request(&self) -> ListRecordsRequest {
        ListRecordsRequest::from(&self.payload)
    }
}

#[async_trait]
impl Scenario for ListRecordsScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ListRecords
    }

    async fn run(&self) -> Result<Response> {
        let request = self.request();
        request.validate()?;
        debug!(from = %request.from, to = %request.to, page_size = request.page_size, "list records");
        self.issuer.post_json(LIST_RECORDS_PATH, &request).await
    }
}

/// `POST /v1/dogfood/record` recording one meal.
#[derive(Debug, Clone)]
pub struct CreateRecordScenario {
    issuer: RequestIssuer,
    record: RecordConfig,
}

impl CreateRecordScenario {
    pub fn new(issuer: RequestIssuer, record: RecordConfig) -> Self {
        Self { issuer, record }
    }
}

#[async_trait]
impl Scenario for CreateRecordScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::CreateRecord
    }

    async fn run(&self) -> Result<Response> {
        let request = CreateRecordRequest::from(&self.record);
        request.validate()?;
        self.issuer.post_json(CREATE_RECORD_PATH, &request).await
    }
}
