//! Request scenarios against the dogfood gateway.
//!
//! Each scenario builds its payload fresh and issues exactly one request per
//! `run`. Scheduling, repetition and result aggregation belong to whatever
//! harness calls into this module.

pub mod health;
pub mod issuer;
pub mod records;
pub mod summary;

pub use health::*;
pub use issuer::*;
pub use records::*;
pub use summary::*;

use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};

use crate::config::Config;
use crate::error::Result;

pub const LIST_RECORDS_PATH: &str = "/v1/dogfood/records";
pub const CREATE_RECORD_PATH: &str = "/v1/dogfood/record";
pub const LIVENESS_PROBE_PATH: &str = "/v1/healthcheck/livenessProbe";
pub const READINESS_PROBE_PATH: &str = "/v1/healthcheck/readinessProbe";
pub const STARTUP_PROBE_PATH: &str = "/v1/healthcheck/startupProbe";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScenarioKind {
    #[default]
    ListRecords,
    CreateRecord,
    LivenessProbe,
    ReadinessProbe,
    StartupProbe,
}

// Config values go through the same case-insensitive parser as CLI arguments.
impl TryFrom<String> for ScenarioKind {
    type Error = strum::ParseError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl ScenarioKind {
    pub fn path(&self) -> &'static str {
        match self {
            ScenarioKind::ListRecords => LIST_RECORDS_PATH,
            ScenarioKind::CreateRecord => CREATE_RECORD_PATH,
            ScenarioKind::LivenessProbe => LIVENESS_PROBE_PATH,
            ScenarioKind::ReadinessProbe => READINESS_PROBE_PATH,
            ScenarioKind::StartupProbe => STARTUP_PROBE_PATH,
        }
    }

    pub fn is_probe(&self) -> bool {
        matches!(
            self,
            ScenarioKind::LivenessProbe | ScenarioKind::ReadinessProbe | ScenarioKind::StartupProbe
        )
    }
}

#[async_trait]
pub trait Scenario: Send + Sync {
    fn kind(&self) -> ScenarioKind;

    /// Issue one request and hand back the response, whatever its status.
    async fn run(&self) -> Result<Response>;
}

/// Build the scenario `kind` against the target in `cfg`.
pub fn build(kind: ScenarioKind, cfg: &Config) -> Result<Arc<dyn Scenario>> {
    let issuer = RequestIssuer::new(&cfg.target)?;
    let scenario: Arc<dyn Scenario> = match kind {
        ScenarioKind::ListRecords => {
            Arc::new(ListRecordsScenario::new(issuer, cfg.payload.clone()))
        }
        ScenarioKind::CreateRecord => {
            Arc::new(CreateRecordScenario::new(issuer, cfg.record.clone()))
        }
        ScenarioKind::LivenessProbe
        | ScenarioKind::ReadinessProbe
        | ScenarioKind::StartupProbe => Arc::new(ProbeScenario::new(issuer, kind)),
    };
    Ok(scenario)
}

/// One list-records request with the built-in payload against
/// `http://localhost:50101`.
pub async fn list_records() -> Result<Response> {
    ListRecordsScenario::with_defaults()?.run().await
}
