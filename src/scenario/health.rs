use async_trait::async_trait;
use reqwest::Response;

use super::{RequestIssuer, Scenario, ScenarioKind};
use crate::error::Result;

/// One GET against a gateway health check, useful as a warm-up before a run.
///
/// `kind` picks the probe: liveness, readiness or startup.
#[derive(Debug, Clone)]
pub struct ProbeScenario {
    issuer: RequestIssuer,
    kind: ScenarioKind,
}

impl ProbeScenario {
    pub fn new(issuer: RequestIssuer, kind: ScenarioKind) -> Self {
        debug_assert!(kind.is_probe(), "{kind} is not a health probe");
        Self { issuer, kind }
    }
}

#[async_trait]
impl Scenario for ProbeScenario {
    fn kind(&self) -> ScenarioKind {
        self.kind
    }

    async fn run(&self) -> Result<Response> {
        self.issuer.get(self.kind.path()).await
    }
}
