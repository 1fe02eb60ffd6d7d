use anyhow::{Context, Result};
use dogfood_loadtest::{config, scenario, telemetry};
use config::Config;
use scenario::{ResponseSummary, ScenarioKind};
use std::time::Instant;
use telemetry::init_tracing;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut cfg = Config::load()?;

    if let Some(arg) = std::env::args().nth(1) {
        cfg.scenario = arg
            .parse::<ScenarioKind>()
            .with_context(|| format!("unknown scenario '{arg}'"))?;
    }

    let scenario = scenario::build(cfg.scenario, &cfg)?;

    info!(
        scenario = %cfg.scenario,
        target = %cfg.target.base_url,
        path = cfg.scenario.path(),
        "issuing request"
    );

    let started = Instant::now();
    let resp = tokio::select! {
        res = scenario.run() => res,
        _ = telemetry::shutdown_signal() => {
            warn!("aborted before a response arrived");
            return Ok(());
        }
    };

    match resp {
        Ok(resp) => {
            ResponseSummary::new(&resp, started.elapsed()).log(cfg.scenario);
            Ok(())
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "request failed");
            Err(e.into())
        }
    }
}
