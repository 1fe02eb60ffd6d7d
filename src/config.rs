use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{DEFAULT_FROM, DEFAULT_PAGE_SIZE, DEFAULT_TO};
use crate::scenario::ScenarioKind;

pub const CONFIG_FILE: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "DOGFOOD__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub scenario: ScenarioKind,
    pub target: TargetConfig,
    pub payload: PayloadConfig,
    pub record: RecordConfig,
}

/// Where requests go and how long the client waits for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: String,
    pub http_timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl TargetConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:50101".to_string(),
            http_timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadConfig {
    pub from: String,
    pub to: String,
    pub page_size: u32,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    pub dogfood_name: String,
    pub gram: i32,
    pub dog_name: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            dogfood_name: "kibble".to_string(),
            gram: 120,
            dog_name: "pochi".to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults, then `config/default.toml` if present, then
    /// `DOGFOOD__SECTION__KEY` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.scenario, ScenarioKind::ListRecords);
            assert_eq!(cfg.target.base_url, "http://localhost:50101");
            assert_eq!(cfg.payload.from, DEFAULT_FROM);
            assert_eq!(cfg.payload.to, DEFAULT_TO);
            assert_eq!(cfg.payload.page_size, 100);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                CONFIG_FILE,
                r#"
                    [target]
                    base_url = "http://gateway:8080"

                    [payload]
                    page_size = 25
                "#,
            )?;
            jail.set_env("DOGFOOD__PAYLOAD__PAGE_SIZE", "50");
            jail.set_env("DOGFOOD__SCENARIO", "liveness_probe");

            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.target.base_url, "http://gateway:8080");
            assert_eq!(cfg.target.http_timeout_seconds, 30);
            assert_eq!(cfg.payload.page_size, 50);
            assert_eq!(cfg.payload.from, DEFAULT_FROM);
            assert_eq!(cfg.scenario, ScenarioKind::LivenessProbe);
            Ok(())
        });
    }

    #[test]
    fn test_scenario_name_ignores_case() {
        Jail::expect_with(|jail| {
            jail.set_env("DOGFOOD__SCENARIO", "LIVENESS_PROBE");
            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.scenario, ScenarioKind::LivenessProbe);
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(CONFIG_FILE, r#"scenario = "Startup_Probe""#)?;
            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.scenario, ScenarioKind::StartupProbe);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_scenario_name_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("DOGFOOD__SCENARIO", "delete_everything");
            assert!(Config::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_timeouts() {
        let target = TargetConfig::with_base_url("http://127.0.0.1:9");
        assert_eq!(target.timeout(), Duration::from_secs(30));
        assert_eq!(target.connect_timeout(), Duration::from_secs(5));
    }
}
