use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Response,
};
use serde::Serialize;
use tracing::debug;

use crate::config::TargetConfig;
use crate::error::{Result, ScenarioError};

pub const JSON_CONTENT_TYPE: &str = "application/json";

const USER_AGENT_VALUE: &str = concat!("dogfood-loadtest/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a pooled `reqwest::Client` bound to one base URL.
///
/// Cloning is cheap and clones share the connection pool, so one issuer can
/// serve any number of concurrent invocations.
#[derive(Debug, Clone)]
pub struct RequestIssuer {
    base_url: String,
    client: reqwest::Client,
}

impl RequestIssuer {
    pub fn new(target: &TargetConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let client = reqwest::Client::builder()
            .timeout(target.timeout())
            .connect_timeout(target.connect_timeout())
            .default_headers(headers)
            .build()
            .map_err(ScenarioError::Client)?;
        Ok(Self {
            base_url: target.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Serialize `payload` and POST it as `application/json`.
    ///
    /// The status code is not looked at.
    pub async fn post_json<T>(&self, path: &str, payload: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;
        let url = self.endpoint(path);
        debug!(%url, bytes = body.len(), "POST");
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(body)
            .send()
            .await?;
        Ok(resp)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        Ok(self.client.get(url).send().await?)
    }
}
