//! The gate client.

use crate::addr;
use crate::config::GateConfig;
use crate::context::{extract_context, ClientContext, InboundRequest};
use crate::decision::{Decision, UsageStats};
use crate::error::Error;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Outbound User-Agent identifying this client to the service.
const CLIENT_USER_AGENT: &str = concat!("request-gate/", env!("CARGO_PKG_VERSION"));

/// Client for the remote bot-detection service.
///
/// Holds the API key and configuration profile across calls; each check is
/// an independent, stateless exchange. Configuration is read-only after
/// construction, so one instance can be shared across tasks without
/// synchronization.
pub struct RequestGate {
    config: GateConfig,
    client: Client,
}

impl RequestGate {
    /// Create a client with the given API key and the `"default"` profile.
    ///
    /// Fails immediately with [`Error::MissingApiKey`] when the key is
    /// empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(GateConfig::new(api_key))
    }

    /// Create a client with an explicit configuration profile.
    pub fn with_profile(
        api_key: impl Into<String>,
        config_profile: impl Into<String>,
    ) -> Result<Self, Error> {
        let mut config = GateConfig::new(api_key);
        config.config_profile = config_profile.into();
        Self::from_config(config)
    }

    /// Create a client from a full configuration.
    pub fn from_config(config: GateConfig) -> Result<Self, Error> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { config, client })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Extract client metadata from an inbound request.
    pub fn extract_context<R: InboundRequest>(&self, request: &R) -> ClientContext {
        extract_context(request)
    }

    /// Check an IP and User-Agent against the service.
    ///
    /// Local and malformed addresses are refused before any network
    /// traffic. One outbound GET per call, no retries; the caller decides
    /// fail-open vs fail-closed per error kind.
    pub async fn check(&self, ip: &str, user_agent: &str) -> Result<Decision, Error> {
        let ip = addr::validate(ip)?.to_string();

        debug!(ip = %ip, profile = %self.config.config_profile, "Dispatching check");

        let url = format!(
            "{}/api/antiBots/{}/check",
            self.base(),
            self.config.api_key
        );
        let body = self
            .dispatch(
                &url,
                &[
                    ("config", self.config.config_profile.as_str()),
                    ("ip", ip.as_str()),
                    ("ua", user_agent),
                ],
            )
            .await?;

        let decision = Decision::from_body(&body)?;
        debug!(ip = %ip, block = decision.block, "Check complete");
        Ok(decision)
    }

    /// Extract context from an inbound request, then check it.
    pub async fn check_request<R: InboundRequest>(&self, request: &R) -> Result<Decision, Error> {
        let context = extract_context(request);
        self.check(&context.ip, &context.user_agent).await
    }

    /// Fetch usage counters for the configured API key.
    pub async fn usage(&self) -> Result<UsageStats, Error> {
        let url = format!(
            "{}/api/antiBots/{}/usage",
            self.base(),
            self.config.api_key
        );
        let body = self.dispatch(&url, &[]).await?;
        UsageStats::from_body(&body)
    }

    /// Issue one GET and return the response body.
    async fn dispatch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, Error> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Service returned an error status");
            return Err(Error::Remote(format!("HTTP {}: {}", status, body)));
        }

        Ok(body)
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}
