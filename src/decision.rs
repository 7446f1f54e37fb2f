//! Parsed service verdicts.

use crate::error::Error;
use serde::Deserialize;
use serde_json::Value;

fn default_success() -> bool {
    true
}

/// Wire shape of a check response.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    /// Absent means nominal success.
    #[serde(default = "default_success")]
    success: bool,

    /// Absent means do not block.
    #[serde(default)]
    block: bool,

    /// Service-supplied failure message.
    #[serde(default)]
    error: Option<String>,

    /// Coarse IP location, populated at the service's discretion.
    #[serde(rename = "IPlocation", default)]
    ip_location: Option<String>,
}

/// Block/allow verdict returned by the remote service.
#[derive(Debug, Clone)]
pub struct Decision {
    /// Whether the service says to block this visitor.
    pub block: bool,

    /// Coarse location of the checked IP, when the service includes one.
    /// Optional always; never assume its presence.
    pub ip_location: Option<String>,

    /// Complete response body, verbatim.
    pub raw: Value,
}

impl Decision {
    /// Parse a check response body.
    ///
    /// A body with `success: false` surfaces as [`Error::Remote`] with the
    /// service-supplied message; a missing `block` defaults to allow.
    pub(crate) fn from_body(body: &str) -> Result<Self, Error> {
        let raw: Value =
            serde_json::from_str(body).map_err(|e| Error::Protocol(e.to_string()))?;
        let verdict: RawVerdict =
            serde_json::from_value(raw.clone()).map_err(|e| Error::Protocol(e.to_string()))?;

        if !verdict.success {
            return Err(Error::Remote(
                verdict.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(Self {
            block: verdict.block,
            ip_location: verdict.ip_location,
            raw,
        })
    }

    /// Explicit fail-open value: allow, no metadata.
    ///
    /// The client never substitutes this on its own. Callers that want the
    /// historical fail-open behavior opt in:
    ///
    /// ```ignore
    /// let decision = gate
    ///     .check(ip, ua)
    ///     .await
    ///     .unwrap_or_else(|_| Decision::fail_open());
    /// ```
    pub fn fail_open() -> Self {
        Self {
            block: false,
            ip_location: None,
            raw: Value::Null,
        }
    }
}

/// Wire shape of a usage response.
#[derive(Debug, Deserialize)]
struct RawUsage {
    #[serde(default = "default_success")]
    success: bool,

    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    requests: Option<u64>,

    #[serde(default)]
    limit: Option<u64>,
}

/// Usage counters for the configured API key.
#[derive(Debug, Clone)]
pub struct UsageStats {
    /// Requests consumed in the current billing window, when reported.
    pub requests: Option<u64>,

    /// Request quota for the current billing window, when reported.
    pub limit: Option<u64>,

    /// Complete response body, verbatim.
    pub raw: Value,
}

impl UsageStats {
    /// Parse a usage response body; same rules as [`Decision::from_body`].
    pub(crate) fn from_body(body: &str) -> Result<Self, Error> {
        let raw: Value =
            serde_json::from_str(body).map_err(|e| Error::Protocol(e.to_string()))?;
        let usage: RawUsage =
            serde_json::from_value(raw.clone()).map_err(|e| Error::Protocol(e.to_string()))?;

        if !usage.success {
            return Err(Error::Remote(
                usage.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(Self {
            requests: usage.requests,
            limit: usage.limit,
            raw,
        })
    }
}
