//! Inbound request metadata extraction.

use crate::addr;
use std::net::IpAddr;

/// Narrow view of an inbound HTTP request.
///
/// Implement this for whatever request type the host framework provides;
/// the gate only needs header lookup and the transport-level peer address.
/// Implementations must match header names case-insensitively (lookups use
/// lowercase names).
pub trait InboundRequest {
    /// Look up a header value by name.
    fn header(&self, name: &str) -> Option<&str>;

    /// Transport-level peer address, if known.
    fn peer_addr(&self) -> Option<IpAddr>;
}

/// Client metadata extracted from one inbound request.
///
/// Extraction is a pure read: `ip` may still be empty or malformed here,
/// and [`RequestGate::check`](crate::RequestGate::check) classifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    /// Client IP as text.
    pub ip: String,
    /// Opaque User-Agent text. Empty when the header is absent.
    pub user_agent: String,
}

/// Extract IP and User-Agent from an inbound request.
///
/// Prefers the first entry of `x-forwarded-for`, falling back to the peer
/// address. IPv4-mapped IPv6 forms collapse to plain IPv4.
pub fn extract_context<R: InboundRequest>(request: &R) -> ClientContext {
    let ip = request
        .header("x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| request.peer_addr().map(|a| a.to_string()))
        .unwrap_or_default();

    // Canonicalize valid literals; junk is left for check() to classify.
    let ip = match ip.parse::<IpAddr>() {
        Ok(parsed) => addr::canonicalize(parsed).to_string(),
        Err(_) => ip,
    };

    let user_agent = request
        .header("user-agent")
        .unwrap_or_default()
        .to_string();

    ClientContext { ip, user_agent }
}
