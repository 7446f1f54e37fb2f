//! Error types for gate operations.

use std::net::IpAddr;

/// Error from a gate operation.
///
/// Validation, transport, protocol, and service-reported failures are kept
/// distinct so callers can pick a fail-open or fail-closed policy per kind.
/// The client never collapses a failure into an allow on its own.
#[derive(Debug)]
pub enum Error {
    /// API key was empty at construction.
    MissingApiKey,
    /// Address is loopback, private, link-local, or unique-local.
    /// The service has no meaningful signal for these.
    LocalAddress(IpAddr),
    /// Address is not a valid IPv4 or IPv6 literal.
    InvalidAddress(String),
    /// HTTP request failed, timeouts included.
    Transport(reqwest::Error),
    /// Response body was not valid JSON.
    Protocol(String),
    /// Service reported a failure.
    Remote(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingApiKey => write!(f, "API key is empty"),
            Error::LocalAddress(ip) => {
                write!(f, "Local IP addresses are not processed: {}", ip)
            }
            Error::InvalidAddress(raw) => write!(f, "Invalid IP address: {}", raw),
            Error::Transport(e) => write!(f, "HTTP error: {}", e),
            Error::Protocol(msg) => write!(f, "Invalid response: {}", msg),
            Error::Remote(msg) => write!(f, "Service error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e)
    }
}
