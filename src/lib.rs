//! Bot-detection gate client.
//!
//! Forwards a visitor's IP address and User-Agent string to the remote
//! detection service and relays the block/allow verdict back to the caller.
//!
//! # Features
//!
//! - **Context extraction** - Pull client IP and User-Agent out of any
//!   inbound request type via the [`InboundRequest`] trait
//! - **Address validation** - Refuse malformed and local/private addresses
//!   before any network traffic, with distinct errors for each
//! - **Typed failures** - Validation, transport, protocol, and
//!   service-reported failures stay distinct; fail-open is a caller choice
//! - **Usage counters** - Query quota consumption for the configured key
//!
//! # Example
//!
//! ```ignore
//! use request_gate::{Decision, RequestGate};
//!
//! let gate = RequestGate::new("your-api-key")?;
//!
//! match gate.check("203.0.113.5", "Mozilla/5.0").await {
//!     Ok(decision) if decision.block => deny(),
//!     Ok(decision) => serve(decision.ip_location),
//!     Err(err) => {
//!         // The caller decides the failure policy; this one fails open.
//!         tracing::warn!(error = %err, "gate check failed");
//!         serve(None)
//!     }
//! }
//! ```

pub mod addr;
pub mod client;
pub mod config;
pub mod context;
pub mod decision;
pub mod error;

pub use client::RequestGate;
pub use config::GateConfig;
pub use context::{extract_context, ClientContext, InboundRequest};
pub use decision::{Decision, UsageStats};
pub use error::Error;
