//! Dispo - A Discord interactions webhook that posts a weekly availability poll.
//!
//! This crate implements a single API Lambda that receives Discord interaction
//! requests, authenticates them and answers with the poll message:
//! 1. The Ed25519 signature Discord attaches to every request is checked
//!    against the raw body before anything else is read
//! 2. The JSON body is narrowed into a typed [`api::interaction::Interaction`]
//! 3. A `PING` is acknowledged, a slash command gets an embed with a weekday
//!    select menu and two buttons
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - ed25519-dalek for request signature verification
//! - serde for the reply document
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use dispo::api::handler::{InboundRequest, handle_request};
//! use dispo::api::observer::TracingObserver;
//! use dispo::core::config::AppConfig;
//!
//! let config = AppConfig::default();
//!
//! // No signature headers: rejected before any cryptographic work
//! let request = InboundRequest::new(Default::default(), br#"{"type":1}"#.to_vec());
//! let reply = handle_request(&config, &request, &TracingObserver);
//! assert_eq!(reply.status_code, 401);
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod discord;
pub mod errors;

pub use errors::{AuthError, ConfigError, InteractionError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
///
/// Calling it again is harmless: the second subscriber is simply not installed.
///
/// # Example
///
/// ```
/// dispo::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
