//! API Lambda handler.
//!
//! This module handles:
//! - Adapting an API Gateway proxy event into an [`InboundRequest`]
//! - Signature verification (delegated to `signature`)
//! - Interaction parsing (delegated to `interaction`)
//! - Building the reply (delegated to `discord::response_builder`)

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use base64::{Engine as _, engine::general_purpose};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use super::helpers::{HttpReply, err_response, ok_json};
use super::interaction::{Interaction, extract_fields, parse_interaction};
use super::observer::{InteractionObserver, TracingObserver};
use super::parsing::resolve_header;
use super::signature;
use crate::core::config::AppConfig;
use crate::discord::{ReplyDocument, build_poll_reply, build_pong};
use crate::errors::InteractionError;

pub use self::function_handler as handler;

/// One webhook call as received: lower-cased headers, the exact body bytes
/// and the body parsed as JSON when it is JSON.
///
/// Header names that collide once lower-cased keep their value only when
/// every spelling agrees; otherwise the header is dropped as ambiguous.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    headers: HashMap<String, String>,
    raw_body: Vec<u8>,
    parsed_body: Option<Value>,
}

impl InboundRequest {
    #[must_use]
    pub fn new(headers: HashMap<String, String>, raw_body: Vec<u8>) -> Self {
        let mut lowered: HashMap<String, Option<String>> = HashMap::new();
        for (name, value) in headers {
            match lowered.entry(name.to_ascii_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(Some(value));
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().as_deref() != Some(value.as_str()) {
                        slot.insert(None);
                    }
                }
            }
        }
        let headers = lowered
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();
        let parsed_body = serde_json::from_slice(&raw_body).ok();
        Self {
            headers,
            raw_body,
            parsed_body,
        }
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        &self.raw_body
    }

    #[must_use]
    pub fn parsed_body(&self) -> Option<&Value> {
        self.parsed_body.as_ref()
    }
}

/// Lambda handler for the interactions endpoint.
///
/// Every rejection is turned into a proxy response; the runtime only ever
/// sees `Ok`.
///
/// # Errors
///
/// Never returns an error; the `Result` is what `lambda_runtime` expects.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let request = request_from_event(&event.payload);
    let reply = handle_request(config, &request, &TracingObserver);
    info!(status = reply.status_code, "Interaction handled");
    Ok(reply.to_proxy_response())
}

/// Run the full pipeline for one request.
pub fn handle_request(
    config: &AppConfig,
    request: &InboundRequest,
    observer: &dyn InteractionObserver,
) -> HttpReply {
    match process(config, request, observer) {
        Ok(document) => ok_json(&document),
        Err(e) => {
            warn!(status = e.status_code(), reason = %e, "Interaction rejected");
            err_response(e)
        }
    }
}

fn process(
    config: &AppConfig,
    request: &InboundRequest,
    observer: &dyn InteractionObserver,
) -> Result<ReplyDocument, InteractionError> {
    signature::verify_request(request.headers(), request.raw_body(), config)?;

    match parse_interaction(request.parsed_body())? {
        Interaction::Ping => Ok(build_pong()),
        Interaction::ApplicationCommand { options } => {
            let fields = extract_fields(&options)?;
            observer.on_command(&fields);
            Ok(build_poll_reply(&fields))
        }
    }
}

/// Build an [`InboundRequest`] from an API Gateway (v1 or v2) proxy event.
///
/// Each header name is lower-cased and resolved once with [`resolve_header`],
/// so spellings differing only in case give the same answer on every call.
/// Non-string header values are dropped. A body flagged `isBase64Encoded` is
/// decoded; if it does not decode the request is treated as having no body.
#[must_use]
pub fn request_from_event(payload: &Value) -> InboundRequest {
    let headers: HashMap<String, String> = payload
        .get("headers")
        .map(|headers| {
            headers
                .as_object()
                .into_iter()
                .flat_map(|map| map.keys())
                .map(|name| name.to_ascii_lowercase())
                .filter_map(|name| {
                    let value = resolve_header(headers, &name)?.to_string();
                    Some((name, value))
                })
                .collect()
        })
        .unwrap_or_default();

    let body = payload.get("body").and_then(Value::as_str).unwrap_or("");
    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let raw_body = if is_base64 {
        general_purpose::STANDARD.decode(body).unwrap_or_else(|e| {
            warn!("Failed to decode base64 body: {}", e);
            Vec::new()
        })
    } else {
        body.as_bytes().to_vec()
    };

    InboundRequest::new(headers, raw_body)
}
