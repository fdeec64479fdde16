//! HTTP reply values and their API Gateway proxy encoding.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::InteractionError;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Status, content type and body of a handler outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpReply {
    /// Encode as an API Gateway Lambda proxy response.
    #[must_use]
    pub fn to_proxy_response(&self) -> Value {
        json!({
            "statusCode": self.status_code,
            "headers": { "content-type": self.content_type },
            "body": self.body
        })
    }
}

/// Returns a 200 OK response with `document` as its JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(document: &T) -> HttpReply {
    match serde_json::to_string(document) {
        Ok(body) => HttpReply {
            status_code: 200,
            content_type: CONTENT_TYPE_JSON,
            body,
        },
        Err(e) => {
            error!("Failed to serialize reply: {}", e);
            HttpReply {
                status_code: 500,
                content_type: CONTENT_TYPE_TEXT,
                body: "internal error".to_string(),
            }
        }
    }
}

/// Returns the plain-text rejection for `err`.
#[must_use]
pub fn err_response(err: InteractionError) -> HttpReply {
    HttpReply {
        status_code: err.status_code(),
        content_type: CONTENT_TYPE_TEXT,
        body: err.to_string(),
    }
}
