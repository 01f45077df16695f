//! Decoding of review service response bodies.
//!
//! Gerrit prefixes JSON with `)]}'` to defeat cross-site script inclusion,
//! and serves patches base64-encoded, flagged by `X-FYI-Content-Encoding`.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;
use tracing::trace;

use super::{
    error::{Result, ReviewError},
    transport::RawResponse,
};

/// Anti-hijacking prefix in front of every JSON response.
pub const SAFETY_SENTINEL: &[u8] = b")]}'";

/// Header announcing the body encoding of patch responses.
pub const CONTENT_ENCODING_HEADER: &str = "X-FYI-Content-Encoding";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn into_json(self, url: &str) -> Result<Value> {
        match self {
            Body::Json(value) => Ok(value),
            Body::Text(_) => Err(ReviewError::UnexpectedBody {
                url: url.to_string(),
                expected: "a JSON document",
            }),
        }
    }

    pub fn into_text(self, url: &str) -> Result<String> {
        match self {
            Body::Text(text) => Ok(text),
            Body::Json(_) => Err(ReviewError::UnexpectedBody {
                url: url.to_string(),
                expected: "a text body",
            }),
        }
    }
}

/// Decode a response body according to its sentinel or encoding header.
pub fn decode_body(response: &RawResponse) -> Result<Body> {
    if let Some(rest) = response.body.strip_prefix(SAFETY_SENTINEL) {
        trace!(url = %response.url, body = %String::from_utf8_lossy(rest), "json response");
        let value = serde_json::from_slice(rest).map_err(|source| ReviewError::Json {
            url: response.url.clone(),
            source,
        })?;
        return Ok(Body::Json(value));
    }

    if response
        .content_encoding
        .as_deref()
        .is_some_and(|encoding| encoding.eq_ignore_ascii_case("base64"))
    {
        let payload: Vec<u8> = response
            .body
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(payload)
            .map_err(|source| ReviewError::Decode {
                url: response.url.clone(),
                source,
            })?;
        return Ok(Body::Text(String::from_utf8_lossy(&bytes).into_owned()));
    }

    trace!(url = %response.url, status = response.status, "raw response");
    Ok(Body::Text(String::from_utf8_lossy(&response.body).into_owned()))
}
