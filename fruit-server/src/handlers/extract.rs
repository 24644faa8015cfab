//! Request extractors: the JSON object body and the `:id` path segment.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde_json::{Map, Value};

use super::response::{messages, ApiFailure};

/// Request body as a JSON object.
///
/// Requests without a JSON content type, and empty bodies, yield an empty object.
/// Malformed JSON and non-object JSON are rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiFailure::new(e.status(), e.body_text()))?;

        if !is_json {
            return Ok(Self::default());
        }
        parse_object(&bytes).map(Self)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, ApiFailure> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiFailure::bad_body(messages::NOT_AN_OBJECT)),
        Err(_) => Err(ApiFailure::bad_body(messages::INVALID_JSON)),
    }
}

/// Parses an id path segment with integer-prefix semantics.
///
/// Leading whitespace and one sign are allowed. A `0x`/`0X` prefix switches to hex;
/// otherwise decimal. At least one digit must follow and anything after the digits is
/// ignored (`"12abc"` is 12, `"0x1g"` is 1). Returns `None` when there are no digits or
/// the number does not fit in an `i64`.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest.bytes().take_while(|b| (*b as char).is_digit(radix)).count();
    if digits == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&rest[..digits], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
