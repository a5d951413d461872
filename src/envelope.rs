//! Callback envelope handling
//!
//! The ABR JSON service wraps every payload as `callback({...})`. The wrapper is
//! fixed and unversioned, so it is removed by literal prefix/suffix match rather
//! than by any general JSONP parsing.

use serde_json::Value;

use crate::error::ResponseError;

const ENVELOPE_PREFIX: &str = "callback(";
const ENVELOPE_SUFFIX: &str = ")";

/// Strip the `callback(` ... `)` wrapper around a JSON object.
///
/// Bodies that are not wrapped as `callback({...})` are returned trimmed but
/// otherwise unchanged.
pub fn strip_callback(body: &str) -> &str {
    let trimmed = body.trim();
    trimmed
        .strip_prefix(ENVELOPE_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENVELOPE_SUFFIX))
        .filter(|inner| inner.starts_with('{') && inner.ends_with('}'))
        .unwrap_or(trimmed)
}

/// Unwrap and decode a raw response body
pub fn decode_body(body: &[u8]) -> Result<Value, ResponseError> {
    let text = std::str::from_utf8(body)?;
    let json = strip_callback(text);
    Ok(serde_json::from_str(json)?)
}
