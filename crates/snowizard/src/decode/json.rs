use crate::{Error, Result, ServerResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Decodes an `application/json` body of the form `{"id": <i64>}`.
///
/// Unknown fields are ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the body is not a JSON object, if
/// `id` is not an integer in `i64` range, or if `id` is missing or `null`.
pub fn decode(body: &[u8]) -> Result<i64> {
    // Parsing into a map first rejects the sequence form (`[42]`) that the
    // derived `Deserialize` would otherwise accept.
    let object: Map<String, Value> = serde_json::from_slice(body).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_e, "json body is not an object");
        Error::MalformedResponse
    })?;

    let resp = ServerResponse::deserialize(Value::Object(object)).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_e, "failed to unmarshal json body");
        Error::MalformedResponse
    })?;

    resp.id.ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!("json body has no id field");
        Error::MalformedResponse
    })
}
