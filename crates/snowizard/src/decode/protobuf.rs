use crate::{Error, Result, ServerResponse};
use prost::Message;

/// Decodes an `application/x-protobuf` body holding a `SnowizardResponse`.
///
/// The body is the bare message, not length-delimited. Unknown fields are
/// skipped.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the bytes are not a valid message
/// or if field 1 (`id`) is absent.
pub fn decode(body: &[u8]) -> Result<i64> {
    let resp = ServerResponse::decode(body).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_e, "failed to unmarshal protobuf body");
        Error::MalformedResponse
    })?;

    resp.id.ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!("protobuf body has no id field");
        Error::MalformedResponse
    })
}
