//! Response body decoders, one per [`WireFormat`](crate::WireFormat).
//!
//! Every decoder is a pure function from a raw body to an ID. Any structural
//! failure maps to [`Error::MalformedResponse`](crate::Error::MalformedResponse);
//! the underlying cause is only reported through `tracing`. No decoder
//! validates the range of the ID itself.

pub mod json;
pub mod protobuf;
pub mod text;
