use crate::{Result, decode};
use core::fmt;
use core::str::FromStr;

/// Content-Type for plain text responses.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Content-Type for JSON responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content-Type for protobuf responses.
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "snowizard-rs";

/// The encoding a client requests from the server and expects back.
///
/// The format is sent as the request `Content-Type` and selects the decoder
/// applied to the response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// A bare integer literal, e.g. `12345`.
    #[default]
    Text,
    /// A JSON object of the form `{"id": 12345}`.
    Json,
    /// A protobuf `SnowizardResponse` with `id` in field 1.
    Protobuf,
}

impl WireFormat {
    /// Returns the MIME type sent as the request `Content-Type`.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Text => TEXT_CONTENT_TYPE,
            Self::Json => JSON_CONTENT_TYPE,
            Self::Protobuf => PROTOBUF_CONTENT_TYPE,
        }
    }

    /// Decodes a response body into an ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedResponse`] if the body is not a valid
    /// encoding of an ID in this format.
    ///
    /// # Example
    ///
    /// ```
    /// use snowizard::{Error, WireFormat};
    ///
    /// assert_eq!(WireFormat::Text.decode(b"42"), Ok(42));
    /// assert_eq!(WireFormat::Json.decode(br#"{"id": 7}"#), Ok(7));
    /// assert_eq!(WireFormat::Json.decode(b"{}"), Err(Error::MalformedResponse));
    /// ```
    pub fn decode(self, body: &[u8]) -> Result<i64> {
        match self {
            Self::Text => decode::text::decode(body),
            Self::Json => decode::json::decode(body),
            Self::Protobuf => decode::protobuf::decode(body),
        }
    }

    /// The lowercase name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Protobuf => "protobuf",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`WireFormat`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown wire format: {0} (expected text, json or protobuf)")]
pub struct ParseWireFormatError(String);

impl FromStr for WireFormat {
    type Err = ParseWireFormatError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "protobuf" | "proto" => Ok(Self::Protobuf),
            _ => Err(ParseWireFormatError(s.to_owned())),
        }
    }
}
