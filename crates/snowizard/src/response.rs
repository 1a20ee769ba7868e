//! The payload a Snowizard server returns for a single ID.
//!
//! The same record backs both the JSON and the protobuf encodings. Its
//! protobuf schema is:
//!
//! ```proto
//! message SnowizardResponse {
//!   optional int64 id = 1;
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A decoded server response.
///
/// `id` is optional on the wire in both encodings. A response without it is
/// treated as malformed rather than as ID `0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
pub struct ServerResponse {
    #[prost(int64, optional, tag = "1")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ServerResponse {
    pub const fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}
