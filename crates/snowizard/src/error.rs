//! Error types for the Snowizard client.
//!
//! [`SnowizardClient::next_id`] only ever fails with [`Error::NoServers`].
//! Everything a single host can do wrong (refused connection, non-200
//! status, truncated or undecodable body) is absorbed by the failover loop
//! and only surfaces in the logs. [`Error::MalformedResponse`] is what the
//! decoders return when called directly through [`WireFormat::decode`].
//!
//! [`SnowizardClient::next_id`]: crate::SnowizardClient::next_id
//! [`WireFormat::decode`]: crate::WireFormat::decode

pub type Result<T> = core::result::Result<T, Error>;

/// All errors the Snowizard client can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Every configured host failed, or no hosts were configured.
    #[error("no servers configured or available")]
    NoServers,

    /// A response body could not be decoded into an ID.
    #[error("malformed response from server")]
    MalformedResponse,

    /// The underlying HTTP transport could not be built.
    #[error("failed to build http client: {context}")]
    ClientBuild { context: String },
}
