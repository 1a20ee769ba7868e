//! HTTP clients that fetch IDs from a list of Snowizard hosts.
//!
//! Both clients walk their hosts in the configured order on every call and
//! return the first ID that decodes. A host is skipped on any failure:
//!
//! - the request could not be sent (DNS, connect timeout, reset)
//! - the status was not `200 OK`
//! - the body could not be read
//! - the body could not be decoded
//!
//! Skipped hosts are only reported through `tracing`. Once every host has
//! been tried the call fails with [`Error::NoServers`](crate::Error::NoServers),
//! whatever the individual failures were. There is no retry against the same
//! host and no backoff. Only connection establishment is bounded by the
//! configured timeout.

#[cfg(feature = "async-tokio")]
mod async_tokio;
#[cfg(feature = "blocking")]
mod blocking;

#[cfg(feature = "async-tokio")]
pub use async_tokio::*;
#[cfg(feature = "blocking")]
pub use blocking::*;

use crate::WireFormat;
use core::time::Duration;
use reqwest::StatusCode;
use std::sync::Arc;

/// Immutable configuration shared by every client flavor.
#[derive(Clone, Debug)]
struct Endpoints {
    hosts: Arc<[String]>,
    format: WireFormat,
    connect_timeout: Duration,
}

impl Endpoints {
    fn new<I, S>(hosts: I, format: WireFormat, connect_timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
            format,
            connect_timeout,
        }
    }
}

/// Why a single host was skipped.
#[derive(Debug, thiserror::Error)]
enum HostFailure {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    #[error("failed reading response body: {0}")]
    Body(reqwest::Error),

    #[error("failed decoding response body")]
    Decode,
}

fn host_url(host: &str) -> String {
    format!("http://{host}")
}
