use super::{Endpoints, HostFailure, host_url};
use crate::{Error, Result, USER_AGENT, WireFormat};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header;

/// A blocking Snowizard client.
///
/// Each call to [`next_id`](Self::next_id) blocks the calling thread while it
/// walks the host list in order. The client holds no per-call state, so it
/// can be cloned cheaply or shared across threads and used concurrently.
///
/// Do not construct or drop this client from within an async runtime; use
/// [`AsyncSnowizardClient`](crate::AsyncSnowizardClient) there instead.
///
/// # Example
///
/// ```no_run
/// use snowizard::SnowizardClient;
/// use std::time::Duration;
///
/// let client = SnowizardClient::text(
///     ["snowizard-1.dev:6776", "snowizard-2.dev:6776"],
///     Duration::from_secs(2),
/// )?;
/// let id = client.next_id()?;
/// println!("{id}");
/// # Ok::<(), snowizard::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct SnowizardClient {
    endpoints: Endpoints,
    http: Client,
}

impl SnowizardClient {
    /// Creates a client for `hosts` (each a `host:port`) using `format`.
    ///
    /// No network activity happens here. `connect_timeout` bounds connection
    /// establishment only; reading the body is not time-limited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if the HTTP transport cannot be
    /// initialized.
    pub fn new<I, S>(hosts: I, format: WireFormat, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(None)
            .no_proxy()
            .build()
            .map_err(|e| Error::ClientBuild {
                context: e.to_string(),
            })?;

        Ok(Self {
            endpoints: Endpoints::new(hosts, format, connect_timeout),
            http,
        })
    }

    /// Creates a client that requests `text/plain` responses.
    ///
    /// # Errors
    ///
    /// See [`SnowizardClient::new`].
    pub fn text<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Text, connect_timeout)
    }

    /// Creates a client that requests `application/json` responses.
    ///
    /// # Errors
    ///
    /// See [`SnowizardClient::new`].
    pub fn json<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Json, connect_timeout)
    }

    /// Creates a client that requests `application/x-protobuf` responses.
    ///
    /// # Errors
    ///
    /// See [`SnowizardClient::new`].
    pub fn protobuf<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Protobuf, connect_timeout)
    }

    /// The hosts in the order they are tried.
    pub fn hosts(&self) -> &[String] {
        &self.endpoints.hosts
    }

    pub fn format(&self) -> WireFormat {
        self.endpoints.format
    }

    pub fn content_type(&self) -> &'static str {
        self.endpoints.format.content_type()
    }

    pub fn connect_timeout(&self) -> Duration {
        self.endpoints.connect_timeout
    }

    /// Fetches the next ID from the first host that answers with a valid
    /// body.
    ///
    /// Hosts after the first success are never contacted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoServers`] if every host failed, including hosts
    /// that answered `200` with an undecodable body, or if no hosts are
    /// configured.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(format = %self.format()))
    )]
    pub fn next_id(&self) -> Result<i64> {
        for host in self.endpoints.hosts.iter() {
            match self.fetch(host) {
                Ok(id) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(host = %host, id, "received id");
                    return Ok(id);
                }
                Err(_failure) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(host = %host, error = %_failure, "skipping snowizard host");
                }
            }
        }

        Err(Error::NoServers)
    }

    fn fetch(&self, host: &str) -> core::result::Result<i64, HostFailure> {
        let format = self.endpoints.format;

        // The response is dropped on every early return, which releases its
        // connection.
        let resp = self
            .http
            .get(host_url(host))
            .header(header::CONTENT_TYPE, format.content_type())
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .map_err(HostFailure::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HostFailure::Status(status));
        }

        let body = resp.bytes().map_err(HostFailure::Body)?;
        format.decode(&body).map_err(|_| HostFailure::Decode)
    }
}
