use super::{Endpoints, HostFailure, host_url};
use crate::{Error, Result, USER_AGENT, WireFormat};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::Client;
use reqwest::header;

/// An async Snowizard client for use inside a tokio runtime.
///
/// Behaves exactly like [`SnowizardClient`](crate::SnowizardClient): hosts
/// are tried one after another, never in parallel, and the first decoded ID
/// wins.
///
/// # Example
///
/// ```no_run
/// use snowizard::AsyncSnowizardClient;
/// use std::time::Duration;
///
/// # async fn run() -> Result<(), snowizard::Error> {
/// let client = AsyncSnowizardClient::json(["127.0.0.1:6776"], Duration::from_secs(2))?;
/// let id = client.next_id().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AsyncSnowizardClient {
    endpoints: Endpoints,
    http: Client,
}

impl AsyncSnowizardClient {
    /// Creates a client for `hosts` (each a `host:port`) using `format`.
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
    pub fn text<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Text, connect_timeout)
    }

    /// Creates a client that requests `application/json` responses.
    pub fn json<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Json, connect_timeout)
    }

    /// Creates a client that requests `application/x-protobuf` responses.
    pub fn protobuf<I, S>(hosts: I, connect_timeout: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hosts, WireFormat::Protobuf, connect_timeout)
    }

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

    /// Async counterpart of [`SnowizardClient::next_id`](crate::SnowizardClient::next_id).
    ///
    /// # Errors
    ///
    /// Same as the blocking client.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(format = %self.format()))
    )]
    pub async fn next_id(&self) -> Result<i64> {
        for host in self.endpoints.hosts.iter() {
            match self.fetch(host).await {
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

    async fn fetch(&self, host: &str) -> core::result::Result<i64, HostFailure> {
        let format = self.endpoints.format;

        let resp = self
            .http
            .get(host_url(host))
            .header(header::CONTENT_TYPE, format.content_type())
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(HostFailure::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HostFailure::Status(status));
        }

        let body = resp.bytes().await.map_err(HostFailure::Body)?;
        format.decode(&body).map_err(|_| HostFailure::Decode)
    }
}
