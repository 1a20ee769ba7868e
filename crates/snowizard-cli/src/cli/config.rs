use anyhow::bail;
use clap::Parser;
use snowizard::WireFormat;
use std::time::Duration;

/// Runtime configuration for the `snowizard` binary.
///
/// Values come from CLI flags, falling back to environment variables (a
/// `.env` file is loaded first if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowizard",
    version,
    about = "Fetch unique IDs from Snowizard servers"
)]
pub struct CliArgs {
    /// Comma-separated `host:port` list, tried in order on every request.
    ///
    /// Example: "snowizard-1.dev:6776,snowizard-2.dev:6776"
    ///
    /// Environment variable: `SNOWIZARD_HOSTS`
    #[arg(long, env = "SNOWIZARD_HOSTS", value_delimiter = ',', required = true)]
    pub hosts: Vec<String>,

    /// Response encoding to request: text, json or protobuf.
    ///
    /// Environment variable: `SNOWIZARD_FORMAT`
    #[arg(long, env = "SNOWIZARD_FORMAT", default_value_t = WireFormat::Text)]
    pub format: WireFormat,

    /// Connection timeout per host, in milliseconds.
    ///
    /// Only connection establishment is bounded. A host that accepts the
    /// connection but is slow to answer is waited on.
    ///
    /// Environment variable: `SNOWIZARD_CONNECT_TIMEOUT_MS`
    #[arg(long, env = "SNOWIZARD_CONNECT_TIMEOUT_MS", default_value_t = 2000)]
    pub connect_timeout_ms: u64,

    /// Number of IDs to fetch. Each ID is a separate request.
    ///
    /// Environment variable: `SNOWIZARD_COUNT`
    #[arg(long, env = "SNOWIZARD_COUNT", default_value_t = 1)]
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub hosts: Vec<String>,
    pub format: WireFormat,
    pub connect_timeout: Duration,
    pub count: usize,
}

impl TryFrom<CliArgs> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let hosts: Vec<String> = args
            .hosts
            .into_iter()
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .collect();

        if hosts.is_empty() {
            bail!("SNOWIZARD_HOSTS must name at least one host");
        }

        if args.connect_timeout_ms == 0 {
            bail!("SNOWIZARD_CONNECT_TIMEOUT_MS must be greater than 0");
        }

        if args.count == 0 {
            bail!("SNOWIZARD_COUNT must be greater than 0");
        }

        Ok(Self {
            hosts,
            format: args.format,
            connect_timeout: Duration::from_millis(args.connect_timeout_ms),
            count: args.count,
        })
    }
}
