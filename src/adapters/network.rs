use crate::domain::ports::ConnectivityCheck;
use crate::utils::error::{BookFinderError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use url::Url;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Probes the endpoint host with a bare TCP connect. No HTTP request is sent.
#[derive(Debug, Clone)]
pub struct TcpConnectivityCheck {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpConnectivityCheck {
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| BookFinderError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let host = url
            .host_str()
            .ok_or_else(|| BookFinderError::ConfigError {
                message: format!("endpoint '{}' has no host", endpoint),
            })?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| BookFinderError::ConfigError {
                message: format!("endpoint '{}' has no port", endpoint),
            })?;

        Ok(Self {
            host,
            port,
            timeout: PROBE_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl ConnectivityCheck for TcpConnectivityCheck {
    async fn is_connected(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                tracing::debug!("Connectivity probe to {}:{} failed: {}", self.host, self.port, e);
                false
            }
            Err(_) => {
                tracing::debug!("Connectivity probe to {}:{} timed out", self.host, self.port);
                false
            }
        }
    }
}

/// Skips the probe entirely, for `--skip-connectivity-check`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeConnected;

#[async_trait]
impl ConnectivityCheck for AssumeConnected {
    async fn is_connected(&self) -> bool {
        true
    }
}
