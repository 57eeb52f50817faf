// transport.rs - Getting a JSON body to the device's /post endpoint

use std::future::Future;
use std::time::Duration;

use clap::ValueEnum;
use reqwest::StatusCode;
use tokio::process::Command as Process;
use tracing::debug;

use crate::error::TransportError;

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const CURL_TIMEOUT: Duration = Duration::from_secs(5);

pub fn post_url(host: &str) -> String {
    format!("http://{host}/post")
}

/// Delivers one encoded command. Implementations never retry.
pub trait Transport {
    fn post(&self, body: String) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Direct HTTP through a pooled reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(host: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: post_url(host) })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, body: String) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Shells out to `curl`. Some hosts only let already-trusted binaries reach
/// the local network; the wire traffic is identical to `HttpTransport`.
#[derive(Clone)]
pub struct CurlTransport {
    url: String,
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(host: &str, timeout: Duration) -> Self {
        Self { url: post_url(host), timeout }
    }
}

impl Transport for CurlTransport {
    async fn post(&self, body: String) -> Result<(), TransportError> {
        let output = Process::new("curl")
            .args(["-s", "--fail", "-X", "POST", self.url.as_str()])
            .args(["-H", "Content-Type: application/json"])
            .arg("-m")
            .arg(self.timeout.as_secs().max(1).to_string())
            .arg("-d")
            .arg(&body)
            .output()
            .await?;

        if !output.status.success() {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(TransportError::Curl {
                code: output.status.to_string(),
                output: text.trim().to_string(),
            });
        }
        debug!(url = %self.url, "curl post ok");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    Http,
    Curl,
}

impl TransportKind {
    pub fn default_timeout(self) -> Duration {
        match self {
            TransportKind::Http => HTTP_TIMEOUT,
            TransportKind::Curl => CURL_TIMEOUT,
        }
    }
}

/// The transport picked at startup.
#[derive(Clone)]
pub enum DeviceTransport {
    Http(HttpTransport),
    Curl(CurlTransport),
}

impl DeviceTransport {
    pub fn connect(
        kind: TransportKind,
        host: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let timeout = timeout.unwrap_or(kind.default_timeout());
        Ok(match kind {
            TransportKind::Http => DeviceTransport::Http(HttpTransport::new(host, timeout)?),
            TransportKind::Curl => DeviceTransport::Curl(CurlTransport::new(host, timeout)),
        })
    }
}

impl Transport for DeviceTransport {
    async fn post(&self, body: String) -> Result<(), TransportError> {
        match self {
            DeviceTransport::Http(t) => t.post(body).await,
            DeviceTransport::Curl(t) => t.post(body).await,
        }
    }
}
