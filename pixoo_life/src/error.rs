use thiserror::Error;

/// Errors raised by the device client.
#[derive(Debug, Error)]
pub enum PixooError {
    /// Rejected locally before anything is sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{command} failed: {source}")]
    Transport {
        command: &'static str,
        #[source]
        source: TransportError,
    },
}

impl PixooError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        PixooError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PixooError::InvalidArgument(_))
    }
}

/// Failure delivering one command to the device.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Status(u16),
    #[error("failed to launch curl: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("curl exited with {code}: {output}")]
    Curl { code: String, output: String },
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("system metrics are not supported on this platform")]
    Unsupported,
    #[error("memory statistics unavailable")]
    MemoryUnavailable,
}
