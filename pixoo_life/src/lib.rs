//! Drive a Divoom Pixoo 64 over its local HTTP API: a toroidal Game of Life
//! and a system-metrics dashboard, both rendered into 64x64 RGB frames.

pub mod automaton;
pub mod client;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod driver;
pub mod error;
pub mod font;
pub mod frame;
pub mod grid;
pub mod metrics;
pub mod patterns;
pub mod protocol;
pub mod raster;
pub mod transport;

pub use automaton::Automaton;
pub use client::{PixooClient, Screen};
pub use color::{ColorMode, Rgb};
pub use driver::{Driver, DriverState, Reseed, TickReport};
pub use error::{MetricsError, PixooError, TransportError};
pub use frame::PixelBuffer;
pub use grid::GRID_SIZE;
pub use transport::{DeviceTransport, TransportKind};

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins; otherwise `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Builds a client for the configured device and transport.
pub fn connect(device: &config::DeviceArgs) -> Result<PixooClient, TransportError> {
    let transport = DeviceTransport::connect(device.transport, &device.host, device.timeout())?;
    Ok(PixooClient::new(transport))
}

/// Brightness, then the custom channel. Failures are logged and ignored.
pub async fn prepare_screen<S: Screen>(screen: &S, brightness: i32) {
    if let Err(e) = screen.set_brightness(brightness).await {
        tracing::warn!(error = %e, "failed to set brightness");
    }
    tracing::info!("Switching to Custom channel");
    if let Err(e) = screen.set_channel(protocol::Channel::Custom as u8).await {
        tracing::warn!(error = %e, "failed to set channel");
    }
}
