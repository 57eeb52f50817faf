// client.rs - High-level display operations on top of a transport

use std::future::Future;

use tracing::debug;

use crate::color::Rgb;
use crate::error::PixooError;
use crate::frame::PixelBuffer;
use crate::protocol::Command;
use crate::transport::{DeviceTransport, Transport};

/// What the driver and the dashboard need from a display.
pub trait Screen {
    fn set_brightness(&self, level: i32) -> impl Future<Output = Result<(), PixooError>> + Send;
    fn set_channel(&self, index: u8) -> impl Future<Output = Result<(), PixooError>> + Send;
    fn clear_screen(&self) -> impl Future<Output = Result<(), PixooError>> + Send;
    fn draw_image(&self, frame: &PixelBuffer) -> impl Future<Output = Result<(), PixooError>> + Send;
    fn draw_text(&self, text: &str, color: Rgb) -> impl Future<Output = Result<(), PixooError>> + Send;
}

pub fn check_brightness(level: i32) -> Result<u8, PixooError> {
    u8::try_from(level)
        .ok()
        .filter(|&b| b <= 100)
        .ok_or_else(|| PixooError::invalid(format!("brightness must be between 0 and 100, got {level}")))
}

pub fn check_frame(frame: &PixelBuffer) -> Result<(), PixooError> {
    if !frame.is_frame() {
        return Err(PixooError::invalid(format!(
            "image must be 64x64 pixels, got {}x{}",
            frame.width(),
            frame.height()
        )));
    }
    Ok(())
}

/// Pixoo-64 client. Encodes commands to JSON and hands them to `T`.
#[derive(Clone)]
pub struct PixooClient<T = DeviceTransport> {
    transport: T,
}

impl<T: Transport + Sync> PixooClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn send(&self, command: &Command) -> Result<(), PixooError> {
        let name = command.name();
        let body = command
            .to_json()
            .map_err(|e| PixooError::Transport { command: name, source: e.into() })?;
        debug!(command = name, bytes = body.len(), "posting command");
        self.transport
            .post(body)
            .await
            .map_err(|source| PixooError::Transport { command: name, source })
    }
}

impl<T: Transport + Sync> Screen for PixooClient<T> {
    async fn set_brightness(&self, level: i32) -> Result<(), PixooError> {
        let brightness = check_brightness(level)?;
        self.send(&Command::SetBrightness { brightness }).await
    }

    async fn set_channel(&self, index: u8) -> Result<(), PixooError> {
        self.send(&Command::SetChannel { index }).await
    }

    async fn clear_screen(&self) -> Result<(), PixooError> {
        self.send(&Command::ResetGifId).await
    }

    /// Resets the device's picture id first; without it the device keeps
    /// writing into stale animation slots.
    async fn draw_image(&self, frame: &PixelBuffer) -> Result<(), PixooError> {
        check_frame(frame)?;
        self.clear_screen().await?;
        self.send(&Command::send_frame(frame)).await
    }

    async fn draw_text(&self, text: &str, color: Rgb) -> Result<(), PixooError> {
        self.send(&Command::static_text(text, &color.hex())).await
    }
}
