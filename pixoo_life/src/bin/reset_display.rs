// reset_display.rs - Drop custom drawings and go back to a built-in channel

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use pixoo_life::config::ResetArgs;
use pixoo_life::protocol::Channel;
use pixoo_life::{connect, init_tracing, Screen};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let args = ResetArgs::parse();
    let client = connect(&args.device).context("failed to build device client")?;

    info!("Resetting display");
    if let Err(e) = client.clear_screen().await {
        warn!(error = %e, "failed to clear screen");
    }

    info!(channel = args.channel, name = Channel::label(args.channel), "Switching channel");
    client
        .set_channel(args.channel)
        .await
        .context("failed to set channel")?;

    info!("Display reset successfully");
    Ok(())
}
