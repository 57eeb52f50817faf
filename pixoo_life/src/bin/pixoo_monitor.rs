// pixoo_monitor.rs - System metrics dashboard on a Pixoo 64

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use pixoo_life::config::MonitorArgs;
use pixoo_life::dashboard::{dashboard_caption, render_dashboard};
use pixoo_life::metrics::{MetricsSource, SysinfoCollector};
use pixoo_life::{connect, init_tracing, prepare_screen, shutdown_signal, Rgb, Screen};

async fn update_display<S: Screen, M: MetricsSource>(screen: &S, source: &mut M, text_only: bool) -> Result<()> {
    let metrics = source.collect().await.context("collect metrics")?;
    info!("{metrics}");

    if text_only {
        screen
            .draw_text(&dashboard_caption(&metrics), Rgb::WHITE)
            .await
            .context("draw text")?;
        return Ok(());
    }

    let frame = render_dashboard(&metrics);
    info!("Sending image to display");
    screen.draw_image(&frame).await.context("draw image")?;
    info!("Image sent successfully");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let args = MonitorArgs::parse();

    let client = connect(&args.device).context("failed to build device client")?;
    prepare_screen(&client, args.brightness).await;

    let mut collector = SysinfoCollector::new().context("failed to start metrics collector")?;

    info!(host = %args.device.host, interval_s = args.interval, "Starting Pixoo monitor");
    info!("Press Ctrl+C to exit");

    // First tick fires immediately.
    let mut ticker = time::interval(args.period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = update_display(&client, &mut collector, args.text).await {
                    warn!(error = %format!("{e:#}"), "Error updating display");
                }
            }
            _ = &mut shutdown => {
                info!("Shutting down");
                return Ok(());
            }
        }
    }
}
