// main.rs - Conway's Game of Life on a Pixoo 64

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pixoo_life::config::LifeArgs;
use pixoo_life::{connect, init_tracing, prepare_screen, shutdown_signal, Automaton, Driver};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let args = LifeArgs::parse();

    let client = connect(&args.device).context("failed to build device client")?;
    prepare_screen(&client, args.brightness).await;

    let seed = args.rng_seed();
    let life = Automaton::with_seed(seed);
    let driver = Driver::new(life, client, &args.pattern, args.color_mode(), args.period());

    info!(host = %args.device.host, "Starting Game of Life");
    info!(
        pattern = %args.pattern,
        speed_ms = args.speed,
        color = %args.color,
        seed,
        alive = driver.life().count_alive(),
        "Configuration"
    );
    info!("Press Ctrl+C to exit");

    driver.run(shutdown_signal()).await;
    Ok(())
}
