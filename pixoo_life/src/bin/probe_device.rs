// probe_device.rs - Is the device reachable at all?

use anyhow::{Context, Result};
use clap::Parser;

use pixoo_life::config::ProbeArgs;
use pixoo_life::init_tracing;
use pixoo_life::transport::{post_url, HTTP_TIMEOUT};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let args = ProbeArgs::parse();
    let url = post_url(&args.host);

    println!("Testing HTTP GET to {url}");

    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;
    let response = client.get(&url).send().await.with_context(|| format!("GET {url}"))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    println!("SUCCESS: Status {}", status.as_u16());
    println!("Response: {body}");
    Ok(())
}
