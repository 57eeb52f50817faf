use std::time::Duration;

use pixoo_life::transport::CurlTransport;
use pixoo_life::{PixelBuffer, PixooClient, PixooError, Rgb, Screen, TransportError};

mod common;

use common::fake_device;

/// These tests drive the real `curl` binary; hosts without one skip them.
fn curl_available() -> bool {
    let found = std::process::Command::new("curl")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !found {
        eprintln!("curl not found, skipping");
    }
    found
}

fn client(host: &str) -> PixooClient<CurlTransport> {
    PixooClient::new(CurlTransport::new(host, Duration::from_secs(5)))
}

#[tokio::test]
async fn draw_image_over_curl_posts_reset_then_frame() {
    if !curl_available() {
        return;
    }
    let (host, mut rx) = fake_device("200 OK").await;
    let frame = PixelBuffer::filled(64, 64, Rgb::new(0, 200, 50));

    client(&host).draw_image(&frame).await.expect("draw image");

    let reset = rx.recv().await.expect("reset command");
    assert_eq!(reset["Command"], "Draw/ResetHttpGifId");
    let gif = rx.recv().await.expect("gif command");
    assert_eq!(gif["Command"], "Draw/SendHttpGif");
    assert_eq!(gif["PicNum"], 1);
    assert_eq!(gif["PicWidth"], 64);
}

#[tokio::test]
async fn curl_reports_non_200_as_a_transport_error() {
    if !curl_available() {
        return;
    }
    let (host, _rx) = fake_device("500 Internal Server Error").await;
    let err = client(&host).clear_screen().await.unwrap_err();
    match err {
        PixooError::Transport { command, source: TransportError::Curl { code, .. } } => {
            assert_eq!(command, "Draw/ResetHttpGifId");
            assert!(code.contains("22"), "code = {code}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
