// main.rs - Desktop preview of the Pixoo Game of Life
//
// Runs the same driver the device binary runs, on a background tokio
// runtime, but against a screen that publishes frames to this window.

use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tokio::sync::{oneshot, watch};
use tracing::info;

use pixoo_life::client::{check_brightness, check_frame};
use pixoo_life::config::clock_seed;
use pixoo_life::font::draw_text;
use pixoo_life::{
    init_tracing, Automaton, ColorMode, Driver, PixelBuffer, PixooError, Rgb, Screen, TickReport, GRID_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "frame_preview", about = "Preview the Pixoo Game of Life in a window")]
struct PreviewArgs {
    /// Starting pattern.
    #[arg(long, default_value = "random")]
    pattern: String,

    /// Update speed in milliseconds.
    #[arg(long, default_value_t = 200)]
    speed: u64,

    /// Color mode: age, rainbow, fire, ocean, matrix.
    #[arg(long, default_value = "age")]
    color: String,

    /// Seed for random patterns (default: wall clock).
    #[arg(long)]
    seed: Option<u64>,
}

/// Stand-in for the device: frames go to the window instead of the network.
struct PreviewScreen {
    frames: watch::Sender<PixelBuffer>,
}

impl PreviewScreen {
    fn publish(&self, frame: PixelBuffer) {
        // No receiver left means the window closed; shutdown follows.
        let _ = self.frames.send(frame);
    }
}

impl Screen for PreviewScreen {
    async fn set_brightness(&self, level: i32) -> Result<(), PixooError> {
        check_brightness(level).map(|_| ())
    }

    async fn set_channel(&self, _index: u8) -> Result<(), PixooError> {
        Ok(())
    }

    async fn clear_screen(&self) -> Result<(), PixooError> {
        self.publish(PixelBuffer::frame());
        Ok(())
    }

    async fn draw_image(&self, frame: &PixelBuffer) -> Result<(), PixooError> {
        check_frame(frame)?;
        self.publish(frame.clone());
        Ok(())
    }

    /// Uses the bitmap font, one line at the device's text row.
    async fn draw_text(&self, text: &str, color: Rgb) -> Result<(), PixooError> {
        let mut frame = PixelBuffer::frame();
        draw_text(&mut frame, text, 0, 24, color);
        self.publish(frame);
        Ok(())
    }
}

/// Latest tick outcome, published after every tick for the stats row.
type Stats = Option<TickReport>;

fn publish_stats(stats: &watch::Sender<Stats>) -> impl FnMut(&TickReport) + '_ {
    move |report: &TickReport| {
        let _ = stats.send(Some(*report));
    }
}

fn stats_line(stats: &Stats) -> String {
    match stats {
        Some(r) => format!("Generation: {}    Alive: {}", r.generation, r.alive),
        None => "Generation: -    Alive: -".to_string(),
    }
}

struct PreviewApp {
    frames: watch::Receiver<PixelBuffer>,
    stats: watch::Receiver<Stats>,
    frame_count: u64,
    grid_color: Color32,
    show_grid: bool,
}

impl PreviewApp {
    fn new(frames: watch::Receiver<PixelBuffer>, stats: watch::Receiver<Stats>) -> Self {
        Self {
            frames,
            stats,
            frame_count: 0,
            grid_color: Color32::from_gray(30),
            show_grid: true,
        }
    }
}

fn to_color32(px: Rgb) -> Color32 {
    Color32::from_rgb(px.r, px.g, px.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.frames.has_changed().unwrap_or(false) {
            self.frame_count += 1;
        }
        let frame = self.frames.borrow_and_update().clone();
        let stats = *self.stats.borrow_and_update();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pixoo 64 Preview");

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_grid, "Grid lines");
                ui.label("Grid:");
                ui.color_edit_button_srgba(&mut self.grid_color);
                ui.separator();
                ui.label(format!("Frames: {}", self.frame_count));
            });

            ui.separator();

            // Draw the panel
            let box_size = 11.0;
            let spacing = 0.5;
            let panel_size = GRID_SIZE;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * panel_size as f32 - spacing);

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for row in 0..panel_size {
                for col in 0..panel_size {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let px = frame.get(col, row).unwrap_or(Rgb::BLACK);
                    if px != Rgb::BLACK {
                        painter.rect_filled(rect, 0.0, to_color32(px));
                    }

                    if self.show_grid {
                        painter.rect_stroke(rect, 0.0, Stroke::new(0.3, self.grid_color));
                    }
                }
            }

            ui.separator();

            ui.label(stats_line(&stats));
        });

        ctx.request_repaint_after(Duration::from_millis(30));
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = PreviewArgs::parse();

    let (frame_tx, frame_rx) = watch::channel(PixelBuffer::frame());
    let (stats_tx, stats_rx) = watch::channel(None);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mode = ColorMode::from_name(&args.color);
    let period = Duration::from_millis(args.speed.max(1));
    let pattern = args.pattern.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let sim = thread::spawn(move || {
        runtime.block_on(async move {
            let screen = PreviewScreen { frames: frame_tx };
            let driver = Driver::new(Automaton::with_seed(seed), screen, &pattern, mode, period);
            info!(pattern = %pattern, seed, "Starting preview simulation");
            let shutdown = async {
                let _ = stop_rx.await;
            };
            let driver = driver.run_with(shutdown, publish_stats(&stats_tx)).await;
            info!(generation = driver.life().generation(), "Preview simulation stopped");
        });
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 860.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Pixoo 64 Preview",
        options,
        Box::new(move |_cc| Box::new(PreviewApp::new(frame_rx, stats_rx))),
    );

    let _ = stop_tx.send(());
    sim.join().map_err(|_| anyhow!("simulation thread panicked"))?;
    result.map_err(|e| anyhow!("preview window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preview_screen_publishes_frames_and_validates_like_the_device() {
        let (tx, mut rx) = watch::channel(PixelBuffer::frame());
        let screen = PreviewScreen { frames: tx };

        let frame = PixelBuffer::filled(64, 64, Rgb::WHITE);
        screen.draw_image(&frame).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), frame);

        assert!(screen.draw_image(&PixelBuffer::new(8, 8)).await.unwrap_err().is_invalid_argument());
        assert!(screen.set_brightness(-5).await.unwrap_err().is_invalid_argument());
    }

    #[tokio::test]
    async fn text_falls_back_to_the_bitmap_font() {
        let (tx, rx) = watch::channel(PixelBuffer::frame());
        let screen = PreviewScreen { frames: tx };
        screen.draw_text("8", Rgb::WHITE).await.unwrap();
        let frame = rx.borrow().clone();
        assert_eq!(frame.get(1, 24), Some(Rgb::WHITE));
        assert_eq!(frame.get(0, 23), Some(Rgb::BLACK));
    }

    #[tokio::test]
    async fn stats_follow_the_running_driver() {
        let (frames, _frame_rx) = watch::channel(PixelBuffer::frame());
        let (stats_tx, stats_rx) = watch::channel(None);
        assert_eq!(stats_line(&stats_rx.borrow()), "Generation: -    Alive: -");

        let driver = Driver::new(
            Automaton::with_seed(5),
            PreviewScreen { frames },
            "gosper-gun",
            ColorMode::Age,
            Duration::from_millis(2),
        );
        let shutdown = tokio::time::sleep(Duration::from_millis(30));
        let driver = driver.run_with(shutdown, publish_stats(&stats_tx)).await;

        let stats = (*stats_rx.borrow()).expect("at least one tick");
        assert_eq!(stats.generation, driver.life().generation());
        assert_eq!(stats.alive, driver.life().count_alive());
        assert_eq!(
            stats_line(&Some(stats)),
            format!("Generation: {}    Alive: {}", stats.generation, stats.alive)
        );
    }
}
