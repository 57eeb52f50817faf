// dashboard.rs - System metrics rendered for the 64x64 panel

use crate::color::Rgb;
use crate::font::draw_text;
use crate::frame::PixelBuffer;
use crate::metrics::SystemMetrics;

const CPU_BAR: Rgb = Rgb::new(0, 255, 0);
const MEM_BAR: Rgb = Rgb::new(0, 150, 255);
const TEXT: Rgb = Rgb::WHITE;
const BAR_WIDTH: f64 = 60.0;

fn bar_width(percent: f64) -> i32 {
    (percent.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH) as i32
}

/// CPU and memory readouts with bars, memory used in GB and, when there is
/// any traffic, the receive rate.
pub fn render_dashboard(m: &SystemMetrics) -> PixelBuffer {
    let mut frame = PixelBuffer::frame();
    frame.fill_rect(0, 0, 64, 64, Rgb::BLACK);

    draw_text(&mut frame, "CPU:", 2, 2, TEXT);
    draw_text(&mut frame, &format!("{:2.0}%", m.cpu_percent), 30, 2, TEXT);
    frame.fill_rect(2, 12, 2 + bar_width(m.cpu_percent), 16, CPU_BAR);

    draw_text(&mut frame, "MEM:", 2, 20, TEXT);
    draw_text(&mut frame, &format!("{:2.0}%", m.memory_percent), 30, 20, TEXT);
    frame.fill_rect(2, 30, 2 + bar_width(m.memory_percent), 34, MEM_BAR);

    draw_text(&mut frame, &format!("{:.1}G", m.memory_used_gb), 2, 38, TEXT);

    if m.net_recv_mb_per_s > 0.0 || m.net_sent_mb_per_s > 0.0 {
        draw_text(&mut frame, &format!("{:.1}M", m.net_recv_mb_per_s), 2, 50, TEXT);
    }

    frame
}

/// One-line form for the device's built-in text renderer.
pub fn dashboard_caption(m: &SystemMetrics) -> String {
    format!("CPU:{:.0}% MEM:{:.0}% {:.1}G", m.cpu_percent, m.memory_percent, m.memory_used_gb)
}
