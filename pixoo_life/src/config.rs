// config.rs - Command line configuration for the binaries

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Args, Parser};

use crate::color::ColorMode;
use crate::patterns::PATTERNS;
use crate::transport::TransportKind;

/// Pattern and color-mode listing for `--help`.
pub fn life_help() -> String {
    let mut help = String::from("Patterns:\n");
    for pattern in PATTERNS {
        help.push_str(&format!("  {:<13} - {}\n", pattern.name, pattern.about));
    }
    help.push_str("\nColor modes:\n");
    for name in ColorMode::NAMES {
        help.push_str(&format!("  {:<7} - {}\n", name, ColorMode::from_name(name).about()));
    }
    help
}

/// Where and how to reach the device.
#[derive(Args, Debug, Clone)]
pub struct DeviceArgs {
    /// Pixoo 64 device IP address.
    #[arg(long, env = "PIXOO_HOST")]
    pub host: String,

    /// How commands reach the device.
    #[arg(long, value_enum, default_value_t = TransportKind::Http)]
    pub transport: TransportKind,

    /// Request timeout in seconds (default: 30 for http, 5 for curl).
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl DeviceArgs {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "pixoo_life", version, about = "Conway's Game of Life on a Pixoo 64", after_help = life_help())]
pub struct LifeArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Starting pattern.
    #[arg(long, default_value = "random")]
    pub pattern: String,

    /// Update speed in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub speed: u64,

    /// Screen brightness (0-100).
    #[arg(long, default_value_t = 70, allow_negative_numbers = true)]
    pub brightness: i32,

    /// Color mode: age, rainbow, fire, ocean, matrix.
    #[arg(long, default_value = "age")]
    pub color: String,

    /// Seed for random patterns (default: wall clock).
    #[arg(long)]
    pub seed: Option<u64>,
}

impl LifeArgs {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.speed.max(1))
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_name(&self.color)
    }

    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "pixoo_monitor", version, about = "System metrics on a Pixoo 64")]
pub struct MonitorArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Update interval in seconds.
    #[arg(long, default_value_t = 5)]
    pub interval: u64,

    /// Screen brightness (0-100).
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub brightness: i32,

    /// Use the device's text renderer instead of drawing a frame.
    #[arg(long)]
    pub text: bool,
}

impl MonitorArgs {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.interval.max(1))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "reset_display",
    version,
    about = "Clear custom drawings and switch channel",
    after_help = "Channels:\n  0 = Clock/Faces (default)\n  1 = Cloud Channel\n  2 = Visualizer\n  3 = Custom"
)]
pub struct ResetArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Channel to switch to.
    #[arg(long, default_value_t = 0)]
    pub channel: u8,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "probe_device", version, about = "GET the device's /post endpoint and print the reply")]
pub struct ProbeArgs {
    /// Device address.
    pub host: String,
}

/// Wall-clock nanoseconds, used when no explicit seed is given.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parsers_are_well_formed() {
        LifeArgs::command().debug_assert();
        MonitorArgs::command().debug_assert();
        ResetArgs::command().debug_assert();
        ProbeArgs::command().debug_assert();
    }

    #[test]
    fn help_lists_every_pattern_and_mode() {
        let help = life_help();
        for pattern in PATTERNS {
            assert!(help.contains(pattern.name), "{} missing", pattern.name);
        }
        assert!(help.contains("  gosper-gun    - Gosper glider gun\n"));
        assert!(help.contains("  rainbow - Rainbow gradient\n"));
    }

    #[test]
    fn life_defaults() {
        let args = LifeArgs::try_parse_from(["pixoo_life", "--host", "10.0.0.5"]).unwrap();
        assert_eq!(args.device.host, "10.0.0.5");
        assert_eq!(args.pattern, "random");
        assert_eq!(args.period(), Duration::from_millis(200));
        assert_eq!(args.brightness, 70);
        assert_eq!(args.color_mode(), ColorMode::Age);
        assert_eq!(args.device.transport, TransportKind::Http);
        assert_eq!(args.device.timeout(), None);
    }

    #[test]
    fn life_overrides() {
        let args = LifeArgs::try_parse_from([
            "pixoo_life", "--host", "h", "--pattern", "pulsar", "--speed", "50",
            "--color", "ocean", "--transport", "curl", "--timeout", "9", "--seed", "4",
            "--brightness", "-3",
        ])
        .unwrap();
        assert_eq!(args.pattern, "pulsar");
        assert_eq!(args.color_mode(), ColorMode::Ocean);
        assert_eq!(args.device.transport, TransportKind::Curl);
        assert_eq!(args.device.timeout(), Some(Duration::from_secs(9)));
        assert_eq!(args.rng_seed(), 4);
        assert_eq!(args.brightness, -3);
    }

    #[test]
    fn monitor_and_reset_defaults() {
        let m = MonitorArgs::try_parse_from(["pixoo_monitor", "--host", "h"]).unwrap();
        assert_eq!(m.period(), Duration::from_secs(5));
        assert_eq!(m.brightness, 50);
        assert!(!m.text);

        let r = ResetArgs::try_parse_from(["reset_display", "--host", "h", "--channel", "2"]).unwrap();
        assert_eq!(r.channel, 2);
    }
}
