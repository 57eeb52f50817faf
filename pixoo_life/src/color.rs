// color.rs - Cell coloring

use crate::grid::GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BRIGHT_GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, the form the device text command expects.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Age,
    Rainbow,
    Fire,
    Ocean,
    Matrix,
    /// Anything unrecognised: every live cell is bright green.
    Plain,
}

impl ColorMode {
    pub const NAMES: [&'static str; 5] = ["age", "rainbow", "fire", "ocean", "matrix"];

    pub fn from_name(name: &str) -> Self {
        match name {
            "age" => ColorMode::Age,
            "rainbow" => ColorMode::Rainbow,
            "fire" => ColorMode::Fire,
            "ocean" => ColorMode::Ocean,
            "matrix" => ColorMode::Matrix,
            _ => ColorMode::Plain,
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            ColorMode::Age => "Color based on cell age",
            ColorMode::Rainbow => "Rainbow gradient",
            ColorMode::Fire => "Fire colors (red/orange/yellow)",
            ColorMode::Ocean => "Ocean colors (blue/cyan)",
            ColorMode::Matrix => "Matrix green",
            ColorMode::Plain => "Bright green",
        }
    }
}

/// Color of a live cell that has been alive for `age` generations.
pub fn cell_color(age: u32, mode: ColorMode, x: usize, y: usize) -> Rgb {
    match mode {
        ColorMode::Age => match age {
            0..5 => Rgb::BRIGHT_GREEN,           // Young
            5..15 => Rgb::new(0, 200, 50),       // Medium
            15..30 => Rgb::new(200, 200, 0),     // Older
            _ => Rgb::new(255, 100, 0),          // Ancient
        },
        ColorMode::Rainbow => {
            let hue = ((x + y) % GRID_SIZE) as f64 / GRID_SIZE as f64;
            hue_to_rgb(hue)
        }
        ColorMode::Fire => match age {
            0..3 => Rgb::new(255, 255, 0),
            3..10 => Rgb::new(255, 150, 0),
            _ => Rgb::new(255, 50, 0),
        },
        ColorMode::Ocean => match age {
            0..5 => Rgb::new(0, 255, 255),
            5..15 => Rgb::new(0, 150, 255),
            _ => Rgb::new(0, 50, 200),
        },
        ColorMode::Matrix => match age {
            0..3 => Rgb::BRIGHT_GREEN,
            3..10 => Rgb::new(0, 180, 0),
            _ => Rgb::new(0, 100, 0),
        },
        ColorMode::Plain => Rgb::BRIGHT_GREEN,
    }
}

/// Color of any cell; dead cells are always black.
pub fn pixel_color(alive: bool, age: u32, mode: ColorMode, x: usize, y: usize) -> Rgb {
    if alive { cell_color(age, mode, x, y) } else { Rgb::BLACK }
}

/// HSV -> RGB with full saturation and value. `hue` is in [0, 1).
fn hue_to_rgb(hue: f64) -> Rgb {
    let h = hue * 6.0;
    let c = 1.0;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
