// frame.rs - RGB pixel buffer handed to the display

use crate::color::Rgb;
use crate::grid::GRID_SIZE;

pub const FRAME_SIZE: usize = GRID_SIZE;

/// Row-major RGB pixels. Frames the device accepts are always 64x64, but the
/// buffer itself can be any size so that wrong-size input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Rgb::BLACK; width * height] }
    }

    /// A black 64x64 frame.
    pub fn frame() -> Self {
        Self::new(FRAME_SIZE, FRAME_SIZE)
    }

    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_frame(&self) -> bool {
        self.width == FRAME_SIZE && self.height == FRAME_SIZE
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Writes one pixel; coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.pixels[idx] = color;
        }
    }

    /// Paints the half-open rectangle [x1, x2) x [y1, y2), clipped to the buffer.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        for y in y1.max(0)..y2.min(self.height as i32) {
            for x in x1.max(0)..x2.min(self.width as i32) {
                self.set(x, y, color);
            }
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Flattens to R,G,B byte triples in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&[px.r, px.g, px.b]);
        }
        bytes
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_black_64x64() {
        let frame = PixelBuffer::frame();
        assert!(frame.is_frame());
        assert!(frame.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn bytes_are_row_major_rgb() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(1, 0, Rgb::new(1, 2, 3));
        buf.set(0, 1, Rgb::new(4, 5, 6));
        assert_eq!(buf.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut buf = PixelBuffer::frame();
        buf.fill_rect(60, -3, 70, 2, Rgb::WHITE);
        let painted = buf.pixels().iter().filter(|&&p| p == Rgb::WHITE).count();
        assert_eq!(painted, 4 * 2);
        assert_eq!(buf.get(63, 1), Some(Rgb::WHITE));
        assert_eq!(buf.get(59, 0), Some(Rgb::BLACK));
        assert_eq!(buf.get(64, 0), None);
    }
}
