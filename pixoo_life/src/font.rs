// font.rs - Minimal 5x7 bitmap font
//
// Each glyph is seven rows of five bits; bit 4 is the leftmost column.

use crate::color::Rgb;
use crate::frame::PixelBuffer;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0x00; 7];

pub fn glyph(ch: char) -> Glyph {
    match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        ':' => [0x00, 0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        _ => BLANK,
    }
}

/// Paints the set bits of one glyph with its top-left corner at (x, y).
/// Unset bits are left untouched.
pub fn draw_char(buf: &mut PixelBuffer, ch: char, x: i32, y: i32, color: Rgb) {
    for (row, bits) in glyph(ch).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                buf.set(x + col, y + row as i32, color);
            }
        }
    }
}

/// Draws `text` left to right, one glyph every six pixels.
pub fn draw_text(buf: &mut PixelBuffer, text: &str, x: i32, y: i32, color: Rgb) {
    for (i, ch) in text.chars().enumerate() {
        draw_char(buf, ch, x + i as i32 * ADVANCE, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(buf: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get(x, y) != Some(Rgb::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn one_is_drawn_from_its_bit_rows() {
        let mut buf = PixelBuffer::frame();
        draw_char(&mut buf, '1', 0, 0, Rgb::WHITE);
        let cells = lit(&buf);
        // 0x04 -> middle column; 0x0E on the last row -> three columns
        assert_eq!(cells.first(), Some(&(2, 0)));
        assert!(cells.contains(&(1, 1)));
        assert!(cells.contains(&(1, 6)) && cells.contains(&(3, 6)));
        assert_eq!(cells.len(), 1 + 2 + 1 + 1 + 1 + 1 + 3);
    }

    #[test]
    fn unknown_characters_are_blank() {
        let mut buf = PixelBuffer::frame();
        draw_text(&mut buf, "xyz?", 0, 0, Rgb::WHITE);
        assert!(lit(&buf).is_empty());
        assert_eq!(glyph(' '), BLANK);
    }

    #[test]
    fn glyphs_advance_six_pixels() {
        let mut a = PixelBuffer::frame();
        draw_text(&mut a, " 8", 0, 0, Rgb::WHITE);
        let mut b = PixelBuffer::frame();
        draw_char(&mut b, '8', 6, 0, Rgb::WHITE);
        assert_eq!(a, b);
    }

    #[test]
    fn drawing_does_not_fill_the_background() {
        let red = Rgb::new(255, 0, 0);
        let mut buf = PixelBuffer::filled(64, 64, red);
        draw_char(&mut buf, ':', 0, 0, Rgb::WHITE);
        assert_eq!(buf.get(0, 0), Some(red));
        assert_eq!(buf.get(1, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn glyphs_past_the_edge_are_clipped() {
        let mut buf = PixelBuffer::frame();
        draw_text(&mut buf, "88", 60, 60, Rgb::WHITE);
        assert!(lit(&buf).iter().all(|&(x, y)| x < 64 && y < 64));
        assert!(!lit(&buf).is_empty());
    }
}
