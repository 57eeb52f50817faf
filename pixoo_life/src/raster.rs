// raster.rs - Automaton state -> 64x64 frame

use crate::automaton::Automaton;
use crate::color::{pixel_color, ColorMode};
use crate::frame::PixelBuffer;
use crate::grid::{AgeGrid, GRID_SIZE};

/// Paints every cell, dead ones explicitly black.
pub fn rasterize(life: &Automaton, ages: &AgeGrid, mode: ColorMode) -> PixelBuffer {
    let mut frame = PixelBuffer::frame();
    let cells = life.cells();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let color = pixel_color(cells[y][x], ages[y][x], mode, x, y);
            frame.set(x as i32, y as i32, color);
        }
    }
    frame
}
