//! In-memory monochrome framebuffer.
//!
//! Owns the pixel storage and implements [`DrawTarget`] so every widget
//! draws through the normal `embedded-graphics` path, the same way the
//! hardware renderer would. Frames are dumped as ASCII for the terminal.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use statusface_common::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// A 144x168 one-bit framebuffer.
pub struct FaceBuffer {
    pixels: [bool; WIDTH * HEIGHT],
}

impl FaceBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [false; WIDTH * HEIGHT],
        }
    }

    /// Clear to the background color.
    pub fn clear_all(&mut self) { self.pixels.fill(false); }

    /// Render the buffer as ASCII art.
    ///
    /// Rows are sampled in pairs to roughly correct for terminal cell
    /// aspect ratio (a pixel pair maps to one character row).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 3) * HEIGHT / 2);
        out.push('+');
        out.push_str(&"-".repeat(WIDTH));
        out.push_str("+\n");
        for y in (0..HEIGHT).step_by(2) {
            out.push('|');
            for x in 0..WIDTH {
                let upper = self.pixels[y * WIDTH + x];
                let lower = y + 1 < HEIGHT && self.pixels[(y + 1) * WIDTH + x];
                out.push(match (upper, lower) {
                    (true, true) => '#',
                    (true, false) => '\'',
                    (false, true) => '.',
                    (false, false) => ' ',
                });
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(WIDTH));
        out.push('+');
        out
    }
}

impl Default for FaceBuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for FaceBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FaceBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.pixels[point.y as usize * WIDTH + point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    use super::*;

    #[test]
    fn test_draws_clip_to_bounds() {
        let mut fb = FaceBuffer::new();
        Rectangle::new(Point::new(-10, -10), Size::new(400, 400))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.pixels.iter().all(|&p| p));
    }

    #[test]
    fn test_ascii_dump_dimensions() {
        let fb = FaceBuffer::new();
        let ascii = fb.to_ascii();
        // Border rows plus one character row per pixel pair.
        assert_eq!(ascii.lines().count(), HEIGHT / 2 + 2);
    }
}
