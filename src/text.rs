//! Glyph rasterizer: scaled monospace text streamed through the blit layer.
//!
//! Characters render as solid foreground/background blocks with no
//! anti-aliasing and a fixed advance of `16 * scale` pixels, glyph content
//! notwithstanding. There is no partial-glyph clipping: a glyph whose
//! scaled box would leave the panel is skipped whole. Fitting text into
//! its allotted width is the caller's job (the dashboard composer
//! downscales card values for exactly that reason).

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::font::{self, GLYPH_SIZE};
use crate::layout::{HEIGHT, WIDTH};
use crate::st7796::St7796;

/// Largest supported text scale; sized by the row buffer in `draw_char`.
pub const MAX_TEXT_SCALE: i32 = 4;

/// Edge length of one character cell at `scale`. Glyph cells are square.
pub const fn char_size(scale: i32) -> i32 {
    GLYPH_SIZE * scale
}

/// Rendered pixel width of `text` at `scale`: one fixed-width cell per
/// `char`, independent of glyph content.
pub fn text_width(
    text: &str,
    scale: i32,
) -> i32 {
    text.chars().count() as i32 * char_size(scale)
}

impl<SPI, DC, CS, BL> St7796<SPI, DC, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    /// Draw one character in a `16*scale` square at (x, y).
    ///
    /// Skipped silently when the scaled box falls outside the panel on any
    /// edge, or when `scale` is outside `1..=MAX_TEXT_SCALE`.
    pub fn draw_char(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
        scale: i32,
    ) -> Result<(), DisplayError> {
        if !(1..=MAX_TEXT_SCALE).contains(&scale) {
            return Ok(());
        }
        let side = char_size(scale);
        if x < 0 || y < 0 || x + side > WIDTH || y + side > HEIGHT {
            return Ok(());
        }

        let glyph = font::glyph(ch);
        let [fg_hi, fg_lo] = fg.into_storage().to_be_bytes();
        let [bg_hi, bg_lo] = bg.into_storage().to_be_bytes();

        self.set_window(x as u16, y as u16, (x + side - 1) as u16, (y + side - 1) as u16)?;
        self.begin_pixels()?;

        let scale = scale as usize;
        let mut row_buf = [0u8; (GLYPH_SIZE * MAX_TEXT_SCALE) as usize * 2];
        let row_len = 16 * scale * 2;
        for &bits in glyph {
            for col in 0..16 {
                let (hi, lo) = if bits & (0x8000 >> col) != 0 {
                    (fg_hi, fg_lo)
                } else {
                    (bg_hi, bg_lo)
                };
                for s in 0..scale {
                    let idx = (col * scale + s) * 2;
                    row_buf[idx] = hi;
                    row_buf[idx + 1] = lo;
                }
            }
            for _ in 0..scale {
                self.push_pixels(&row_buf[..row_len])?;
            }
        }
        self.end_pixels()
    }

    /// Draw a string left to right with a fixed `16*scale` advance.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
        scale: i32,
    ) -> Result<(), DisplayError> {
        for (i, ch) in text.chars().enumerate() {
            self.draw_char(ch, x + i as i32 * char_size(scale), y, fg, bg, scale)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
