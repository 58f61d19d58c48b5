//! Windowed blit primitives: the single chokepoint for all pixel output.
//!
//! Every primitive clips to panel bounds, programs the addressing window,
//! and streams exactly `width * height` pixel words. Out-of-bounds
//! geometry is truncated silently rather than rejected; a dropped draw is
//! always preferable to a desynchronized pixel stream.

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::layout::{HEIGHT, WIDTH};
use crate::st7796::St7796;

/// Upper bound on pixels per SPI burst when filling. Bounds the repeated
/// color buffer to 1280 bytes while keeping transfers long enough to
/// amortize the chip-select overhead. Any chunk size is protocol-legal as
/// long as the total pixel count matches the window area.
pub(crate) const FILL_CHUNK_PIXELS: usize = 640;

/// Clip a requested rectangle against the panel.
///
/// Negative origins and right/bottom overflow truncate; returns `None`
/// when the intersection is empty (including non-positive sizes).
pub(crate) fn clip_rect(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) -> Option<(u16, u16, u16, u16)> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w - 1).min(WIDTH - 1);
    let y1 = (y + h - 1).min(HEIGHT - 1);
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some((x0 as u16, y0 as u16, x1 as u16, y1 as u16))
}

impl<SPI, DC, CS, BL> St7796<SPI, DC, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    /// Fill a rectangle, clipped to panel bounds.
    ///
    /// A fully clipped rectangle is a no-op that never touches the bus.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let Some((x0, y0, x1, y1)) = clip_rect(x, y, w, h) else {
            return Ok(());
        };
        self.set_window(x0, y0, x1, y1)?;

        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for px in chunk.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }

        let mut remaining = (u32::from(x1 - x0) + 1) as usize * (u32::from(y1 - y0) + 1) as usize;
        self.begin_pixels()?;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.push_pixels(&chunk[..n * 2])?;
            remaining -= n;
        }
        self.end_pixels()
    }

    /// Fill the whole panel.
    pub fn fill_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.fill_rect(0, 0, WIDTH, HEIGHT, color)
    }

    /// Horizontal line of width `w`.
    pub fn hline(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Vertical line of height `h`.
    pub fn vline(
        &mut self,
        x: i32,
        y: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Square-cornered border approximation: four filled bars with the
    /// outermost 2 pixels of each span inset. Cosmetic only, but the grid
    /// look depends on this exact inset convention.
    pub fn round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
        thickness: i32,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x + 2, y, w - 4, thickness, color)?;
        self.fill_rect(x + 2, y + h - thickness, w - 4, thickness, color)?;
        self.fill_rect(x, y + 2, thickness, h - 4, color)?;
        self.fill_rect(x + w - thickness, y + 2, thickness, h - 4, color)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
