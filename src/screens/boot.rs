//! Boot sequence: logo wipe-in, scanline title screen, progress bar.
//!
//! The three phases are independent; the firmware calls them in order
//! while it brings up WiFi, NTP, the SD card, and the sensors, feeding
//! [`boot_progress`] with increasing percentages to animate the bar.

use core::fmt::Write;

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::String;
use log::debug;

use crate::colors::{BLACK, BLUE, CYAN, DKGRAY, GRAY, LTGRAY, WHITE};
use crate::font::GLYPH_SIZE;
use crate::layout::{BAR_H, BAR_MSG_Y, BAR_W, BAR_X, BAR_Y, HEIGHT, SUBTITLE_Y, TITLE_Y, VERSION_Y, WIDTH};
use crate::st7796::St7796;
use crate::text::text_width;

/// Title typed out on the boot screen.
const TITLE: &str = "EnvMonitor";

/// Subtitle under the typed title.
const SUBTITLE: &str = "Environmental Monitor";

/// Version line under the subtitle.
const VERSION_LINE: &str = "ESP32 v1.0";

/// Pause inserted every 16th row of the scanline sweep.
const SCAN_PAUSE_MS: u32 = 10;

/// Delay between typed title characters.
const TYPE_DELAY_MS: u32 = 60;

/// Gradient endpoints for the progress bar fill.
const GRAD_START: Rgb565 = BLUE;
const GRAD_END: Rgb565 = CYAN;

/// Reveal a logo asset with a top-to-bottom wipe.
///
/// The asset is a 4-byte big-endian header (width, height as u16)
/// followed by `width * height * 2` bytes of packed RGB565 in raster
/// order. The image is centered and streamed one source row per
/// addressing window, which produces the wipe. A truncated payload stops
/// after the last complete row.
///
/// Returns `Ok(true)` once at least one row reached the panel, and
/// `Ok(false)` for a malformed, oversized, or rowless asset; the caller
/// decides whether to boot without a logo. Bus failures still propagate
/// as `Err`.
pub fn show_logo<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    data: &[u8],
) -> Result<bool, DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    let Some((w, h, pixels)) = parse_logo_header(data) else {
        debug!("logo: rejected asset header");
        return Ok(false);
    };

    let row_bytes = usize::from(w) * 2;
    let rows = (pixels.len() / row_bytes).min(usize::from(h));
    if rows == 0 {
        debug!("logo: no complete pixel rows");
        return Ok(false);
    }

    let x = (WIDTH - i32::from(w)) / 2;
    let y = (HEIGHT - i32::from(h)) / 2;
    for row in 0..rows {
        let ry = (y + row as i32) as u16;
        tft.set_window(x as u16, ry, (x + i32::from(w) - 1) as u16, ry)?;
        tft.begin_pixels()?;
        tft.push_pixels(&pixels[row * row_bytes..(row + 1) * row_bytes])?;
        tft.end_pixels()?;
    }
    Ok(true)
}

/// Validate the asset header and split off the pixel payload.
fn parse_logo_header(data: &[u8]) -> Option<(u16, u16, &[u8])> {
    let header = data.get(..4)?;
    let w = u16::from_be_bytes([header[0], header[1]]);
    let h = u16::from_be_bytes([header[2], header[3]]);
    if w == 0 || h == 0 || i32::from(w) > WIDTH || i32::from(h) > HEIGHT {
        return None;
    }
    Some((w, h, &data[4..]))
}

/// Scanline sweep followed by the typed title screen.
///
/// The sweep paints full-width lines whose green/blue channels ramp with
/// the row index, pausing briefly every 16th row. The screen then clears
/// and the title types out at 3x scale, one character at a time, with the
/// subtitle and version line below at 1x. All delays here are cosmetic
/// pacing, not hardware requirements.
pub fn boot_title<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    delay: &mut impl DelayNs,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    for y in 0..HEIGHT {
        let g = (y * 63 / (HEIGHT - 1)) as u8;
        let b = (y * 31 / (HEIGHT - 1)) as u8;
        tft.hline(0, y, WIDTH, Rgb565::new(0, g, b))?;
        if y % 16 == 0 {
            delay.delay_ms(SCAN_PAUSE_MS);
        }
    }
    tft.fill_screen(BLACK)?;

    let mut x = (WIDTH - text_width(TITLE, 3)) / 2;
    for ch in TITLE.chars() {
        tft.draw_char(ch, x, TITLE_Y, CYAN, BLACK, 3)?;
        x += GLYPH_SIZE * 3;
        delay.delay_ms(TYPE_DELAY_MS);
    }

    let sx = (WIDTH - text_width(SUBTITLE, 1)) / 2;
    tft.draw_text(SUBTITLE, sx, SUBTITLE_Y, LTGRAY, BLACK, 1)?;
    let vx = (WIDTH - text_width(VERSION_LINE, 1)) / 2;
    tft.draw_text(VERSION_LINE, vx, VERSION_Y, GRAY, BLACK, 1)
}

/// Interpolate one channel of the bar gradient at column `dx`.
fn lerp_channel(
    a: u8,
    b: u8,
    dx: i32,
) -> u8 {
    (i32::from(a) + (i32::from(b) - i32::from(a)) * dx / (BAR_W - 1)) as u8
}

/// Fill color for the bar column at offset `dx` from the track start.
/// The gradient is a function of the column's own position, so a pixel
/// keeps its color as the fill grows past it.
fn bar_gradient(dx: i32) -> Rgb565 {
    Rgb565::new(
        lerp_channel(GRAD_START.r(), GRAD_END.r(), dx),
        lerp_channel(GRAD_START.g(), GRAD_END.g(), dx),
        lerp_channel(GRAD_START.b(), GRAD_END.b(), dx),
    )
}

/// Repaint the boot progress bar at `pct` percent with a status message.
///
/// Percentages outside 0..=100 are clamped (the bar cannot usefully
/// render anything else). Every call fully repaints the fill, the percent
/// readout, and the message region, so callers animate by calling
/// repeatedly with increasing percentages.
pub fn boot_progress<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    pct: i32,
    msg: &str,
    msg_color: Rgb565,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    let pct = pct.clamp(0, 100);

    tft.fill_rect(BAR_X, BAR_Y, BAR_W, BAR_H, DKGRAY)?;
    let fill_w = BAR_W * pct / 100;
    for dx in 0..fill_w {
        tft.vline(BAR_X + dx, BAR_Y, BAR_H, bar_gradient(dx))?;
    }
    if fill_w > 0 {
        let tip_w = fill_w.min(2);
        tft.fill_rect(BAR_X + fill_w - tip_w, BAR_Y, tip_w, BAR_H, WHITE)?;
    }

    let mut pct_text: String<8> = String::new();
    let _ = write!(pct_text, "{pct}%");
    tft.fill_rect(BAR_X + BAR_W + 4, BAR_Y, WIDTH - (BAR_X + BAR_W + 4), BAR_H, BLACK)?;
    tft.draw_text(&pct_text, BAR_X + BAR_W + 8, BAR_Y + 1, WHITE, BLACK, 1)?;

    tft.fill_rect(0, BAR_MSG_Y, WIDTH, 16, BLACK)?;
    let mx = (WIDTH - text_width(msg, 1)) / 2;
    tft.draw_text(msg, mx, BAR_MSG_Y, msg_color, BLACK, 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
