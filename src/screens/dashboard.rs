//! Sensor cards and the two dashboard grid layouts.

use core::fmt::Write;

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::String;

use super::Snapshot;
use crate::colors::{
    CARD_BG, CARD_BRD, CYAN, DKBLUE, GRAY, GREEN, LTGRAY, ORANGE, WHITE, air_quality, co2_color,
    light_color, wifi_color,
};
use crate::layout::{
    CARD2_H, CARD2_W, CARD3_H, CARD3_W, CARD_GAP, GRID2_X0, GRID3_X0, GRID_TOP, HEIGHT,
    STATUS_BAR_H, TITLE_BAR_H, WIDTH,
};
use crate::st7796::St7796;
use crate::text::text_width;

/// Draw one sensor card: background, border, and three centered lines.
///
/// The value line renders at scale 2 but drops to scale 1 when its
/// rendered width would exceed `w - 8` pixels. That is the only text
/// reflow anywhere; labels and units keep scale 1 and simply clip when
/// oversized.
#[allow(clippy::too_many_arguments)]
pub fn draw_card<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    label: &str,
    value: &str,
    unit: &str,
    value_color: Rgb565,
    bg: Rgb565,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    tft.fill_rect(x, y, w, h, bg)?;
    tft.round_rect(x, y, w, h, CARD_BRD, 2)?;

    let lx = x + (w - text_width(label, 1)) / 2;
    tft.draw_text(label, lx, y + 6, LTGRAY, bg, 1)?;

    let scale = if text_width(value, 2) > w - 8 { 1 } else { 2 };
    let vy = if scale == 2 { y + 30 } else { y + 38 };
    let vx = x + (w - text_width(value, scale)) / 2;
    tft.draw_text(value, vx, vy, value_color, bg, scale)?;

    let ux = x + (w - text_width(unit, 1)) / 2;
    tft.draw_text(unit, ux, y + 68, GRAY, bg, 1)
}

/// Title bar shared by both grid variants.
fn title_bar<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    tft.fill_rect(0, 0, WIDTH, TITLE_BAR_H, DKBLUE)?;
    tft.draw_text("EnvMonitor", 8, 6, CYAN, DKBLUE, 1)?;
    tft.fill_rect(WIDTH - 40, 8, 10, 10, GREEN)?;
    tft.draw_text("ON", WIDTH - 28, 6, GREEN, DKBLUE, 1)
}

/// Bottom status bar. `right` is right-aligned when present; the 3x3
/// dashboard passes the IP address here and `None` for error states.
fn bottom_bar<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    right: Option<&str>,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    tft.fill_rect(0, HEIGHT - STATUS_BAR_H, WIDTH, STATUS_BAR_H, DKBLUE)?;
    tft.draw_text("ESP32 EnvMonitor", 8, HEIGHT - 16, GRAY, DKBLUE, 1)?;
    if let Some(text) = right {
        let x = WIDTH - 8 - text_width(text, 1);
        tft.draw_text(text, x, HEIGHT - 16, GREEN, DKBLUE, 1)?;
    }
    Ok(())
}

/// Draw the 2x2 dashboard: CO2, temperature, humidity, WiFi status.
pub fn draw_dashboard<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    snap: &Snapshot<'_>,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    title_bar(tft)?;

    let col1 = GRID2_X0;
    let col2 = GRID2_X0 + CARD2_W + CARD_GAP;
    let row1 = GRID_TOP;
    let row2 = GRID_TOP + CARD2_H + CARD_GAP;

    let mut co2: String<8> = String::new();
    let _ = write!(co2, "{}", snap.co2_ppm);
    draw_card(
        tft, col1, row1, CARD2_W, CARD2_H, "CO2", &co2, "ppm", co2_color(snap.co2_ppm), CARD_BG,
    )?;

    let mut temp: String<8> = String::new();
    let _ = write!(temp, "{:.1}", snap.temperature);
    draw_card(
        tft, col2, row1, CARD2_W, CARD2_H, "TEMP", &temp, snap.unit_label, ORANGE, CARD_BG,
    )?;

    let mut hum: String<8> = String::new();
    let _ = write!(hum, "{:.1}", snap.humidity);
    draw_card(tft, col1, row2, CARD2_W, CARD2_H, "HUMIDITY", &hum, "%", CYAN, CARD_BG)?;

    draw_card(
        tft,
        col2,
        row2,
        CARD2_W,
        CARD2_H,
        "WIFI",
        snap.status,
        "ESP32",
        wifi_color(snap.status),
        CARD_BG,
    )?;

    bottom_bar(tft, None)
}

/// Draw the dense 3x3 dashboard with light, air quality, pressure,
/// storage, and clock cards. The bottom bar shows the IP address only
/// when the status string looks like one (contains a `.`).
pub fn draw_dashboard_grid<SPI, DC, CS, BL>(
    tft: &mut St7796<SPI, DC, CS, BL>,
    snap: &Snapshot<'_>,
) -> Result<(), DisplayError>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    title_bar(tft)?;

    let xs = [
        GRID3_X0,
        GRID3_X0 + CARD3_W + CARD_GAP,
        GRID3_X0 + 2 * (CARD3_W + CARD_GAP),
    ];
    let ys = [
        GRID_TOP,
        GRID_TOP + CARD3_H + CARD_GAP,
        GRID_TOP + 2 * (CARD3_H + CARD_GAP),
    ];

    let mut co2: String<8> = String::new();
    let _ = write!(co2, "{}", snap.co2_ppm);
    draw_card(
        tft, xs[0], ys[0], CARD3_W, CARD3_H, "CO2", &co2, "ppm", co2_color(snap.co2_ppm), CARD_BG,
    )?;

    let mut temp: String<8> = String::new();
    let _ = write!(temp, "{:.1}", snap.temperature);
    draw_card(
        tft, xs[1], ys[0], CARD3_W, CARD3_H, "TEMP", &temp, snap.unit_label, ORANGE, CARD_BG,
    )?;

    let mut hum: String<8> = String::new();
    let _ = write!(hum, "{:.1}", snap.humidity);
    draw_card(tft, xs[2], ys[0], CARD3_W, CARD3_H, "HUMIDITY", &hum, "%", CYAN, CARD_BG)?;

    let mut lux: String<12> = String::new();
    let lux_color = match snap.lux {
        Some(value) => {
            let _ = write!(lux, "{value}");
            light_color(value)
        }
        None => {
            let _ = lux.push_str("--");
            LTGRAY
        }
    };
    draw_card(tft, xs[0], ys[1], CARD3_W, CARD3_H, "LIGHT", &lux, "lux", lux_color, CARD_BG)?;

    draw_card(
        tft,
        xs[1],
        ys[1],
        CARD3_W,
        CARD3_H,
        "AIR",
        air_quality(snap.co2_ppm),
        "quality",
        co2_color(snap.co2_ppm),
        CARD_BG,
    )?;

    let mut pressure: String<12> = String::new();
    match snap.pressure_hpa {
        Some(value) => {
            let _ = write!(pressure, "{value:.0}");
        }
        None => {
            let _ = pressure.push_str("--");
        }
    }
    draw_card(tft, xs[2], ys[1], CARD3_W, CARD3_H, "PRESSURE", &pressure, "hPa", WHITE, CARD_BG)?;

    draw_card(
        tft,
        xs[0],
        ys[2],
        CARD3_W,
        CARD3_H,
        "SD",
        snap.sd_usage.unwrap_or("--"),
        "used",
        WHITE,
        CARD_BG,
    )?;

    draw_card(
        tft,
        xs[1],
        ys[2],
        CARD3_W,
        CARD3_H,
        "WIFI",
        snap.status,
        "ESP32",
        wifi_color(snap.status),
        CARD_BG,
    )?;

    draw_card(
        tft,
        xs[2],
        ys[2],
        CARD3_W,
        CARD3_H,
        "TIME",
        snap.time.unwrap_or("--"),
        snap.date.unwrap_or("--"),
        WHITE,
        CARD_BG,
    )?;

    let right = if snap.status.contains('.') { Some(snap.status) } else { None };
    bottom_bar(tft, right)
}

// =============================================================================
// Unit Tests
// =============================================================================
