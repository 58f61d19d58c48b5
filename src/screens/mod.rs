//! Screen composition: sensor cards, dashboard grids, and the boot
//! sequence.
//!
//! Every screen is redrawn from scratch from caller-supplied values; no
//! widget state survives between frames. The acquisition loop builds a
//! [`Snapshot`] each cycle and hands it to one of the full-screen draw
//! calls.

pub mod boot;
pub mod dashboard;

pub use boot::{boot_progress, boot_title, show_logo};
pub use dashboard::{draw_card, draw_dashboard, draw_dashboard_grid};

/// One acquisition cycle's worth of display inputs.
///
/// All semantic interpretation happens upstream: temperature arrives
/// pre-converted with its unit label, strings arrive pre-formatted, and
/// the status string is either a dotted IP address or an error token.
/// Absent optional readings render as a `--` placeholder.
pub struct Snapshot<'a> {
    /// CO2 concentration in ppm.
    pub co2_ppm: u16,
    /// Temperature in the caller's chosen unit.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Unit suffix for the temperature card ("F" or "C").
    pub unit_label: &'a str,
    /// Ambient light in lux, when a light sensor is present.
    pub lux: Option<u32>,
    /// Barometric pressure in hPa, when a pressure sensor is present.
    pub pressure_hpa: Option<f32>,
    /// Pre-formatted storage usage label, when a card is mounted.
    pub sd_usage: Option<&'a str>,
    /// Dotted IP address when connected, error token otherwise.
    pub status: &'a str,
    /// Pre-formatted wall-clock time, once NTP has synced.
    pub time: Option<&'a str>,
    /// Pre-formatted date, once NTP has synced.
    pub date: Option<&'a str>,
}
