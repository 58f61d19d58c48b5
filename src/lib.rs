//! Streaming dashboard renderer for the EnvMonitor's 4.0" ST7796S panel.
//!
//! The panel has no hardware framebuffer: every primitive programs a
//! rectangular addressing window on the controller and streams RGB565 pixel
//! words into it over SPI. The crate is split into four layers:
//!
//! - [`st7796`]: command/data framing and the controller bring-up sequence
//! - [`graphics`]: windowed blit primitives (fills, lines, borders)
//! - [`font`] + [`text`]: 16x16 bitmap glyphs with integer runtime scaling
//! - [`screens`]: sensor cards, the 2x2 and 3x3 dashboard grids, and the
//!   boot sequence (logo wipe, scanline title, progress bar)
//!
//! Hardware access is generic over `embedded-hal` 1.0 traits, so the
//! firmware hands in its SPI bus and GPIO pins while tests hand in
//! recording doubles.
//!
//! # Testing
//!
//! The unit tests run on the host:
//! ```bash
//! cargo test --lib
//! ```
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while firmware builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod font;
pub mod graphics;
pub mod layout;
pub mod screens;
pub mod st7796;
pub mod text;
pub mod thresholds;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used items
pub use colors::*;
pub use layout::{HEIGHT, WIDTH};
pub use screens::Snapshot;
pub use st7796::St7796;
