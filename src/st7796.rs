//! ST7796S panel transport: command/data framing and controller bring-up.
//!
//! The panel sits on a shared SPI bus with two control lines (data/command
//! select and chip-select) plus an independent backlight enable. Every
//! operation asserts chip-select for its full duration, so one primitive
//! call is one uninterruptible bus transaction.
//!
//! The driver owns all four handles explicitly; nothing here is global.
//! Tests construct it around recording doubles and assert on the exact
//! byte stream (see `testutil`).

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use log::debug;

// ST7796S commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;
const FRMCTR1: u8 = 0xB1;
const INVTR: u8 = 0xB4;
const BPC: u8 = 0xB5;
const DFC: u8 = 0xB6;
const PWR2: u8 = 0xC1;
const PWR3: u8 = 0xC2;
const VCMPCTL: u8 = 0xC5;
const PGC: u8 = 0xE0;
const NGC: u8 = 0xE1;
const CSCON: u8 = 0xF0;

/// MADCTL value for this panel revision: row/column exchange + BGR order,
/// which puts the 480x320 image right-side-up in landscape.
const MADCTL_LANDSCAPE: u8 = 0x28;

/// COLMOD value for 16-bit RGB565 pixels.
const COLMOD_16BPP: u8 = 0x55;

/// Positive gamma correction table for this panel revision.
const GAMMA_POS: [u8; 14] = [
    0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
];

/// Negative gamma correction table for this panel revision.
const GAMMA_NEG: [u8; 14] = [
    0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
];

/// ST7796S display driver over a synchronous SPI bus.
///
/// Owns the bus, the data/command select line, the chip-select line, and
/// the backlight enable. All drawing goes through [`set_window`] followed
/// by a pixel stream whose length must exactly match the window area; the
/// streaming entry points are crate-private so the window-then-stream pair
/// stays atomic from the outside.
///
/// [`set_window`]: St7796::set_window
pub struct St7796<SPI, DC, CS, BL> {
    spi: SPI,
    dc: DC,
    cs: CS,
    backlight: BL,
}

impl<SPI, DC, CS, BL> St7796<SPI, DC, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    /// Create the driver from the bus and control pins.
    ///
    /// The panel is not touched until [`init`](St7796::init) runs.
    pub fn new(
        spi: SPI,
        dc: DC,
        cs: CS,
        backlight: BL,
    ) -> Self {
        Self { spi, dc, cs, backlight }
    }

    /// Run the controller bring-up sequence.
    ///
    /// The two 200 ms delays after reset and sleep-out are hardware
    /// settling requirements; skipping them leaves the panel blank or
    /// garbled. The orientation and color-depth bytes are fixed for this
    /// panel revision.
    ///
    /// There is no recovery path: an unresponsive bus is fatal for display
    /// operation and any retry policy belongs to the caller.
    pub fn init(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), DisplayError> {
        debug!("st7796: init");
        self.backlight(true)?;

        self.command(SWRESET)?;
        delay.delay_ms(200);
        self.command(SLPOUT)?;
        delay.delay_ms(200);

        // Unlock the vendor command set for the module configuration
        self.command_with_data(CSCON, &[0xC3])?;
        self.command_with_data(CSCON, &[0x96])?;

        self.command_with_data(MADCTL, &[MADCTL_LANDSCAPE])?;
        self.command_with_data(COLMOD, &[COLMOD_16BPP])?;

        self.command_with_data(BPC, &[0x02, 0x03, 0x00, 0x04])?;
        self.command_with_data(DFC, &[0x80, 0x02, 0x3B])?;
        self.command_with_data(FRMCTR1, &[0x80, 0x10])?;
        self.command_with_data(INVTR, &[0x00])?;
        self.command_with_data(PWR2, &[0x13])?;
        self.command_with_data(PWR3, &[0xA7])?;
        self.command_with_data(VCMPCTL, &[0x09])?;
        self.command_with_data(PGC, &GAMMA_POS)?;
        self.command_with_data(NGC, &GAMMA_NEG)?;

        // Lock the vendor command set again
        self.command_with_data(CSCON, &[0x3C])?;
        self.command_with_data(CSCON, &[0x69])?;
        delay.delay_ms(200);

        self.command(DISPON)?;
        delay.delay_ms(100);
        self.command(NORON)?;
        debug!("st7796: init complete");
        Ok(())
    }

    /// Toggle the backlight, independent of the controller state machine.
    pub fn backlight(
        &mut self,
        on: bool,
    ) -> Result<(), DisplayError> {
        let res = if on { self.backlight.set_high() } else { self.backlight.set_low() };
        res.map_err(|_| DisplayError::RSError)
    }

    /// Send a bare command byte (DC low for the whole transfer).
    pub fn command(
        &mut self,
        op: u8,
    ) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi.write(&[op]).map_err(|_| DisplayError::BusWriteError)?;
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }

    /// Send a command byte followed by its parameter bytes (DC switches to
    /// data mode for the parameters).
    pub fn command_with_data(
        &mut self,
        op: u8,
        params: &[u8],
    ) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi.write(&[op]).map_err(|_| DisplayError::BusWriteError)?;
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi.write(params).map_err(|_| DisplayError::BusWriteError)?;
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }

    /// Program the addressing window and arm a memory write.
    ///
    /// Coordinates are inclusive and split high byte first. After this the
    /// controller expects exactly `(x1-x0+1)*(y1-y0+1)` pixel words in
    /// raster order; writing more or fewer desynchronizes its internal
    /// address counter for the next window.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), DisplayError> {
        self.command_with_data(CASET, &[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])?;
        self.command_with_data(RASET, &[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])?;
        self.command(RAMWR)
    }

    /// Assert chip-select in data mode for a pixel burst.
    pub(crate) fn begin_pixels(&mut self) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        self.dc.set_high().map_err(|_| DisplayError::DCError)
    }

    /// Write raw pixel bytes inside an open burst.
    pub(crate) fn push_pixels(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), DisplayError> {
        self.spi.write(bytes).map_err(|_| DisplayError::BusWriteError)
    }

    /// Release chip-select, ending the burst.
    pub(crate) fn end_pixels(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::testutil::{Entry, RecordingDelay, new_log, tft};

    #[test]
    fn test_command_framing() {
        let log = new_log();
        let mut display = tft(&log);
        display.command(0x29).unwrap();
        assert_eq!(log.borrow().entries, [Entry::Command(0x29)]);
    }

    #[test]
    fn test_command_with_data_framing() {
        let log = new_log();
        let mut display = tft(&log);
        display.command_with_data(0x36, &[0x28]).unwrap();
        assert_eq!(
            log.borrow().entries,
            [Entry::Command(0x36), Entry::Data(vec![0x28])]
        );
    }

    #[test]
    fn test_set_window_big_endian_coordinates() {
        let log = new_log();
        let mut display = tft(&log);
        display.set_window(300, 2, 479, 319).unwrap();
        assert_eq!(
            log.borrow().entries,
            [
                Entry::Command(0x2A),
                Entry::Data(vec![0x01, 0x2C, 0x01, 0xDF]),
                Entry::Command(0x2B),
                Entry::Data(vec![0x00, 0x02, 0x01, 0x3F]),
                Entry::Command(0x2C),
            ]
        );
    }

    #[test]
    fn test_init_opcode_order_and_settling_delays() {
        let log = new_log();
        let mut display = tft(&log);
        let mut delay = RecordingDelay::new(&log);
        display.init(&mut delay).unwrap();

        let opcodes: Vec<u8> = log
            .borrow()
            .entries
            .iter()
            .filter_map(|e| match e {
                Entry::Command(op) => Some(*op),
                Entry::Data(_) => None,
            })
            .collect();
        assert_eq!(
            opcodes,
            [
                0x01, 0x11, 0xF0, 0xF0, 0x36, 0x3A, 0xB5, 0xB6, 0xB1, 0xB4, 0xC1, 0xC2, 0xC5,
                0xE0, 0xE1, 0xF0, 0xF0, 0x29, 0x13,
            ]
        );

        // Reset and sleep-out settle for 200 ms each before configuration
        let delays = log.borrow().delays_ms.clone();
        assert!(delays.len() >= 2);
        assert_eq!(delays[0], 200);
        assert_eq!(delays[1], 200);

        // Backlight was switched on
        assert_eq!(log.borrow().backlight, [true]);
    }

    #[test]
    fn test_init_orientation_and_color_depth_bytes() {
        let log = new_log();
        let mut display = tft(&log);
        display.init(&mut RecordingDelay::new(&log)).unwrap();

        let frames = log.borrow().frames();
        let madctl = frames.iter().find(|(op, _)| *op == 0x36).unwrap();
        assert_eq!(madctl.1, [0x28]);
        let colmod = frames.iter().find(|(op, _)| *op == 0x3A).unwrap();
        assert_eq!(colmod.1, [0x55]);
    }
}
