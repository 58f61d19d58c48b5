//! Recording bus/pin doubles for the unit tests.
//!
//! The doubles share one [`BusLog`] and reconstruct the framed protocol
//! from the chip-select and data/command edges: a byte written while DC is
//! low is a command, bytes written while DC is high are its data. Tests
//! assert on the resulting [`Entry`] list, or on the higher-level
//! [`Blit`] view (one addressing window plus the pixel bytes streamed
//! into it).

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{ErrorType as SpiErrorType, SpiBus};

use crate::st7796::St7796;

/// One framed transfer, as reconstructed from the control-line edges.
#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Command(u8),
    Data(Vec<u8>),
}

/// One addressing window and the pixel bytes streamed into it.
#[derive(Debug, Clone)]
pub struct Blit {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    pub pixels: Vec<u8>,
}

impl Blit {
    pub fn width(&self) -> u32 {
        u32::from(self.x1 - self.x0) + 1
    }

    pub fn height(&self) -> u32 {
        u32::from(self.y1 - self.y0) + 1
    }

    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 2
    }

    /// Pixel word `i` of the stream, decoded big-endian.
    pub fn pixel(&self, i: usize) -> u16 {
        u16::from_be_bytes([self.pixels[2 * i], self.pixels[2 * i + 1]])
    }
}

/// Shared recording of everything the driver put on the wire.
#[derive(Default)]
pub struct BusLog {
    dc_high: bool,
    cs_low: bool,
    pub entries: Vec<Entry>,
    /// Length of every individual SPI write, in bytes.
    pub write_lens: Vec<usize>,
    pub delays_ms: Vec<u32>,
    pub backlight: Vec<bool>,
}

impl BusLog {
    /// Commands paired with their concatenated parameter/pixel bytes.
    pub fn frames(&self) -> Vec<(u8, Vec<u8>)> {
        let mut frames: Vec<(u8, Vec<u8>)> = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Command(op) => frames.push((*op, Vec::new())),
                Entry::Data(bytes) => {
                    if let Some((_, data)) = frames.last_mut() {
                        data.extend_from_slice(bytes);
                    }
                }
            }
        }
        frames
    }

    /// The memory writes, paired with the window that was armed for each.
    pub fn blits(&self) -> Vec<Blit> {
        let mut blits = Vec::new();
        let mut col = (0u16, 0u16);
        let mut row = (0u16, 0u16);
        for (op, data) in self.frames() {
            match op {
                0x2A if data.len() == 4 => {
                    col = (
                        u16::from_be_bytes([data[0], data[1]]),
                        u16::from_be_bytes([data[2], data[3]]),
                    );
                }
                0x2B if data.len() == 4 => {
                    row = (
                        u16::from_be_bytes([data[0], data[1]]),
                        u16::from_be_bytes([data[2], data[3]]),
                    );
                }
                0x2C => blits.push(Blit {
                    x0: col.0,
                    y0: row.0,
                    x1: col.1,
                    y1: row.1,
                    pixels: data,
                }),
                _ => {}
            }
        }
        blits
    }
}

pub type SharedLog = Rc<RefCell<BusLog>>;

pub fn new_log() -> SharedLog {
    Rc::new(RefCell::new(BusLog::default()))
}

/// Build a driver wired to recording doubles around `log`.
pub fn tft(log: &SharedLog) -> St7796<RecordingBus, DcPin, CsPin, BacklightPin> {
    St7796::new(
        RecordingBus { log: log.clone() },
        DcPin { log: log.clone() },
        CsPin { log: log.clone() },
        BacklightPin { log: log.clone() },
    )
}

pub struct RecordingBus {
    log: SharedLog,
}

impl SpiErrorType for RecordingBus {
    type Error = Infallible;
}

impl SpiBus<u8> for RecordingBus {
    fn read(
        &mut self,
        _words: &mut [u8],
    ) -> Result<(), Infallible> {
        Ok(())
    }

    fn write(
        &mut self,
        words: &[u8],
    ) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        assert!(log.cs_low, "SPI write while chip-select is released");
        log.write_lens.push(words.len());
        if log.dc_high {
            match log.entries.last_mut() {
                Some(Entry::Data(buf)) => buf.extend_from_slice(words),
                _ => log.entries.push(Entry::Data(words.to_vec())),
            }
        } else {
            for &op in words {
                log.entries.push(Entry::Command(op));
            }
        }
        Ok(())
    }

    fn transfer(
        &mut self,
        _read: &mut [u8],
        write: &[u8],
    ) -> Result<(), Infallible> {
        self.write(write)
    }

    fn transfer_in_place(
        &mut self,
        _words: &mut [u8],
    ) -> Result<(), Infallible> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct DcPin {
    log: SharedLog,
}

impl PinErrorType for DcPin {
    type Error = Infallible;
}

impl OutputPin for DcPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().dc_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().dc_high = true;
        Ok(())
    }
}

pub struct CsPin {
    log: SharedLog,
}

impl PinErrorType for CsPin {
    type Error = Infallible;
}

impl OutputPin for CsPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().cs_low = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().cs_low = false;
        Ok(())
    }
}

pub struct BacklightPin {
    log: SharedLog,
}

impl PinErrorType for BacklightPin {
    type Error = Infallible;
}

impl OutputPin for BacklightPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().backlight.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().backlight.push(true);
        Ok(())
    }
}

pub struct RecordingDelay {
    log: SharedLog,
}

impl RecordingDelay {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.log.borrow_mut().delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.log.borrow_mut().delays_ms.push(ms);
    }
}
