//! FIFO buffer configuration and status
//!
//! The LPS22CH buffers up to 128 pressure/temperature samples. The FIFO mode
//! decides what happens when the buffer is full and whether an interrupt
//! event switches between modes (trigger modes).
//!
//! # Example
//!
//! ```ignore
//! # use lps22ch::{Lps22ch, FifoMode};
//! # let mut sensor: Lps22ch<_> = todo!();
//! sensor.set_fifo_watermark(32)?;
//! sensor.set_fifo_stop_on_watermark(true)?;
//! sensor.set_fifo_mode(FifoMode::Fifo)?;
//!
//! if sensor.fifo_watermark_flag()? {
//!     for _ in 0..sensor.fifo_data_level()? {
//!         let raw = sensor.fifo_pressure_raw()?;
//!     }
//! }
//! # Ok::<(), lps22ch::Error<()>>(())
//! ```

use crate::registers::{Field, FieldValue, fields};

/// FIFO depth in samples
pub const FIFO_DEPTH: u8 = 128;

/// FIFO operating mode (`FIFO_CTRL.TRIG_MODES | FIFO_MODE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled, output registers updated directly
    #[default]
    Bypass = 0,
    /// Stop collecting when the FIFO is full
    Fifo = 1,
    /// Continuous mode, oldest samples are overwritten
    Stream = 2,
    /// Continuous mode with the watermark level as depth
    DynamicStream = 3,
    /// Bypass until an interrupt event, then FIFO
    BypassToFifo = 5,
    /// Bypass until an interrupt event, then stream
    BypassToStream = 6,
    /// Stream until an interrupt event, then FIFO
    StreamToFifo = 7,
}

impl FifoMode {
    /// Mode switches on an interrupt event
    pub const fn is_triggered(self) -> bool {
        (self as u8) & 0x04 != 0
    }
}

impl FieldValue for FifoMode {
    const FIELD: Field = fields::F_MODE;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Fifo,
            2 => Self::Stream,
            3 => Self::DynamicStream,
            5 => Self::BypassToFifo,
            6 => Self::BypassToStream,
            7 => Self::StreamToFifo,
            _ => Self::Bypass,
        }
    }
}

/// FIFO flags (`FIFO_STATUS2`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// FIFO completely filled
    pub full: bool,
    /// At least one sample overwritten
    pub overrun: bool,
    /// Stored level is at or above the watermark
    pub watermark: bool,
}

impl FifoStatus {
    /// Decode a raw `FIFO_STATUS2` value
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            full: raw & fields::FIFO_FULL_IA.mask != 0,
            overrun: raw & fields::FIFO_OVR_IA.mask != 0,
            watermark: raw & fields::FIFO_WTM_IA.mask != 0,
        }
    }

    /// Check if any FIFO flag is set
    pub const fn any_set(&self) -> bool {
        self.full || self.overrun || self.watermark
    }
}
