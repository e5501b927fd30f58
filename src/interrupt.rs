//! Interrupt configuration and status flags
//!
//! The LPS22CH has a single interrupt pin (INT_DRDY) that can signal:
//! - Pressure/temperature data ready
//! - Differential pressure above/below a user threshold
//! - FIFO watermark, overrun or full
//!
//! # Example
//!
//! ```ignore
//! # use lps22ch::{Lps22ch, interrupt::{InterruptRoute, PinPolarity, ThresholdEvent}};
//! # let mut sensor: Lps22ch<_> = todo!();
//! sensor.set_pin_polarity(PinPolarity::ActiveLow)?;
//!
//! // Interrupt when pressure rises 2 hPa above the reference
//! sensor.set_int_threshold(2 * 16)?;
//! sensor.set_int_on_threshold(ThresholdEvent::Positive)?;
//! sensor.set_pin_int_route(&InterruptRoute::threshold())?;
//! # Ok::<(), lps22ch::Error<()>>(())
//! ```

use crate::fifo::FifoStatus;
use crate::registers::{Field, FieldValue, fields};

/// Interrupt request notification mode (`INTERRUPT_CFG.LIR`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntNotification {
    /// Interrupt request pulsed
    #[default]
    Pulsed = 0,
    /// Interrupt request latched into `INT_SOURCE` until it is read
    Latched = 1,
}

impl FieldValue for IntNotification {
    const FIELD: Field = fields::LIR;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Latched,
            _ => Self::Pulsed,
        }
    }
}

/// Interrupt pin output stage (`CTRL_REG2.PP_OD`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull
    #[default]
    PushPull = 0,
    /// Open-drain
    OpenDrain = 1,
}

impl FieldValue for PinMode {
    const FIELD: Field = fields::PP_OD;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::OpenDrain,
            _ => Self::PushPull,
        }
    }
}

/// Interrupt pin polarity (`CTRL_REG2.INT_H_L`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPolarity {
    /// Active high
    #[default]
    ActiveHigh = 0,
    /// Active low
    ActiveLow = 1,
}

impl FieldValue for PinPolarity {
    const FIELD: Field = fields::INT_H_L;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::ActiveLow,
            _ => Self::ActiveHigh,
        }
    }
}

/// Differential pressure interrupt direction (`INTERRUPT_CFG.PHE | PLE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdEvent {
    /// Threshold interrupt disabled
    #[default]
    NoThreshold = 0,
    /// Pressure above the threshold
    Positive = 1,
    /// Pressure below the threshold
    Negative = 2,
    /// Pressure above or below the threshold
    Both = 3,
}

impl FieldValue for ThresholdEvent {
    const FIELD: Field = fields::PE;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Positive,
            2 => Self::Negative,
            3 => Self::Both,
            _ => Self::NoThreshold,
        }
    }
}

/// Signal driven on INT_DRDY (`CTRL_REG3.INT_S`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntSignal {
    /// Data signal (data ready / FIFO flags as enabled)
    #[default]
    DataSignal = 0,
    /// Pressure high event
    PressureHigh = 1,
    /// Pressure low event
    PressureLow = 2,
    /// Pressure high or low event
    PressureHighOrLow = 3,
}

impl IntSignal {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::PressureHigh,
            2 => Self::PressureLow,
            3 => Self::PressureHighOrLow,
            _ => Self::DataSignal,
        }
    }
}

/// INT_DRDY pin routing (whole `CTRL_REG3`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptRoute {
    /// Signal selection
    pub signal: IntSignal,
    /// Data-ready on the pin
    pub data_ready: bool,
    /// FIFO overrun on the pin
    pub fifo_overrun: bool,
    /// FIFO watermark on the pin
    pub fifo_watermark: bool,
    /// FIFO full on the pin
    pub fifo_full: bool,
}

impl InterruptRoute {
    /// Route only the data-ready signal
    pub const fn data_ready_only() -> Self {
        Self {
            signal: IntSignal::DataSignal,
            data_ready: true,
            fifo_overrun: false,
            fifo_watermark: false,
            fifo_full: false,
        }
    }

    /// Route the FIFO watermark and overrun flags for batch reading
    pub const fn fifo_batch() -> Self {
        Self {
            signal: IntSignal::DataSignal,
            data_ready: false,
            fifo_overrun: true,
            fifo_watermark: true,
            fifo_full: false,
        }
    }

    /// Route the differential pressure events
    pub const fn threshold() -> Self {
        Self {
            signal: IntSignal::PressureHighOrLow,
            data_ready: false,
            fifo_overrun: false,
            fifo_watermark: false,
            fifo_full: false,
        }
    }

    /// Convert to the raw `CTRL_REG3` value
    pub const fn to_raw(&self) -> u8 {
        let mut value = fields::INT_S.insert(0, self.signal as u8);
        if self.data_ready {
            value |= fields::DRDY.mask;
        }
        if self.fifo_overrun {
            value |= fields::INT_F_OVR.mask;
        }
        if self.fifo_watermark {
            value |= fields::INT_F_WTM.mask;
        }
        if self.fifo_full {
            value |= fields::INT_F_FULL.mask;
        }
        value
    }

    /// Decode a raw `CTRL_REG3` value
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            signal: IntSignal::from_bits(fields::INT_S.extract(raw)),
            data_ready: raw & fields::DRDY.mask != 0,
            fifo_overrun: raw & fields::INT_F_OVR.mask != 0,
            fifo_watermark: raw & fields::INT_F_WTM.mask != 0,
            fifo_full: raw & fields::INT_F_FULL.mask != 0,
        }
    }
}

/// Interrupt source flags (`INT_SOURCE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct IntSource {
    /// Differential pressure high
    pub pressure_high: bool,
    /// Differential pressure low
    pub pressure_low: bool,
    /// One or more interrupt events generated
    pub interrupt_active: bool,
    /// Boot phase running
    pub boot_on: bool,
}

impl IntSource {
    /// Decode a raw `INT_SOURCE` value
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            pressure_high: raw & fields::PH.mask != 0,
            pressure_low: raw & fields::PL.mask != 0,
            interrupt_active: raw & fields::IA.mask != 0,
            boot_on: raw & fields::BOOT_ON.mask != 0,
        }
    }
}

/// Data status flags (`STATUS`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Status {
    /// New pressure sample available
    pub pressure_ready: bool,
    /// New temperature sample available
    pub temperature_ready: bool,
    /// Pressure sample overwritten before it was read
    pub pressure_overrun: bool,
    /// Temperature sample overwritten before it was read
    pub temperature_overrun: bool,
}

impl Status {
    /// Decode a raw `STATUS` value
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            pressure_ready: raw & fields::P_DA.mask != 0,
            temperature_ready: raw & fields::T_DA.mask != 0,
            pressure_overrun: raw & fields::P_OR.mask != 0,
            temperature_overrun: raw & fields::T_OR.mask != 0,
        }
    }

    /// Both samples are ready
    pub const fn all_ready(&self) -> bool {
        self.pressure_ready && self.temperature_ready
    }
}

/// Every interrupt and status flag of the device
///
/// Filled by [`Lps22ch::all_sources`](crate::Lps22ch::all_sources) from
/// `INT_SOURCE`, `FIFO_STATUS2` and `STATUS`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllSources {
    /// Interrupt source flags
    pub int_source: IntSource,
    /// FIFO flags
    pub fifo_status: FifoStatus,
    /// Data status flags
    pub status: Status,
}
