//! Output data rate, filtering and unit conversion
//!
//! The LPS22CH produces a 24-bit pressure sample (4096 LSB/hPa) and a 16-bit
//! temperature sample (100 LSB/°C). Samples are stored least significant byte
//! first in consecutive registers.
//!
//! # Example
//!
//! ```ignore
//! # use lps22ch::{Lps22ch, DataRate};
//! # let mut sensor: Lps22ch<_> = todo!();
//! sensor.set_block_data_update(true)?;
//! sensor.set_data_rate(DataRate::Hz10LowNoise)?;
//!
//! if sensor.pressure_data_ready()? {
//!     let hpa = sensor.read_pressure_hpa()?;
//! }
//! # Ok::<(), lps22ch::Error<()>>(())
//! ```

use crate::registers::{Field, FieldValue, fields};

/// Counts per hPa of the pressure value returned by
/// [`Lps22ch::pressure_raw`](crate::Lps22ch::pressure_raw)
///
/// The device resolution is 4096 LSB/hPa; the raw value carries an extra
/// 8-bit left shift, giving 2^20.
pub const PRESSURE_LSB_PER_HPA: f32 = 1_048_576.0;

/// Counts per degree Celsius of the temperature output
pub const TEMPERATURE_LSB_PER_CELSIUS: f32 = 100.0;

/// Output data rate and acquisition mode
///
/// The discriminant packs the three register bits that select the mode:
/// `LOW_NOISE_EN << 4 | ONE_SHOT << 3 | ODR`. `ODR` lives in `CTRL_REG1`,
/// the other two in `CTRL_REG2`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down, no acquisition
    #[default]
    PowerDown = 0x00,
    /// Single acquisition, then back to power-down
    OneShot = 0x08,
    /// 1 Hz, low current
    Hz1 = 0x01,
    /// 10 Hz, low current
    Hz10 = 0x02,
    /// 25 Hz, low current
    Hz25 = 0x03,
    /// 50 Hz, low current
    Hz50 = 0x04,
    /// 75 Hz, low current
    Hz75 = 0x05,
    /// 1 Hz, low noise
    Hz1LowNoise = 0x11,
    /// 10 Hz, low noise
    Hz10LowNoise = 0x12,
    /// 25 Hz, low noise
    Hz25LowNoise = 0x13,
    /// 50 Hz, low noise
    Hz50LowNoise = 0x14,
    /// 75 Hz, low noise
    Hz75LowNoise = 0x15,
    /// 100 Hz (low-noise mode not available)
    Hz100 = 0x06,
    /// 200 Hz (low-noise mode not available)
    Hz200 = 0x07,
}

impl DataRate {
    /// Composite code `LOW_NOISE_EN << 4 | ONE_SHOT << 3 | ODR`
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the composite code
    ///
    /// Codes outside the documented set (for example low-noise combined with
    /// 100 Hz) decode to [`DataRate::PowerDown`].
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0x08 => Self::OneShot,
            0x01 => Self::Hz1,
            0x02 => Self::Hz10,
            0x03 => Self::Hz25,
            0x04 => Self::Hz50,
            0x05 => Self::Hz75,
            0x11 => Self::Hz1LowNoise,
            0x12 => Self::Hz10LowNoise,
            0x13 => Self::Hz25LowNoise,
            0x14 => Self::Hz50LowNoise,
            0x15 => Self::Hz75LowNoise,
            0x06 => Self::Hz100,
            0x07 => Self::Hz200,
            _ => Self::PowerDown,
        }
    }

    /// Build the composite code from the three register fields
    pub const fn compose(odr: u8, one_shot: bool, low_noise: bool) -> u8 {
        ((low_noise as u8) << 4) | ((one_shot as u8) << 3) | (odr & 0x07)
    }

    /// Value of the `CTRL_REG1.ODR` field
    pub const fn odr(self) -> u8 {
        self.bits() & 0x07
    }

    /// Value of the `CTRL_REG2.ONE_SHOT` bit
    pub const fn one_shot(self) -> bool {
        self.bits() & 0x08 != 0
    }

    /// Value of the `CTRL_REG2.LOW_NOISE_EN` bit
    pub const fn low_noise(self) -> bool {
        self.bits() & 0x10 != 0
    }

    /// Nominal rate in Hz (0 for power-down and one-shot)
    pub const fn rate_hz(self) -> f32 {
        match self.odr() {
            0x01 => 1.0,
            0x02 => 10.0,
            0x03 => 25.0,
            0x04 => 50.0,
            0x05 => 75.0,
            0x06 => 100.0,
            0x07 => 200.0,
            _ => 0.0,
        }
    }
}

/// Low-pass filter bandwidth on the pressure path
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassBandwidth {
    /// Bandwidth ODR/2 (filter disabled)
    #[default]
    OdrDiv2 = 0,
    /// Bandwidth ODR/9
    OdrDiv9 = 2,
    /// Bandwidth ODR/20
    OdrDiv20 = 3,
}

impl FieldValue for LowPassBandwidth {
    const FIELD: Field = fields::LPFP_CFG;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            2 => Self::OdrDiv9,
            3 => Self::OdrDiv20,
            _ => Self::OdrDiv2,
        }
    }
}

/// Assemble a little-endian byte sequence into an unsigned value
///
/// `bytes[0]` is the least significant byte (lowest register address).
pub(crate) fn assemble_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .rev()
        .fold(0u32, |value, &byte| (value << 8) | u32::from(byte))
}

/// Pressure sample from the three output bytes (XL, L, H)
///
/// The 24-bit magnitude is shifted left by 8, so the low byte is always zero.
pub(crate) fn pressure_from_bytes(bytes: [u8; 3]) -> u32 {
    assemble_le(&bytes) << 8
}

/// Temperature sample from the two output bytes (L, H)
pub(crate) fn temperature_from_bytes(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Convert a raw pressure value to hectopascal
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn from_lsb_to_hpa(lsb: u32) -> f32 {
    lsb as f32 / PRESSURE_LSB_PER_HPA
}

/// Convert a raw temperature value to degrees Celsius
#[must_use]
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    f32::from(lsb) / TEMPERATURE_LSB_PER_CELSIUS
}
