#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod fifo;
pub mod interface;
pub mod interrupt;
pub mod registers;
pub mod sensor;

// Re-export main types
pub use device::Lps22ch;
pub use interface::{
    CallbackInterface, I2cInterface, I2cMode, I3cMode, PullUp, ReadFn, SpiInterface, SpiMode,
    WriteFn,
};
pub use registers::{Field, FieldValue};
pub use sensor::{DataRate, LowPassBandwidth, from_lsb_to_celsius, from_lsb_to_hpa};

pub use fifo::{FIFO_DEPTH, FifoMode, FifoStatus};
pub use interrupt::{
    AllSources, IntNotification, IntSignal, IntSource, InterruptRoute, PinMode, PinPolarity,
    Status, ThresholdEvent,
};

/// LPS22CH I2C address when the SDO/SA0 pin is low (0x5C)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x5C;

/// LPS22CH I2C address when the SDO/SA0 pin is high (0x5D)
///
/// This is the strapping used on most breakout boards.
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x5D;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0xB3;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error reported by the bus transport (passed through unchanged)
    Bus(E),
    /// The transport has no read or write callback bound; nothing was sent on the bus
    InvalidHandle,
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// The device did not complete a software reset in time
    Timeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
