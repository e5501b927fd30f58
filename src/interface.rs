//! Bus interface implementations for the LPS22CH
//!
//! This module provides implementations of the `device-driver`
//! [`RegisterInterface`] trait for I2C and SPI communication with the LPS22CH,
//! and a callback-based transport for platforms that expose the bus as plain
//! read/write functions returning a status code.
//!
//! Multi-byte transfers rely on the device's address auto-increment
//! (`CTRL_REG2.IF_ADD_INC`, enabled at power-up).

use crate::registers::{Field, FieldValue, fields};
use crate::{Error, I2C_ADDRESS_SA0_LOW};
use device_driver::RegisterInterface;

/// I2C interface for the LPS22CH
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the SA0-low address (0x5C)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Lps22ch::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with the SA0-high address (0x5D)
    ///
    /// Use this when the SDO/SA0 pin is pulled up to VDD.
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address used on the bus
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[address], read_data)
            .map_err(Error::Bus)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Register address followed by the data bytes, no repeated start between them
        let register = [address];
        let mut operations = [
            embedded_hal::i2c::Operation::Write(&register),
            embedded_hal::i2c::Operation::Write(write_data),
        ];

        self.i2c
            .transaction(self.address, &mut operations)
            .map_err(Error::Bus)
    }
}

/// SPI interface for the LPS22CH
///
/// Chip select is handled by the [`SpiDevice`](embedded_hal::spi::SpiDevice)
/// implementation, e.g. `embedded_hal_bus::spi::ExclusiveDevice`:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // For SPI reads, set MSB to 1
        let read_address = [address | 0x80];

        let mut operations = [
            embedded_hal::spi::Operation::Write(&read_address),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations).map_err(Error::Bus)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // For SPI writes, MSB must be 0
        let write_address = [address & 0x7F];
        let mut operations = [
            embedded_hal::spi::Operation::Write(&write_address),
            embedded_hal::spi::Operation::Write(write_data),
        ];

        self.spi.transaction(&mut operations).map_err(Error::Bus)
    }
}

/// Platform read callback: fill `data` starting at register `reg`, return 0 on success
pub type ReadFn<H> = fn(handle: &mut H, reg: u8, data: &mut [u8]) -> i32;

/// Platform write callback: write `data` starting at register `reg`, return 0 on success
pub type WriteFn<H> = fn(handle: &mut H, reg: u8, data: &[u8]) -> i32;

/// Callback-based transport
///
/// Wraps an opaque platform handle together with read and write functions
/// that follow the usual vendor HAL contract: `0` means success, anything
/// else is a failure code. Failure codes are not interpreted; they come back
/// unchanged as [`Error::Bus`].
///
/// A callback that was never bound makes every access through it fail with
/// [`Error::InvalidHandle`] before anything is sent.
///
/// ```ignore
/// fn platform_read(bus: &mut MyBus, reg: u8, data: &mut [u8]) -> i32 { /* ... */ 0 }
/// fn platform_write(bus: &mut MyBus, reg: u8, data: &[u8]) -> i32 { /* ... */ 0 }
///
/// let interface = CallbackInterface::new(bus, platform_read, platform_write);
/// let mut sensor = Lps22ch::new(interface);
/// ```
pub struct CallbackInterface<H> {
    handle: H,
    read: Option<ReadFn<H>>,
    write: Option<WriteFn<H>>,
}

impl<H> CallbackInterface<H> {
    /// Create a transport with both callbacks bound
    pub const fn new(handle: H, read: ReadFn<H>, write: WriteFn<H>) -> Self {
        Self {
            handle,
            read: Some(read),
            write: Some(write),
        }
    }

    /// Create a transport from optional callbacks
    pub const fn from_parts(handle: H, read: Option<ReadFn<H>>, write: Option<WriteFn<H>>) -> Self {
        Self {
            handle,
            read,
            write,
        }
    }

    /// Borrow the platform handle
    pub const fn handle(&self) -> &H {
        &self.handle
    }

    /// Consume the interface and return the platform handle
    pub fn release(self) -> H {
        self.handle
    }
}

impl<H> RegisterInterface for CallbackInterface<H> {
    type Error = Error<i32>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let read = self.read.ok_or(Error::InvalidHandle)?;
        match read(&mut self.handle, address, read_data) {
            0 => Ok(()),
            status => Err(Error::Bus(status)),
        }
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let write = self.write.ok_or(Error::InvalidHandle)?;
        match write(&mut self.handle, address, write_data) {
            0 => Ok(()),
            status => Err(Error::Bus(status)),
        }
    }
}

/// I2C interface enable (`IF_CTRL.I2C_DISABLE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cMode {
    /// I2C interface enabled
    #[default]
    Enabled = 0,
    /// I2C interface disabled (SPI only)
    Disabled = 1,
}

impl FieldValue for I2cMode {
    const FIELD: Field = fields::I2C_DISABLE;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Disabled,
            _ => Self::Enabled,
        }
    }
}

/// MIPI I3C interface enable (`IF_CTRL.I3C_DISABLE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I3cMode {
    /// I3C interface enabled, INT_DRDY pin usable in I3C mode
    #[default]
    Enabled = 0,
    /// I3C interface disabled
    Disabled = 1,
}

impl FieldValue for I3cMode {
    const FIELD: Field = fields::I3C_DISABLE;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Disabled,
            _ => Self::Enabled,
        }
    }
}

/// Internal pull-up on the SDO/SA0 or SDA pin
///
/// The same encoding is used by `IF_CTRL.SDO_PU_EN` and `IF_CTRL.SDA_PU_EN`,
/// so this type is not bound to a single field; the driver passes the field
/// explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullUp {
    /// Pull-up disconnected
    #[default]
    Disconnected = 0,
    /// Pull-up connected
    Connected = 1,
}

impl PullUp {
    /// Raw field bit
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a raw field bit
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Connected,
            _ => Self::Disconnected,
        }
    }
}

/// SPI serial interface mode (`CTRL_REG1.SIM`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// 4-wire interface
    #[default]
    FourWire = 0,
    /// 3-wire interface
    ThreeWire = 1,
}

impl FieldValue for SpiMode {
    const FIELD: Field = fields::SIM;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::ThreeWire,
            _ => Self::FourWire,
        }
    }
}
