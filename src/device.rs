//! High-level driver API for the LPS22CH
//!
//! [`Lps22ch`] wraps a bus transport and exposes one method per device
//! setting. It keeps no state of its own: every call goes to the device and
//! the registers are the only source of truth.
//!
//! Settings that share a register are updated with read-modify-write, so the
//! other bits of the register are preserved. A read-modify-write spans two bus
//! transactions and is not atomic; sharing one device between execution
//! contexts needs external locking around the driver.
//!
//! Every multi-step operation stops at the first failed transfer, with one
//! exception: [`Lps22ch::all_sources`] always attempts all three of its reads.

use crate::fifo::{FifoMode, FifoStatus};
use crate::interface::{I2cMode, I3cMode, PullUp, SpiMode};
use crate::interrupt::{
    AllSources, IntNotification, IntSource, InterruptRoute, PinMode, PinPolarity, Status,
    ThresholdEvent,
};
use crate::registers::{
    CTRL_REG1, CTRL_REG2, CTRL_REG3, FIFO_DATA_OUT_PRESS_XL, FIFO_DATA_OUT_TEMP_L, FIFO_STATUS1,
    FIFO_STATUS2, Field, FieldValue, INT_SOURCE, PRESS_OUT_XL, REF_P_L, RPDS_L, STATUS, TEMP_OUT_L,
    THS_P_H, THS_P_L, WHO_AM_I, fields,
};
use crate::sensor::{
    DataRate, LowPassBandwidth, from_lsb_to_celsius, from_lsb_to_hpa, pressure_from_bytes,
    temperature_from_bytes,
};
use crate::{Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;

/// Main driver for the LPS22CH
pub struct Lps22ch<I> {
    interface: I,
}

impl<I> Lps22ch<I> {
    /// Create a new driver on top of a bus transport
    ///
    /// No bus traffic is generated. Use [`verify_device_id`](Self::verify_device_id)
    /// to check that an LPS22CH answers on the bus.
    pub const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Get a reference to the underlying interface
    pub const fn interface(&self) -> &I {
        &self.interface
    }
}

impl<I, E> Lps22ch<I>
where
    I: RegisterInterface<AddressType = u8, Error = Error<E>>,
{
    // ==================== Register primitives ====================

    /// Read `buffer.len()` consecutive registers starting at `address`
    ///
    /// The device advances the address after each byte (auto-increment).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_registers(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.interface
            .read_register(address, size_bits(buffer.len()), buffer)
    }

    /// Write `data` to consecutive registers starting at `address`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_registers(&mut self, address: u8, data: &[u8]) -> Result<(), Error<E>> {
        self.interface
            .write_register(address, size_bits(data.len()), data)
    }

    /// Read a single register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.read_registers(address, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Write a single register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.write_registers(address, &[value])
    }

    /// Read a register, transform its value and write it back
    ///
    /// The write is skipped when the read fails.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn modify_register<F>(&mut self, address: u8, f: F) -> Result<(), Error<E>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register(address)?;
        self.write_register(address, f(value))
    }

    // ==================== Field access ====================

    /// Set one field of a register, preserving all other bits
    ///
    /// `value` is right-aligned; bits that do not fit the field are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. When the read
    /// fails nothing is written.
    pub fn set_field(&mut self, field: Field, value: u8) -> Result<(), Error<E>> {
        self.modify_register(field.address, |reg| field.insert(reg, value))
    }

    /// Read one field of a register, right-aligned
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_field(&mut self, field: Field) -> Result<u8, Error<E>> {
        Ok(field.extract(self.read_register(field.address)?))
    }

    /// Set or clear a single-bit field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_flag(&mut self, field: Field, enable: bool) -> Result<(), Error<E>> {
        self.set_field(field, u8::from(enable))
    }

    /// Read a single-bit field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn flag(&mut self, field: Field) -> Result<bool, Error<E>> {
        Ok(self.get_field(field)? != 0)
    }

    /// Write an enumerated setting into its field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_field_value<T: FieldValue>(&mut self, value: T) -> Result<(), Error<E>> {
        self.set_field(T::FIELD, value.bits())
    }

    /// Read an enumerated setting from its field
    ///
    /// Reserved bit patterns decode to the setting's default member.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn field_value<T: FieldValue>(&mut self) -> Result<T, Error<E>> {
        Ok(T::from_bits(self.get_field(T::FIELD)?))
    }

    // ==================== Data generation ====================

    /// Reset the AUTOZERO function (`INTERRUPT_CFG.RESET_AZ`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_autozero_reset(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::RESET_AZ, enable)
    }

    /// Read `INTERRUPT_CFG.RESET_AZ`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_reset(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::RESET_AZ)
    }

    /// Enable the AUTOZERO function (`INTERRUPT_CFG.AUTOZERO`)
    ///
    /// The current pressure is latched as reference and subsequent outputs are
    /// differences from it.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_autozero(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::AUTOZERO, enable)
    }

    /// Read `INTERRUPT_CFG.AUTOZERO`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::AUTOZERO)
    }

    /// Reset the AUTOREFP function (`INTERRUPT_CFG.RESET_ARP`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_snap_reset(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::RESET_ARP, enable)
    }

    /// Read `INTERRUPT_CFG.RESET_ARP`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_snap_reset(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::RESET_ARP)
    }

    /// Enable the AUTOREFP function (`INTERRUPT_CFG.AUTOREFP`)
    ///
    /// The current pressure is latched as reference for the threshold
    /// interrupt while the output keeps reporting absolute pressure.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_snap(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::AUTOREFP, enable)
    }

    /// Read `INTERRUPT_CFG.AUTOREFP`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_snap(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::AUTOREFP)
    }

    /// Block data update (`CTRL_REG1.BDU`)
    ///
    /// When enabled the output registers are not updated until both the MSB
    /// and LSB have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::BDU, enable)
    }

    /// Read `CTRL_REG1.BDU`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn block_data_update(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::BDU)
    }

    /// Select the output data rate
    ///
    /// The rate selector lives in `CTRL_REG1`, the low-noise and one-shot bits
    /// in `CTRL_REG2`. Both registers are read first, then written in order;
    /// the sequence stops at the first failed transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<E>> {
        let ctrl_reg1 = self.read_register(CTRL_REG1)?;
        let ctrl_reg2 = self.read_register(CTRL_REG2)?;

        self.write_register(CTRL_REG1, fields::ODR.insert(ctrl_reg1, rate.odr()))?;

        let ctrl_reg2 = fields::LOW_NOISE_EN.insert(ctrl_reg2, u8::from(rate.low_noise()));
        let ctrl_reg2 = fields::ONE_SHOT.insert(ctrl_reg2, u8::from(rate.one_shot()));
        self.write_register(CTRL_REG2, ctrl_reg2)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Data rate set to {} (code 0x{:02X})", rate, rate.bits());

        Ok(())
    }

    /// Read back the output data rate
    ///
    /// Combinations that do not name a documented rate decode to
    /// [`DataRate::PowerDown`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_rate(&mut self) -> Result<DataRate, Error<E>> {
        let ctrl_reg1 = self.read_register(CTRL_REG1)?;
        let ctrl_reg2 = self.read_register(CTRL_REG2)?;

        Ok(DataRate::from_bits(DataRate::compose(
            fields::ODR.extract(ctrl_reg1),
            fields::ONE_SHOT.extract(ctrl_reg2) != 0,
            fields::LOW_NOISE_EN.extract(ctrl_reg2) != 0,
        )))
    }

    /// Reference pressure used by AUTOZERO and AUTOREFP (`REF_P_L/H`)
    ///
    /// 16-bit two's complement, 4096 LSB/hPa scaled down by 256 (16 LSB/hPa).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_ref(&mut self, value: i16) -> Result<(), Error<E>> {
        self.write_registers(REF_P_L, &split_i16(value))
    }

    /// Read the reference pressure (`REF_P_L/H`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_ref(&mut self) -> Result<i16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.read_registers(REF_P_L, &mut buffer)?;
        Ok(join_i16(buffer))
    }

    /// Pressure offset for one-point calibration after soldering (`RPDS_L/H`)
    ///
    /// 16-bit two's complement, 16 LSB/hPa.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_offset(&mut self, value: i16) -> Result<(), Error<E>> {
        self.write_registers(RPDS_L, &split_i16(value))
    }

    /// Read the pressure offset (`RPDS_L/H`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_offset(&mut self) -> Result<i16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.read_registers(RPDS_L, &mut buffer)?;
        Ok(join_i16(buffer))
    }

    /// Read every interrupt and status flag of the device
    ///
    /// Reads `INT_SOURCE`, `FIFO_STATUS2` and `STATUS` in that order. Unlike
    /// the other multi-step operations, all three reads are attempted even if
    /// an earlier one fails, and the result reflects only the last read:
    /// - `Err` means the `STATUS` read failed; nothing is known about the others.
    /// - `Ok` does not imply the first two reads succeeded; a part whose read
    ///   failed is left at its default (all flags clear).
    ///
    /// # Errors
    ///
    /// Returns an error if reading `STATUS` fails.
    pub fn all_sources(&mut self) -> Result<AllSources, Error<E>> {
        let mut sources = AllSources::default();

        match self.read_register(INT_SOURCE) {
            Ok(raw) => sources.int_source = IntSource::from_raw(raw),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("all_sources: INT_SOURCE read failed");
            }
        }

        match self.read_register(FIFO_STATUS2) {
            Ok(raw) => sources.fifo_status = FifoStatus::from_raw(raw),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("all_sources: FIFO_STATUS2 read failed");
            }
        }

        sources.status = Status::from_raw(self.read_register(STATUS)?);

        Ok(sources)
    }

    /// Read the `STATUS` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn status(&mut self) -> Result<Status, Error<E>> {
        Ok(Status::from_raw(self.read_register(STATUS)?))
    }

    /// New pressure sample available (`STATUS.P_DA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_data_ready(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::P_DA)
    }

    /// New temperature sample available (`STATUS.T_DA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_data_ready(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::T_DA)
    }

    // ==================== Data output ====================

    /// Read the raw pressure output (`PRESS_OUT_XL/L/H`)
    ///
    /// The 24-bit sample is returned shifted left by 8 bits; convert with
    /// [`from_lsb_to_hpa`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_raw(&mut self) -> Result<u32, Error<E>> {
        let mut buffer = [0u8; 3];
        self.read_registers(PRESS_OUT_XL, &mut buffer)?;
        Ok(pressure_from_bytes(buffer))
    }

    /// Read the raw temperature output (`TEMP_OUT_L/H`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_raw(&mut self) -> Result<i16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.read_registers(TEMP_OUT_L, &mut buffer)?;
        Ok(temperature_from_bytes(buffer))
    }

    /// Read the oldest pressure sample from the FIFO, same format as [`pressure_raw`](Self::pressure_raw)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_pressure_raw(&mut self) -> Result<u32, Error<E>> {
        let mut buffer = [0u8; 3];
        self.read_registers(FIFO_DATA_OUT_PRESS_XL, &mut buffer)?;
        Ok(pressure_from_bytes(buffer))
    }

    /// Read the oldest temperature sample from the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_temperature_raw(&mut self) -> Result<i16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.read_registers(FIFO_DATA_OUT_TEMP_L, &mut buffer)?;
        Ok(temperature_from_bytes(buffer))
    }

    /// Read pressure in hPa
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pressure_hpa(&mut self) -> Result<f32, Error<E>> {
        Ok(from_lsb_to_hpa(self.pressure_raw()?))
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<E>> {
        Ok(from_lsb_to_celsius(self.temperature_raw()?))
    }

    // ==================== Common ====================

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0xB3 for an LPS22CH.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_register(WHO_AM_I)
    }

    /// Check that the device on the bus is an LPS22CH
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn verify_device_id(&mut self) -> Result<(), Error<E>> {
        let id = self.device_id()?;
        if id != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Unexpected WHO_AM_I 0x{:02X} (expected 0x{:02X})",
                id,
                WHO_AM_I_VALUE
            );
            return Err(Error::InvalidDevice(id));
        }
        Ok(())
    }

    /// Software reset (`CTRL_REG2.SWRESET`)
    ///
    /// The bit clears itself once the reset has completed.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_reset(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::SWRESET, enable)
    }

    /// Read `CTRL_REG2.SWRESET` (true while a reset is in progress)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::SWRESET)
    }

    /// Issue a software reset and wait until the device reports completion
    ///
    /// Polls `SWRESET` once per millisecond for up to 10 ms.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// [`Error::Timeout`] if the reset bit never clears.
    pub fn software_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<E>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        const MAX_WAIT_MS: u32 = 10;

        self.set_reset(true)?;

        for _ in 0..MAX_WAIT_MS {
            delay.delay_ms(1);
            if !self.reset()? {
                #[cfg(feature = "defmt")]
                defmt::debug!("Software reset complete");
                return Ok(());
            }
        }

        Err(Error::Timeout)
    }

    /// Register address auto-increment on multi-byte access (`CTRL_REG2.IF_ADD_INC`)
    ///
    /// Enabled by default; every multi-byte accessor of this driver relies on it.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_auto_increment(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::IF_ADD_INC, enable)
    }

    /// Read `CTRL_REG2.IF_ADD_INC`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn auto_increment(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::IF_ADD_INC)
    }

    /// Reboot memory content (`CTRL_REG2.BOOT`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_boot(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::BOOT, enable)?;

        if enable {
            #[cfg(feature = "defmt")]
            defmt::debug!("Memory reboot requested");
        }

        Ok(())
    }

    /// Read `CTRL_REG2.BOOT`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn boot(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::BOOT)
    }

    // ==================== Filters ====================

    /// Low-pass filter bandwidth on the pressure path (`CTRL_REG1.LPFP_CFG`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_lp_bandwidth(&mut self, bandwidth: LowPassBandwidth) -> Result<(), Error<E>> {
        self.set_field_value(bandwidth)
    }

    /// Read the low-pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn lp_bandwidth(&mut self) -> Result<LowPassBandwidth, Error<E>> {
        self.field_value()
    }

    // ==================== Serial interface ====================

    /// Enable or disable the I2C interface (`IF_CTRL.I2C_DISABLE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_i2c_interface(&mut self, mode: I2cMode) -> Result<(), Error<E>> {
        self.set_field_value(mode)
    }

    /// Read the I2C interface state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i2c_interface(&mut self) -> Result<I2cMode, Error<E>> {
        self.field_value()
    }

    /// Enable or disable the MIPI I3C interface (`IF_CTRL.I3C_DISABLE`)
    ///
    /// `IF_CTRL.INT_EN_I3C` is written in the same cycle as the complement of
    /// the disable bit, so the INT_DRDY pin follows the I3C state.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_i3c_interface(&mut self, mode: I3cMode) -> Result<(), Error<E>> {
        let disable = mode.bits();
        let int_enable = u8::from(disable == 0);
        self.modify_register(I3cMode::FIELD.address, |reg| {
            let reg = fields::I3C_DISABLE.insert(reg, disable);
            fields::INT_EN_I3C.insert(reg, int_enable)
        })
    }

    /// Read the I3C interface state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i3c_interface(&mut self) -> Result<I3cMode, Error<E>> {
        self.field_value()
    }

    /// Pull-up on the SDO/SA0 pin (`IF_CTRL.SDO_PU_EN`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sdo_sa0_mode(&mut self, pull_up: PullUp) -> Result<(), Error<E>> {
        self.set_field(fields::SDO_PU_EN, pull_up.bits())
    }

    /// Read the SDO/SA0 pull-up state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sdo_sa0_mode(&mut self) -> Result<PullUp, Error<E>> {
        Ok(PullUp::from_bits(self.get_field(fields::SDO_PU_EN)?))
    }

    /// Pull-up on the SDA pin (`IF_CTRL.SDA_PU_EN`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sda_mode(&mut self, pull_up: PullUp) -> Result<(), Error<E>> {
        self.set_field(fields::SDA_PU_EN, pull_up.bits())
    }

    /// Read the SDA pull-up state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sda_mode(&mut self) -> Result<PullUp, Error<E>> {
        Ok(PullUp::from_bits(self.get_field(fields::SDA_PU_EN)?))
    }

    /// SPI 3/4-wire mode (`CTRL_REG1.SIM`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_spi_mode(&mut self, mode: SpiMode) -> Result<(), Error<E>> {
        self.set_field_value(mode)
    }

    /// Read the SPI wire mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn spi_mode(&mut self) -> Result<SpiMode, Error<E>> {
        self.field_value()
    }

    /// Disconnect the INT_DRDY pull-down (`IF_CTRL.PD_DIS_INT1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int_pull_down_disable(&mut self, disable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::PD_DIS_INT1, disable)
    }

    /// Read `IF_CTRL.PD_DIS_INT1`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_pull_down_disable(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::PD_DIS_INT1)
    }

    // ==================== Interrupt pins ====================

    /// Pulsed or latched interrupt requests (`INTERRUPT_CFG.LIR`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int_notification(&mut self, mode: IntNotification) -> Result<(), Error<E>> {
        self.set_field_value(mode)
    }

    /// Read the interrupt notification mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_notification(&mut self) -> Result<IntNotification, Error<E>> {
        self.field_value()
    }

    /// Push-pull or open-drain interrupt pin (`CTRL_REG2.PP_OD`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_mode(&mut self, mode: PinMode) -> Result<(), Error<E>> {
        self.set_field_value(mode)
    }

    /// Read the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_mode(&mut self) -> Result<PinMode, Error<E>> {
        self.field_value()
    }

    /// Interrupt pin polarity (`CTRL_REG2.INT_H_L`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_polarity(&mut self, polarity: PinPolarity) -> Result<(), Error<E>> {
        self.set_field_value(polarity)
    }

    /// Read the interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_polarity(&mut self) -> Result<PinPolarity, Error<E>> {
        self.field_value()
    }

    /// Route signals to the INT_DRDY pin (writes the whole `CTRL_REG3`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_int_route(&mut self, route: &InterruptRoute) -> Result<(), Error<E>> {
        self.write_register(CTRL_REG3, route.to_raw())
    }

    /// Read the INT_DRDY pin routing
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_int_route(&mut self) -> Result<InterruptRoute, Error<E>> {
        Ok(InterruptRoute::from_raw(self.read_register(CTRL_REG3)?))
    }

    // ==================== Interrupt on threshold ====================

    /// Differential pressure interrupt direction (`INTERRUPT_CFG.PHE/PLE`)
    ///
    /// `INTERRUPT_CFG.DIFF_EN` is updated in the same cycle: cleared for
    /// [`ThresholdEvent::NoThreshold`], set otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int_on_threshold(&mut self, event: ThresholdEvent) -> Result<(), Error<E>> {
        let diff_en = u8::from(event != ThresholdEvent::NoThreshold);
        self.modify_register(ThresholdEvent::FIELD.address, |reg| {
            let reg = ThresholdEvent::FIELD.insert(reg, event.bits());
            fields::DIFF_EN.insert(reg, diff_en)
        })
    }

    /// Read the differential pressure interrupt direction
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_on_threshold(&mut self) -> Result<ThresholdEvent, Error<E>> {
        self.field_value()
    }

    /// Pressure threshold for the differential interrupt (`THS_P_L/H`)
    ///
    /// Unsigned 15-bit value, 16 LSB/hPa. Bit 15 is dropped. The two bytes are
    /// written one at a time, low byte first; a failed low-byte write skips the
    /// high byte.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int_threshold(&mut self, threshold: u16) -> Result<(), Error<E>> {
        let [low, high] = threshold.to_le_bytes();
        self.write_register(THS_P_L, low)?;
        self.write_register(THS_P_H, high & fields::THS_H.mask)
    }

    /// Read the pressure threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_threshold(&mut self) -> Result<u16, Error<E>> {
        let low = self.read_register(THS_P_L)?;
        let high = fields::THS_H.extract(self.read_register(THS_P_H)?);
        Ok(u16::from(high) * 256 + u16::from(low))
    }

    // ==================== FIFO ====================

    /// FIFO operating mode (`FIFO_CTRL.F_MODE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<E>> {
        self.set_field_value(mode)
    }

    /// Read the FIFO operating mode
    ///
    /// The reserved code 4 decodes to [`FifoMode::Bypass`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mode(&mut self) -> Result<FifoMode, Error<E>> {
        self.field_value()
    }

    /// Limit FIFO depth to the watermark level (`FIFO_CTRL.STOP_ON_WTM`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_stop_on_watermark(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::STOP_ON_WTM, enable)
    }

    /// Read `FIFO_CTRL.STOP_ON_WTM`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_stop_on_watermark(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::STOP_ON_WTM)
    }

    /// FIFO watermark level, 0..=127 (`FIFO_WTM`)
    ///
    /// Values above 127 are truncated to the 7-bit field.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_watermark(&mut self, level: u8) -> Result<(), Error<E>> {
        self.set_field(fields::WTM, level)
    }

    /// Read the FIFO watermark level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark(&mut self) -> Result<u8, Error<E>> {
        self.get_field(fields::WTM)
    }

    /// Number of samples stored in the FIFO (`FIFO_STATUS1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_data_level(&mut self) -> Result<u8, Error<E>> {
        self.read_register(FIFO_STATUS1)
    }

    /// Read all FIFO flags (`FIFO_STATUS2`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_status(&mut self) -> Result<FifoStatus, Error<E>> {
        Ok(FifoStatus::from_raw(self.read_register(FIFO_STATUS2)?))
    }

    /// FIFO full flag (`FIFO_STATUS2.FIFO_FULL_IA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_full_flag(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::FIFO_FULL_IA)
    }

    /// FIFO overrun flag (`FIFO_STATUS2.FIFO_OVR_IA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_overrun_flag(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::FIFO_OVR_IA)
    }

    /// FIFO watermark flag (`FIFO_STATUS2.FIFO_WTM_IA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark_flag(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::FIFO_WTM_IA)
    }

    /// FIFO overrun on INT_DRDY (`CTRL_REG3.INT_F_OVR`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_overrun_on_int(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::INT_F_OVR, enable)
    }

    /// Read `CTRL_REG3.INT_F_OVR`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_overrun_on_int(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::INT_F_OVR)
    }

    /// FIFO watermark on INT_DRDY (`CTRL_REG3.INT_F_WTM`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_threshold_on_int(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::INT_F_WTM, enable)
    }

    /// Read `CTRL_REG3.INT_F_WTM`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_threshold_on_int(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::INT_F_WTM)
    }

    /// FIFO full on INT_DRDY (`CTRL_REG3.INT_F_FULL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_full_on_int(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.set_flag(fields::INT_F_FULL, enable)
    }

    /// Read `CTRL_REG3.INT_F_FULL`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_full_on_int(&mut self) -> Result<bool, Error<E>> {
        self.flag(fields::INT_F_FULL)
    }
}

/// Transfer size in bits as reported to the register interface
fn size_bits(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |bytes| bytes.saturating_mul(8))
}

/// Split a 16-bit two's-complement value into `[low, high]` register bytes
///
/// Works on the unsigned bit pattern so every `i16` maps cleanly.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn split_i16(value: i16) -> [u8; 2] {
    let bits = value as u16;
    let high = bits / 256;
    let low = bits - high * 256;
    [low as u8, high as u8]
}

/// Join `[low, high]` register bytes into a 16-bit two's-complement value
#[allow(clippy::cast_possible_wrap)]
fn join_i16([low, high]: [u8; 2]) -> i16 {
    (u16::from(high) * 256 + u16::from(low)) as i16
}
