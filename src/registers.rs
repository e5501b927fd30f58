//! Register map and bitfield layout for the LPS22CH
//!
//! Every register on the LPS22CH is 8 bits wide and lives in a single flat
//! address space (no banks). Registers that hold more than one setting are
//! described here as a table of [`Field`]s: the owning address, the mask of
//! the bits the field occupies and the shift of its least significant bit.
//! The driver uses the table for all read-modify-write accessors, so a field
//! update never touches bits outside its mask.
//!
//! ## Address map
//! - **0x0B..=0x0E**: interrupt configuration, pressure threshold, interface control
//! - **0x0F**: `WHO_AM_I` (reads 0xB3)
//! - **0x10..=0x14**: control registers 1-3, FIFO control and watermark
//! - **0x15..=0x19**: reference pressure and one-point calibration offset
//! - **0x24..=0x2C**: interrupt source, FIFO status, status, output data
//! - **0x78..=0x7C**: FIFO output data

/// Interrupt mode for pressure acquisition configuration
pub const INTERRUPT_CFG: u8 = 0x0B;
/// User-defined pressure threshold, low byte
pub const THS_P_L: u8 = 0x0C;
/// User-defined pressure threshold, high byte (7 bits)
pub const THS_P_H: u8 = 0x0D;
/// Interface control (pull-ups, I2C/I3C disable)
pub const IF_CTRL: u8 = 0x0E;
/// Device identification
pub const WHO_AM_I: u8 = 0x0F;
/// Control register 1 (ODR, low-pass filter, BDU, SPI mode)
pub const CTRL_REG1: u8 = 0x10;
/// Control register 2 (boot, interrupt pin, auto-increment, reset, one-shot)
pub const CTRL_REG2: u8 = 0x11;
/// Control register 3 (INT_DRDY pin routing)
pub const CTRL_REG3: u8 = 0x12;
/// FIFO control
pub const FIFO_CTRL: u8 = 0x13;
/// FIFO watermark threshold
pub const FIFO_WTM: u8 = 0x14;
/// Reference pressure, low byte
pub const REF_P_L: u8 = 0x15;
/// Reference pressure, high byte
pub const REF_P_H: u8 = 0x16;
/// Pressure offset (one-point calibration), low byte
pub const RPDS_L: u8 = 0x18;
/// Pressure offset (one-point calibration), high byte
pub const RPDS_H: u8 = 0x19;
/// Interrupt source (read only)
pub const INT_SOURCE: u8 = 0x24;
/// FIFO stored data level (read only)
pub const FIFO_STATUS1: u8 = 0x25;
/// FIFO flags (read only)
pub const FIFO_STATUS2: u8 = 0x26;
/// Data-ready and overrun flags (read only)
pub const STATUS: u8 = 0x27;
/// Pressure output, extra-low byte
pub const PRESS_OUT_XL: u8 = 0x28;
/// Pressure output, low byte
pub const PRESS_OUT_L: u8 = 0x29;
/// Pressure output, high byte
pub const PRESS_OUT_H: u8 = 0x2A;
/// Temperature output, low byte
pub const TEMP_OUT_L: u8 = 0x2B;
/// Temperature output, high byte
pub const TEMP_OUT_H: u8 = 0x2C;
/// FIFO pressure output, extra-low byte
pub const FIFO_DATA_OUT_PRESS_XL: u8 = 0x78;
/// FIFO pressure output, low byte
pub const FIFO_DATA_OUT_PRESS_L: u8 = 0x79;
/// FIFO pressure output, high byte
pub const FIFO_DATA_OUT_PRESS_H: u8 = 0x7A;
/// FIFO temperature output, low byte
pub const FIFO_DATA_OUT_TEMP_L: u8 = 0x7B;
/// FIFO temperature output, high byte
pub const FIFO_DATA_OUT_TEMP_H: u8 = 0x7C;

/// A named bit range inside one 8-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Address of the owning register
    pub address: u8,
    /// Bits occupied by the field, in register position
    pub mask: u8,
    /// Position of the field's least significant bit
    pub shift: u8,
}

impl Field {
    /// Describe the field covering `mask` in the register at `address`
    ///
    /// The shift is derived from the lowest set bit of `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is zero. In a `const` item this is a compile error.
    pub const fn new(address: u8, mask: u8) -> Self {
        assert!(mask != 0, "field mask must not be empty");
        Self {
            address,
            mask,
            shift: mask.trailing_zeros() as u8,
        }
    }

    /// Extract the field from a full register value, right-aligned
    pub const fn extract(&self, register: u8) -> u8 {
        (register & self.mask) >> self.shift
    }

    /// Replace the field inside `register`, leaving every other bit as it was
    ///
    /// Bits of `value` that do not fit the field width are discarded.
    pub const fn insert(&self, register: u8, value: u8) -> u8 {
        (register & !self.mask) | ((value << self.shift) & self.mask)
    }

    /// Largest value the field can hold
    pub const fn max_value(&self) -> u8 {
        self.mask >> self.shift
    }
}

/// Bitfield layout table
///
/// One constant per field touched by a driver accessor.
pub mod fields {
    use super::{
        CTRL_REG1, CTRL_REG2, CTRL_REG3, FIFO_CTRL, FIFO_STATUS2, FIFO_WTM, Field, IF_CTRL,
        INT_SOURCE, INTERRUPT_CFG, STATUS, THS_P_H,
    };

    // INTERRUPT_CFG
    /// Interrupt on pressure high/low event (PHE | PLE)
    pub const PE: Field = Field::new(INTERRUPT_CFG, 0b0000_0011);
    /// Latch interrupt request into `INT_SOURCE`
    pub const LIR: Field = Field::new(INTERRUPT_CFG, 0b0000_0100);
    /// Enable interrupt generation
    pub const DIFF_EN: Field = Field::new(INTERRUPT_CFG, 0b0000_1000);
    /// Reset AUTOZERO function
    pub const RESET_AZ: Field = Field::new(INTERRUPT_CFG, 0b0001_0000);
    /// Enable AUTOZERO function
    pub const AUTOZERO: Field = Field::new(INTERRUPT_CFG, 0b0010_0000);
    /// Reset AUTOREFP function
    pub const RESET_ARP: Field = Field::new(INTERRUPT_CFG, 0b0100_0000);
    /// Enable AUTOREFP function
    pub const AUTOREFP: Field = Field::new(INTERRUPT_CFG, 0b1000_0000);

    /// Threshold high byte (bit 7 is reserved)
    pub const THS_H: Field = Field::new(THS_P_H, 0b0111_1111);

    // IF_CTRL
    /// Disable the I2C interface
    pub const I2C_DISABLE: Field = Field::new(IF_CTRL, 0b0000_0001);
    /// Disable the MIPI I3C interface
    pub const I3C_DISABLE: Field = Field::new(IF_CTRL, 0b0000_0010);
    /// Disable the pull-down on INT_DRDY
    pub const PD_DIS_INT1: Field = Field::new(IF_CTRL, 0b0000_0100);
    /// Pull-up on SDO pin
    pub const SDO_PU_EN: Field = Field::new(IF_CTRL, 0b0000_1000);
    /// Pull-up on SDA pin
    pub const SDA_PU_EN: Field = Field::new(IF_CTRL, 0b0001_0000);
    /// INT_DRDY pin enabled while I3C is in use
    pub const INT_EN_I3C: Field = Field::new(IF_CTRL, 0b1000_0000);

    // CTRL_REG1
    /// SPI serial interface mode (3/4 wire)
    pub const SIM: Field = Field::new(CTRL_REG1, 0b0000_0001);
    /// Block data update
    pub const BDU: Field = Field::new(CTRL_REG1, 0b0000_0010);
    /// Low-pass filter configuration
    pub const LPFP_CFG: Field = Field::new(CTRL_REG1, 0b0000_1100);
    /// Output data rate selector
    pub const ODR: Field = Field::new(CTRL_REG1, 0b0111_0000);

    // CTRL_REG2
    /// Trigger a single measurement
    pub const ONE_SHOT: Field = Field::new(CTRL_REG2, 0b0000_0001);
    /// Low-noise configuration
    pub const LOW_NOISE_EN: Field = Field::new(CTRL_REG2, 0b0000_0010);
    /// Software reset
    pub const SWRESET: Field = Field::new(CTRL_REG2, 0b0000_0100);
    /// Register address auto-increment on multi-byte access
    pub const IF_ADD_INC: Field = Field::new(CTRL_REG2, 0b0001_0000);
    /// Push-pull / open-drain on interrupt pin
    pub const PP_OD: Field = Field::new(CTRL_REG2, 0b0010_0000);
    /// Interrupt active high / low
    pub const INT_H_L: Field = Field::new(CTRL_REG2, 0b0100_0000);
    /// Reboot memory content
    pub const BOOT: Field = Field::new(CTRL_REG2, 0b1000_0000);

    // CTRL_REG3
    /// Data signal on INT_DRDY pin
    pub const INT_S: Field = Field::new(CTRL_REG3, 0b0000_0011);
    /// Data-ready signal on INT_DRDY pin
    pub const DRDY: Field = Field::new(CTRL_REG3, 0b0000_0100);
    /// FIFO overrun interrupt on INT_DRDY pin
    pub const INT_F_OVR: Field = Field::new(CTRL_REG3, 0b0000_1000);
    /// FIFO watermark interrupt on INT_DRDY pin
    pub const INT_F_WTM: Field = Field::new(CTRL_REG3, 0b0001_0000);
    /// FIFO full interrupt on INT_DRDY pin
    pub const INT_F_FULL: Field = Field::new(CTRL_REG3, 0b0010_0000);

    // FIFO_CTRL
    /// FIFO mode selection, including the trigger-mode bit
    pub const F_MODE: Field = Field::new(FIFO_CTRL, 0b0000_0111);
    /// Stop filling the FIFO at the watermark level
    pub const STOP_ON_WTM: Field = Field::new(FIFO_CTRL, 0b0000_1000);

    /// FIFO watermark level
    pub const WTM: Field = Field::new(FIFO_WTM, 0b0111_1111);

    // INT_SOURCE
    /// Differential pressure high
    pub const PH: Field = Field::new(INT_SOURCE, 0b0000_0001);
    /// Differential pressure low
    pub const PL: Field = Field::new(INT_SOURCE, 0b0000_0010);
    /// Interrupt active
    pub const IA: Field = Field::new(INT_SOURCE, 0b0000_0100);
    /// Boot phase running
    pub const BOOT_ON: Field = Field::new(INT_SOURCE, 0b1000_0000);

    // FIFO_STATUS2
    /// FIFO completely filled
    pub const FIFO_FULL_IA: Field = Field::new(FIFO_STATUS2, 0b0010_0000);
    /// FIFO overrun
    pub const FIFO_OVR_IA: Field = Field::new(FIFO_STATUS2, 0b0100_0000);
    /// FIFO watermark reached
    pub const FIFO_WTM_IA: Field = Field::new(FIFO_STATUS2, 0b1000_0000);

    // STATUS
    /// Pressure data available
    pub const P_DA: Field = Field::new(STATUS, 0b0000_0001);
    /// Temperature data available
    pub const T_DA: Field = Field::new(STATUS, 0b0000_0010);
    /// Pressure data overrun
    pub const P_OR: Field = Field::new(STATUS, 0b0001_0000);
    /// Temperature data overrun
    pub const T_OR: Field = Field::new(STATUS, 0b0010_0000);
}

/// Enumerated value stored in a single register field
///
/// Decoding is permissive: a bit pattern outside the documented set maps to
/// the first member of the enumeration instead of an error, matching how the
/// device reports reserved codes.
pub trait FieldValue: Copy {
    /// Field holding the value
    const FIELD: Field;

    /// Raw field bits, right-aligned
    fn bits(self) -> u8;

    /// Decode right-aligned field bits, falling back to the default member
    fn from_bits(bits: u8) -> Self;
}
