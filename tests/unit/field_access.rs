//! Unit tests for single-field read-modify-write access

use crate::common::mock_interface::MockInterface;
use crate::common::{MockError, Operation, create_mock_driver};
use lps22ch::registers::{self, Field, fields};
use lps22ch::{Error, I2cMode, I3cMode, LowPassBandwidth, Lps22ch, PullUp, SpiMode};

type Driver = Lps22ch<MockInterface>;
type FlagSetter = fn(&mut Driver, bool) -> Result<(), Error<MockError>>;
type FlagGetter = fn(&mut Driver) -> Result<bool, Error<MockError>>;

/// Every writable field of the register map
const WRITABLE_FIELDS: &[(&str, Field)] = &[
    ("PE", fields::PE),
    ("LIR", fields::LIR),
    ("DIFF_EN", fields::DIFF_EN),
    ("RESET_AZ", fields::RESET_AZ),
    ("AUTOZERO", fields::AUTOZERO),
    ("RESET_ARP", fields::RESET_ARP),
    ("AUTOREFP", fields::AUTOREFP),
    ("THS_H", fields::THS_H),
    ("I2C_DISABLE", fields::I2C_DISABLE),
    ("I3C_DISABLE", fields::I3C_DISABLE),
    ("PD_DIS_INT1", fields::PD_DIS_INT1),
    ("SDO_PU_EN", fields::SDO_PU_EN),
    ("SDA_PU_EN", fields::SDA_PU_EN),
    ("INT_EN_I3C", fields::INT_EN_I3C),
    ("SIM", fields::SIM),
    ("BDU", fields::BDU),
    ("LPFP_CFG", fields::LPFP_CFG),
    ("ODR", fields::ODR),
    ("ONE_SHOT", fields::ONE_SHOT),
    ("LOW_NOISE_EN", fields::LOW_NOISE_EN),
    ("SWRESET", fields::SWRESET),
    ("IF_ADD_INC", fields::IF_ADD_INC),
    ("PP_OD", fields::PP_OD),
    ("INT_H_L", fields::INT_H_L),
    ("BOOT", fields::BOOT),
    ("INT_S", fields::INT_S),
    ("DRDY", fields::DRDY),
    ("INT_F_OVR", fields::INT_F_OVR),
    ("INT_F_WTM", fields::INT_F_WTM),
    ("INT_F_FULL", fields::INT_F_FULL),
    ("F_MODE", fields::F_MODE),
    ("STOP_ON_WTM", fields::STOP_ON_WTM),
    ("WTM", fields::WTM),
];

/// Boolean accessor pairs and the bit they drive
const FLAG_ACCESSORS: &[(&str, Field, FlagSetter, FlagGetter)] = &[
    ("autozero", fields::AUTOZERO, Driver::set_autozero, Driver::autozero),
    ("autozero_reset", fields::RESET_AZ, Driver::set_autozero_reset, Driver::autozero_reset),
    ("pressure_snap", fields::AUTOREFP, Driver::set_pressure_snap, Driver::pressure_snap),
    (
        "pressure_snap_reset",
        fields::RESET_ARP,
        Driver::set_pressure_snap_reset,
        Driver::pressure_snap_reset,
    ),
    ("block_data_update", fields::BDU, Driver::set_block_data_update, Driver::block_data_update),
    ("auto_increment", fields::IF_ADD_INC, Driver::set_auto_increment, Driver::auto_increment),
    (
        "int_pull_down_disable",
        fields::PD_DIS_INT1,
        Driver::set_int_pull_down_disable,
        Driver::int_pull_down_disable,
    ),
    (
        "fifo_stop_on_watermark",
        fields::STOP_ON_WTM,
        Driver::set_fifo_stop_on_watermark,
        Driver::fifo_stop_on_watermark,
    ),
    (
        "fifo_overrun_on_int",
        fields::INT_F_OVR,
        Driver::set_fifo_overrun_on_int,
        Driver::fifo_overrun_on_int,
    ),
    (
        "fifo_threshold_on_int",
        fields::INT_F_WTM,
        Driver::set_fifo_threshold_on_int,
        Driver::fifo_threshold_on_int,
    ),
    ("fifo_full_on_int", fields::INT_F_FULL, Driver::set_fifo_full_on_int, Driver::fifo_full_on_int),
];

#[test]
fn test_set_flag_preserves_other_bits() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(registers::CTRL_REG1, 0b1010_1101);
    driver.set_block_data_update(true).unwrap();
    assert_eq!(interface.get_register(registers::CTRL_REG1), 0b1010_1111);

    driver.set_block_data_update(false).unwrap();
    assert_eq!(interface.get_register(registers::CTRL_REG1), 0b1010_1101);
}

#[test]
fn test_rmw_is_one_read_then_one_write() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(registers::INTERRUPT_CFG, 0x03);
    interface.clear_operations();

    driver.set_autozero(true).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: registers::INTERRUPT_CFG,
                data: vec![0x03],
            },
            Operation::Write {
                address: registers::INTERRUPT_CFG,
                data: vec![0x23],
            },
        ]
    );
}

#[test]
fn test_interrupt_cfg_flags_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_autozero_reset(true).unwrap();
    driver.set_pressure_snap_reset(true).unwrap();
    driver.set_pressure_snap(true).unwrap();

    assert!(driver.autozero_reset().unwrap());
    assert!(driver.pressure_snap_reset().unwrap());
    assert!(driver.pressure_snap().unwrap());
    assert!(!driver.autozero().unwrap());
    assert_eq!(interface.get_register(registers::INTERRUPT_CFG), 0xD0);
}

#[test]
fn test_every_bit_outside_field_survives() {
    let (mut driver, interface) = create_mock_driver();

    for background in [0x00u8, 0xFF, 0xA5, 0x5A] {
        interface.set_register(registers::CTRL_REG1, background);

        driver.set_lp_bandwidth(LowPassBandwidth::OdrDiv20).unwrap();
        let reg = interface.get_register(registers::CTRL_REG1);

        assert_eq!(reg & !fields::LPFP_CFG.mask, background & !fields::LPFP_CFG.mask);
        assert_eq!(driver.lp_bandwidth().unwrap(), LowPassBandwidth::OdrDiv20);
    }
}

#[test]
fn test_every_field_value_round_trips_over_seeded_background() {
    let (mut driver, interface) = create_mock_driver();
    // Keep SWRESET and BOOT where they were written
    interface.set_stuck_reset(true);

    for &(name, field) in WRITABLE_FIELDS {
        for background in [0xA5u8, 0x5A] {
            for value in 0..=field.max_value() {
                interface.set_register(field.address, background);

                driver.set_field(field, value).unwrap();
                let reg = interface.get_register(field.address);

                assert_eq!(
                    driver.get_field(field).unwrap(),
                    value,
                    "{name} = {value} over {background:#04x}"
                );
                assert_eq!(
                    reg & !field.mask,
                    background & !field.mask,
                    "{name} = {value} disturbed {background:#04x}"
                );
            }
        }
    }
}

#[test]
fn test_flag_accessors_keep_seeded_background() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_stuck_reset(true);

    for &(name, field, set, get) in FLAG_ACCESSORS {
        for background in [0xA5u8, 0x5A] {
            for enable in [true, false] {
                interface.set_register(field.address, background);

                set(&mut driver, enable).unwrap();
                let reg = interface.get_register(field.address);

                assert_eq!(get(&mut driver).unwrap(), enable, "{name}({enable})");
                assert_eq!(
                    reg & !field.mask,
                    background & !field.mask,
                    "{name}({enable}) disturbed {background:#04x}"
                );
            }
        }
    }
}

#[test]
fn test_lp_bandwidth_reserved_code_reads_default() {
    let (mut driver, interface) = create_mock_driver();

    // LPFP_CFG = 0b01 is not documented
    interface.set_register(registers::CTRL_REG1, 0x04);
    assert_eq!(driver.lp_bandwidth().unwrap(), LowPassBandwidth::OdrDiv2);
}

#[test]
fn test_serial_interface_settings() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_i2c_interface(I2cMode::Disabled).unwrap();
    driver.set_sdo_sa0_mode(PullUp::Connected).unwrap();
    driver.set_sda_mode(PullUp::Connected).unwrap();
    driver.set_spi_mode(SpiMode::ThreeWire).unwrap();

    assert_eq!(driver.i2c_interface().unwrap(), I2cMode::Disabled);
    assert_eq!(driver.sdo_sa0_mode().unwrap(), PullUp::Connected);
    assert_eq!(driver.sda_mode().unwrap(), PullUp::Connected);
    assert_eq!(driver.spi_mode().unwrap(), SpiMode::ThreeWire);
    assert_eq!(interface.get_register(registers::IF_CTRL), 0x19);
    assert_eq!(interface.get_register(registers::CTRL_REG1), 0x01);
}

#[test]
fn test_i3c_disable_also_drives_int_enable() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_i3c_interface(I3cMode::Disabled).unwrap();
    let reg = interface.get_register(registers::IF_CTRL);
    assert_eq!(reg & fields::I3C_DISABLE.mask, fields::I3C_DISABLE.mask);
    assert_eq!(reg & fields::INT_EN_I3C.mask, 0);
    assert_eq!(driver.i3c_interface().unwrap(), I3cMode::Disabled);

    driver.set_i3c_interface(I3cMode::Enabled).unwrap();
    let reg = interface.get_register(registers::IF_CTRL);
    assert_eq!(reg & fields::I3C_DISABLE.mask, 0);
    assert_eq!(reg & fields::INT_EN_I3C.mask, fields::INT_EN_I3C.mask);
    assert_eq!(driver.i3c_interface().unwrap(), I3cMode::Enabled);

    // Both bits in one write
    assert_eq!(interface.write_count(), 2);
}

#[test]
fn test_generic_field_helpers() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_field(fields::WTM, 0xFF).unwrap();
    assert_eq!(interface.get_register(registers::FIFO_WTM), 0x7F);
    assert_eq!(driver.get_field(fields::WTM).unwrap(), 0x7F);

    driver.set_field_value(SpiMode::ThreeWire).unwrap();
    assert_eq!(driver.field_value::<SpiMode>().unwrap(), SpiMode::ThreeWire);
}
