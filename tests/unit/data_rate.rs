//! Unit tests for the output data rate spanning CTRL_REG1 and CTRL_REG2

use crate::common::{Operation, create_mock_driver};
use lps22ch::DataRate;
use lps22ch::registers::{CTRL_REG1, CTRL_REG2};

const ALL_RATES: [DataRate; 14] = [
    DataRate::PowerDown,
    DataRate::OneShot,
    DataRate::Hz1,
    DataRate::Hz10,
    DataRate::Hz25,
    DataRate::Hz50,
    DataRate::Hz75,
    DataRate::Hz1LowNoise,
    DataRate::Hz10LowNoise,
    DataRate::Hz25LowNoise,
    DataRate::Hz50LowNoise,
    DataRate::Hz75LowNoise,
    DataRate::Hz100,
    DataRate::Hz200,
];

#[test]
fn test_data_rate_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    for rate in ALL_RATES {
        driver.set_data_rate(rate).unwrap();
        assert_eq!(driver.data_rate().unwrap(), rate, "rate {:?}", rate);
    }
}

#[test]
fn test_data_rate_register_layout() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_data_rate(DataRate::Hz25LowNoise).unwrap();

    // ODR = 3 in bits 6:4
    assert_eq!(interface.get_register(CTRL_REG1), 0x30);
    // IF_ADD_INC kept, LOW_NOISE_EN set, ONE_SHOT clear
    assert_eq!(interface.get_register(CTRL_REG2), 0x12);

    driver.set_data_rate(DataRate::OneShot).unwrap();
    assert_eq!(interface.get_register(CTRL_REG1), 0x00);
    assert_eq!(interface.get_register(CTRL_REG2), 0x11);
}

#[test]
fn test_data_rate_preserves_neighbour_bits() {
    let (mut driver, interface) = create_mock_driver();

    // LPFP_CFG, BDU, SIM set; PP_OD and INT_H_L set
    interface.set_register(CTRL_REG1, 0x0F);
    interface.set_register(CTRL_REG2, 0x70);

    driver.set_data_rate(DataRate::Hz200).unwrap();

    assert_eq!(interface.get_register(CTRL_REG1), 0x7F);
    assert_eq!(interface.get_register(CTRL_REG2), 0x70);
}

#[test]
fn test_data_rate_reads_both_then_writes_in_order() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.set_data_rate(DataRate::Hz10).unwrap();

    let ops = interface.operations();
    assert_eq!(ops.len(), 4);
    assert!(matches!(ops[0], Operation::Read { address: CTRL_REG1, .. }));
    assert!(matches!(ops[1], Operation::Read { address: CTRL_REG2, .. }));
    assert!(matches!(ops[2], Operation::Write { address: CTRL_REG1, .. }));
    assert!(matches!(ops[3], Operation::Write { address: CTRL_REG2, .. }));
}

#[test]
fn test_undocumented_combination_reads_power_down() {
    let (mut driver, interface) = create_mock_driver();

    // 100 Hz with low noise is not a valid mode
    interface.set_register(CTRL_REG1, 0x60);
    interface.set_register(CTRL_REG2, 0x12);
    assert_eq!(driver.data_rate().unwrap(), DataRate::PowerDown);

    // One-shot together with a continuous rate
    interface.set_register(CTRL_REG1, 0x10);
    interface.set_register(CTRL_REG2, 0x11);
    assert_eq!(driver.data_rate().unwrap(), DataRate::PowerDown);
}

#[test]
fn test_data_rate_read_failure_writes_nothing() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_reads_at(CTRL_REG2);
    interface.clear_operations();

    assert!(driver.set_data_rate(DataRate::Hz75).is_err());
    assert_eq!(interface.write_count(), 0);
    assert_eq!(interface.get_register(CTRL_REG1), 0x00);
}

#[test]
fn test_data_rate_first_write_failure_skips_second() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    interface.clear_operations();

    assert!(driver.set_data_rate(DataRate::Hz1LowNoise).is_err());
    assert_eq!(interface.write_count(), 1);
    assert_eq!(interface.get_register(CTRL_REG2), 0x10);
}
