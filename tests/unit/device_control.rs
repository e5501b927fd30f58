//! Unit tests for identification, reset and boot control

use crate::common::{MockDelay, create_mock_driver};
use lps22ch::registers::CTRL_REG2;
use lps22ch::{Error, WHO_AM_I_VALUE};

#[test]
fn test_new_does_not_touch_the_bus() {
    let (_driver, interface) = create_mock_driver();
    assert!(interface.operations().is_empty());
}

#[test]
fn test_device_id() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.device_id().unwrap(), WHO_AM_I_VALUE);
    assert!(driver.verify_device_id().is_ok());
}

#[test]
fn test_verify_device_id_rejects_other_parts() {
    let (mut driver, interface) = create_mock_driver();

    // LPS22HB answers 0xB1
    interface.set_who_am_i(0xB1);
    assert_eq!(driver.verify_device_id(), Err(Error::InvalidDevice(0xB1)));
}

#[test]
fn test_set_reset_writes_swreset_bit() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.set_reset(true).unwrap();

    assert_eq!(interface.writes(), vec![(CTRL_REG2, vec![0x14])]);
    // Self-clearing on the simulated device
    assert!(!driver.reset().unwrap());
}

#[test]
fn test_software_reset_completes() {
    let (mut driver, _interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    driver.software_reset(&mut delay).unwrap();
    assert_eq!(delay.elapsed_ms, 1);
}

#[test]
fn test_software_reset_times_out() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    interface.set_stuck_reset(true);

    assert_eq!(driver.software_reset(&mut delay), Err(Error::Timeout));
    assert_eq!(delay.elapsed_ms, 10);
    assert!(driver.reset().unwrap());
}

#[test]
fn test_auto_increment() {
    let (mut driver, interface) = create_mock_driver();

    assert!(driver.auto_increment().unwrap());
    driver.set_auto_increment(false).unwrap();
    assert_eq!(interface.get_register(CTRL_REG2), 0x00);
    assert!(!driver.auto_increment().unwrap());
}

#[test]
fn test_boot() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_stuck_reset(true);
    driver.set_boot(true).unwrap();
    assert!(driver.boot().unwrap());
    assert_eq!(interface.get_register(CTRL_REG2), 0x90);

    driver.set_boot(false).unwrap();
    assert!(!driver.boot().unwrap());
}

#[test]
fn test_block_data_update() {
    let (mut driver, _interface) = create_mock_driver();

    assert!(!driver.block_data_update().unwrap());
    driver.set_block_data_update(true).unwrap();
    assert!(driver.block_data_update().unwrap());
}

#[test]
fn test_release_returns_interface() {
    let (driver, interface) = create_mock_driver();

    let released = driver.release();
    released.set_register(0x00, 0xAA);
    assert_eq!(interface.get_register(0x00), 0xAA);
}
