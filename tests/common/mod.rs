//! Common test utilities and mock implementations


pub use mock_interface::{MockError, Operation};
pub use test_utils::{MockDelay, create_mock_driver};
