//! Error handling for the fee forwarder.

pub mod error_code;

pub use error_code::ErrorCode;
