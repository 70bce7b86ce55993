//! Structured error payloads for the bridge boundary
//!
//! Failures happen in the platform stack and the transaction layer; this
//! module only classifies them and packages the context the application
//! layer needs to act on them. Building a payload never fails.

pub mod code;
pub mod constants;
pub mod context;
pub mod status;

#[cfg(test)]
mod tests;

// Re-export the public API
pub use self::code::BleErrorCode;
pub use self::constants::*;
pub use self::context::{
    ErrorContext, PayloadError, ATT_STATUS_KEY, CHARACTERISTIC_KEY, CODE_KEY, DESCRIPTOR_KEY,
    MESSAGE_KEY, PERIPHERAL_KEY, SERVICE_KEY,
};
pub use self::status::GattStatus;
