//! BleBridge - the platform-neutral core of a BLE GATT client bridge
//!
//! This crate holds the two leaf pieces of a mobile BLE bridge that must
//! behave identically on every platform: decoding raw capability bitmasks
//! into the shared token vocabulary, and assembling the structured error
//! payloads handed to the application layer. Radio I/O, connection
//! management, and the platform stack bindings live in the surrounding
//! transaction layer, which feeds this core plain integers and identifier
//! strings.

pub mod capability;
pub mod error;
pub mod locator;

// Re-export common types for convenience
pub use capability::{
    decode_characteristic_permissions, decode_descriptor_permissions, decode_properties,
    CapabilitySet, CharacteristicPermissions, CharacteristicProperties, DescriptorPermissions,
};
pub use error::{BleErrorCode, ErrorContext, GattStatus, PayloadError};
pub use locator::{CharacteristicLocator, DescriptorLocator, PeripheralLocator, ServiceLocator};
