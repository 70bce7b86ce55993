//! Capability decoding for GATT characteristics and descriptors
//!
//! This module decodes the raw property and permission bitmasks reported by
//! the platform stack into the ordered token vocabulary shared with the
//! other mobile platform's bridge.

pub mod constants;
pub mod decoder;


// Re-export the public API
pub use self::constants::*;
pub use self::decoder::{
    decode_characteristic_permissions, decode_descriptor_permissions, decode_properties,
    CapabilitySet, CharacteristicPermissions, CharacteristicProperties, DescriptorPermissions,
};
