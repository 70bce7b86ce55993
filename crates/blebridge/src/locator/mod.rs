//! Opaque entity locators supplied by the transaction layer.
//!
//! The bridge core never touches live stack objects. All it needs from an
//! entity is its identifier string and, for characteristics and
//! descriptors, a way to reach the owning entity so ancestor context can be
//! derived instead of trusted. These traits are that seam; the transaction
//! layer implements them over whatever the platform stack hands it.

/// A connected or known peripheral.
pub trait PeripheralLocator {
    /// Address or identifier of the peripheral, e.g. `AB:CD:EF:01:23:45`.
    fn address(&self) -> String;
}

/// A GATT service on a peripheral.
pub trait ServiceLocator {
    /// UUID of the service.
    fn uuid(&self) -> String;
}

/// A GATT characteristic within a service.
pub trait CharacteristicLocator {
    /// UUID of the characteristic.
    fn uuid(&self) -> String;

    /// The service this characteristic belongs to.
    fn service(&self) -> Box<dyn ServiceLocator>;
}

/// A GATT descriptor attached to a characteristic.
pub trait DescriptorLocator {
    /// UUID of the descriptor.
    fn uuid(&self) -> String;

    /// The characteristic this descriptor belongs to.
    fn characteristic(&self) -> Box<dyn CharacteristicLocator>;
}
