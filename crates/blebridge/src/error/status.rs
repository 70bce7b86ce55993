//! Decoded view of the raw GATT status code

use super::constants::*;

/// GATT operation status as reported by the attribute protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GattStatus {
    /// Operation completed successfully
    Success,
    /// Invalid attribute handle
    InvalidHandle,
    /// Read not permitted
    ReadNotPermitted,
    /// Write not permitted
    WriteNotPermitted,
    /// Invalid PDU
    InvalidPdu,
    /// Insufficient authentication
    InsufficientAuthentication,
    /// Request not supported
    RequestNotSupported,
    /// Invalid offset
    InvalidOffset,
    /// Insufficient authorization
    InsufficientAuthorization,
    /// Prepare queue full
    PrepareQueueFull,
    /// Attribute not found
    AttributeNotFound,
    /// Attribute not long
    AttributeNotLong,
    /// Insufficient encryption key size
    InsufficientEncryptionKeySize,
    /// Invalid attribute value length
    InvalidAttributeValueLength,
    /// Unlikely error
    UnlikelyError,
    /// Insufficient encryption
    InsufficientEncryption,
    /// Unsupported group type
    UnsupportedGroupType,
    /// Insufficient resources
    InsufficientResources,
    /// Connection congested
    ConnectionCongested,
    /// Generic stack failure
    Failure,
    /// Status value not covered by the known set
    Unknown(u16),
}

impl From<u16> for GattStatus {
    fn from(raw: u16) -> Self {
        match raw {
            GATT_SUCCESS => GattStatus::Success,
            GATT_INVALID_HANDLE => GattStatus::InvalidHandle,
            GATT_READ_NOT_PERMITTED => GattStatus::ReadNotPermitted,
            GATT_WRITE_NOT_PERMITTED => GattStatus::WriteNotPermitted,
            GATT_INVALID_PDU => GattStatus::InvalidPdu,
            GATT_INSUFFICIENT_AUTHENTICATION => GattStatus::InsufficientAuthentication,
            GATT_REQUEST_NOT_SUPPORTED => GattStatus::RequestNotSupported,
            GATT_INVALID_OFFSET => GattStatus::InvalidOffset,
            GATT_INSUFFICIENT_AUTHORIZATION => GattStatus::InsufficientAuthorization,
            GATT_PREPARE_QUEUE_FULL => GattStatus::PrepareQueueFull,
            GATT_ATTRIBUTE_NOT_FOUND => GattStatus::AttributeNotFound,
            GATT_ATTRIBUTE_NOT_LONG => GattStatus::AttributeNotLong,
            GATT_INSUFFICIENT_ENCRYPTION_KEY_SIZE => GattStatus::InsufficientEncryptionKeySize,
            GATT_INVALID_ATTRIBUTE_VALUE_LENGTH => GattStatus::InvalidAttributeValueLength,
            GATT_UNLIKELY_ERROR => GattStatus::UnlikelyError,
            GATT_INSUFFICIENT_ENCRYPTION => GattStatus::InsufficientEncryption,
            GATT_UNSUPPORTED_GROUP_TYPE => GattStatus::UnsupportedGroupType,
            GATT_INSUFFICIENT_RESOURCES => GattStatus::InsufficientResources,
            GATT_CONNECTION_CONGESTED => GattStatus::ConnectionCongested,
            GATT_FAILURE => GattStatus::Failure,
            _ => GattStatus::Unknown(raw),
        }
    }
}

impl Into<u16> for GattStatus {
    fn into(self) -> u16 {
        match self {
            GattStatus::Success => GATT_SUCCESS,
            GattStatus::InvalidHandle => GATT_INVALID_HANDLE,
            GattStatus::ReadNotPermitted => GATT_READ_NOT_PERMITTED,
            GattStatus::WriteNotPermitted => GATT_WRITE_NOT_PERMITTED,
            GattStatus::InvalidPdu => GATT_INVALID_PDU,
            GattStatus::InsufficientAuthentication => GATT_INSUFFICIENT_AUTHENTICATION,
            GattStatus::RequestNotSupported => GATT_REQUEST_NOT_SUPPORTED,
            GattStatus::InvalidOffset => GATT_INVALID_OFFSET,
            GattStatus::InsufficientAuthorization => GATT_INSUFFICIENT_AUTHORIZATION,
            GattStatus::PrepareQueueFull => GATT_PREPARE_QUEUE_FULL,
            GattStatus::AttributeNotFound => GATT_ATTRIBUTE_NOT_FOUND,
            GattStatus::AttributeNotLong => GATT_ATTRIBUTE_NOT_LONG,
            GattStatus::InsufficientEncryptionKeySize => GATT_INSUFFICIENT_ENCRYPTION_KEY_SIZE,
            GattStatus::InvalidAttributeValueLength => GATT_INVALID_ATTRIBUTE_VALUE_LENGTH,
            GattStatus::UnlikelyError => GATT_UNLIKELY_ERROR,
            GattStatus::InsufficientEncryption => GATT_INSUFFICIENT_ENCRYPTION,
            GattStatus::UnsupportedGroupType => GATT_UNSUPPORTED_GROUP_TYPE,
            GattStatus::InsufficientResources => GATT_INSUFFICIENT_RESOURCES,
            GattStatus::ConnectionCongested => GATT_CONNECTION_CONGESTED,
            GattStatus::Failure => GATT_FAILURE,
            GattStatus::Unknown(raw) => raw,
        }
    }
}

impl GattStatus {
    /// Whether this status reports a successful operation.
    pub fn is_success(&self) -> bool {
        matches!(self, GattStatus::Success)
    }
}
