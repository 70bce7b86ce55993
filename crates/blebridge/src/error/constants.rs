//! Raw GATT status values reported by the platform stack

pub const GATT_SUCCESS: u16 = 0;
pub const GATT_INVALID_HANDLE: u16 = 1;
pub const GATT_READ_NOT_PERMITTED: u16 = 2;
pub const GATT_WRITE_NOT_PERMITTED: u16 = 3;
pub const GATT_INVALID_PDU: u16 = 4;
pub const GATT_INSUFFICIENT_AUTHENTICATION: u16 = 5;
pub const GATT_REQUEST_NOT_SUPPORTED: u16 = 6;
pub const GATT_INVALID_OFFSET: u16 = 7;
pub const GATT_INSUFFICIENT_AUTHORIZATION: u16 = 8;
pub const GATT_PREPARE_QUEUE_FULL: u16 = 9;
pub const GATT_ATTRIBUTE_NOT_FOUND: u16 = 10;
pub const GATT_ATTRIBUTE_NOT_LONG: u16 = 11;
pub const GATT_INSUFFICIENT_ENCRYPTION_KEY_SIZE: u16 = 12;
pub const GATT_INVALID_ATTRIBUTE_VALUE_LENGTH: u16 = 13;
pub const GATT_UNLIKELY_ERROR: u16 = 14;
pub const GATT_INSUFFICIENT_ENCRYPTION: u16 = 15;
pub const GATT_UNSUPPORTED_GROUP_TYPE: u16 = 16;
pub const GATT_INSUFFICIENT_RESOURCES: u16 = 17;
pub const GATT_CONNECTION_CONGESTED: u16 = 143;
pub const GATT_FAILURE: u16 = 257;
