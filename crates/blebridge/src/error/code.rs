//! Classified BLE failure reasons

use serde::{Serialize, Serializer};

/// Classified failure reasons shared across the bridge boundary.
///
/// Each value carries a stable numeric identifier transmitted in the `code`
/// field of an error payload. The application layer matches on the number,
/// so identifiers never change once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BleErrorCode {
    NotSupported = 1,
    NoBluetoothSupport = 2,
    UserRefusedEnable = 4,
    /// No foreground activity was available to drive an enable prompt.
    CurrentActivityUnavailable = 6,
    InvalidPeripheralUuid = 8,
    MaxBondRequestsReached = 10,
    CreateBondFailed = 12,
    RemoveBondFailed = 14,
    PeripheralNotFound = 16,
    MissingServiceOrCharacteristicUuid = 18,
    BondRequestDenied = 20,
    /// Bond removal was requested while the peripheral is still connected.
    IllegalRemoveWhileConnected = 22,
    WriteDescriptorFailed = 24,
    ReadDescriptorFailed = 25,
    /// The characteristic supports neither notify nor indicate.
    MissingNotifyOrIndicateFlag = 26,
    SetNotificationFailed = 28,
    CharacteristicNotFound = 30,
    PeripheralNotConnected = 32,
    /// The stack handed back a null GATT handle.
    GattIsNull = 34,
    PeripheralDisconnected = 36,
    ConnectionError = 38,
    InvalidApiVersion = 40,
    ReadFailed = 42,
    RssiReadFailed = 44,
    CacheRefreshFailed = 46,
    UnknownException = 48,
    WriteFailed = 50,
    /// A queued write was interrupted before completion.
    WriteInterrupted = 52,
    IosError = 53,
    AndroidError = 54,
    GattError = 55,
    RequestMtuFailed = 56,
    ServiceNotFound = 58,
    OperationTimedOut = 60,
    BluetoothDisabled = 62,
}

impl BleErrorCode {
    /// Stable numeric identifier transmitted in the `code` field.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Look up a code by its numeric identifier.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(BleErrorCode::NotSupported),
            2 => Some(BleErrorCode::NoBluetoothSupport),
            4 => Some(BleErrorCode::UserRefusedEnable),
            6 => Some(BleErrorCode::CurrentActivityUnavailable),
            8 => Some(BleErrorCode::InvalidPeripheralUuid),
            10 => Some(BleErrorCode::MaxBondRequestsReached),
            12 => Some(BleErrorCode::CreateBondFailed),
            14 => Some(BleErrorCode::RemoveBondFailed),
            16 => Some(BleErrorCode::PeripheralNotFound),
            18 => Some(BleErrorCode::MissingServiceOrCharacteristicUuid),
            20 => Some(BleErrorCode::BondRequestDenied),
            22 => Some(BleErrorCode::IllegalRemoveWhileConnected),
            24 => Some(BleErrorCode::WriteDescriptorFailed),
            25 => Some(BleErrorCode::ReadDescriptorFailed),
            26 => Some(BleErrorCode::MissingNotifyOrIndicateFlag),
            28 => Some(BleErrorCode::SetNotificationFailed),
            30 => Some(BleErrorCode::CharacteristicNotFound),
            32 => Some(BleErrorCode::PeripheralNotConnected),
            34 => Some(BleErrorCode::GattIsNull),
            36 => Some(BleErrorCode::PeripheralDisconnected),
            38 => Some(BleErrorCode::ConnectionError),
            40 => Some(BleErrorCode::InvalidApiVersion),
            42 => Some(BleErrorCode::ReadFailed),
            44 => Some(BleErrorCode::RssiReadFailed),
            46 => Some(BleErrorCode::CacheRefreshFailed),
            48 => Some(BleErrorCode::UnknownException),
            50 => Some(BleErrorCode::WriteFailed),
            52 => Some(BleErrorCode::WriteInterrupted),
            53 => Some(BleErrorCode::IosError),
            54 => Some(BleErrorCode::AndroidError),
            55 => Some(BleErrorCode::GattError),
            56 => Some(BleErrorCode::RequestMtuFailed),
            58 => Some(BleErrorCode::ServiceNotFound),
            60 => Some(BleErrorCode::OperationTimedOut),
            62 => Some(BleErrorCode::BluetoothDisabled),
            _ => None,
        }
    }
}

impl From<BleErrorCode> for u8 {
    fn from(code: BleErrorCode) -> u8 {
        code.value()
    }
}

impl Serialize for BleErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}
