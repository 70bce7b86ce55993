//! Unit tests for error payload assembly

use super::code::BleErrorCode;
use super::context::*;
use super::status::GattStatus;
use crate::locator::{
    CharacteristicLocator, DescriptorLocator, PeripheralLocator, ServiceLocator,
};
use serde_json::json;

struct MockPeripheral {
    address: &'static str,
}

impl PeripheralLocator for MockPeripheral {
    fn address(&self) -> String {
        self.address.to_string()
    }
}

struct MockService {
    uuid: &'static str,
}

impl ServiceLocator for MockService {
    fn uuid(&self) -> String {
        self.uuid.to_string()
    }
}

#[derive(Clone)]
struct MockCharacteristic {
    uuid: &'static str,
    service_uuid: &'static str,
}

impl CharacteristicLocator for MockCharacteristic {
    fn uuid(&self) -> String {
        self.uuid.to_string()
    }

    fn service(&self) -> Box<dyn ServiceLocator> {
        Box::new(MockService {
            uuid: self.service_uuid,
        })
    }
}

struct MockDescriptor {
    uuid: &'static str,
    characteristic: MockCharacteristic,
}

impl DescriptorLocator for MockDescriptor {
    fn uuid(&self) -> String {
        self.uuid.to_string()
    }

    fn characteristic(&self) -> Box<dyn CharacteristicLocator> {
        Box::new(self.characteristic.clone())
    }
}

fn heart_rate_descriptor() -> MockDescriptor {
    MockDescriptor {
        uuid: "2902",
        characteristic: MockCharacteristic {
            uuid: "2a37",
            service_uuid: "180d",
        },
    }
}

#[test]
fn bare_error_carries_only_message_and_code() {
    let error = ErrorContext::new("boom", BleErrorCode::UnknownException);
    assert_eq!(error.message, "boom");
    assert_eq!(error.code, BleErrorCode::UnknownException);
    assert!(error.peripheral_address.is_none());
    assert!(error.service_uuid.is_none());
    assert!(error.characteristic_uuid.is_none());
    assert!(error.descriptor_uuid.is_none());
    assert!(error.att_status.is_none());
}

#[test]
fn peripheral_and_service_populate_without_attribute_context() {
    let peripheral = MockPeripheral {
        address: "AB:CD:EF:01:23:45",
    };
    let service = MockService { uuid: "180f" };

    let error = ErrorContext::build(
        "Service not found",
        BleErrorCode::ServiceNotFound,
        Some(&peripheral),
        Some(&service),
        None,
        None,
    );

    assert_eq!(error.message, "Service not found");
    assert_eq!(error.code.value(), 58);
    assert_eq!(error.peripheral_address.as_deref(), Some("AB:CD:EF:01:23:45"));
    assert_eq!(error.service_uuid.as_deref(), Some("180f"));
    assert!(error.characteristic_uuid.is_none());
    assert!(error.descriptor_uuid.is_none());
}

#[test]
fn characteristic_error_derives_its_owning_service() {
    let characteristic = MockCharacteristic {
        uuid: "2a37",
        service_uuid: "180d",
    };

    let error = ErrorContext::for_characteristic(
        "Read failed",
        BleErrorCode::ReadFailed,
        &characteristic,
    );

    assert_eq!(error.characteristic_uuid.as_deref(), Some("2a37"));
    assert_eq!(error.service_uuid.as_deref(), Some("180d"));
    assert!(error.descriptor_uuid.is_none());
    assert!(error.peripheral_address.is_none());
}

#[test]
fn descriptor_error_derives_the_full_ancestor_chain() {
    let descriptor = heart_rate_descriptor();

    let error = ErrorContext::for_descriptor(
        "Write descriptor failed",
        BleErrorCode::WriteDescriptorFailed,
        &descriptor,
    );

    assert_eq!(error.descriptor_uuid.as_deref(), Some("2902"));
    assert_eq!(error.characteristic_uuid.as_deref(), Some("2a37"));
    assert_eq!(error.service_uuid.as_deref(), Some("180d"));
}

#[test]
fn descriptor_ancestors_win_over_conflicting_locators() {
    let descriptor = heart_rate_descriptor();
    let conflicting_characteristic = MockCharacteristic {
        uuid: "ffff",
        service_uuid: "eeee",
    };
    let conflicting_service = MockService { uuid: "dddd" };

    let error = ErrorContext::build(
        "Write descriptor failed",
        BleErrorCode::WriteDescriptorFailed,
        None,
        Some(&conflicting_service),
        Some(&conflicting_characteristic),
        Some(&descriptor),
    );

    // The descriptor's true ancestors replace the separately supplied ones.
    assert_eq!(error.characteristic_uuid.as_deref(), Some("2a37"));
    assert_eq!(error.service_uuid.as_deref(), Some("180d"));
}

#[test]
fn characteristic_service_wins_over_conflicting_service() {
    let characteristic = MockCharacteristic {
        uuid: "2a19",
        service_uuid: "180f",
    };
    let conflicting_service = MockService { uuid: "dddd" };

    let error = ErrorContext::build(
        "Notify failed",
        BleErrorCode::SetNotificationFailed,
        None,
        Some(&conflicting_service),
        Some(&characteristic),
        None,
    );

    assert_eq!(error.service_uuid.as_deref(), Some("180f"));
}

#[test]
fn att_status_attaches_and_decodes() {
    let error = ErrorContext::new("Read failed", BleErrorCode::ReadFailed).with_att_status(5);
    assert_eq!(error.att_status, Some(5));
    assert_eq!(
        error.gatt_status(),
        Some(GattStatus::InsufficientAuthentication)
    );

    let bare = ErrorContext::new("Read failed", BleErrorCode::ReadFailed);
    assert!(bare.gatt_status().is_none());
}

#[test]
fn serialization_uses_the_exact_wire_keys() {
    let descriptor = heart_rate_descriptor();
    let peripheral = MockPeripheral {
        address: "AB:CD:EF:01:23:45",
    };

    let error = ErrorContext::build(
        "Write descriptor failed",
        BleErrorCode::WriteDescriptorFailed,
        Some(&peripheral),
        None,
        None,
        Some(&descriptor),
    )
    .with_att_status(3);

    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(
        value,
        json!({
            "message": "Write descriptor failed",
            "code": 24,
            "peripheralUUID": "AB:CD:EF:01:23:45",
            "serviceUUID": "180d",
            "characteristicUUID": "2a37",
            "descriptorUUID": "2902",
            "attStatus": 3,
        })
    );
}

#[test]
fn absent_fields_are_omitted_from_serialized_output() {
    let error = ErrorContext::new("boom", BleErrorCode::UnknownException);
    let value = serde_json::to_value(&error).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object[MESSAGE_KEY], json!("boom"));
    assert_eq!(object[CODE_KEY], json!(48));
}

#[test]
fn payload_round_trips_through_ingest() {
    let descriptor = heart_rate_descriptor();
    let error = ErrorContext::for_descriptor(
        "Write descriptor failed",
        BleErrorCode::WriteDescriptorFailed,
        &descriptor,
    )
    .with_att_status(143);

    let value = serde_json::to_value(&error).unwrap();
    let ingested = ErrorContext::from_payload(&value).unwrap();
    assert_eq!(ingested, error);
}

#[test]
fn ingest_rejects_non_objects() {
    assert_eq!(
        ErrorContext::from_payload(&json!("boom")),
        Err(PayloadError::NotAnObject("string"))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!([1, 2])),
        Err(PayloadError::NotAnObject("array"))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!(null)),
        Err(PayloadError::NotAnObject("null"))
    );
}

#[test]
fn ingest_rejects_missing_or_mistyped_required_fields() {
    assert_eq!(
        ErrorContext::from_payload(&json!({ "code": 42 })),
        Err(PayloadError::MissingField(MESSAGE_KEY))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!({ "message": "x" })),
        Err(PayloadError::MissingField(CODE_KEY))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!({ "message": 7, "code": 42 })),
        Err(PayloadError::InvalidField(MESSAGE_KEY))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!({ "message": "x", "code": "42" })),
        Err(PayloadError::InvalidField(CODE_KEY))
    );
}

#[test]
fn ingest_rejects_unknown_codes() {
    assert_eq!(
        ErrorContext::from_payload(&json!({ "message": "x", "code": 3 })),
        Err(PayloadError::UnknownCode(3))
    );
    assert_eq!(
        ErrorContext::from_payload(&json!({ "message": "x", "code": 999 })),
        Err(PayloadError::UnknownCode(999))
    );
}

#[test]
fn ingest_treats_null_optional_fields_as_absent() {
    let payload = json!({
        "message": "boom",
        "code": 48,
        "peripheralUUID": null,
        "attStatus": null,
    });
    let error = ErrorContext::from_payload(&payload).unwrap();
    assert!(error.peripheral_address.is_none());
    assert!(error.att_status.is_none());
}

#[test]
fn ingest_rejects_broken_ancestor_chains() {
    let payload = json!({
        "message": "boom",
        "code": 24,
        "descriptorUUID": "2902",
    });
    assert_eq!(
        ErrorContext::from_payload(&payload),
        Err(PayloadError::MissingField(CHARACTERISTIC_KEY))
    );

    let payload = json!({
        "message": "boom",
        "code": 42,
        "characteristicUUID": "2a37",
    });
    assert_eq!(
        ErrorContext::from_payload(&payload),
        Err(PayloadError::MissingField(SERVICE_KEY))
    );
}

#[test]
fn annotated_message_appends_context_in_wire_key_order() {
    let service = MockService { uuid: "180f" };
    let error = ErrorContext::for_service("Read failed", BleErrorCode::ReadFailed, &service)
        .with_att_status(5);
    assert_eq!(
        error.annotated_message(),
        "Read failed [attStatus=5, code=42, serviceUUID=180f]"
    );
    assert_eq!(error.to_string(), error.annotated_message());
}

#[test]
fn annotated_message_handles_empty_and_trailing_space_messages() {
    let empty = ErrorContext::new("", BleErrorCode::UnknownException);
    assert_eq!(empty.annotated_message(), "[code=48]");

    let trailing = ErrorContext::new("oops ", BleErrorCode::UnknownException);
    assert_eq!(trailing.annotated_message(), "oops [code=48]");

    let plain = ErrorContext::new("oops", BleErrorCode::UnknownException);
    assert_eq!(plain.annotated_message(), "oops [code=48]");
}

#[test]
fn error_codes_round_trip_their_numeric_ids() {
    for code in [
        BleErrorCode::NotSupported,
        BleErrorCode::PeripheralNotFound,
        BleErrorCode::ReadDescriptorFailed,
        BleErrorCode::CharacteristicNotFound,
        BleErrorCode::IosError,
        BleErrorCode::RequestMtuFailed,
        BleErrorCode::BluetoothDisabled,
    ] {
        assert_eq!(BleErrorCode::from_raw(code.value()), Some(code));
    }

    assert_eq!(BleErrorCode::from_raw(0), None);
    assert_eq!(BleErrorCode::from_raw(57), None);
    assert_eq!(u8::from(BleErrorCode::CharacteristicNotFound), 30);
}

#[test]
fn gatt_status_decodes_known_and_unknown_values() {
    assert_eq!(GattStatus::from(0), GattStatus::Success);
    assert!(GattStatus::from(0).is_success());
    assert_eq!(GattStatus::from(5), GattStatus::InsufficientAuthentication);
    assert_eq!(GattStatus::from(143), GattStatus::ConnectionCongested);
    assert_eq!(GattStatus::from(257), GattStatus::Failure);
    assert_eq!(GattStatus::from(999), GattStatus::Unknown(999));

    let raw: u16 = GattStatus::ConnectionCongested.into();
    assert_eq!(raw, 143);
    let raw: u16 = GattStatus::Unknown(999).into();
    assert_eq!(raw, 999);
}
