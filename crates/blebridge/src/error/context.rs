//! Error payload assembly and the wire contract with the application layer

use std::fmt;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::code::BleErrorCode;
use super::status::GattStatus;
use crate::locator::{
    CharacteristicLocator, DescriptorLocator, PeripheralLocator, ServiceLocator,
};

// Wire keys. These are a compatibility contract with the application layer
// and must never change.
pub const MESSAGE_KEY: &str = "message";
pub const CODE_KEY: &str = "code";
pub const ATT_STATUS_KEY: &str = "attStatus";
pub const PERIPHERAL_KEY: &str = "peripheralUUID";
pub const SERVICE_KEY: &str = "serviceUUID";
pub const CHARACTERISTIC_KEY: &str = "characteristicUUID";
pub const DESCRIPTOR_KEY: &str = "descriptorUUID";

/// Structured error record surfaced to the application layer.
///
/// `message` and `code` are always present; every locator field is optional
/// and omitted from serialized output when absent. When a characteristic is
/// identified its owning service is too, and when a descriptor is identified
/// the full chain up to the service is - the constructors derive ancestors
/// from the child locator rather than accepting them independently, so a
/// partial chain cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    pub message: String,
    pub code: BleErrorCode,
    #[serde(rename = "peripheralUUID", skip_serializing_if = "Option::is_none")]
    pub peripheral_address: Option<String>,
    #[serde(rename = "serviceUUID", skip_serializing_if = "Option::is_none")]
    pub service_uuid: Option<String>,
    #[serde(rename = "characteristicUUID", skip_serializing_if = "Option::is_none")]
    pub characteristic_uuid: Option<String>,
    #[serde(rename = "descriptorUUID", skip_serializing_if = "Option::is_none")]
    pub descriptor_uuid: Option<String>,
    #[serde(rename = "attStatus", skip_serializing_if = "Option::is_none")]
    pub att_status: Option<u16>,
}

impl ErrorContext {
    /// Build a payload with no entity context.
    pub fn new(message: impl Into<String>, code: BleErrorCode) -> Self {
        Self {
            message: message.into(),
            code,
            peripheral_address: None,
            service_uuid: None,
            characteristic_uuid: None,
            descriptor_uuid: None,
            att_status: None,
        }
    }

    /// Core constructor: build a payload from any combination of locators.
    ///
    /// A descriptor's owning characteristic always wins over a separately
    /// supplied one, and the characteristic's owning service wins over a
    /// separately supplied service. The peripheral is orthogonal and never
    /// derived from the attribute chain.
    pub fn build(
        message: impl Into<String>,
        code: BleErrorCode,
        peripheral: Option<&dyn PeripheralLocator>,
        service: Option<&dyn ServiceLocator>,
        characteristic: Option<&dyn CharacteristicLocator>,
        descriptor: Option<&dyn DescriptorLocator>,
    ) -> Self {
        let mut context = ErrorContext::new(message, code);

        if let Some(peripheral) = peripheral {
            context.peripheral_address = Some(peripheral.address());
        }

        let resolved_characteristic;
        let characteristic = match descriptor {
            Some(descriptor) => {
                context.descriptor_uuid = Some(descriptor.uuid());
                resolved_characteristic = descriptor.characteristic();
                Some(&*resolved_characteristic)
            }
            None => characteristic,
        };

        let resolved_service;
        let service = match characteristic {
            Some(characteristic) => {
                context.characteristic_uuid = Some(characteristic.uuid());
                resolved_service = characteristic.service();
                Some(&*resolved_service)
            }
            None => service,
        };

        if let Some(service) = service {
            context.service_uuid = Some(service.uuid());
        }

        debug!(
            "assembled error payload: code={} message={:?}",
            context.code.value(),
            context.message
        );

        context
    }

    /// Build a payload locating only the peripheral.
    pub fn for_peripheral(
        message: impl Into<String>,
        code: BleErrorCode,
        peripheral: &dyn PeripheralLocator,
    ) -> Self {
        Self::build(message, code, Some(peripheral), None, None, None)
    }

    /// Build a payload locating only a service.
    pub fn for_service(
        message: impl Into<String>,
        code: BleErrorCode,
        service: &dyn ServiceLocator,
    ) -> Self {
        Self::build(message, code, None, Some(service), None, None)
    }

    /// Build a payload locating a characteristic; its owning service is
    /// filled in as well.
    pub fn for_characteristic(
        message: impl Into<String>,
        code: BleErrorCode,
        characteristic: &dyn CharacteristicLocator,
    ) -> Self {
        Self::build(message, code, None, None, Some(characteristic), None)
    }

    /// Build a payload locating a descriptor; its owning characteristic and
    /// service are filled in as well.
    pub fn for_descriptor(
        message: impl Into<String>,
        code: BleErrorCode,
        descriptor: &dyn DescriptorLocator,
    ) -> Self {
        Self::build(message, code, None, None, None, Some(descriptor))
    }

    /// Attach the raw protocol status reported by the stack.
    pub fn with_att_status(mut self, status: u16) -> Self {
        self.att_status = Some(status);
        self
    }

    /// Decoded view of the raw `attStatus` field, if one was attached.
    pub fn gatt_status(&self) -> Option<GattStatus> {
        self.att_status.map(GattStatus::from)
    }

    /// Validate and re-hydrate a raw payload received from the bridge
    /// boundary.
    ///
    /// `null`-valued optional fields count as absent, unknown keys are
    /// ignored. Payloads whose ancestor chain is broken (a descriptor
    /// without its characteristic, a characteristic without its service)
    /// are rejected so that every `ErrorContext` in the process, built or
    /// ingested, carries a coherent chain.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let object = match payload {
            Value::Object(object) => object,
            other => return Err(PayloadError::NotAnObject(json_type_name(other))),
        };

        let message = match object.get(MESSAGE_KEY) {
            Some(Value::String(message)) => message.clone(),
            Some(_) => return Err(PayloadError::InvalidField(MESSAGE_KEY)),
            None => return Err(PayloadError::MissingField(MESSAGE_KEY)),
        };

        let code = match object.get(CODE_KEY) {
            Some(Value::Number(number)) => {
                let raw = number.as_u64().ok_or(PayloadError::InvalidField(CODE_KEY))?;
                u8::try_from(raw)
                    .ok()
                    .and_then(BleErrorCode::from_raw)
                    .ok_or(PayloadError::UnknownCode(raw))?
            }
            Some(_) => return Err(PayloadError::InvalidField(CODE_KEY)),
            None => return Err(PayloadError::MissingField(CODE_KEY)),
        };

        let mut context = ErrorContext::new(message, code);
        context.peripheral_address = optional_string(object, PERIPHERAL_KEY)?;
        context.service_uuid = optional_string(object, SERVICE_KEY)?;
        context.characteristic_uuid = optional_string(object, CHARACTERISTIC_KEY)?;
        context.descriptor_uuid = optional_string(object, DESCRIPTOR_KEY)?;
        context.att_status = optional_status(object, ATT_STATUS_KEY)?;

        if context.descriptor_uuid.is_some() && context.characteristic_uuid.is_none() {
            return Err(PayloadError::MissingField(CHARACTERISTIC_KEY));
        }
        if context.characteristic_uuid.is_some() && context.service_uuid.is_none() {
            return Err(PayloadError::MissingField(SERVICE_KEY));
        }

        Ok(context)
    }

    /// The message with the structured context appended, the way the
    /// application layer renders it: `Read failed [code=42, serviceUUID=180f]`.
    pub fn annotated_message(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(status) = self.att_status {
            pairs.push((ATT_STATUS_KEY, status.to_string()));
        }
        pairs.push((CODE_KEY, self.code.value().to_string()));
        if let Some(address) = &self.peripheral_address {
            pairs.push((PERIPHERAL_KEY, address.clone()));
        }
        if let Some(uuid) = &self.service_uuid {
            pairs.push((SERVICE_KEY, uuid.clone()));
        }
        if let Some(uuid) = &self.characteristic_uuid {
            pairs.push((CHARACTERISTIC_KEY, uuid.clone()));
        }
        if let Some(uuid) = &self.descriptor_uuid {
            pairs.push((DESCRIPTOR_KEY, uuid.clone()));
        }

        let rendered = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");

        if self.message.is_empty() || self.message.ends_with(' ') {
            format!("{}[{}]", self.message, rendered)
        } else {
            format!("{} [{}]", self.message, rendered)
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotated_message())
    }
}

impl std::error::Error for ErrorContext {}

/// Failures classifying a raw error payload received from the bridge
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload is not an object ({0} was supplied)")]
    NotAnObject(&'static str),

    #[error("payload is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("payload field `{0}` has the wrong type")]
    InvalidField(&'static str),

    #[error("unknown error code {0}")]
    UnknownCode(u64),
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn optional_string(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, PayloadError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(PayloadError::InvalidField(key)),
    }
}

fn optional_status(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<u16>, PayloadError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|value| u16::try_from(value).ok())
            .map(Some)
            .ok_or(PayloadError::InvalidField(key)),
        Some(_) => Err(PayloadError::InvalidField(key)),
    }
}
