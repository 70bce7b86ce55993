//! Bitmask decoding into the cross-platform capability token vocabulary

use bitflags::bitflags;
use serde::Serialize;

use super::constants::*;

bitflags! {
    /// Characteristic property bits as reported by the platform stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharacteristicProperties: u32 {
        const BROADCAST = PROP_BROADCAST;
        const READ = PROP_READ;
        const WRITE_WITHOUT_RESPONSE = PROP_WRITE_NO_RESPONSE;
        const WRITE = PROP_WRITE;
        const NOTIFY = PROP_NOTIFY;
        const INDICATE = PROP_INDICATE;
        const SIGNED_WRITE = PROP_SIGNED_WRITE;
        const EXTENDED_PROPS = PROP_EXTENDED_PROPS;
    }
}

bitflags! {
    /// Characteristic permission bits as reported by the platform stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharacteristicPermissions: u32 {
        const READ = CHAR_PERM_READ;
        const READ_ENCRYPTED = CHAR_PERM_READ_ENCRYPTED;
        const READ_ENCRYPTED_MITM = CHAR_PERM_READ_ENCRYPTED_MITM;
        const WRITE = CHAR_PERM_WRITE;
        const WRITE_ENCRYPTED = CHAR_PERM_WRITE_ENCRYPTED;
        const WRITE_ENCRYPTED_MITM = CHAR_PERM_WRITE_ENCRYPTED_MITM;
        const WRITE_SIGNED = CHAR_PERM_WRITE_SIGNED;
        const WRITE_SIGNED_MITM = CHAR_PERM_WRITE_SIGNED_MITM;
    }
}

bitflags! {
    /// Descriptor permission bits as reported by the platform stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DescriptorPermissions: u32 {
        const READ = DESC_PERM_READ;
        const READ_ENCRYPTED = DESC_PERM_READ_ENCRYPTED;
        const READ_ENCRYPTED_MITM = DESC_PERM_READ_ENCRYPTED_MITM;
        const WRITE = DESC_PERM_WRITE;
        const WRITE_ENCRYPTED = DESC_PERM_WRITE_ENCRYPTED;
        const WRITE_ENCRYPTED_MITM = DESC_PERM_WRITE_ENCRYPTED_MITM;
        const WRITE_SIGNED = DESC_PERM_WRITE_SIGNED;
        const WRITE_SIGNED_MITM = DESC_PERM_WRITE_SIGNED_MITM;
    }
}

/// Ordered capability tokens decoded from a single bitmask.
///
/// Tokens appear in the fixed table order of the mask's domain, each at most
/// once, so output is deterministic across calls and across platforms.
/// Serializes as a plain array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet(Vec<&'static str>);

impl CapabilitySet {
    /// The decoded tokens, in canonical order.
    pub fn tokens(&self) -> &[&'static str] {
        &self.0
    }

    /// Check whether a capability token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| *t == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the set, yielding the token list.
    pub fn into_vec(self) -> Vec<&'static str> {
        self.0
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a &'static str;
    type IntoIter = std::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// NOTE: token strings must stay consistent across both mobile platforms.
pub(crate) const PROPERTY_TABLE: [(CharacteristicProperties, &str); 8] = [
    (CharacteristicProperties::BROADCAST, "Broadcast"),
    (CharacteristicProperties::READ, "Read"),
    (
        CharacteristicProperties::WRITE_WITHOUT_RESPONSE,
        "WriteWithoutResponse",
    ),
    (CharacteristicProperties::WRITE, "Write"),
    (CharacteristicProperties::NOTIFY, "Notify"),
    (CharacteristicProperties::INDICATE, "Indicate"),
    // The stack calls this "write with signature"; the shared vocabulary
    // keeps the other platform's name.
    (
        CharacteristicProperties::SIGNED_WRITE,
        "AuthenticateSignedWrites",
    ),
    (
        CharacteristicProperties::EXTENDED_PROPS,
        "ExtendedProperties",
    ),
];

pub(crate) const CHARACTERISTIC_PERMISSION_TABLE: [(CharacteristicPermissions, &str); 8] = [
    (CharacteristicPermissions::READ, "Read"),
    (CharacteristicPermissions::WRITE, "Write"),
    (CharacteristicPermissions::READ_ENCRYPTED, "ReadEncrypted"),
    (CharacteristicPermissions::WRITE_ENCRYPTED, "WriteEncrypted"),
    (
        CharacteristicPermissions::READ_ENCRYPTED_MITM,
        "ReadEncryptedMITM",
    ),
    (
        CharacteristicPermissions::WRITE_ENCRYPTED_MITM,
        "WriteEncryptedMITM",
    ),
    (CharacteristicPermissions::WRITE_SIGNED, "WriteSigned"),
    (
        CharacteristicPermissions::WRITE_SIGNED_MITM,
        "WriteSignedMITM",
    ),
];

pub(crate) const DESCRIPTOR_PERMISSION_TABLE: [(DescriptorPermissions, &str); 8] = [
    (DescriptorPermissions::READ, "Read"),
    (DescriptorPermissions::WRITE, "Write"),
    (DescriptorPermissions::READ_ENCRYPTED, "ReadEncrypted"),
    (DescriptorPermissions::WRITE_ENCRYPTED, "WriteEncrypted"),
    (
        DescriptorPermissions::READ_ENCRYPTED_MITM,
        "ReadEncryptedMITM",
    ),
    (
        DescriptorPermissions::WRITE_ENCRYPTED_MITM,
        "WriteEncryptedMITM",
    ),
    (DescriptorPermissions::WRITE_SIGNED, "WriteSigned"),
    (DescriptorPermissions::WRITE_SIGNED_MITM, "WriteSignedMITM"),
];

/// Decode a raw characteristic property bitmask into capability tokens.
///
/// Bits outside the known set are ignored, so masks from newer stack
/// revisions decode without error.
pub fn decode_properties(raw: u32) -> CapabilitySet {
    let properties = CharacteristicProperties::from_bits_truncate(raw);
    CapabilitySet(
        PROPERTY_TABLE
            .iter()
            .filter(|(flag, _)| properties.contains(*flag))
            .map(|&(_, token)| token)
            .collect(),
    )
}

/// Decode a raw characteristic permission bitmask into capability tokens.
pub fn decode_characteristic_permissions(raw: u32) -> CapabilitySet {
    let permissions = CharacteristicPermissions::from_bits_truncate(raw);
    CapabilitySet(
        CHARACTERISTIC_PERMISSION_TABLE
            .iter()
            .filter(|(flag, _)| permissions.contains(*flag))
            .map(|&(_, token)| token)
            .collect(),
    )
}

/// Decode a raw descriptor permission bitmask into capability tokens.
pub fn decode_descriptor_permissions(raw: u32) -> CapabilitySet {
    let permissions = DescriptorPermissions::from_bits_truncate(raw);
    CapabilitySet(
        DESCRIPTOR_PERMISSION_TABLE
            .iter()
            .filter(|(flag, _)| permissions.contains(*flag))
            .map(|&(_, token)| token)
            .collect(),
    )
}
