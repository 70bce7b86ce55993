//! Raw capability bit constants
//!
//! Values follow the Android stack's characteristic/descriptor bit layout.
//! The properties table and the two permission tables assign different
//! meanings to the same bit positions, so each domain gets its own set.

// Characteristic property bits
pub const PROP_BROADCAST: u32 = 0x01;
pub const PROP_READ: u32 = 0x02;
pub const PROP_WRITE_NO_RESPONSE: u32 = 0x04;
pub const PROP_WRITE: u32 = 0x08;
pub const PROP_NOTIFY: u32 = 0x10;
pub const PROP_INDICATE: u32 = 0x20;
pub const PROP_SIGNED_WRITE: u32 = 0x40;
pub const PROP_EXTENDED_PROPS: u32 = 0x80;

// Characteristic permission bits
pub const CHAR_PERM_READ: u32 = 0x01;
pub const CHAR_PERM_READ_ENCRYPTED: u32 = 0x02;
pub const CHAR_PERM_READ_ENCRYPTED_MITM: u32 = 0x04;
pub const CHAR_PERM_WRITE: u32 = 0x10;
pub const CHAR_PERM_WRITE_ENCRYPTED: u32 = 0x20;
pub const CHAR_PERM_WRITE_ENCRYPTED_MITM: u32 = 0x40;
pub const CHAR_PERM_WRITE_SIGNED: u32 = 0x80;
pub const CHAR_PERM_WRITE_SIGNED_MITM: u32 = 0x100;

// Descriptor permission bits
pub const DESC_PERM_READ: u32 = 0x01;
pub const DESC_PERM_READ_ENCRYPTED: u32 = 0x02;
pub const DESC_PERM_READ_ENCRYPTED_MITM: u32 = 0x04;
pub const DESC_PERM_WRITE: u32 = 0x10;
pub const DESC_PERM_WRITE_ENCRYPTED: u32 = 0x20;
pub const DESC_PERM_WRITE_ENCRYPTED_MITM: u32 = 0x40;
pub const DESC_PERM_WRITE_SIGNED: u32 = 0x80;
pub const DESC_PERM_WRITE_SIGNED_MITM: u32 = 0x100;
