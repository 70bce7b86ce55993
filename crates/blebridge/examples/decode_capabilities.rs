use blebridge::capability::{
    CHAR_PERM_READ_ENCRYPTED, CHAR_PERM_WRITE_ENCRYPTED, PROP_NOTIFY, PROP_READ,
};
use blebridge::{decode_characteristic_permissions, decode_properties};

fn main() {
    // A typical sensor characteristic: readable, notifying.
    let properties = PROP_READ | PROP_NOTIFY;
    println!(
        "properties 0x{:02X} -> {:?}",
        properties,
        decode_properties(properties).tokens()
    );

    // Encrypted read/write permissions.
    let permissions = CHAR_PERM_READ_ENCRYPTED | CHAR_PERM_WRITE_ENCRYPTED;
    println!(
        "permissions 0x{:02X} -> {:?}",
        permissions,
        decode_characteristic_permissions(permissions).tokens()
    );

    // Bits from a newer stack revision decode without error.
    let future = 0x0100 | PROP_READ;
    println!(
        "future mask 0x{:04X} -> {:?}",
        future,
        decode_properties(future).tokens()
    );
}
