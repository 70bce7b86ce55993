use blebridge::{
    BleErrorCode, CharacteristicLocator, DescriptorLocator, ErrorContext, ServiceLocator,
};

struct Service(&'static str);

impl ServiceLocator for Service {
    fn uuid(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Clone)]
struct Characteristic {
    uuid: &'static str,
    service: &'static str,
}

impl CharacteristicLocator for Characteristic {
    fn uuid(&self) -> String {
        self.uuid.to_string()
    }

    fn service(&self) -> Box<dyn ServiceLocator> {
        Box::new(Service(self.service))
    }
}

struct Descriptor {
    uuid: &'static str,
    characteristic: Characteristic,
}

impl DescriptorLocator for Descriptor {
    fn uuid(&self) -> String {
        self.uuid.to_string()
    }

    fn characteristic(&self) -> Box<dyn CharacteristicLocator> {
        Box::new(self.characteristic.clone())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The client characteristic configuration descriptor of a heart rate
    // measurement characteristic.
    let descriptor = Descriptor {
        uuid: "2902",
        characteristic: Characteristic {
            uuid: "2a37",
            service: "180d",
        },
    };

    // The transaction layer would build this when a descriptor write comes
    // back with a failure status.
    let error = ErrorContext::for_descriptor(
        "Write descriptor failed",
        BleErrorCode::WriteDescriptorFailed,
        &descriptor,
    )
    .with_att_status(3);

    println!("{}", error);
    println!("{}", serde_json::to_string_pretty(&error)?);

    if let Some(status) = error.gatt_status() {
        println!("decoded status: {:?}", status);
    }

    Ok(())
}
