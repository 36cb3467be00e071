use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call, DeviceIdentifierType};

/// Fetches one device's status, addressed either by device ID or by alias.
#[derive(Debug, PartialEq, Clone)]
pub struct GetDeviceCommand {
    pub realm: String,
    pub device: String,
    pub identifier_type: DeviceIdentifierType,
}

impl GetDeviceCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let collection = match self.identifier_type {
            DeviceIdentifierType::DeviceId => "devices",
            DeviceIdentifierType::Alias => "devices-by-alias",
        };
        let url = client.endpoint(
            AstarteService::AppEngine,
            &["v1", &self.realm, collection, &self.device],
        )?;
        Ok(Call::new(Method::GET, url))
    }
}

#[cfg(test)]
mod tests {
    use super::GetDeviceCommand;
    use crate::tests::utils::create_test_client;
    use crate::DeviceIdentifierType;

    #[test]
    fn test_get_device_by_id() {
        let client = create_test_client();
        let call = GetDeviceCommand {
            realm: "test".to_string(),
            device: "olFkumNuZ_J0f_d6-8XCDg".to_string(),
            identifier_type: DeviceIdentifierType::DeviceId,
        }
        .build(&client)
        .unwrap();

        assert_eq!(
            call.url.as_str(),
            "https://api.astarte.example.com/appengine/v1/test/devices/olFkumNuZ_J0f_d6-8XCDg"
        );
    }

    #[test]
    fn test_get_device_by_alias() {
        let client = create_test_client();
        let call = GetDeviceCommand {
            realm: "test".to_string(),
            device: "kitchen-sensor".to_string(),
            identifier_type: DeviceIdentifierType::Alias,
        }
        .build(&client)
        .unwrap();

        assert_eq!(
            call.url.as_str(),
            "https://api.astarte.example.com/appengine/v1/test/devices-by-alias/kitchen-sensor"
        );
    }
}
