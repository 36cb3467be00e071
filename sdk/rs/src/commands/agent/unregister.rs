use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

/// Unregisters a device, wiping its credentials. The device can register
/// again afterwards with its original hardware ID.
#[derive(Debug, PartialEq, Clone)]
pub struct UnregisterDeviceCommand {
    pub realm: String,
    pub device_id: String,
}

impl UnregisterDeviceCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::Pairing,
            &["v1", &self.realm, "agent", "devices", &self.device_id],
        )?;
        Ok(Call::new(Method::DELETE, url))
    }
}
