use http::Method;
use serde_json::json;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

/// Registers a device against the Pairing API; the response carries the
/// credentials secret the device will authenticate with.
#[derive(Debug, PartialEq, Clone)]
pub struct RegisterDeviceCommand {
    pub realm: String,
    pub device_id: String,
}

impl RegisterDeviceCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::Pairing,
            &["v1", &self.realm, "agent", "devices"],
        )?;
        Ok(Call::with_body(
            Method::POST,
            url,
            json!({"data": {"hw_id": self.device_id}}),
        ))
    }
}
