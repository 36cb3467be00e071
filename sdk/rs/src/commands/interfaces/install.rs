use http::Method;
use serde_json::{json, Value};

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct InstallInterfaceCommand {
    pub realm: String,
    pub interface: Value,
}

impl InstallInterfaceCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "interfaces"],
        )?;
        Ok(Call::with_body(
            Method::POST,
            url,
            json!({"data": self.interface}),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::InstallInterfaceCommand;
    use crate::tests::utils::create_test_client;
    use serde_json::json;

    #[test]
    fn test_install_interface_wraps_body() {
        let client = create_test_client();
        let interface = json!({"interface_name": "org.example.Values", "version_major": 1});
        let call = InstallInterfaceCommand {
            realm: "test".to_string(),
            interface: interface.clone(),
        }
        .build(&client)
        .unwrap();

        assert_eq!(call.body, Some(json!({"data": interface})));
    }
}
