use http::Method;
use serde_json::{json, Value};

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct InstallTriggerCommand {
    pub realm: String,
    pub trigger: Value,
}

impl InstallTriggerCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "triggers"],
        )?;
        Ok(Call::with_body(
            Method::POST,
            url,
            json!({"data": self.trigger}),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::InstallTriggerCommand;
    use crate::tests::utils::create_test_client;
    use serde_json::json;

    #[test]
    fn test_install_trigger_wraps_body() {
        let client = create_test_client();
        let trigger = json!({"name": "my_trigger"});
        let call = InstallTriggerCommand {
            realm: "test".to_string(),
            trigger: trigger.clone(),
        }
        .build(&client)
        .unwrap();

        assert_eq!(call.body, Some(json!({"data": trigger})));
    }
}
