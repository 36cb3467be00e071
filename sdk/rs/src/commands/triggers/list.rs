use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct ListTriggersCommand {
    pub realm: String,
}

impl ListTriggersCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "triggers"],
        )?;
        Ok(Call::new(Method::GET, url))
    }
}

#[cfg(test)]
mod tests {
    use super::ListTriggersCommand;
    use crate::tests::utils::create_test_client;

    #[test]
    fn test_list_triggers_call() {
        let client = create_test_client();
        let call = ListTriggersCommand {
            realm: "test".to_string(),
        }
        .build(&client)
        .unwrap();

        assert_eq!(
            call.url.as_str(),
            "https://api.astarte.example.com/realmmanagement/v1/test/triggers"
        );
    }
}
