use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct GetPolicyCommand {
    pub realm: String,
    pub name: String,
}

impl GetPolicyCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "policies", &self.name],
        )?;
        Ok(Call::new(Method::GET, url))
    }
}

#[cfg(test)]
mod tests {
    use super::GetPolicyCommand;
    use crate::tests::utils::create_test_client;
    use http::Method;

    #[test]
    fn test_get_policy_call() {
        let client = create_test_client();
        let call = GetPolicyCommand {
            realm: "test".to_string(),
            name: "my_policy".to_string(),
        }
        .build(&client)
        .unwrap();

        assert_eq!(call.method, Method::GET);
        assert_eq!(
            call.url.as_str(),
            "https://api.astarte.example.com/realmmanagement/v1/test/policies/my_policy"
        );
    }
}
