use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

/// Interfaces are versioned; fetching one addresses a specific major.
#[derive(Debug, PartialEq, Clone)]
pub struct GetInterfaceCommand {
    pub realm: String,
    pub name: String,
    pub major: u32,
}

impl GetInterfaceCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &[
                "v1",
                &self.realm,
                "interfaces",
                &self.name,
                &self.major.to_string(),
            ],
        )?;
        Ok(Call::new(Method::GET, url))
    }
}

#[cfg(test)]
mod tests {
    use super::GetInterfaceCommand;
    use crate::tests::utils::create_test_client;

    #[test]
    fn test_get_interface_call() {
        let client = create_test_client();
        let call = GetInterfaceCommand {
            realm: "test".to_string(),
            name: "org.example.Values".to_string(),
            major: 1,
        }
        .build(&client)
        .unwrap();

        assert_eq!(
            call.url.as_str(),
            "https://api.astarte.example.com/realmmanagement/v1/test/interfaces/org.example.Values/1"
        );
    }
}
