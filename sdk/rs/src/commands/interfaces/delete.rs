use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteInterfaceCommand {
    pub realm: String,
    pub name: String,
    pub major: u32,
}

impl DeleteInterfaceCommand {
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
        Ok(Call::new(Method::DELETE, url))
    }
}

#[cfg(test)]
mod tests {
    use super::DeleteInterfaceCommand;
    use crate::tests::utils::create_test_client;
    use http::Method;

    #[test]
    fn test_delete_interface_call() {
        let client = create_test_client();
        let call = DeleteInterfaceCommand {
            realm: "test".to_string(),
            name: "org.example.Values".to_string(),
            major: 0,
        }
        .build(&client)
        .unwrap();

        assert_eq!(call.method, Method::DELETE);
        assert!(call
            .url
            .as_str()
            .ends_with("/v1/test/interfaces/org.example.Values/0"));
    }
}
