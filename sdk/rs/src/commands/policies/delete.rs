use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct DeletePolicyCommand {
    pub realm: String,
    pub name: String,
}

impl DeletePolicyCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "policies", &self.name],
        )?;
        Ok(Call::new(Method::DELETE, url))
    }
}
