use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteTriggerCommand {
    pub realm: String,
    pub name: String,
}

impl DeleteTriggerCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "triggers", &self.name],
        )?;
        Ok(Call::new(Method::DELETE, url))
    }
}
