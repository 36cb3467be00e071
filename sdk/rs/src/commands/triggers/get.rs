use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct GetTriggerCommand {
    pub realm: String,
    pub name: String,
}

impl GetTriggerCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "triggers", &self.name],
        )?;
        Ok(Call::new(Method::GET, url))
    }
}
