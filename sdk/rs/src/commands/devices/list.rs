use http::Method;

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

#[derive(Debug, PartialEq, Clone)]
pub struct ListDevicesCommand {
    pub realm: String,
}

impl ListDevicesCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(AstarteService::AppEngine, &["v1", &self.realm, "devices"])?;
        Ok(Call::new(Method::GET, url))
    }
}
