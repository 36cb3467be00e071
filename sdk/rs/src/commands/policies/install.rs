use http::Method;
use serde_json::{json, Value};

use astarte_config::AstarteService;

use crate::{AstarteClient, Call};

/// Submits a trigger delivery policy document verbatim; validation is the
/// remote service's job.
#[derive(Debug, PartialEq, Clone)]
pub struct InstallPolicyCommand {
    pub realm: String,
    pub policy: Value,
}

impl InstallPolicyCommand {
    pub fn build(&self, client: &AstarteClient) -> eyre::Result<Call> {
        let url = client.endpoint(
            AstarteService::RealmManagement,
            &["v1", &self.realm, "policies"],
        )?;
        Ok(Call::with_body(
            Method::POST,
            url,
            json!({"data": self.policy}),
        ))
    }
}
