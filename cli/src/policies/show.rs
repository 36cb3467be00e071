use clap::Args;
use std::io::Write;

use astarte_sdk::commands::policies::get::GetPolicyCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ShowPolicyCliCommand {
    /// Name of the trigger delivery policy
    pub policy_name: String,
}

impl ShowPolicyCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.get_policy(GetPolicyCommand {
            realm: client.get_realm(),
            name: self.policy_name,
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let policy = response.parse()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&policy)?)?;

        Ok(())
    }
}
