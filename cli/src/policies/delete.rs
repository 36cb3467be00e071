use clap::Args;
use std::io::Write;

use astarte_sdk::commands::policies::delete::DeletePolicyCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct DeletePolicyCliCommand {
    /// Name of the trigger delivery policy
    pub policy_name: String,
}

impl DeletePolicyCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.delete_policy(DeletePolicyCommand {
            realm: client.get_realm(),
            name: self.policy_name,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
