use clap::Args;
use std::io::Write;

use astarte_sdk::commands::triggers::get::GetTriggerCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ShowTriggerCliCommand {
    /// Name of the trigger
    pub trigger_name: String,
}

impl ShowTriggerCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.get_trigger(GetTriggerCommand {
            realm: client.get_realm(),
            name: self.trigger_name,
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let trigger = response.parse()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&trigger)?)?;

        Ok(())
    }
}
