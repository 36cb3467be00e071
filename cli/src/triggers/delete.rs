use clap::Args;
use std::io::Write;

use astarte_sdk::commands::triggers::delete::DeleteTriggerCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct DeleteTriggerCliCommand {
    /// Name of the trigger
    pub trigger_name: String,
}

impl DeleteTriggerCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.delete_trigger(DeleteTriggerCommand {
            realm: client.get_realm(),
            name: self.trigger_name,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
