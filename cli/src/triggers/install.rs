use clap::Args;
use std::{io::Write, path::PathBuf};

use astarte_sdk::commands::triggers::install::InstallTriggerCommand;

use crate::{
    astartecommand::CliCommand,
    utils::{read_json_object, run_call},
};

#[derive(Args, Debug)]
pub struct InstallTriggerCliCommand {
    /// Path to a JSON file containing a trigger definition
    pub trigger_file: PathBuf,
}

impl InstallTriggerCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let trigger = read_json_object(&self.trigger_file)?;

        let call = client.install_trigger(InstallTriggerCommand {
            realm: client.get_realm(),
            trigger,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
