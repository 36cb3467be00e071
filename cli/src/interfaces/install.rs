use clap::Args;
use std::{io::Write, path::PathBuf};

use astarte_sdk::commands::interfaces::install::InstallInterfaceCommand;

use crate::{
    astartecommand::CliCommand,
    utils::{read_json_object, run_call},
};

#[derive(Args, Debug)]
pub struct InstallInterfaceCliCommand {
    /// Path to a JSON file containing an interface definition
    pub interface_file: PathBuf,
}

impl InstallInterfaceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let interface = read_json_object(&self.interface_file)?;

        let call = client.install_interface(InstallInterfaceCommand {
            realm: client.get_realm(),
            interface,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
