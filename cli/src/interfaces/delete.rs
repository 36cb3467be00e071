use clap::Args;
use std::io::Write;

use astarte_sdk::commands::interfaces::delete::DeleteInterfaceCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct DeleteInterfaceCliCommand {
    /// Name of the interface
    pub interface_name: String,
    /// Major version of the interface
    pub interface_major: u32,
}

impl DeleteInterfaceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.delete_interface(DeleteInterfaceCommand {
            realm: client.get_realm(),
            name: self.interface_name,
            major: self.interface_major,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
