use clap::Args;
use std::io::Write;

use astarte_sdk::commands::interfaces::get::GetInterfaceCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ShowInterfaceCliCommand {
    /// Name of the interface
    pub interface_name: String,
    /// Major version of the interface
    pub interface_major: u32,
}

impl ShowInterfaceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.get_interface(GetInterfaceCommand {
            realm: client.get_realm(),
            name: self.interface_name,
            major: self.interface_major,
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let interface = response.parse()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&interface)?)?;

        Ok(())
    }
}
