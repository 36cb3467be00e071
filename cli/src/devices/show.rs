use clap::Args;
use std::io::Write;

use astarte_sdk::{
    commands::devices::get::GetDeviceCommand, resolve_device_identifier_type,
};

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ShowDeviceCliCommand {
    /// Device ID or alias
    pub device: String,
    /// Force the identifier interpretation [possible values: device-id, alias]
    #[arg(long, value_name = "TYPE")]
    pub force_device_identifier: Option<String>,
}

impl ShowDeviceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let identifier_type =
            resolve_device_identifier_type(&self.device, self.force_device_identifier.as_deref())?;

        let call = client.get_device(GetDeviceCommand {
            realm: client.get_realm(),
            device: self.device,
            identifier_type,
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let device = response.parse()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&device)?)?;

        Ok(())
    }
}
