use clap::Args;
use serde::Deserialize;
use std::io::Write;

use astarte_sdk::commands::agent::register::RegisterDeviceCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct RegisterDeviceCliCommand {
    /// Hardware ID of the device to register
    pub device_id: String,
}

#[derive(Deserialize)]
struct RegisterDeviceResponse {
    credentials_secret: String,
}

impl RegisterDeviceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.register_device(RegisterDeviceCommand {
            realm: client.get_realm(),
            device_id: self.device_id,
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let registered: RegisterDeviceResponse = response.parse_as()?;
        writeln!(out, "{}", registered.credentials_secret)?;

        Ok(())
    }
}
