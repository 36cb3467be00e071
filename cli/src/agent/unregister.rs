use clap::Args;
use std::io::Write;

use astarte_sdk::commands::agent::unregister::UnregisterDeviceCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct UnregisterDeviceCliCommand {
    /// Hardware ID of the device to unregister
    pub device_id: String,
}

impl UnregisterDeviceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.unregister_device(UnregisterDeviceCommand {
            realm: client.get_realm(),
            device_id: self.device_id,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::agent::unregister::UnregisterDeviceCliCommand;
    use crate::tests::utils::create_test_client;
    use astarte_sdk::{Call, Response};
    use http::Method;
    use url::Url;

    #[test]
    fn test_cli_agent_unregister() {
        let mut client = create_test_client();
        client.expect_unregister_device().returning(|_| {
            Ok(Call::new(
                Method::DELETE,
                Url::parse("https://api.astarte.example.com/pairing/v1/test/agent/devices/olFkumNuZ_J0f_d6-8XCDg")
                    .unwrap(),
            ))
        });
        client
            .expect_execute()
            .returning(|_| Ok(Response::new(204, "")));

        let mut output = Vec::new();
        let res = UnregisterDeviceCliCommand {
            device_id: "olFkumNuZ_J0f_d6-8XCDg".to_string(),
        }
        .execute(&client, &mut output);
        assert!(res.is_ok());
        assert_eq!(String::from_utf8(output).unwrap(), "ok\n");
    }
}
