use clap::Args;
use std::io::Write;

use astarte_sdk::commands::devices::list::ListDevicesCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ListDevicesCliCommand {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

impl ListDevicesCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.list_devices(ListDevicesCommand {
            realm: client.get_realm(),
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let device_ids: Vec<String> = response.parse_as()?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&device_ids)?)?;
        } else if self.json_compact {
            writeln!(out, "{}", serde_json::to_string(&device_ids)?)?;
        } else {
            for device_id in device_ids {
                writeln!(out, "{device_id}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::devices::list::ListDevicesCliCommand;
    use crate::tests::utils::create_test_client;
    use astarte_sdk::{Call, Response};
    use http::Method;
    use url::Url;

    #[test]
    fn test_cli_devices_list() {
        let mut client = create_test_client();
        client.expect_list_devices().returning(|_| {
            Ok(Call::new(
                Method::GET,
                Url::parse("https://api.astarte.example.com/appengine/v1/test/devices").unwrap(),
            ))
        });
        client.expect_execute().returning(|_| {
            Ok(Response::new(
                200,
                r#"{"data":["olFkumNuZ_J0f_d6-8XCDg"]}"#,
            ))
        });

        let mut output = Vec::new();
        let res = ListDevicesCliCommand {
            json: false,
            json_compact: false,
        }
        .execute(&client, &mut output);
        assert!(res.is_ok());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "olFkumNuZ_J0f_d6-8XCDg\n"
        );
    }
}
