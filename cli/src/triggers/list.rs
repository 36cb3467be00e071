use clap::Args;
use std::io::Write;

use astarte_sdk::commands::triggers::list::ListTriggersCommand;

use crate::{astartecommand::CliCommand, utils::run_call};

#[derive(Args, Debug)]
pub struct ListTriggersCliCommand {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

impl ListTriggersCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let call = client.list_triggers(ListTriggersCommand {
            realm: client.get_realm(),
        })?;

        let Some(response) = run_call(client, call, out)? else {
            return Ok(());
        };

        let names: Vec<String> = response.parse_as()?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
        } else if self.json_compact {
            writeln!(out, "{}", serde_json::to_string(&names)?)?;
        } else {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }

        Ok(())
    }
}
