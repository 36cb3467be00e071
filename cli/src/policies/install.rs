use clap::Args;
use std::{io::Write, path::PathBuf};

use astarte_sdk::commands::policies::install::InstallPolicyCommand;

use crate::{
    astartecommand::CliCommand,
    utils::{read_json_object, run_call},
};

#[derive(Args, Debug)]
pub struct InstallPolicyCliCommand {
    /// Path to a JSON file containing a trigger delivery policy
    pub policy_file: PathBuf,
}

impl InstallPolicyCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let policy = read_json_object(&self.policy_file)?;

        let call = client.install_policy(InstallPolicyCommand {
            realm: client.get_realm(),
            policy,
        })?;

        if run_call(client, call, out)?.is_none() {
            return Ok(());
        }

        writeln!(out, "ok")?;
        Ok(())
    }
}
