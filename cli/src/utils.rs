use std::{fs, io::Write, path::Path};

use serde_json::Value;

use astarte_sdk::{Call, Response};

use crate::astartecommand::CliCommand;

/// The shared execution step of every resource operation: in dry-run mode
/// the call is rendered as a curl command and `None` is returned without
/// touching the network; otherwise the call is executed and its response
/// returned for the leaf to parse and render.
pub fn run_call<C: CliCommand, W: Write>(
    client: &C,
    call: Call,
    out: &mut W,
) -> eyre::Result<Option<Response>> {
    if client.dump_curl() {
        writeln!(out, "{}", client.render_curl(&call)?)?;
        return Ok(None);
    }

    Ok(Some(client.execute(call)?))
}

/// Reads and decodes the JSON document handed to an `install` command.
/// Decoding happens before any call is built, so a malformed file never
/// reaches the network.
pub fn read_json_object(path: &Path) -> eyre::Result<Value> {
    let content =
        fs::read_to_string(path).map_err(|e| eyre::eyre!("unable to read {}: {e}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| eyre::eyre!("{} is not valid JSON: {e}", path.display()))?;
    if !value.is_object() {
        eyre::bail!("{} does not contain a JSON object", path.display());
    }
    Ok(value)
}
