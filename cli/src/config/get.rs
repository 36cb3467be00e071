use clap::Args;
use std::io::Write;

use astarte_config::{resolve_service_url, AstarteService};
use astarte_sdk::read_astartectl_config;

#[derive(Args, Debug)]
pub struct GetConfigCliCommand {}

impl GetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (filename, config) = read_astartectl_config()?;

        writeln!(out, "Config File: {}", filename.display())?;
        writeln!(
            out,
            "Astarte URL: {}",
            config.astarte_url.as_deref().unwrap_or("unset")
        )?;
        writeln!(
            out,
            "Realm: {}",
            config.realm_name.as_deref().unwrap_or("unset")
        )?;
        writeln!(
            out,
            "Realm Key: {}",
            config
                .realm_key
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "unset".to_string())
        )?;

        for service in [
            AstarteService::AppEngine,
            AstarteService::Pairing,
            AstarteService::RealmManagement,
        ] {
            let line = match config.individual_urls.get(&service) {
                Some(url) => url.clone(),
                None => match resolve_service_url(service, None, config.astarte_url.as_deref()) {
                    Ok(url) => format!("{url} (computed)"),
                    Err(_) => "unset".to_string(),
                },
            };
            writeln!(out, "{service} URL: {line}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GetConfigCliCommand;
    use astarte_sdk::{write_astartectl_config, ClientConfig, ENV_CONFIG_FILE};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_config_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        temp_env::with_var(ENV_CONFIG_FILE, Some(&path), || {
            let config = ClientConfig {
                astarte_url: Some("https://api.astarte.example.com".to_string()),
                realm_name: Some("test".to_string()),
                ..Default::default()
            };
            write_astartectl_config(&config).unwrap();

            let mut output = Vec::new();
            let res = GetConfigCliCommand {}.execute(&mut output);
            assert!(res.is_ok());

            let output_str = String::from_utf8(output).unwrap();
            assert!(output_str.contains("Astarte URL: https://api.astarte.example.com"));
            assert!(output_str.contains("Realm: test"));
            assert!(output_str.contains("Realm Key: unset"));
            assert!(output_str.contains(
                "appengine URL: https://api.astarte.example.com/appengine (computed)"
            ));
        });
    }
}
