use clap::{ArgGroup, Args};
use std::{io::Write, path::PathBuf};

use astarte_config::AstarteService;
use astarte_sdk::{read_astartectl_config, write_astartectl_config};

#[derive(Args, Debug)]
#[clap(group(
    ArgGroup::new("mandatory")
        .args(&["astarte_url", "realm_name", "realm_key", "appengine_url", "pairing_url", "realm_management_url"])
        .required(true)
        .multiple(true)
))]
pub struct SetConfigCliCommand {
    #[arg(long, help = "Astarte base URL the service URLs are derived from")]
    astarte_url: Option<String>,
    #[arg(long, help = "Name of the realm to operate on")]
    realm_name: Option<String>,
    #[arg(long, help = "Path to the realm private key")]
    realm_key: Option<PathBuf>,
    #[arg(long, help = "AppEngine API base URL override")]
    appengine_url: Option<String>,
    #[arg(long, help = "Pairing API base URL override")]
    pairing_url: Option<String>,
    #[arg(long, help = "Realm Management API base URL override")]
    realm_management_url: Option<String>,
}

impl SetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (filename, mut config) = read_astartectl_config()?;

        if let Some(astarte_url) = self.astarte_url {
            config.astarte_url = Some(astarte_url);
        }
        if let Some(realm_name) = self.realm_name {
            config.realm_name = Some(realm_name);
        }
        if let Some(realm_key) = self.realm_key {
            config.realm_key = Some(realm_key);
        }
        if let Some(url) = self.appengine_url {
            config.individual_urls.insert(AstarteService::AppEngine, url);
        }
        if let Some(url) = self.pairing_url {
            config.individual_urls.insert(AstarteService::Pairing, url);
        }
        if let Some(url) = self.realm_management_url {
            config
                .individual_urls
                .insert(AstarteService::RealmManagement, url);
        }

        write_astartectl_config(&config)?;

        writeln!(out, "Config File: {}", filename.display())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SetConfigCliCommand;
    use astarte_config::AstarteService;
    use astarte_sdk::{read_astartectl_config, ENV_CONFIG_FILE};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_config_set_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        temp_env::with_var(ENV_CONFIG_FILE, Some(&path), || {
            let mut output = Vec::new();
            let res = SetConfigCliCommand {
                astarte_url: Some("https://api.astarte.example.com".to_string()),
                realm_name: Some("test".to_string()),
                realm_key: None,
                appengine_url: None,
                pairing_url: Some("https://pairing.internal.example.com".to_string()),
                realm_management_url: None,
            }
            .execute(&mut output);
            assert!(res.is_ok());

            // a second set leaves unrelated keys untouched
            let mut output = Vec::new();
            let res = SetConfigCliCommand {
                astarte_url: None,
                realm_name: Some("other".to_string()),
                realm_key: None,
                appengine_url: None,
                pairing_url: None,
                realm_management_url: None,
            }
            .execute(&mut output);
            assert!(res.is_ok());

            let (_, config) = read_astartectl_config().unwrap();
            assert_eq!(
                config.astarte_url.as_deref(),
                Some("https://api.astarte.example.com")
            );
            assert_eq!(config.realm_name.as_deref(), Some("other"));
            assert_eq!(
                config.individual_urls[&AstarteService::Pairing],
                "https://pairing.internal.example.com"
            );
        });
    }
}
