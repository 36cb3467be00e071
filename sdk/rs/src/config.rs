use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

use astarte_config::AstarteService;

/// Environment variable overriding the configuration file location.
pub const ENV_CONFIG_FILE: &str = "ASTARTECTL_CONFIG_FILE";

/// The default path to the CLI configuration file.
///
/// > `~/.config/astartectl/config.yml`
///
/// It will only be `None` if it is unable to identify the user's home
/// directory, which should not happen under typical OS environments.
fn get_cfg_filename() -> Option<PathBuf> {
    match env::var_os(ENV_CONFIG_FILE) {
        Some(path) => Some(PathBuf::from(path)),
        None => directories_next::UserDirs::new().map(|dirs| {
            let mut buf = dirs.home_dir().to_path_buf();
            buf.extend([".config", "astartectl", "config.yml"]);
            buf
        }),
    }
}

/// Persisted CLI configuration. Explicit flags always win over these
/// values; these win over derivation defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub astarte_url: Option<String>,
    #[serde(default)]
    pub realm_name: Option<String>,
    #[serde(default)]
    pub realm_key: Option<PathBuf>,
    #[serde(default)]
    pub individual_urls: HashMap<AstarteService, String>,
}

pub fn read_astartectl_config() -> eyre::Result<(PathBuf, ClientConfig)> {
    match get_cfg_filename() {
        None => eyre::bail!("unable to locate the astartectl configuration file"),
        Some(filename) => match fs::read_to_string(&filename) {
            Err(_) => Ok((filename, ClientConfig::default())),
            Ok(config_content) => {
                let config: ClientConfig = serde_yaml::from_str(&config_content)?;
                Ok((filename, config))
            }
        },
    }
}

pub fn write_astartectl_config(config: &ClientConfig) -> eyre::Result<()> {
    match get_cfg_filename() {
        None => eyre::bail!("unable to locate the astartectl configuration file"),
        Some(filename) => write_config_to(&filename, config),
    }
}

fn write_config_to(filename: &Path, config: &ClientConfig) -> eyre::Result<()> {
    if let Some(parent) = filename.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml_content = serde_yaml::to_string(config)?;
    fs::write(filename, yaml_content)?;
    Ok(())
}
