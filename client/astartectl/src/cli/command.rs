use clap::{Args, Subcommand};
use clap_complete::Shell;

use crate::cli::{
    appengine::AppEngineCliCommand, config::ConfigCliCommand, pairing::PairingCliCommand,
    realm_management::RealmManagementCliCommand,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interact with the AppEngine API
    Appengine(AppEngineCliCommand),
    /// Interact with the Pairing API
    Pairing(PairingCliCommand),
    /// Interact with the Realm Management API
    #[command(alias = "realm")]
    RealmManagement(RealmManagementCliCommand),
    /// Local configuration
    Config(ConfigCliCommand),
    /// Generate shell completions
    Completion(CompletionCliCommand),
}

#[derive(Args, Debug, Clone)]
pub struct CompletionCliCommand {
    #[arg(value_enum)]
    pub shell: Shell,
}
