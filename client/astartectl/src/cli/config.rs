use clap::{Args, Subcommand};

use astartectl_cli::config::{get::GetConfigCliCommand, set::SetConfigCliCommand};

#[derive(Args, Debug)]
pub struct ConfigCliCommand {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the persisted configuration
    Get(GetConfigCliCommand),
    /// Update the persisted configuration
    Set(SetConfigCliCommand),
}
