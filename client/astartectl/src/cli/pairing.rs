use clap::{Args, Subcommand};

use astartectl_cli::agent::{
    register::RegisterDeviceCliCommand, unregister::UnregisterDeviceCliCommand,
};

#[derive(Args, Debug)]
pub struct PairingCliCommand {
    #[command(subcommand)]
    pub command: PairingCommands,
}

#[derive(Debug, Subcommand)]
pub enum PairingCommands {
    /// Register and unregister devices
    Agent(AgentCliCommand),
}

#[derive(Args, Debug)]
pub struct AgentCliCommand {
    #[command(subcommand)]
    pub command: AgentCommands,
}

#[derive(Debug, Subcommand)]
pub enum AgentCommands {
    /// Register a device, printing its credentials secret
    Register(RegisterDeviceCliCommand),
    /// Unregister a device, wiping its credentials
    Unregister(UnregisterDeviceCliCommand),
}
