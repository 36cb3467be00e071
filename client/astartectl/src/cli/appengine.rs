use clap::{Args, Subcommand};

use astartectl_cli::devices::{list::ListDevicesCliCommand, show::ShowDeviceCliCommand};

#[derive(Args, Debug)]
pub struct AppEngineCliCommand {
    #[command(subcommand)]
    pub command: AppEngineCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppEngineCommands {
    /// Manage devices in the realm
    #[command(alias = "device")]
    Devices(DevicesCliCommand),
}

#[derive(Args, Debug)]
pub struct DevicesCliCommand {
    #[command(subcommand)]
    pub command: DevicesCommands,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommands {
    /// List devices in the realm
    #[command(alias = "ls")]
    List(ListDevicesCliCommand),
    /// Show a device's status
    Show(ShowDeviceCliCommand),
}
