use clap::{Args, Subcommand};

use astartectl_cli::interfaces::{
    delete::DeleteInterfaceCliCommand, install::InstallInterfaceCliCommand,
    list::ListInterfacesCliCommand, show::ShowInterfaceCliCommand,
};
use astartectl_cli::policies::{
    delete::DeletePolicyCliCommand, install::InstallPolicyCliCommand,
    list::ListPoliciesCliCommand, show::ShowPolicyCliCommand,
};
use astartectl_cli::triggers::{
    delete::DeleteTriggerCliCommand, install::InstallTriggerCliCommand,
    list::ListTriggersCliCommand, show::ShowTriggerCliCommand,
};

#[derive(Args, Debug)]
pub struct RealmManagementCliCommand {
    #[command(subcommand)]
    pub command: RealmManagementCommands,
}

#[derive(Debug, Subcommand)]
pub enum RealmManagementCommands {
    /// Manage trigger delivery policies
    #[command(alias = "policy")]
    Policies(PoliciesCliCommand),
    /// Manage interfaces
    #[command(alias = "interface")]
    Interfaces(InterfacesCliCommand),
    /// Manage triggers
    #[command(alias = "trigger")]
    Triggers(TriggersCliCommand),
}

#[derive(Args, Debug)]
pub struct PoliciesCliCommand {
    #[command(subcommand)]
    pub command: PoliciesCommands,
}

#[derive(Debug, Subcommand)]
pub enum PoliciesCommands {
    /// List trigger delivery policies
    #[command(alias = "ls")]
    List(ListPoliciesCliCommand),
    /// Show a trigger delivery policy
    Show(ShowPolicyCliCommand),
    /// Install a trigger delivery policy
    Install(InstallPolicyCliCommand),
    /// Delete a trigger delivery policy
    #[command(alias = "del")]
    Delete(DeletePolicyCliCommand),
}

#[derive(Args, Debug)]
pub struct InterfacesCliCommand {
    #[command(subcommand)]
    pub command: InterfacesCommands,
}

#[derive(Debug, Subcommand)]
pub enum InterfacesCommands {
    /// List interfaces
    #[command(alias = "ls")]
    List(ListInterfacesCliCommand),
    /// Show an interface
    Show(ShowInterfaceCliCommand),
    /// Install an interface
    Install(InstallInterfaceCliCommand),
    /// Delete an interface
    #[command(alias = "del")]
    Delete(DeleteInterfaceCliCommand),
}

#[derive(Args, Debug)]
pub struct TriggersCliCommand {
    #[command(subcommand)]
    pub command: TriggersCommands,
}

#[derive(Debug, Subcommand)]
pub enum TriggersCommands {
    /// List triggers
    #[command(alias = "ls")]
    List(ListTriggersCliCommand),
    /// Show a trigger
    Show(ShowTriggerCliCommand),
    /// Install a trigger
    Install(InstallTriggerCliCommand),
    /// Delete a trigger
    #[command(alias = "del")]
    Delete(DeleteTriggerCliCommand),
}
