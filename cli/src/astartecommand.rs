use astarte_sdk::commands::agent::register::RegisterDeviceCommand;
use astarte_sdk::commands::agent::unregister::UnregisterDeviceCommand;
use astarte_sdk::commands::devices::{get::GetDeviceCommand, list::ListDevicesCommand};
use astarte_sdk::commands::interfaces::{
    delete::DeleteInterfaceCommand, get::GetInterfaceCommand, install::InstallInterfaceCommand,
    list::ListInterfacesCommand,
};
use astarte_sdk::commands::policies::{
    delete::DeletePolicyCommand, get::GetPolicyCommand, install::InstallPolicyCommand,
    list::ListPoliciesCommand,
};
use astarte_sdk::commands::triggers::{
    delete::DeleteTriggerCommand, get::GetTriggerCommand, install::InstallTriggerCommand,
    list::ListTriggersCommand,
};
use astarte_sdk::{AstarteClient, Call, Response};
use mockall::automock;

/// The session-bound surface every leaf command runs against. One impl per
/// invocation, produced by the pre-run step; mocked in tests.
#[automock]
pub trait CliCommand {
    fn get_realm(&self) -> String;
    fn dump_curl(&self) -> bool;
    fn render_curl(&self, call: &Call) -> eyre::Result<String>;
    fn execute(&self, call: Call) -> eyre::Result<Response>;

    fn list_policies(&self, cmd: ListPoliciesCommand) -> eyre::Result<Call>;
    fn get_policy(&self, cmd: GetPolicyCommand) -> eyre::Result<Call>;
    fn install_policy(&self, cmd: InstallPolicyCommand) -> eyre::Result<Call>;
    fn delete_policy(&self, cmd: DeletePolicyCommand) -> eyre::Result<Call>;

    fn list_interfaces(&self, cmd: ListInterfacesCommand) -> eyre::Result<Call>;
    fn get_interface(&self, cmd: GetInterfaceCommand) -> eyre::Result<Call>;
    fn install_interface(&self, cmd: InstallInterfaceCommand) -> eyre::Result<Call>;
    fn delete_interface(&self, cmd: DeleteInterfaceCommand) -> eyre::Result<Call>;

    fn list_triggers(&self, cmd: ListTriggersCommand) -> eyre::Result<Call>;
    fn get_trigger(&self, cmd: GetTriggerCommand) -> eyre::Result<Call>;
    fn install_trigger(&self, cmd: InstallTriggerCommand) -> eyre::Result<Call>;
    fn delete_trigger(&self, cmd: DeleteTriggerCommand) -> eyre::Result<Call>;

    fn list_devices(&self, cmd: ListDevicesCommand) -> eyre::Result<Call>;
    fn get_device(&self, cmd: GetDeviceCommand) -> eyre::Result<Call>;

    fn register_device(&self, cmd: RegisterDeviceCommand) -> eyre::Result<Call>;
    fn unregister_device(&self, cmd: UnregisterDeviceCommand) -> eyre::Result<Call>;
}

pub struct CliCommandImpl<'a> {
    client: &'a AstarteClient,
    realm: String,
    to_curl: bool,
}

impl<'a> CliCommandImpl<'a> {
    pub fn new(client: &'a AstarteClient, realm: String, to_curl: bool) -> Self {
        CliCommandImpl {
            client,
            realm,
            to_curl,
        }
    }
}

impl CliCommand for CliCommandImpl<'_> {
    fn get_realm(&self) -> String {
        self.realm.clone()
    }

    fn dump_curl(&self) -> bool {
        self.to_curl
    }

    fn render_curl(&self, call: &Call) -> eyre::Result<String> {
        Ok(call.to_curl(&self.client.generate_token()?))
    }

    fn execute(&self, call: Call) -> eyre::Result<Response> {
        self.client.execute(call)
    }

    fn list_policies(&self, cmd: ListPoliciesCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn get_policy(&self, cmd: GetPolicyCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn install_policy(&self, cmd: InstallPolicyCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn delete_policy(&self, cmd: DeletePolicyCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn list_interfaces(&self, cmd: ListInterfacesCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn get_interface(&self, cmd: GetInterfaceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn install_interface(&self, cmd: InstallInterfaceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn delete_interface(&self, cmd: DeleteInterfaceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn list_triggers(&self, cmd: ListTriggersCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn get_trigger(&self, cmd: GetTriggerCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn install_trigger(&self, cmd: InstallTriggerCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn delete_trigger(&self, cmd: DeleteTriggerCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn list_devices(&self, cmd: ListDevicesCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn get_device(&self, cmd: GetDeviceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn register_device(&self, cmd: RegisterDeviceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }

    fn unregister_device(&self, cmd: UnregisterDeviceCommand) -> eyre::Result<Call> {
        cmd.build(self.client)
    }
}
