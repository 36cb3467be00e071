use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::path::PathBuf;

mod cli;
mod session;

use astarte_config::AstarteService;
use astartectl_cli::astartecommand::CliCommandImpl;
use cli::{
    appengine::{AppEngineCommands, DevicesCommands},
    command::Command,
    config::ConfigCommands,
    pairing::{AgentCommands, PairingCommands},
    realm_management::{
        InterfacesCommands, PoliciesCommands, RealmManagementCommands, TriggersCommands,
    },
};
use session::{build_session, SessionOpts};

#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "astartectl")]
#[command(version)]
#[command(about = "Manage Astarte realms from the command line", long_about = None)]
struct App {
    #[command(subcommand)]
    command: Command,
    /// Astarte base URL, service URLs are derived from it
    #[arg(long, value_name = "URL", global = true)]
    astarte_url: Option<String>,
    /// Name of the realm to operate on
    #[arg(short = 'r', long, value_name = "REALM", global = true)]
    realm_name: Option<String>,
    /// Path to the realm private key used to sign authentication tokens
    #[arg(short = 'k', long, value_name = "KEYFILE", global = true)]
    realm_key: Option<PathBuf>,
    /// AppEngine API base URL. Defaults to <astarte-url>/appengine
    #[arg(long, value_name = "URL", global = true)]
    appengine_url: Option<String>,
    /// Pairing API base URL. Defaults to <astarte-url>/pairing
    #[arg(long, value_name = "URL", global = true)]
    pairing_url: Option<String>,
    /// Realm Management API base URL. Defaults to <astarte-url>/realmmanagement
    #[arg(long, value_name = "URL", global = true)]
    realm_management_url: Option<String>,
    /// Print the equivalent curl command instead of performing the request
    #[arg(long, global = true, default_value_t = false)]
    to_curl: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(App::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(app: App) -> eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Config and completion commands don't need a session
    if let Command::Config(cmd) = app.command {
        return match cmd.command {
            ConfigCommands::Get(args) => args.execute(&mut handle),
            ConfigCommands::Set(args) => args.execute(&mut handle),
        };
    }
    if let Command::Completion(args) = app.command {
        let mut cmd = App::command();
        generate(args.shell, &mut cmd, "astartectl", &mut std::io::stdout());
        return Ok(());
    }

    let services = match &app.command {
        Command::Appengine(_) => {
            vec![AstarteService::AppEngine, AstarteService::RealmManagement]
        }
        Command::Pairing(_) => vec![AstarteService::Pairing],
        _ => vec![AstarteService::RealmManagement],
    };

    let session = build_session(
        SessionOpts {
            astarte_url: app.astarte_url,
            realm_name: app.realm_name,
            realm_key: app.realm_key,
            appengine_url: app.appengine_url,
            pairing_url: app.pairing_url,
            realm_management_url: app.realm_management_url,
            to_curl: app.to_curl,
        },
        &services,
    )?;
    let client = CliCommandImpl::new(&session.client, session.realm.clone(), session.to_curl);

    match app.command {
        Command::Appengine(command) => match command.command {
            AppEngineCommands::Devices(command) => match command.command {
                DevicesCommands::List(args) => args.execute(&client, &mut handle),
                DevicesCommands::Show(args) => args.execute(&client, &mut handle),
            },
        },
        Command::Pairing(command) => match command.command {
            PairingCommands::Agent(command) => match command.command {
                AgentCommands::Register(args) => args.execute(&client, &mut handle),
                AgentCommands::Unregister(args) => args.execute(&client, &mut handle),
            },
        },
        Command::RealmManagement(command) => match command.command {
            RealmManagementCommands::Policies(command) => match command.command {
                PoliciesCommands::List(args) => args.execute(&client, &mut handle),
                PoliciesCommands::Show(args) => args.execute(&client, &mut handle),
                PoliciesCommands::Install(args) => args.execute(&client, &mut handle),
                PoliciesCommands::Delete(args) => args.execute(&client, &mut handle),
            },
            RealmManagementCommands::Interfaces(command) => match command.command {
                InterfacesCommands::List(args) => args.execute(&client, &mut handle),
                InterfacesCommands::Show(args) => args.execute(&client, &mut handle),
                InterfacesCommands::Install(args) => args.execute(&client, &mut handle),
                InterfacesCommands::Delete(args) => args.execute(&client, &mut handle),
            },
            RealmManagementCommands::Triggers(command) => match command.command {
                TriggersCommands::List(args) => args.execute(&client, &mut handle),
                TriggersCommands::Show(args) => args.execute(&client, &mut handle),
                TriggersCommands::Install(args) => args.execute(&client, &mut handle),
                TriggersCommands::Delete(args) => args.execute(&client, &mut handle),
            },
        },
        // handled before the session was built
        Command::Config(_) | Command::Completion(_) => Ok(()),
    }
}
