// ABOUTME: Entry point for the scmssh CLI application.
// ABOUTME: Linear flow: settings, device discovery, selection, SSH launch.

mod cli;

use clap::Parser;
use cli::Cli;
use scmssh::config::{Config, Settings, SshOptions};
use scmssh::error::{Error, Result};
use scmssh::inventory::{Appliance, Inventory};
use scmssh::launch::SshCommand;
use scmssh::menu::{self, ConnectChoice};
use scmssh::scm::ScmClient;
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // Interrupt ends the whole run, including an in-flight SSH session.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nInterrupted. Bye!");
            std::process::exit(130);
        }
    });

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the tool and return the process exit code: 0 on quit-from-menu,
/// otherwise the SSH subprocess's own exit status.
async fn run(cli: Cli) -> Result<i32> {
    let config = match cli.config {
        Some(path) => Some(Config::load(&path)?),
        None => {
            let cwd = env::current_dir()?;
            Config::discover(&cwd)?
        }
    };

    let settings = Settings::resolve(config)?;

    let client = ScmClient::new(&settings.realm, &settings.username, &settings.password)
        .map_err(|e| Error::Scm(e.to_string()))?;

    let inventory = fetch_inventory(&client).await?;
    if inventory.is_empty() {
        return Err(Error::NoAppliances);
    }

    menu::print_appliances(inventory.appliances());

    let Some(appliance) = menu::select_appliance(inventory.appliances())? else {
        return Ok(0);
    };

    let Some(choice) = menu::select_connection(appliance)? else {
        return Ok(0);
    };

    match choice {
        ConnectChoice::Tunnel => connect_via_tunnel(&client, appliance, &settings.ssh).await,
        ConnectChoice::Direct(addr) => connect_direct(&addr, &settings.ssh).await,
    }
}

/// Fetch everything the appliance table needs from the Config and
/// Reporting APIs.
async fn fetch_inventory(client: &ScmClient) -> Result<Inventory> {
    println!("Fetching appliances from {}...", client.realm());

    let scm = |e: scmssh::scm::Error| Error::Scm(e.to_string());

    let orgs = client.orgs().await.map_err(scm)?;
    let sites = client.sites().await.map_err(scm)?;
    let nodes = client.nodes().await.map_err(scm)?;
    let uplinks = client.uplinks_status().await.map_err(scm)?;
    let nodes_status = client.nodes_status().await.map_err(scm)?;
    let tunnels = client.active_tunnels().await.map_err(scm)?;

    Ok(Inventory::build(
        &orgs,
        &sites,
        &nodes,
        &uplinks,
        &nodes_status,
        &tunnels,
    ))
}

/// Start an SCM tunnel, run SSH through it, then tear the tunnel down.
async fn connect_via_tunnel(
    client: &ScmClient,
    appliance: &Appliance,
    options: &SshOptions,
) -> Result<i32> {
    println!("Starting tunnel to {}...", appliance.site_name);

    client
        .start_tunnel(&appliance.node_id)
        .await
        .map_err(|e| Error::Scm(e.to_string()))?;

    // The relay endpoint needs a moment before ssh_help is usable.
    tokio::time::sleep(Duration::from_secs(3)).await;

    let status = client
        .tunnel_status(&appliance.node_id)
        .await
        .map_err(|e| Error::Scm(e.to_string()))?;

    let command = SshCommand::from_tunnel_help(&status.ssh_help, options)
        .map_err(|e| Error::Session(e.to_string()))?;

    let code = command.run().await.map_err(|e| Error::Session(e.to_string()))?;

    // Best effort: leave no tunnel behind, but don't mask the session result.
    if let Err(e) = client.stop_tunnel(&appliance.node_id).await {
        tracing::warn!(node_id = %appliance.node_id, "failed to stop tunnel: {e}");
    }

    Ok(code)
}

/// Direct SSH session to one of the appliance's uplink addresses.
async fn connect_direct(addr: &str, options: &SshOptions) -> Result<i32> {
    println!("Connecting via SSH to {addr}");

    let command = SshCommand::direct(addr, options);
    command.run().await.map_err(|e| Error::Session(e.to_string()))
}
