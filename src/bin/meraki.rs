//! Meraki Dashboard API CLI binary.
//!
//! A command-line interface for interacting with the Meraki Dashboard API.

use clap::Parser;
use meraki_sdk::cli::{exit_status, read_body, Cli, Command};
use meraki_sdk::logging::{self, log_event, Level};
use meraki_sdk::output::PrettyPrint;
use meraki_sdk::{
    Device, FirewallRules, MerakiClient, MerakiError, Network, Organization, Vlan,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let client = match cli.client_config().and_then(MerakiClient::with_config) {
        Ok(c) => c,
        Err(e) => {
            log_event(Level::Error, "FatalError", &e);
            eprintln!("Error: {e}");
            if matches!(e, MerakiError::ConfigMissing(_)) {
                eprintln!("Hint: Set MERAKI_API_KEY environment variable");
            }
            return ExitCode::from(exit_status(&e));
        }
    };

    match run(&client, cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

async fn run(client: &MerakiClient, command: Command, json: bool) -> meraki_sdk::Result<()> {
    match command {
        Command::CheckKey => {
            let orgs = meraki_sdk::get_orgs(client).await?;
            println!("API key valid: {} organization(s) accessible", orgs.len());
        }
        Command::Orgs => {
            let orgs = meraki_sdk::get_orgs(client).await?;
            output_list(&orgs, json, |o| OrgRow::from(o))?;
        }
        Command::OrgId { name } => match meraki_sdk::get_org_by_name(client, &name).await? {
            Some(id) => println!("{id}"),
            None => {
                return Err(MerakiError::NotFound {
                    entity_type: "Organization",
                    id: name,
                })
            }
        },
        Command::Networks { org_id } => {
            let networks = meraki_sdk::get_org_networks(client, &org_id).await?;
            output_list(&networks, json, |n| NetworkRow::from(n))?;
        }
        Command::Devices { network_id } => {
            let devices = meraki_sdk::get_network_devices(client, &network_id).await?;
            output_list(&devices, json, |d| DeviceRow::from(d))?;
        }
        Command::CreateNetwork { org_id, name, tags } => {
            let network = meraki_sdk::create_network(client, &org_id, &name, tags).await?;
            output_single(&network, json)?;
        }
        Command::AddAdmin {
            org_id,
            email,
            name,
            tags,
        } => {
            let admin = meraki_sdk::add_org_admin(client, &org_id, &email, tags, name).await?;
            output_single(&admin, json)?;
        }
        Command::AddWebhook {
            network_id,
            name,
            url,
            secret,
        } => {
            let server = meraki_sdk::add_webhook(client, &network_id, &name, &url, &secret).await?;
            output_single(&server, json)?;
        }
        Command::Alerts { network_id } => {
            let alerts = meraki_sdk::get_alerts(client, &network_id).await?;
            println!("{}", serde_json::to_string_pretty(&alerts)?);
        }
        Command::UpdateAlerts { network_id, file } => {
            let body = read_body(&file)?;
            let alerts = meraki_sdk::update_alerts(client, &network_id, &body).await?;
            println!("{}", serde_json::to_string_pretty(&alerts)?);
        }
        Command::UpdateS2sVpn { network_id, file } => {
            let body = read_body(&file)?;
            let vpn = meraki_sdk::update_s2s_vpn(client, &network_id, &body).await?;
            println!("{}", serde_json::to_string_pretty(&vpn)?);
        }
        Command::Firewall { network_id } => {
            let rules = meraki_sdk::get_firewall_rules(client, &network_id).await?;
            output_single(&rules, json)?;
        }
        Command::UpdateFirewall { network_id, file } => {
            let rules: FirewallRules = serde_json::from_value(read_body(&file)?)?;
            let rules = meraki_sdk::update_firewall_rules(client, &network_id, rules).await?;
            output_single(&rules, json)?;
        }
        Command::EnableVlans { network_id } => {
            let settings = meraki_sdk::enable_vlans(client, &network_id).await?;
            output_single(&settings, json)?;
        }
        Command::Vlans { network_id } => {
            let vlans = meraki_sdk::get_vlans(client, &network_id).await?;
            output_list(&vlans, json, |v| VlanRow::from(v))?;
        }
        Command::AddVlan {
            network_id,
            id,
            name,
            subnet,
            appliance_ip,
        } => {
            let vlan = Vlan::new(id, name, subnet, appliance_ip);
            let vlan = meraki_sdk::add_vlan(client, &network_id, vlan).await?;
            output_single(&vlan, json)?;
        }
        Command::UpdateVlan {
            network_id,
            vlan_id,
            file,
        } => {
            let body = read_body(&file)?;
            let vlan = meraki_sdk::update_vlan(client, &network_id, &vlan_id, body).await?;
            output_single(&vlan, json)?;
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> meraki_sdk::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> meraki_sdk::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} item(s)", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct OrgRow {
    id: String,
    name: String,
    api: String,
}

impl From<&Organization> for OrgRow {
    fn from(o: &Organization) -> Self {
        Self {
            id: o.id.clone(),
            name: o.name.clone(),
            api: if o.api_enabled() { "enabled" } else { "disabled" }.to_string(),
        }
    }
}

#[derive(Tabled)]
struct NetworkRow {
    id: String,
    name: String,
    products: String,
    tags: String,
}

impl From<&Network> for NetworkRow {
    fn from(n: &Network) -> Self {
        Self {
            id: n.id.clone(),
            name: n.name.clone(),
            products: n.product_types.join(", "),
            tags: n.tags.join(", "),
        }
    }
}

#[derive(Tabled)]
struct DeviceRow {
    serial: String,
    name: String,
    model: String,
    #[tabled(rename = "lan ip")]
    lan_ip: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            serial: d.serial.clone(),
            name: d.display_name().to_string(),
            model: d.model.clone().unwrap_or_default(),
            lan_ip: d.lan_ip.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct VlanRow {
    id: String,
    name: String,
    subnet: String,
    #[tabled(rename = "appliance ip")]
    appliance_ip: String,
}

impl From<&Vlan> for VlanRow {
    fn from(v: &Vlan) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            subnet: v.subnet.clone(),
            appliance_ip: v.appliance_ip.clone(),
        }
    }
}
