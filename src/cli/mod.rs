//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the `meraki` binary.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::client::{ClientConfig, DEFAULT_API_URL, LEGACY_API_KEY_ENV};
use crate::error::{MerakiError, Result};
use crate::models::AdminTag;

/// Meraki Dashboard API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "meraki", about = "Meraki Dashboard API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Dashboard API key.
    #[arg(long, global = true, env = "MERAKI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL.
    #[arg(long, global = true, env = "MERAKI_API_URL", default_value = DEFAULT_API_URL)]
    pub base_url: String,

    /// Verify the server's TLS certificate.
    #[arg(
        long,
        global = true,
        env = "MERAKI_VERIFY_TLS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub verify_tls: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build the client configuration from the parsed flags.
    ///
    /// Falls back to the legacy `meraki_key` variable when neither
    /// `--api-key` nor `MERAKI_API_KEY` is set.
    ///
    /// # Errors
    ///
    /// Returns [`MerakiError::ConfigMissing`] if no API key was given.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api_key = match self.api_key {
            Some(ref key) => key.clone(),
            None => std::env::var(LEGACY_API_KEY_ENV).unwrap_or_default(),
        };
        if api_key.is_empty() {
            return Err(MerakiError::ConfigMissing(
                "No API-key found - Check envvars".to_string(),
            ));
        }

        Ok(ClientConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_verify_tls(self.verify_tls))
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the API key by listing organizations.
    CheckKey,

    /// List organizations.
    Orgs,

    /// Print the ID of the organization with the given name.
    OrgId {
        /// Exact organization name.
        name: String,
    },

    /// List networks in an organization.
    Networks {
        /// Organization ID.
        org_id: String,
    },

    /// List devices in a network.
    Devices {
        /// Network ID.
        network_id: String,
    },

    /// Create an appliance network.
    CreateNetwork {
        /// Organization ID.
        org_id: String,

        /// Network name.
        name: String,

        /// Network tag (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Add an admin to an organization.
    AddAdmin {
        /// Organization ID.
        org_id: String,

        /// Admin email address.
        email: String,

        /// Display name (defaults to the part of the email before '@').
        #[arg(long)]
        name: Option<String>,

        /// Tag privilege as TAG:ACCESS, e.g. west:read-only (repeatable).
        #[arg(long = "tag", value_parser = parse_admin_tag)]
        tags: Vec<AdminTag>,
    },

    /// Register a webhook HTTP server on a network.
    AddWebhook {
        /// Network ID.
        network_id: String,

        /// Server name.
        name: String,

        /// Receiver URL.
        url: String,

        /// Shared secret sent with each delivery.
        secret: String,
    },

    /// Show a network's alert settings.
    Alerts {
        /// Network ID.
        network_id: String,
    },

    /// Replace a network's alert settings.
    UpdateAlerts {
        /// Network ID.
        network_id: String,

        /// JSON body ("-" for stdin).
        #[arg(long)]
        file: PathBuf,
    },

    /// Replace a network's site-to-site VPN settings.
    UpdateS2sVpn {
        /// Network ID.
        network_id: String,

        /// JSON body ("-" for stdin).
        #[arg(long)]
        file: PathBuf,
    },

    /// Show a network's L3 firewall rules.
    Firewall {
        /// Network ID.
        network_id: String,
    },

    /// Replace a network's L3 firewall rules.
    UpdateFirewall {
        /// Network ID.
        network_id: String,

        /// JSON body with a "rules" array ("-" for stdin).
        #[arg(long)]
        file: PathBuf,
    },

    /// Enable VLANs on a network's appliance.
    EnableVlans {
        /// Network ID.
        network_id: String,
    },

    /// List a network's VLANs.
    Vlans {
        /// Network ID.
        network_id: String,
    },

    /// Add a VLAN.
    AddVlan {
        /// Network ID.
        network_id: String,

        /// VLAN ID (1-4094).
        id: String,

        /// VLAN name.
        name: String,

        /// Subnet in CIDR notation.
        subnet: String,

        /// Appliance IP on the VLAN.
        appliance_ip: String,
    },

    /// Update a VLAN from a JSON body.
    UpdateVlan {
        /// Network ID.
        network_id: String,

        /// VLAN ID.
        vlan_id: String,

        /// JSON body ("-" for stdin).
        #[arg(long)]
        file: PathBuf,
    },
}

/// Parse a `TAG:ACCESS` admin privilege.
pub fn parse_admin_tag(value: &str) -> core::result::Result<AdminTag, String> {
    match value.split_once(':') {
        Some((tag, access)) if !tag.is_empty() && !access.is_empty() => {
            Ok(AdminTag::new(tag, access))
        }
        _ => Err(format!("expected TAG:ACCESS, got '{value}'")),
    }
}

/// Read a JSON request body from a file, or from stdin when the path is `-`.
pub fn read_body(path: &Path) -> Result<Value> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Process exit status for a failed command.
///
/// Fatal API statuses and missing configuration exit with 1; every other
/// failure exits with 2.
pub fn exit_status(err: &MerakiError) -> u8 {
    match err {
        MerakiError::Fatal { .. } | MerakiError::ConfigMissing(_) => 1,
        _ => 2,
    }
}
