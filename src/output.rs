//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Admin, Device, FirewallRules, Network, Organization, Vlan, VlanSettings, WebhookServer};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(title: String) -> Vec<String> {
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

impl PrettyPrint for Organization {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Organization: {}", self.name));
        lines.push(format!("ID:             {}", self.id));
        if let Some(ref url) = self.url {
            lines.push(format!("URL:            {}", url));
        }
        lines.push(format!(
            "API:            {}",
            if self.api_enabled() { "enabled" } else { "disabled" }
        ));
        lines.join("\n")
    }
}

impl PrettyPrint for Network {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Network: {}", self.name));
        lines.push(format!("ID:             {}", self.id));

        if !self.product_types.is_empty() {
            lines.push(format!("Products:       {}", self.product_types.join(", ")));
        }
        if let Some(ref tz) = self.time_zone {
            lines.push(format!("Time Zone:      {}", tz));
        }
        if !self.tags.is_empty() {
            lines.push(format!("Tags:           {}", self.tags.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Device {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Device: {}", self.display_name()));
        lines.push(format!("Serial:         {}", self.serial));

        if let Some(ref model) = self.model {
            lines.push(format!("Model:          {}", model));
        }
        if let Some(ref ip) = self.lan_ip {
            lines.push(format!("LAN IP:         {}", ip));
        }
        if let Some(ref firmware) = self.firmware {
            lines.push(format!("Firmware:       {}", firmware));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Admin {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Admin: {} <{}>", self.name, self.email));
        lines.push(format!("ID:             {}", self.id));
        if let Some(ref access) = self.org_access {
            lines.push(format!("Org Access:     {}", access));
        }
        for tag in &self.tags {
            lines.push(format!("Tag:            {} ({})", tag.tag, tag.access));
        }
        if let Some(ref last_active) = self.last_active {
            lines.push(format!(
                "Last Active:    {}",
                last_active.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for WebhookServer {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Webhook Server: {}", self.name));
        lines.push(format!("ID:             {}", self.id));
        lines.push(format!("URL:            {}", self.url));
        lines.join("\n")
    }
}

impl PrettyPrint for Vlan {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("VLAN {}: {}", self.id, self.name));
        lines.push(format!("Subnet:         {}", self.subnet));
        lines.push(format!("Appliance IP:   {}", self.appliance_ip));
        lines.join("\n")
    }
}

impl PrettyPrint for VlanSettings {
    fn pretty_print(&self) -> String {
        format!(
            "VLANs:          {}",
            if self.vlans_enabled { "enabled" } else { "disabled" }
        )
    }
}

impl PrettyPrint for FirewallRules {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("L3 Firewall ({} rules)", self.rules.len()));
        for (i, rule) in self.rules.iter().enumerate() {
            lines.push(format!(
                "{:>3}. {:<5} {:<5} {}:{} -> {}:{}{}",
                i + 1,
                rule.policy,
                rule.protocol,
                rule.src_cidr,
                rule.src_port,
                rule.dest_cidr,
                rule.dest_port,
                rule.comment
                    .as_deref()
                    .map(|c| format!("  # {c}"))
                    .unwrap_or_default()
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_pretty_print_format() {
        let network: Network = serde_json::from_value(serde_json::json!({
            "id": "L_1",
            "name": "Branch",
            "productTypes": ["appliance"],
            "tags": ["east", "retail"]
        }))
        .unwrap();

        let output = network.pretty_print();
        assert!(output.starts_with("Network: Branch"));
        assert!(output.contains("Products:       appliance"));
        assert!(output.contains("Tags:           east, retail"));
    }

    #[test]
    fn test_vlan_pretty_print_format() {
        let vlan = Vlan::new("20", "Guest", "10.20.0.0/24", "10.20.0.1");
        let output = vlan.pretty_print();
        assert!(output.starts_with("VLAN 20: Guest"));
        assert!(output.contains("10.20.0.1"));
    }

    #[test]
    fn test_firewall_pretty_print_numbers_rules() {
        let rules: FirewallRules = serde_json::from_value(serde_json::json!({
            "rules": [{
                "comment": "Block guests",
                "policy": "deny",
                "protocol": "any",
                "srcCidr": "10.20.0.0/24",
                "destCidr": "10.0.0.0/8"
            }]
        }))
        .unwrap();

        let output = rules.pretty_print();
        assert!(output.contains("  1. deny"));
        assert!(output.contains("# Block guests"));
    }
}
