//! Device model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{segment, MerakiClient};
use crate::error::Result;
use crate::traits::List;

/// A device claimed into a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Serial number (e.g., "Q234-ABCD-5678").
    pub serial: String,

    /// Device name.
    #[serde(default)]
    pub name: Option<String>,

    /// Hardware model (e.g., "MX67").
    #[serde(default)]
    pub model: Option<String>,

    /// MAC address.
    #[serde(default)]
    pub mac: Option<String>,

    /// LAN IP address.
    #[serde(rename = "lanIp", default)]
    pub lan_ip: Option<String>,

    /// Network the device belongs to.
    #[serde(default)]
    pub network_id: Option<String>,

    /// Firmware version.
    #[serde(default)]
    pub firmware: Option<String>,

    /// Street address.
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lng: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Device {
    /// The device name, falling back to the serial number.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.serial)
    }
}

#[async_trait]
impl List for Device {
    type Scope = str; // Network ID

    #[tracing::instrument(skip(client))]
    async fn list(client: &MerakiClient, network_id: &str) -> Result<Vec<Self>> {
        client
            .get_json(&format!("networks/{}/devices", segment(network_id)))
            .await
    }
}

/// List the devices in a network.
pub async fn get_network_devices(client: &MerakiClient, network_id: &str) -> Result<Vec<Device>> {
    Device::list(client, network_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_deserialize() {
        let json = r#"{
            "name": "My AP",
            "lat": 37.4180951010362,
            "lng": -122.098531723022,
            "address": "1600 Pennsylvania Ave",
            "notes": "My AP's note",
            "tags": [" recently-added "],
            "networkId": "N_24329156",
            "serial": "Q234-ABCD-5678",
            "model": "MR34",
            "mac": "00:11:22:33:44:55",
            "lanIp": "1.2.3.4",
            "firmware": "wireless-25-14",
            "floorPlanId": "g_2176982374",
            "beaconIdParams": { "uuid": "00000000-0000-0000-0000-000000000000" }
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.serial, "Q234-ABCD-5678");
        assert_eq!(device.lan_ip.as_deref(), Some("1.2.3.4"));
        assert_eq!(device.network_id.as_deref(), Some("N_24329156"));
        assert_eq!(device.display_name(), "My AP");
    }

    #[test]
    fn test_display_name_falls_back_to_serial() {
        let device: Device =
            serde_json::from_str(r#"{"serial": "Q2XX-0000-0001", "name": ""}"#).unwrap();
        assert_eq!(device.display_name(), "Q2XX-0000-0001");
    }
}
