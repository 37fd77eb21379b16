//! Instance Metadata Domain Model
//!
//! Mirrors the document served by the Azure Instance Metadata Service and the
//! summary this service re-exposes from it.

use serde::Deserialize;

/// Instance metadata document (`/metadata/instance?format=json`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InstanceMetadata {
    pub compute: ComputeMetadata,
    pub network: NetworkMetadata,
}

/// Compute section of the instance metadata document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputeMetadata {
    pub location: String,
    pub name: String,
    pub offer: String,
    pub os_type: String,
    pub placement_group_id: String,
    pub platform_fault_domain: String,
    pub platform_update_domain: String,
    pub publisher: String,
    pub resource_group_name: String,
    pub sku: String,
    pub subscription_id: String,
    pub tags: String,
    pub version: String,
    pub vm_id: String,
    pub vm_scale_set_name: String,
    pub vm_size: String,
    pub zone: String,
}

/// Network section of the instance metadata document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkMetadata {
    pub interface: Vec<NetworkInterface>,
}

/// A single network interface attached to the instance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInterface {
    pub ipv4: NetworkData,
    pub ipv6: NetworkData,
    pub mac_address: String,
}

/// Addresses and subnets for one IP family
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkData {
    pub ip_address: Vec<IpAddress>,
    pub subnet: Vec<Subnet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpAddress {
    #[serde(rename = "privateIpAddress", alias = "privateIPAddress")]
    pub private_ip: String,
    #[serde(rename = "publicIpAddress", alias = "publicIPAddress")]
    pub public_ip: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Subnet {
    pub address: String,
    pub prefix: String,
}

impl InstanceMetadata {
    /// First IPv4 address of the primary (first) network interface
    #[must_use]
    pub fn primary_ipv4(&self) -> Option<&IpAddress> {
        self.network
            .interface
            .first()
            .and_then(|nic| nic.ipv4.ip_address.first())
    }
}

/// The fields this service re-exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSummary {
    vm_name: String,
    zone: String,
    private_ip: String,
}

impl InstanceSummary {
    #[must_use]
    pub fn new(vm_name: impl Into<String>, zone: impl Into<String>, private_ip: impl Into<String>) -> Self {
        Self {
            vm_name: vm_name.into(),
            zone: zone.into(),
            private_ip: private_ip.into(),
        }
    }

    #[must_use]
    pub fn vm_name(&self) -> &str {
        &self.vm_name
    }

    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    #[must_use]
    pub fn private_ip(&self) -> &str {
        &self.private_ip
    }
}

/// Renders the single text line served on `/`
impl std::fmt::Display for InstanceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "[VM Name]:{}   [Zone]:{}   [PrivateIP]:{} ",
            self.vm_name, self.zone, self.private_ip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "compute": {
            "location": "westeurope",
            "name": "web-vm-01",
            "osType": "Linux",
            "vmId": "13f56399-bd52-4150-9748-7190aae1ff21",
            "vmSize": "Standard_D2s_v3",
            "zone": "2"
        },
        "network": {
            "interface": [{
                "ipv4": {
                    "ipAddress": [{"privateIpAddress": "10.0.0.4", "publicIpAddress": "52.174.34.95"}],
                    "subnet": [{"address": "10.0.0.0", "prefix": "24"}]
                },
                "ipv6": {"ipAddress": []},
                "macAddress": "000D3A36DDED"
            }]
        }
    }"#;

    #[test]
    fn test_deserialize_sample_document() {
        let metadata: InstanceMetadata = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(metadata.compute.name, "web-vm-01");
        assert_eq!(metadata.compute.zone, "2");
        assert_eq!(metadata.compute.vm_size, "Standard_D2s_v3");
        assert_eq!(metadata.network.interface[0].mac_address, "000D3A36DDED");
        assert_eq!(metadata.network.interface[0].ipv4.subnet[0].prefix, "24");
        assert_eq!(metadata.primary_ipv4().unwrap().public_ip, "52.174.34.95");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let metadata: InstanceMetadata = serde_json::from_str(r#"{"compute": {"name": "vm"}}"#).unwrap();

        assert_eq!(metadata.compute.name, "vm");
        assert_eq!(metadata.compute.zone, "");
        assert!(metadata.network.interface.is_empty());
        assert!(metadata.primary_ipv4().is_none());
    }

    #[test]
    fn test_upper_case_ip_keys_accepted() {
        let metadata: InstanceMetadata = serde_json::from_str(
            r#"{"network": {"interface": [{"ipv4": {"ipAddress": [{"privateIPAddress": "10.0.0.9"}]}}]}}"#,
        )
        .unwrap();

        assert_eq!(metadata.primary_ipv4().unwrap().private_ip, "10.0.0.9");
    }

    #[test]
    fn test_primary_ipv4_none_when_interface_has_no_address() {
        let metadata: InstanceMetadata =
            serde_json::from_str(r#"{"network": {"interface": [{"ipv4": {"ipAddress": []}}]}}"#).unwrap();

        assert!(metadata.primary_ipv4().is_none());
    }

    #[test]
    fn test_summary_text_line() {
        let summary = InstanceSummary::new("web-vm-01", "2", "10.0.0.4");

        assert_eq!(
            summary.to_string(),
            "[VM Name]:web-vm-01   [Zone]:2   [PrivateIP]:10.0.0.4 \n"
        );
    }

    #[test]
    fn test_summary_text_line_with_empty_zone() {
        let summary = InstanceSummary::new("vm", "", "10.1.2.3");

        assert_eq!(summary.to_string(), "[VM Name]:vm   [Zone]:   [PrivateIP]:10.1.2.3 \n");
    }
}
