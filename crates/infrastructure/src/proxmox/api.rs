//! Wire-format DTOs for the Proxmox VE HTTP API.
//!
//! Every endpoint wraps its payload in a `data` envelope and the agent
//! endpoint nests a further `result` array. Field names are kebab-case
//! on the wire. Only the fields resolution needs are deserialized;
//! everything else the API reports is ignored.

use pve_dns_domain::{AddressFamily, ClusterNode, Guest, InterfaceAddress, NetworkInterface};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct NodeDto {
    pub node: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<NodeDto> for ClusterNode {
    fn from(dto: NodeDto) -> Self {
        ClusterNode {
            name: dto.node,
            status: dto.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GuestDto {
    pub vmid: u32,
    /// Missing for guests that were never assigned a name.
    #[serde(default)]
    pub name: Option<String>,
}

impl GuestDto {
    pub fn into_guest(self, node: &str) -> Guest {
        Guest {
            node: node.to_string(),
            vmid: self.vmid,
            name: self.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AgentInterfaceList {
    #[serde(default)]
    pub result: Vec<AgentInterfaceDto>,
}

#[derive(Debug, Deserialize)]
pub struct AgentInterfaceDto {
    pub name: String,
    /// Interfaces without addresses omit the array entirely.
    #[serde(rename = "ip-addresses", default)]
    pub ip_addresses: Vec<AgentAddressDto>,
}

impl From<AgentInterfaceDto> for NetworkInterface {
    fn from(dto: AgentInterfaceDto) -> Self {
        NetworkInterface {
            name: dto.name,
            addresses: dto
                .ip_addresses
                .into_iter()
                .map(InterfaceAddress::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AgentAddressDto {
    #[serde(rename = "ip-address-type", default)]
    pub ip_address_type: String,
    #[serde(rename = "ip-address")]
    pub ip_address: String,
    #[serde(default)]
    pub prefix: u8,
}

impl From<AgentAddressDto> for InterfaceAddress {
    fn from(dto: AgentAddressDto) -> Self {
        let family = if dto.ip_address_type == "ipv6" {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        };
        InterfaceAddress {
            family,
            address: dto.ip_address,
            prefix: dto.prefix,
        }
    }
}
