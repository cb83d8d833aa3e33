#![allow(dead_code)]
use async_trait::async_trait;
use pve_dns_application::ports::InventorySource;
use pve_dns_domain::{
    AddressFamily, ClusterNode, DomainError, Guest, InterfaceAddress, NetworkInterface,
};
use std::collections::HashMap;

/// In-memory inventory with programmable per-call failures, standing in
/// for the cluster API in pipeline tests.
pub struct FakeInventory {
    nodes: Result<Vec<ClusterNode>, DomainError>,
    guests: HashMap<String, Result<Vec<Guest>, DomainError>>,
    interfaces: HashMap<(String, u32), Result<Vec<NetworkInterface>, DomainError>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self {
            nodes: Ok(vec![]),
            guests: HashMap::new(),
            interfaces: HashMap::new(),
        }
    }

    pub fn with_node(mut self, name: &str) -> Self {
        if let Ok(nodes) = &mut self.nodes {
            nodes.push(ClusterNode {
                name: name.to_string(),
                status: Some("online".to_string()),
            });
        }
        self.guests
            .entry(name.to_string())
            .or_insert_with(|| Ok(vec![]));
        self
    }

    pub fn with_guest(mut self, node: &str, vmid: u32, name: &str) -> Self {
        let entry = self
            .guests
            .entry(node.to_string())
            .or_insert_with(|| Ok(vec![]));
        if let Ok(guests) = entry {
            guests.push(Guest {
                node: node.to_string(),
                vmid,
                name: name.to_string(),
            });
        }
        self
    }

    pub fn with_interfaces(
        mut self,
        node: &str,
        vmid: u32,
        interfaces: Vec<NetworkInterface>,
    ) -> Self {
        self.interfaces
            .insert((node.to_string(), vmid), Ok(interfaces));
        self
    }

    pub fn with_nodes_error(mut self, error: DomainError) -> Self {
        self.nodes = Err(error);
        self
    }

    pub fn with_guests_error(mut self, node: &str, error: DomainError) -> Self {
        self.guests.insert(node.to_string(), Err(error));
        self
    }

    pub fn with_interfaces_error(mut self, node: &str, vmid: u32, error: DomainError) -> Self {
        self.interfaces
            .insert((node.to_string(), vmid), Err(error));
        self
    }
}

#[async_trait]
impl InventorySource for FakeInventory {
    async fn list_nodes(&self) -> Result<Vec<ClusterNode>, DomainError> {
        self.nodes.clone()
    }

    async fn list_guests(&self, node: &str) -> Result<Vec<Guest>, DomainError> {
        self.guests
            .get(node)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }

    async fn guest_interfaces(
        &self,
        node: &str,
        vmid: u32,
    ) -> Result<Vec<NetworkInterface>, DomainError> {
        self.interfaces
            .get(&(node.to_string(), vmid))
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

/// One interface with parsed-family v4/v6 addresses, for fixture setup.
pub fn iface(name: &str, addresses: &[&str]) -> NetworkInterface {
    NetworkInterface {
        name: name.to_string(),
        addresses: addresses
            .iter()
            .map(|address| InterfaceAddress {
                family: if address.contains(':') {
                    AddressFamily::V6
                } else {
                    AddressFamily::V4
                },
                address: address.to_string(),
                prefix: 24,
            })
            .collect(),
    }
}

pub fn upstream_error(status: u16) -> DomainError {
    DomainError::Upstream {
        status,
        url: "https://pve.example.com:8006/api2/json/nodes".to_string(),
    }
}
