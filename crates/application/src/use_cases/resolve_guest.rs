use crate::ports::InventorySource;
use pve_dns_domain::{AllowFilter, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Outcome of one guest's interface fetch. A guest whose agent is down
/// must not abort resolution of the name it matches.
enum GuestAddresses {
    Resolved(Vec<IpAddr>),
    Unavailable,
}

/// The inventory resolution pipeline: cluster nodes, then each node's
/// guests, then the interface snapshot of every guest matching the
/// query name.
pub struct ResolveGuestUseCase {
    inventory: Arc<dyn InventorySource>,
    filter: AllowFilter,
}

impl ResolveGuestUseCase {
    pub fn new(inventory: Arc<dyn InventorySource>, filter: AllowFilter) -> Self {
        Self { inventory, filter }
    }

    /// Walk the cluster for guests named `query_name` (with exactly one
    /// trailing dot stripped) and return the filtered addresses of the
    /// last match in traversal order. No upstream index by guest name
    /// exists, so this is a linear scan.
    pub async fn execute(&self, query_name: &str) -> Result<Vec<IpAddr>, DomainError> {
        let target = query_name.strip_suffix('.').unwrap_or(query_name);

        let nodes = self.inventory.list_nodes().await?;
        debug!(nodes = nodes.len(), name = %target, "Scanning cluster for guest");

        let mut resolved: Vec<IpAddr> = Vec::new();
        for node in &nodes {
            let guests = self.inventory.list_guests(&node.name).await?;
            for guest in &guests {
                if guest.name.is_empty() || guest.name != target {
                    continue;
                }

                // Duplicate names across the cluster are an upstream
                // ambiguity; the last match in traversal order wins.
                resolved = match self.guest_addresses(&node.name, guest.vmid).await {
                    GuestAddresses::Resolved(addresses) => addresses,
                    GuestAddresses::Unavailable => Vec::new(),
                };
            }
        }

        Ok(resolved)
    }

    async fn guest_addresses(&self, node: &str, vmid: u32) -> GuestAddresses {
        match self.inventory.guest_interfaces(node, vmid).await {
            Ok(interfaces) => {
                let addresses = self
                    .filter
                    .apply(&interfaces)
                    .into_iter()
                    .map(|entry| entry.ip)
                    .collect();
                GuestAddresses::Resolved(addresses)
            }
            Err(e) => {
                // Guests without a responsive agent are common; treat
                // them as having no discoverable addresses.
                debug!(node = %node, vmid, error = %e, "Guest interface snapshot unavailable");
                GuestAddresses::Unavailable
            }
        }
    }
}
