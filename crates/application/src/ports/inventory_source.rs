use async_trait::async_trait;
use pve_dns_domain::{ClusterNode, DomainError, Guest, NetworkInterface};

/// Read-only view of the virtualization cluster inventory.
///
/// Each call is an independent round trip against the management API;
/// implementations do not retry and do not cache. An empty upstream
/// list is a success, not an error.
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// List all cluster nodes.
    async fn list_nodes(&self) -> Result<Vec<ClusterNode>, DomainError>;

    /// List the guests on one node.
    async fn list_guests(&self, node: &str) -> Result<Vec<Guest>, DomainError>;

    /// Fetch one guest's agent network-interface snapshot. Fails with
    /// `Upstream` whenever the in-guest agent is unreachable, which is
    /// an expected condition.
    async fn guest_interfaces(
        &self,
        node: &str,
        vmid: u32,
    ) -> Result<Vec<NetworkInterface>, DomainError>;
}
