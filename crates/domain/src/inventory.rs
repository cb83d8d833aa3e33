use std::net::IpAddr;

/// A hypervisor host in the management cluster. Only the name takes part
/// in resolution; the status string is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterNode {
    pub name: String,
    pub status: Option<String>,
}

/// A virtual machine managed by the cluster, identified by the owning
/// node and its numeric id. The display name is what queries match
/// against; the upstream API may omit it, in which case it is empty and
/// never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub node: String,
    pub vmid: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

/// One address as reported by the in-guest agent. The textual form is
/// kept as-is; consumers parse it on demand and drop entries that fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub family: AddressFamily,
    pub address: String,
    pub prefix: u8,
}

impl InterfaceAddress {
    pub fn ip(&self) -> Option<IpAddr> {
        self.address.parse().ok()
    }
}

/// A network interface from the agent snapshot, with its ordered
/// address list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}
