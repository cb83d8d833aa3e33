use crate::errors::DomainError;
use crate::inventory::NetworkInterface;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// An address that survived filtering, paired with its owning interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredAddress {
    pub interface: String,
    pub ip: IpAddr,
}

/// Administrator-configured restriction narrowing which discovered
/// addresses are eligible to be returned.
///
/// An empty list means no restriction on that dimension. When both are
/// configured an address must sit on an allowed interface AND fall
/// inside an allowed network. Loopback addresses are excluded no matter
/// what is configured.
#[derive(Debug, Clone, Default)]
pub struct AllowFilter {
    interfaces: Vec<String>,
    networks: Vec<IpNetwork>,
}

impl AllowFilter {
    /// Parses the configured CIDR strings up front so a malformed range
    /// is a startup error, never a query-time one.
    pub fn new(interfaces: Vec<String>, networks: &[String]) -> Result<Self, DomainError> {
        let networks = networks
            .iter()
            .map(|cidr| {
                cidr.parse::<IpNetwork>()
                    .map_err(|_| DomainError::InvalidCidr(cidr.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            interfaces,
            networks,
        })
    }

    fn interface_allowed(&self, name: &str) -> bool {
        self.interfaces.is_empty() || self.interfaces.iter().any(|allowed| allowed == name)
    }

    fn network_allowed(&self, ip: IpAddr) -> bool {
        self.networks.is_empty() || self.networks.iter().any(|network| network.contains(ip))
    }

    /// Reduces an interface snapshot to the addresses that pass both
    /// allow dimensions. Interface pruning happens first, then per-address
    /// network checks. Addresses that fail to parse are dropped.
    pub fn apply(&self, interfaces: &[NetworkInterface]) -> Vec<FilteredAddress> {
        let mut result = Vec::new();

        for iface in interfaces {
            if !self.interface_allowed(&iface.name) {
                continue;
            }

            for addr in &iface.addresses {
                let ip = match addr.ip() {
                    Some(ip) => ip,
                    None => continue,
                };
                if ip.is_loopback() || !self.network_allowed(ip) {
                    continue;
                }
                result.push(FilteredAddress {
                    interface: iface.name.clone(),
                    ip,
                });
            }
        }

        result
    }
}
