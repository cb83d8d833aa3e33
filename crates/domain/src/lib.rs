//! PVE DNS Domain Layer
pub mod allow_filter;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod inventory;

pub use allow_filter::{AllowFilter, FilteredAddress};
pub use config::{CliOverrides, Config, ConfigError, ProxmoxConfig};
pub use dns_record::{DnsRecord, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use inventory::{AddressFamily, ClusterNode, Guest, InterfaceAddress, NetworkInterface};
